pub trait Zero: Sized {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
    fn is_positive(&self) -> bool;
    fn is_negative(&self) -> bool;

    fn is_positive_or_zero(&self) -> bool {
        !self.is_negative()
    }
    fn is_negative_or_zero(&self) -> bool {
        !self.is_positive()
    }
}

pub trait One: Sized {
    fn one() -> Self;
}

pub trait Abs {
    fn abs(&self) -> Self;
}
