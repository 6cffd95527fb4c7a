use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Two {
    fn two() -> Self;
}

pub trait OneQuarter {
    fn one_quarter() -> Self;
}

pub trait Pi {
    fn pi() -> Self;
}

macro_rules! impl_constants {
    ($($ty:ty => $zero:literal, $one:literal, $two:literal;)*) => {
        $(
            impl Zero for $ty {
                fn zero() -> Self {
                    $zero
                }
            }

            impl One for $ty {
                fn one() -> Self {
                    $one
                }
            }

            impl Two for $ty {
                fn two() -> Self {
                    $two
                }
            }
        )*
    };
}

impl_constants! {
    i32 => 0, 1, 2;
    f32 => 0.0, 1.0, 2.0;
    f64 => 0.0, 1.0, 2.0;
}

impl OneQuarter for f32 {
    fn one_quarter() -> Self {
        0.25
    }
}

impl OneQuarter for f64 {
    fn one_quarter() -> Self {
        0.25
    }
}

impl Pi for f32 {
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

impl Pi for f64 {
    fn pi() -> Self {
        std::f64::consts::PI
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for i32 {}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Scalar usable by every operation of the kernel, including the ones that
/// need square roots and trigonometry.
pub trait Float: Display + Copy + Zero + One + Two + OneQuarter + Pi + NumericOps {
    fn nan() -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn abs(self) -> Self;
    fn half(self) -> Self;
    fn squared(self) -> Self;
    fn sqrt(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ident),*) => {
        $(
            impl Float for $ty {
                fn nan() -> Self {
                    $ty::NAN
                }

                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn abs(self) -> Self {
                    self.abs()
                }

                fn half(self) -> Self {
                    self * 0.5
                }

                fn squared(self) -> Self {
                    self * self
                }

                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Restricts `value` to `[min, max]`.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}
