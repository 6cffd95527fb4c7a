use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};
use crate::number_traits::{Float, NumericOps, One, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

/// Classification of the angle between two vectors, from the sign of their
/// dot product.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AngleKind {
    Right,
    Acute,
    Obtuse,
}

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const LEN: usize = $len;

            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            /// Returns the component at `index`.
            ///
            /// # Errors
            ///
            /// Will return [`MathError::IndexOutOfRange`] if `index` is not a
            /// component of this vector.
            pub fn get(&self, index: usize) -> Result<T> {
                match index {
                    $($idx => Ok(self.$dim),)*
                    _ => Err(MathError::IndexOutOfRange { index, len: $len }),
                }
            }

            /// Replaces the component at `index`.
            ///
            /// # Errors
            ///
            /// Will return [`MathError::IndexOutOfRange`] if `index` is not a
            /// component of this vector.
            pub fn set(&mut self, index: usize, value: T) -> Result<()> {
                match index {
                    $($idx => {
                        self.$dim = value;
                        Ok(())
                    })*
                    _ => Err(MathError::IndexOutOfRange { index, len: $len }),
                }
            }
        }

        impl<T> $name<T>
        where
            T: Zero,
        {
            pub fn zero() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> $name<T>
        where
            T: One,
        {
            pub fn one() -> Self {
                Self {
                    $($dim: T::one(),)*
                }
            }
        }

        impl<T> $name<T>
        where
            T: Copy + NumericOps + Zero,
        {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            /// Dot product of the vector with itself.
            pub fn squared_magnitude(&self) -> T {
                self.dot(self)
            }

            /// Sum of squares of raw components, without building a vector.
            pub fn dot_components($($dim: T),*) -> T {
                let mut dot = T::zero();
                $(dot += $dim * $dim;)*
                dot
            }

            /// Vector going from `self` to `to`.
            pub fn direction(&self, to: &Self) -> Self {
                *to - *self
            }

            pub fn angle_kind(&self, other: &Self) -> AngleKind {
                let dot = self.dot(other);
                if dot == T::zero() {
                    AngleKind::Right
                } else if dot < T::zero() {
                    AngleKind::Obtuse
                } else {
                    AngleKind::Acute
                }
            }
        }

        impl<T> $name<T>
        where
            T: Float,
        {
            pub fn magnitude(&self) -> T {
                self.squared_magnitude().sqrt()
            }

            /// Unit vector with the direction of `self`. A zero vector yields
            /// `NaN` components.
            pub fn normalized(&self) -> Self {
                *self / self.magnitude()
            }

            pub fn distance(&self, to: &Self) -> T {
                Self::dot_components($(to.$dim - self.$dim),*).sqrt()
            }

            /// Projection of `self` onto `onto`.
            pub fn project(&self, onto: &Self) -> Self {
                *onto * (self.dot(onto) / onto.dot(onto))
            }

            /// Component of `self` perpendicular to `from`.
            pub fn reject(&self, from: &Self) -> Self {
                *self - self.project(from)
            }

            /// Angle between the two vectors, in radians.
            pub fn angle(&self, other: &Self) -> T {
                (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<$name<i32>> for i32 {
            type Output = $name<i32>;

            fn mul(self, rhs: $name<i32>) -> Self::Output {
                rhs * self
            }
        }

        // Division is a multiplication by the reciprocal.
        impl<T> Div<T> for $name<T>
        where
            T: Float, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                self * (T::one() / rhs)
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Float, {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$dim,)*
                    _ => panic!("component index {index} is out of range for a vector of {} components", $len),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$dim,)*
                    _ => panic!("component index {index} is out of range for a vector of {} components", $len),
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T>
        where
            T: Copy,
        {
            fn from(value: [T; $len]) -> Self {
                Self {
                    $($dim: value[$idx]),*
                }
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(value: $name<T>) -> Self {
                [$(value.$dim),*]
            }
        }

        impl<T> TryFrom<&[T]> for $name<T>
        where
            T: Copy,
        {
            type Error = MathError;

            fn try_from(value: &[T]) -> Result<Self> {
                if value.len() != $len {
                    return Err(MathError::DimensionMismatch {
                        expected: $len,
                        actual: value.len(),
                    });
                }

                Ok(Self {
                    $($dim: value[$idx]),*
                })
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", 2, (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector2<T>
where
    T: Zero + One + Neg<Output = T>,
{
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }
}

impl<T> Vector2<T>
where
    T: Copy + Zero + Neg<Output = T>,
{
    /// Vector rotated by -90 degrees.
    pub fn perp(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, T::zero())
    }
}

impl<T> Vector3<T>
where
    T: Zero + One + Neg<Output = T>,
{
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }

    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn backward() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }
}

impl<T> Vector3<T>
where
    T: Copy + NumericOps + Zero,
{
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The xy part rotated by -90 degrees, with a zero z.
    pub fn perp(&self) -> Self {
        Self::new(self.y, -self.x, T::zero())
    }

    pub fn to_vector2(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    pub fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    /// Rotates the xy part by `angle` radians. A clockwise rotation turns by
    /// `2π - angle`. The result lies in the xy-plane.
    pub fn rotate_z(&self, angle: T, clockwise: bool) -> Self {
        let angle = if clockwise {
            T::two() * T::pi() - angle
        } else {
            angle
        };
        let (sin, cos) = (angle.sin(), angle.cos());

        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            T::zero(),
        )
    }
}

impl<T> Vector4<T>
where
    T: Copy,
{
    pub fn from_xy_zw(xy: Vector2<T>, zw: Vector2<T>) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector3_new() {
        let v = Vector3::new(1, 2, 3);

        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
    }

    #[test]
    fn add() {
        assert_eq!(Vector2::new(2, 2) + Vector2::new(2, 2), Vector2::new(4, 4));
        assert_eq!(Vector2::new(-3, -5) + Vector2::new(2, 2), Vector2::new(-1, -3));
        assert_eq!(Vector3::new(1, 2, 3) + Vector3::new(4, 5, 6), Vector3::new(5, 7, 9));
    }

    #[test]
    fn add_assign() {
        let mut a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        a += b;

        assert_eq!(a, Vector3::new(5, 7, 9));
    }

    #[test]
    fn sub() {
        assert_eq!(Vector2::new(3, 6) - Vector2::new(2, 2), Vector2::new(1, 4));
        assert_eq!(Vector2::new(-3, -5) - Vector2::new(-2, -2), Vector2::new(-1, -3));
        assert_eq!(Vector3::new(1, 2, 3) - Vector3::new(4, 3, 2), Vector3::new(-3, -1, 1));
    }

    #[test]
    fn sub_assign() {
        let mut a = Vector4::new(1, 2, 3, 4);

        a -= Vector4::new(4, 3, 2, 1);

        assert_eq!(a, Vector4::new(-3, -1, 1, 3));
    }

    #[test]
    fn mul_scalar_both_orders() {
        assert_eq!(Vector2::new(3, 6) * 3, Vector2::new(9, 18));
        assert_eq!(Vector2::new(-3, -5) * -2, Vector2::new(6, 10));
        assert_eq!(-3_i32 * Vector2::new(3, 5), Vector2::new(-9, -15));
        assert_eq!(2.0_f32 * Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn mul_assign_scalar() {
        let mut vec = Vector3::new(1, 2, 3);

        vec *= 5;

        assert_eq!(vec, Vector3::new(5, 10, 15));
    }

    #[test]
    fn div_scalar() {
        assert_eq!(Vector2f::new(2.0, 2.0) / 2.0, Vector2f::new(1.0, 1.0));
        assert_eq!(Vector2f::new(3.0, 6.0) / 3.0, Vector2f::new(1.0, 2.0));
    }

    #[test]
    fn div_assign_scalar() {
        let mut vec = Vector3f::new(5.0, 10.0, 15.0);

        vec /= 5.0;

        assert_float_absolute_eq!(vec.x, 1.0, 0.000_01);
        assert_float_absolute_eq!(vec.y, 2.0, 0.000_01);
        assert_float_absolute_eq!(vec.z, 3.0, 0.000_01);
    }

    #[test]
    fn div_by_zero_is_not_finite() {
        let result = Vector2f::new(1.0, -1.0) / 0.0;

        assert_eq!(result.x, f32::INFINITY);
        assert_eq!(result.y, f32::NEG_INFINITY);
    }

    #[test]
    fn neg() {
        assert_eq!(-Vector3::new(1, 2, 3), Vector3::new(-1, -2, -3));
    }

    #[test]
    fn equality_is_exact() {
        assert!(Vector2::new(2, 2) == Vector2::new(2, 2));
        assert!(Vector2::new(2, 2) != Vector2::new(3, 2));
        assert_ne!(Vector2::new(0.1_f64 + 0.2, 0.0), Vector2::new(0.3_f64, 0.0));
    }

    #[test]
    fn display() {
        let result = format!("{}", Vector3::new(1, 2, 3));
        assert_eq!("(1, 2, 3)", &result);
    }

    #[test]
    fn dot() {
        assert_eq!(Vector2::new(2, 1).dot(&Vector2::new(2, 3)), 7);
        assert_eq!(Vector2::new(-2, 1).dot(&Vector2::new(2, 3)), -1);
        assert_eq!(Vector2::new(0, 1).dot(&Vector2::new(1, 0)), 0);
    }

    #[test]
    fn dot_is_commutative() {
        let samples = [
            Vector4f::new(1.0, -2.0, 0.5, 3.0),
            Vector4f::new(-7.25, 4.0, 2.0, -1.5),
            Vector4f::new(0.0, 9.0, -3.0, 0.125),
        ];

        for a in &samples {
            for b in &samples {
                assert_eq!(a.dot(b), b.dot(a));
            }
        }
    }

    #[test]
    fn dot_components() {
        assert_eq!(Vector2::dot_components(3, 4), 25);
        assert_eq!(Vector2::dot_components(-3, -4), 25);
        assert_eq!(Vector3::dot_components(0, 0, 0), 0);
        assert_eq!(Vector3::new(1, 2, 3).squared_magnitude(), 14);
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vector2f::new(4.0, 3.0).magnitude(), 5.0);
        assert_float_absolute_eq!(Vector3f::new(1.0, 2.0, 3.0).magnitude(), 3.74, 0.01);
    }

    #[test]
    fn normalized() {
        let normalized = Vector3f::new(1.0, 2.0, 3.0).normalized();

        assert_float_absolute_eq!(normalized.x, 0.26, 0.01);
        assert_float_absolute_eq!(normalized.y, 0.53, 0.01);
        assert_float_absolute_eq!(normalized.z, 0.80, 0.01);
    }

    #[test]
    fn normalized_has_unit_magnitude() {
        let samples = [
            Vector2f::new(2.0, 2.0),
            Vector2f::new(5.0, 8.0),
            Vector2f::new(-0.001, 300.0),
        ];

        for vector in samples {
            assert_float_absolute_eq!(vector.normalized().magnitude(), 1.0, 0.000_1);
        }
    }

    #[test]
    fn normalized_zero_vector_is_nan() {
        let normalized = Vector3f::zero().normalized();

        assert!(normalized.x.is_nan());
        assert!(normalized.y.is_nan());
        assert!(normalized.z.is_nan());
    }

    #[test]
    fn direction_and_distance() {
        let from = Vector2f::new(3.0, 3.0);

        assert_eq!(from.direction(&Vector2f::new(6.0, 6.0)), Vector2f::new(3.0, 3.0));
        assert_eq!(from.direction(&Vector2f::new(9.0, 10.0)), Vector2f::new(6.0, 7.0));
        assert_eq!(from.distance(&Vector2f::new(3.0, 6.0)), 3.0);
        assert_eq!(from.distance(&Vector2f::new(3.0, 10.0)), 7.0);
    }

    #[test]
    fn project_and_reject() {
        let a = Vector2f::new(3.0, 4.0);
        let b = Vector2f::new(2.0, 0.0);

        assert_eq!(a.project(&b), Vector2f::new(3.0, 0.0));
        assert_eq!(a.reject(&b), Vector2f::new(0.0, 4.0));
    }

    #[test]
    fn reject_is_orthogonal() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(-4.0, 0.5, 2.0);

        assert_float_absolute_eq!(a.reject(&b).dot(&b), 0.0, 0.000_1);
    }

    #[test]
    fn cross_vec3() {
        let a = Vector3::new(2.0, 5.0, 6.0);
        let b = Vector3::new(6.0, 5.0, 2.0);

        assert_eq!(a.cross(&b), Vector3::new(-20.0, 32.0, -20.0));
    }

    #[test]
    fn cross_is_anti_symmetric_and_orthogonal() {
        let samples = [
            Vector3f::new(1.0, 2.0, 3.0),
            Vector3f::new(4.0, 5.0, 6.0),
            Vector3f::new(-2.5, 0.0, 7.0),
        ];

        for a in &samples {
            for b in &samples {
                let cross = a.cross(b);
                assert_eq!(cross, -b.cross(a));
                assert_float_absolute_eq!(cross.dot(a), 0.0, 0.001);
                assert_float_absolute_eq!(cross.dot(b), 0.0, 0.001);
            }
        }
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vector3::new(1, 2, 3);

        assert_eq!(a.cross(&(a * 4)), Vector3::zero());
    }

    #[test]
    fn angle() {
        let angle = Vector2f::right().angle(&Vector2f::up());

        assert_float_absolute_eq!(angle, std::f32::consts::FRAC_PI_2, 0.000_1);
    }

    #[test]
    fn angle_kind() {
        assert_eq!(Vector3::new(1, 0, 0).angle_kind(&Vector3::new(0, 1, 0)), AngleKind::Right);
        assert_eq!(Vector3::new(1, 1, 0).angle_kind(&Vector3::new(1, 0, 0)), AngleKind::Acute);
        assert_eq!(Vector3::new(-1, 1, 0).angle_kind(&Vector3::new(1, 0, 0)), AngleKind::Obtuse);
    }

    #[test]
    fn perp() {
        assert_eq!(Vector2::new(1, 2).perp(), Vector2::new(2, -1));
        assert_eq!(Vector3::new(1, 2, 3).perp(), Vector3::new(2, -1, 0));
    }

    #[test]
    fn rotate_z() {
        let counter_clockwise = Vector3f::right().rotate_z(std::f32::consts::FRAC_PI_2, false);
        let clockwise = Vector3f::right().rotate_z(std::f32::consts::FRAC_PI_2, true);

        assert_float_absolute_eq!(counter_clockwise.x, 0.0, 0.000_1);
        assert_float_absolute_eq!(counter_clockwise.y, 1.0, 0.000_1);
        assert_float_absolute_eq!(clockwise.x, 0.0, 0.000_1);
        assert_float_absolute_eq!(clockwise.y, -1.0, 0.000_1);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Vector2::<i32>::up(), Vector2::new(0, 1));
        assert_eq!(Vector2::<i32>::left(), Vector2::new(-1, 0));
        assert_eq!(Vector3::<i32>::down(), Vector3::new(0, -1, 0));
        assert_eq!(Vector3::<i32>::forward(), Vector3::new(0, 0, 1));
        assert_eq!(Vector3::<i32>::backward(), Vector3::new(0, 0, -1));
        assert_eq!(Vector4::<i32>::one(), Vector4::new(1, 1, 1, 1));
    }

    #[test]
    fn default() {
        let vector = Vector4::<f32>::default();

        assert_float_absolute_eq!(vector.x, 0.0, 0.0);
        assert_float_absolute_eq!(vector.y, 0.0, 0.0);
        assert_float_absolute_eq!(vector.z, 0.0, 0.0);
        assert_float_absolute_eq!(vector.w, 0.0, 0.0);
    }

    #[test]
    fn get_and_set() {
        let mut v = Vector3::new(1, 2, 3);

        assert_eq!(v.get(2), Ok(3));
        assert_eq!(v.set(0, 9), Ok(()));
        assert_eq!(v.x, 9);
        assert_eq!(v.get(3), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(v.set(5, 1), Err(MathError::IndexOutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn index() {
        let mut v = Vector4::new(1, 2, 3, 4);
        v[3] = 7;

        assert_eq!(v[0], 1);
        assert_eq!(v[3], 7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let v = Vector2::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn try_from_slice() {
        let values = [1.0, 2.0, 3.0];

        assert_eq!(Vector3f::try_from(&values[..]), Ok(Vector3f::new(1.0, 2.0, 3.0)));
        assert_eq!(
            Vector4f::try_from(&values[..]),
            Err(MathError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn widening_and_narrowing() {
        assert_eq!(Vector2::new(1, 2).to_vector3(), Vector3::new(1, 2, 0));
        assert_eq!(Vector3::new(1, 2, 3).to_vector2(), Vector2::new(1, 2));
        assert_eq!(Vector3::new(1, 2, 3).to_vector4(), Vector4::new(1, 2, 3, 0));
        assert_eq!(Vector4::new(1, 2, 3, 4).to_vector3(), Vector3::new(1, 2, 3));
        assert_eq!(
            Vector4::from_xy_zw(Vector2::new(1, 2), Vector2::new(3, 4)),
            Vector4::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn from_tuple() {
        let tuple = (0, 1, 2, 3);
        let v = Vector4::from(tuple);

        assert_eq!(v, Vector4::new(0, 1, 2, 3));
    }

    #[test]
    fn into_tuple() {
        let v = Vector4::new(0, 1, 2, 3);
        let tuple: (i32, i32, i32, i32) = v.into();

        assert_eq!(tuple, (0, 1, 2, 3));
    }

    #[test]
    fn array_round_trip() {
        let array: [i32; 3] = Vector3::from([4, 5, 6]).into();

        assert_eq!(array, [4, 5, 6]);
    }
}
