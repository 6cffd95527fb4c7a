use std::fmt::{Display, Formatter};
use std::ops::Mul;

use crate::matrix::{Identity, Matrix3};
use crate::number_traits::{Float, One, Zero};
use crate::vector::{Vector3, Vector4};

/// Rotation quaternion `w + xi + yj + zk`.
///
/// Rotation semantics only hold for unit quaternions; construction neither
/// checks nor normalizes.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T = f32> {
    scalar_part: T,
    vector_part: Vector3<T>,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            scalar_part: w,
            vector_part: Vector3::new(x, y, z),
        }
    }

    pub const fn from_parts(vector_part: Vector3<T>, scalar_part: T) -> Self {
        Self {
            scalar_part,
            vector_part,
        }
    }
}

impl<T> Quaternion<T>
where
    T: Copy,
{
    pub fn x(&self) -> T {
        self.vector_part.x
    }

    pub fn y(&self) -> T {
        self.vector_part.y
    }

    pub fn z(&self) -> T {
        self.vector_part.z
    }

    pub fn w(&self) -> T {
        self.scalar_part
    }

    pub fn scalar_part(&self) -> T {
        self.scalar_part
    }

    pub fn vector_part(&self) -> Vector3<T> {
        self.vector_part
    }

    pub fn to_vector3(&self) -> Vector3<T> {
        self.vector_part
    }

    pub fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(
            self.vector_part.x,
            self.vector_part.y,
            self.vector_part.z,
            self.scalar_part,
        )
    }
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let half_angle = angle.half();

        Self::from_parts(*axis * half_angle.sin(), half_angle.cos())
    }

    pub fn from_euler(angles: &Vector3<T>) -> Self {
        let roll = angles.x;
        let pitch = angles.y;
        let yaw = angles.z;
        let half_roll = roll.half();
        let half_pitch = pitch.half();
        let half_yaw = yaw.half();
        let cy = half_yaw.cos();
        let sy = half_yaw.sin();
        let cp = half_pitch.cos();
        let sp = half_pitch.sin();
        let cr = half_roll.cos();
        let sr = half_roll.sin();

        let w = cr * cp * cy + sr * sp * sy;
        let x = sr * cp * cy - cr * sp * sy;
        let y = cr * sp * cy + sr * cp * sy;
        let z = cr * cp * sy - sr * sp * cy;

        Self::new(x, y, z, w)
    }

    /// Rotates `vector`, equivalent to `q v q⁻¹` for a unit quaternion.
    pub fn transform(&self, vector: &Vector3<T>) -> Vector3<T> {
        let u = self.vector_part;
        let s = self.scalar_part;

        *vector * (s * s - u.squared_magnitude())
            + u * (vector.dot(&u) * T::two())
            + u.cross(vector) * (s * T::two())
    }

    #[rustfmt::skip]
    #[allow(clippy::similar_names)]
    pub fn rotation_matrix(&self) -> Matrix3<T> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let two = T::two();
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Matrix3::with_values([
            T::one() - two * (y2 + z2), two * (xy - wz), two * (xz + wy),
            two * (xy + wz), T::one() - two * (x2 + z2), two * (yz - wx),
            two * (xz - wy), two * (yz + wx), T::one() - two * (x2 + y2),
        ])
    }

    /// Replaces this quaternion with the rotation of `m`.
    ///
    /// Pivots on the trace when it is positive, otherwise on the largest
    /// diagonal cell, so that the square root never runs on a small value.
    #[allow(clippy::many_single_char_names)]
    pub fn set_rotation_matrix(&mut self, m: &Matrix3<T>) {
        let m00 = m[0][0];
        let m11 = m[1][1];
        let m22 = m[2][2];
        let sum = m00 + m11 + m22;

        let (x, y, z, w) = if sum > T::zero() {
            let w = (sum + T::one()).sqrt().half();
            let f = T::one_quarter() / w;
            (
                (m[2][1] - m[1][2]) * f,
                (m[0][2] - m[2][0]) * f,
                (m[1][0] - m[0][1]) * f,
                w,
            )
        } else if (m00 > m11) && (m00 > m22) {
            let x = (m00 - m11 - m22 + T::one()).sqrt().half();
            let f = T::one_quarter() / x;
            (
                x,
                (m[1][0] + m[0][1]) * f,
                (m[0][2] + m[2][0]) * f,
                (m[2][1] - m[1][2]) * f,
            )
        } else if m11 > m22 {
            let y = (m11 - m00 - m22 + T::one()).sqrt().half();
            let f = T::one_quarter() / y;
            (
                (m[1][0] + m[0][1]) * f,
                y,
                (m[2][1] + m[1][2]) * f,
                (m[0][2] - m[2][0]) * f,
            )
        } else {
            let z = (m22 - m00 - m11 + T::one()).sqrt().half();
            let f = T::one_quarter() / z;
            (
                (m[0][2] + m[2][0]) * f,
                (m[2][1] + m[1][2]) * f,
                z,
                (m[1][0] - m[0][1]) * f,
            )
        };

        *self = Self::new(x, y, z, w);
    }

    pub fn norm(&self) -> T {
        (self.scalar_part.squared() + self.vector_part.squared_magnitude()).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::from_parts(self.vector_part / norm, self.scalar_part / norm)
    }
}

impl<T> Identity for Quaternion<T>
where
    T: Zero + One,
{
    fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.scalar_part, self.vector_part.x, self.vector_part.y, self.vector_part.z
        )
    }
}

impl<T> From<Matrix3<T>> for Quaternion<T>
where
    T: Float,
{
    fn from(m: Matrix3<T>) -> Self {
        let mut quaternion = Self::identity();
        quaternion.set_rotation_matrix(&m);
        quaternion
    }
}

impl<T> From<Vector4<T>> for Quaternion<T> {
    fn from(values: Vector4<T>) -> Self {
        Self::new(values.x, values.y, values.z, values.w)
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let x1 = self.vector_part.x;
        let y1 = self.vector_part.y;
        let z1 = self.vector_part.z;
        let w1 = self.scalar_part;

        let x2 = rhs.vector_part.x;
        let y2 = rhs.vector_part.y;
        let z2 = rhs.vector_part.z;
        let w2 = rhs.scalar_part;

        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}
