use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result};
use crate::number_traits::{Float, NumericOps, One, Zero};
use crate::vector::{Vector2, Vector3, Vector4};

pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;

pub trait Identity {
    fn identity() -> Self;
}

macro_rules! struct_matrix {
    ($name:ident, $row:ident, $size:literal, $len:literal) => {
        /// Square matrix stored row-major.
        #[derive(Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f32> {
            values: [T; $len],
        }

        impl<T> Debug for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "[")?;
                for i in 0..Self::SIZE {
                    write!(f, "\t")?;
                    for j in 0..Self::SIZE {
                        write!(f, "{}, ", self.values[i * Self::SIZE + j])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }

        impl<T> $name<T> {
            pub const SIZE: usize = $size;

            /// Builds the matrix from its cells listed row by row.
            pub const fn with_values(values: [T; $len]) -> Self {
                Self { values }
            }

            #[must_use]
            pub fn values(&self) -> &[T; $len] {
                &self.values
            }
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            /// Returns the cell at (`row`, `col`).
            ///
            /// # Errors
            ///
            /// Will return [`MathError::CellOutOfRange`] if either index is
            /// outside of the matrix.
            pub fn get(&self, row: usize, col: usize) -> Result<T> {
                if row >= $size || col >= $size {
                    return Err(MathError::CellOutOfRange { row, col, size: $size });
                }
                Ok(self.values[row * $size + col])
            }

            /// Replaces the cell at (`row`, `col`).
            ///
            /// # Errors
            ///
            /// Will return [`MathError::CellOutOfRange`] if either index is
            /// outside of the matrix.
            pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
                if row >= $size || col >= $size {
                    return Err(MathError::CellOutOfRange { row, col, size: $size });
                }
                self.values[row * $size + col] = value;
                Ok(())
            }

            /// Extracts a whole row as a vector.
            ///
            /// # Errors
            ///
            /// Will return [`MathError::RowOutOfRange`] if `row` is outside of
            /// the matrix.
            pub fn row(&self, row: usize) -> Result<$row<T>> {
                if row >= $size {
                    return Err(MathError::RowOutOfRange { row, size: $size });
                }
                $row::try_from(&self[row])
            }

            #[must_use]
            pub fn transpose(&self) -> Self {
                let mut values = self.values;
                for i in 0..$size {
                    for j in 0..$size {
                        values[i * $size + j] = self.values[j * $size + i];
                    }
                }
                Self { values }
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Zero + PartialEq,
        {
            /// True when every cell off the main diagonal is exactly zero.
            #[must_use]
            pub fn is_diagonal(&self) -> bool {
                (0..$size).all(|i| {
                    (0..$size).all(|j| i == j || self.values[i * $size + j] == T::zero())
                })
            }

            #[must_use]
            pub fn is_symmetric(&self) -> bool {
                (0..$size).all(|i| {
                    (i + 1..$size).all(|j| self.values[i * $size + j] == self.values[j * $size + i])
                })
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Neg<Output = T> + PartialEq,
        {
            /// True when the transpose equals the negated matrix.
            #[must_use]
            pub fn is_anti_symmetric(&self) -> bool {
                self.transpose() == -*self
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Zero,
        {
            pub fn zero() -> Self {
                Self {
                    values: [T::zero(); $len],
                }
            }
        }

        impl<T> Identity for $name<T>
        where
            T: Copy + Zero + One,
        {
            fn identity() -> Self {
                let mut values = [T::zero(); $len];
                for i in 0..$size {
                    values[i * $size + i] = T::one();
                }
                Self { values }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                let mut values = self.values;
                for (value, rhs) in values.iter_mut().zip(rhs.values) {
                    *value = *value + rhs;
                }
                Self { values }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                let mut values = self.values;
                for (value, rhs) in values.iter_mut().zip(rhs.values) {
                    *value = *value - rhs;
                }
                Self { values }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    values: self.values.map(|value| -value),
                }
            }
        }

        impl<T> Mul<Self> for $name<T>
        where
            T: Copy + NumericOps + Zero,
        {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut values = [T::zero(); $len];

                for row in 0..$size {
                    for col in 0..$size {
                        let mut sum = T::zero();
                        for k in 0..$size {
                            sum += self.values[row * $size + k] * rhs.values[k * $size + col];
                        }
                        values[row * $size + col] = sum;
                    }
                }

                Self { values }
            }
        }

        impl<T> MulAssign<Self> for $name<T>
        where
            T: Copy + NumericOps + Zero,
        {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>,
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    values: self.values.map(|value| value * rhs),
                }
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

        impl<T> Mul<$row<T>> for $name<T>
        where
            T: Copy + NumericOps + Zero,
        {
            type Output = $row<T>;

            fn mul(self, rhs: $row<T>) -> Self::Output {
                let mut transformed = [T::zero(); $size];
                for (row, cell) in transformed.iter_mut().enumerate() {
                    for col in 0..$size {
                        *cell += self.values[row * $size + col] * rhs[col];
                    }
                }
                $row::from(transformed)
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = [T];

            fn index(&self, index: usize) -> &Self::Output {
                &self.values[index * Self::SIZE..index * Self::SIZE + Self::SIZE]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.values[index * Self::SIZE..index * Self::SIZE + Self::SIZE]
            }
        }

        impl<T> From<[[T; $size]; $size]> for $name<T>
        where
            T: Copy + Zero,
        {
            fn from(rows: [[T; $size]; $size]) -> Self {
                let mut values = [T::zero(); $len];
                for (i, row) in rows.iter().enumerate() {
                    values[i * $size..(i + 1) * $size].copy_from_slice(row);
                }
                Self { values }
            }
        }

        impl<T> From<$name<T>> for [[T; $size]; $size]
        where
            T: Copy + Zero,
        {
            fn from(matrix: $name<T>) -> Self {
                let mut rows = [[T::zero(); $size]; $size];
                for (i, row) in rows.iter_mut().enumerate() {
                    row.copy_from_slice(&matrix[i]);
                }
                rows
            }
        }

        impl<T> TryFrom<&[T]> for $name<T>
        where
            T: Copy,
        {
            type Error = MathError;

            fn try_from(value: &[T]) -> Result<Self> {
                let values = <[T; $len]>::try_from(value).map_err(|_| {
                    MathError::DimensionMismatch {
                        expected: $len,
                        actual: value.len(),
                    }
                })?;
                Ok(Self { values })
            }
        }
    };
}

struct_matrix!(Matrix2, Vector2, 2, 4);
struct_matrix!(Matrix3, Vector3, 3, 9);
struct_matrix!(Matrix4, Vector4, 4, 16);

impl<T> Matrix2<T> {
    pub const fn new(n00: T, n01: T, n10: T, n11: T) -> Self {
        Self::with_values([n00, n01, n10, n11])
    }

    pub fn from_rows(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self::with_values([a.x, a.y, b.x, b.y])
    }
}

impl<T> Matrix2<T>
where
    T: Copy + NumericOps,
{
    pub fn determinant(&self) -> T {
        self[0][0] * self[1][1] - self[0][1] * self[1][0]
    }
}

impl<T> Matrix2<T>
where
    T: Float,
{
    /// Inverse through the adjugate. A singular matrix yields non-finite
    /// cells.
    #[must_use]
    #[rustfmt::skip]
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            trace!("Inverting a singular 2x2 matrix");
        }
        let inv_det = T::one() / det;

        Self::with_values([
            self[1][1] * inv_det, -self[0][1] * inv_det,
            -self[1][0] * inv_det, self[0][0] * inv_det,
        ])
    }
}

impl<T> Matrix2<T>
where
    T: Copy + Zero,
{
    /// Embeds the matrix in the top-left block of a zero 3x3 matrix.
    #[rustfmt::skip]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        let zero = T::zero();
        Matrix3::with_values([
            self[0][0], self[0][1], zero,
            self[1][0], self[1][1], zero,
            zero, zero, zero,
        ])
    }

    pub fn to_matrix4(&self) -> Matrix4<T> {
        self.to_matrix3().to_matrix4()
    }
}

impl<T> Matrix3<T> {
    pub fn from_rows(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self::with_values([a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z])
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    fn row3(&self, row: usize) -> Vector3<T> {
        Vector3::new(self[row][0], self[row][1], self[row][2])
    }
}

impl<T> Matrix3<T>
where
    T: Copy + NumericOps,
{
    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let m = self;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            + m[0][1] * (m[1][2] * m[2][0] - m[1][0] * m[2][2])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

impl<T> Matrix3<T>
where
    T: Float,
{
    /// Inverse through the adjugate: with rows `a`, `b`, `c`, the columns of
    /// the inverse are `b × c`, `c × a` and `a × b` over the triple product.
    /// A singular matrix yields non-finite cells.
    #[must_use]
    #[rustfmt::skip]
    pub fn inverse(&self) -> Self {
        let a = self.row3(0);
        let b = self.row3(1);
        let c = self.row3(2);

        let r0 = b.cross(&c);
        let r1 = c.cross(&a);
        let r2 = a.cross(&b);

        let det = r2.dot(&c);
        if det == T::zero() {
            trace!("Inverting a singular 3x3 matrix");
        }
        let inv_det = T::one() / det;

        Self::with_values([
            r0.x * inv_det, r1.x * inv_det, r2.x * inv_det,
            r0.y * inv_det, r1.y * inv_det, r2.y * inv_det,
            r0.z * inv_det, r1.z * inv_det, r2.z * inv_det,
        ])
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Zero,
{
    pub fn to_matrix2(&self) -> Matrix2<T> {
        Matrix2::new(self[0][0], self[0][1], self[1][0], self[1][1])
    }

    /// Embeds the matrix in the top-left block of a zero 4x4 matrix.
    #[rustfmt::skip]
    pub fn to_matrix4(&self) -> Matrix4<T> {
        let zero = T::zero();
        Matrix4::with_values([
            self[0][0], self[0][1], self[0][2], zero,
            self[1][0], self[1][1], self[1][2], zero,
            self[2][0], self[2][1], self[2][2], zero,
            zero, zero, zero, zero,
        ])
    }
}

impl<T> Matrix4<T> {
    pub fn from_rows(a: Vector4<T>, b: Vector4<T>, c: Vector4<T>, d: Vector4<T>) -> Self {
        Self::with_values([
            a.x, a.y, a.z, a.w, b.x, b.y, b.z, b.w, c.x, c.y, c.z, c.w, d.x, d.y, d.z, d.w,
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    fn column3(&self, col: usize) -> Vector3<T> {
        Vector3::new(self[0][col], self[1][col], self[2][col])
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// Closed-form inverse through the adjugate.
    ///
    /// The upper 3x4 block is split into the column vectors `a`, `b`, `c`,
    /// `d` and the last row into the scalars `x`, `y`, `z`, `w`. The
    /// determinant is `s·v + t·u` with `s = a × b`, `t = c × d`,
    /// `u = a y - b x` and `v = c w - d z`. A singular matrix yields
    /// non-finite cells.
    #[must_use]
    #[rustfmt::skip]
    #[allow(clippy::many_single_char_names)]
    pub fn inverse(&self) -> Self {
        let a = self.column3(0);
        let b = self.column3(1);
        let c = self.column3(2);
        let d = self.column3(3);

        let x = self[3][0];
        let y = self[3][1];
        let z = self[3][2];
        let w = self[3][3];

        let mut s = a.cross(&b);
        let mut t = c.cross(&d);
        let mut u = a * y - b * x;
        let mut v = c * w - d * z;

        let det = s.dot(&v) + t.dot(&u);
        if det == T::zero() {
            trace!("Inverting a singular 4x4 matrix");
        }
        let inv_det = T::one() / det;
        s *= inv_det;
        t *= inv_det;
        u *= inv_det;
        v *= inv_det;

        let r0 = b.cross(&v) + t * y;
        let r1 = v.cross(&a) - t * x;
        let r2 = d.cross(&u) + s * w;
        let r3 = u.cross(&c) - s * z;

        Self::with_values([
            r0.x, r0.y, r0.z, -b.dot(&t),
            r1.x, r1.y, r1.z, a.dot(&t),
            r2.x, r2.y, r2.z, -d.dot(&s),
            r3.x, r3.y, r3.z, c.dot(&s),
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero,
{
    pub fn to_matrix2(&self) -> Matrix2<T> {
        Matrix2::new(self[0][0], self[0][1], self[1][0], self[1][1])
    }

    #[rustfmt::skip]
    pub fn to_matrix3(&self) -> Matrix3<T> {
        Matrix3::with_values([
            self[0][0], self[0][1], self[0][2],
            self[1][0], self[1][1], self[1][2],
            self[2][0], self[2][1], self[2][2],
        ])
    }
}
