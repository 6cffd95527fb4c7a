#![warn(clippy::pedantic)]

pub use linkern_geometry as geometry;
pub use linkern_math as math;

pub mod prelude {
    pub use linkern_geometry::{Line, LineType, Plane};
    pub use linkern_math::matrix::{Identity, Matrix2, Matrix2f, Matrix3, Matrix3f, Matrix4, Matrix4f};
    pub use linkern_math::quaternion::Quaternion;
    pub use linkern_math::vector::{AngleKind, Vector2, Vector2f, Vector3, Vector3f, Vector4, Vector4f};
    pub use linkern_math::{MathError, Result};
}
