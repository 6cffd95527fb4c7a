#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod number_traits;
pub mod quaternion;
pub mod vector;

pub use error::{MathError, Result};
pub use number_traits::clamp;
