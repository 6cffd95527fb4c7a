#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod line;
pub mod plane;

pub use line::{Line, LineType};
pub use plane::Plane;
