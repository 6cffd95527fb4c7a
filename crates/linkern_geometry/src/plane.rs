use linkern_math::number_traits::NumericOps;
use linkern_math::vector::Vector3;

/// Parallelogram patch spanned from `start` towards two corner points.
///
/// The directions towards both corners are computed once, when the plane is
/// built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T = f32> {
    start: Vector3<T>,
    first_vector: Vector3<T>,
    second_vector: Vector3<T>,
    dir_to_first: Vector3<T>,
    dir_to_second: Vector3<T>,
}

impl<T> Plane<T>
where
    T: Copy + NumericOps,
{
    pub fn new(start: Vector3<T>, first_vector: Vector3<T>, second_vector: Vector3<T>) -> Self {
        Self {
            start,
            first_vector,
            second_vector,
            dir_to_first: first_vector - start,
            dir_to_second: second_vector - start,
        }
    }

    pub fn start(&self) -> Vector3<T> {
        self.start
    }

    pub fn first_vector(&self) -> Vector3<T> {
        self.first_vector
    }

    pub fn second_vector(&self) -> Vector3<T> {
        self.second_vector
    }

    pub fn dir_to_first(&self) -> Vector3<T> {
        self.dir_to_first
    }

    pub fn dir_to_second(&self) -> Vector3<T> {
        self.dir_to_second
    }

    pub fn end(&self) -> Vector3<T> {
        self.first_vector + self.second_vector
    }

    pub fn dir_to_end(&self) -> Vector3<T> {
        self.end() - self.start
    }

    /// Point at `height` along the first direction and `width` along the
    /// second one.
    pub fn lerp(&self, height: T, width: T) -> Vector3<T> {
        self.start + self.dir_to_first * height + self.dir_to_second * width
    }
}

#[cfg(test)]
mod tests {
    use linkern_math::vector::Vector3f;

    use super::*;

    fn plane() -> Plane {
        Plane::new(
            Vector3f::new(1.0, 1.0, 0.0),
            Vector3f::new(3.0, 1.0, 0.0),
            Vector3f::new(1.0, 4.0, 0.0),
        )
    }

    #[test]
    fn directions_are_derived_from_start() {
        let plane = plane();

        assert_eq!(plane.dir_to_first(), Vector3f::new(2.0, 0.0, 0.0));
        assert_eq!(plane.dir_to_second(), Vector3f::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn end() {
        let plane = plane();

        assert_eq!(plane.end(), Vector3f::new(4.0, 5.0, 0.0));
        assert_eq!(plane.dir_to_end(), Vector3f::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn lerp() {
        let plane = plane();

        assert_eq!(plane.lerp(0.0, 0.0), plane.start());
        assert_eq!(plane.lerp(1.0, 0.0), plane.first_vector());
        assert_eq!(plane.lerp(0.0, 1.0), plane.second_vector());
        assert_eq!(plane.lerp(0.5, 1.0), Vector3f::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn lerp_integers() {
        let plane = Plane::new(Vector3::new(0, 0, 0), Vector3::new(1, 0, 0), Vector3::new(0, 0, 2));

        assert_eq!(plane.lerp(3, 2), Vector3::new(3, 0, 4));
    }
}
