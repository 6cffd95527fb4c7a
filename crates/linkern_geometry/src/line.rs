use log::trace;

use linkern_math::clamp;
use linkern_math::number_traits::{Float, Zero};
use linkern_math::vector::Vector3;

/// How [`Line::lerp`] bounds its parameter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineType {
    /// Unbounded in both directions.
    Line,
    /// Bounded to `[0, 1]`.
    #[default]
    Segment,
    /// Bounded to `[0, ∞)`.
    Ray,
}

/// Line through `start` and `end`, parameterized as `start + direction * t`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T = f32> {
    pub start: Vector3<T>,
    pub end: Vector3<T>,
    pub line_type: LineType,
}

impl<T> Line<T> {
    pub const fn new(start: Vector3<T>, end: Vector3<T>) -> Self {
        Self::with_type(start, end, LineType::Segment)
    }

    pub const fn with_type(start: Vector3<T>, end: Vector3<T>, line_type: LineType) -> Self {
        Self {
            start,
            end,
            line_type,
        }
    }
}

impl<T> Line<T>
where
    T: Float,
{
    pub fn direction(&self) -> Vector3<T> {
        self.start.direction(&self.end)
    }

    /// Point at `time` along the line, once `time` is bounded by the line type.
    pub fn lerp(&self, time: T) -> Vector3<T> {
        self.start + self.direction() * self.clamp_time(time)
    }

    fn clamp_time(&self, time: T) -> T {
        match self.line_type {
            LineType::Line => time,
            LineType::Segment => clamp(time, T::zero(), T::one()),
            LineType::Ray => {
                if time < T::zero() {
                    T::zero()
                } else {
                    time
                }
            }
        }
    }

    /// Parameter along `self` where it crosses `other` in the xy plane.
    ///
    /// Returns `NaN` when the lines are parallel, or when `self` is a segment
    /// and the crossing lies outside of it. `other` is always treated as
    /// unbounded.
    pub fn intersect_at(&self, other: &Line<T>) -> T {
        let other_perp = other.direction().perp();
        let denominator = other_perp.dot(&self.direction());
        if denominator == T::zero() {
            trace!("Lines are parallel, no intersection");
            return T::nan();
        }

        let to_other_start = self.start.direction(&other.start);
        let position = other_perp.dot(&to_other_start) / denominator;

        if self.line_type == LineType::Segment && (position < T::zero() || position > T::one()) {
            trace!("Intersection falls outside of the segment");
            return T::nan();
        }

        position
    }

    /// Normalized direction reflected about `normal`.
    ///
    /// A direction already perpendicular to `normal` is returned as is,
    /// without normalization.
    pub fn reflect(&self, normal: &Vector3<T>) -> Vector3<T> {
        let direction = self.direction();
        let unit_direction = direction.normalized();
        let dot = unit_direction.dot(normal);
        if dot == T::zero() {
            return direction;
        }

        unit_direction - *normal * (T::two() * dot)
    }
}

impl<T> Default for Line<T>
where
    T: Copy + Zero,
{
    fn default() -> Self {
        Self::new(Vector3::zero(), Vector3::zero())
    }
}
