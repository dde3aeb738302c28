use crate::error::Operand;
use crate::math::polygon_2d::validate_polygon;
use crate::math::Point2;

/// Checks whether a point sequence is a simple polygon the clipper accepts.
pub struct IsValid<'a> {
    points: &'a [Point2],
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the validation, returning `true` if the polygon is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        validate_polygon(self.points, Operand::Subject).is_ok()
    }
}
