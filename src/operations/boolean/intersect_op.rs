use crate::error::Result;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean intersection of two polygons.
pub struct Intersect<'a> {
    subject: &'a [Point2],
    clip: &'a [Point2],
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(subject: &'a [Point2], clip: &'a [Point2]) -> Self {
        Self { subject, clip }
    }

    /// Executes the intersection. The result is empty for disjoint polygons.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the operation fails.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        boolean_execute(self.subject, self.clip, BooleanOp::Intersect)
    }
}
