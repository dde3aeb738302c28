use crate::error::Result;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean union of two polygons.
pub struct Union<'a> {
    subject: &'a [Point2],
    clip: &'a [Point2],
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(subject: &'a [Point2], clip: &'a [Point2]) -> Self {
        Self { subject, clip }
    }

    /// Executes the union.
    ///
    /// Overlapping polygons merge into one outline; disjoint polygons come
    /// back as two separate results.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the operation fails.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        boolean_execute(self.subject, self.clip, BooleanOp::Union)
    }
}
