use crate::error::Result;
use crate::math::Point2;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean difference `subject \ clip`.
pub struct Subtract<'a> {
    subject: &'a [Point2],
    clip: &'a [Point2],
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation.
    #[must_use]
    pub fn new(subject: &'a [Point2], clip: &'a [Point2]) -> Self {
        Self { subject, clip }
    }

    /// Executes the difference.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the operation fails.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        boolean_execute(self.subject, self.clip, BooleanOp::Subtract)
    }
}

/// Computes the reversed difference `clip \ subject`.
pub struct ReverseSubtract<'a> {
    subject: &'a [Point2],
    clip: &'a [Point2],
}

impl<'a> ReverseSubtract<'a> {
    /// Creates a new `ReverseSubtract` operation.
    #[must_use]
    pub fn new(subject: &'a [Point2], clip: &'a [Point2]) -> Self {
        Self { subject, clip }
    }

    /// Executes the reversed difference.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon is invalid or the operation fails.
    pub fn execute(&self) -> Result<Vec<Vec<Point2>>> {
        boolean_execute(self.subject, self.clip, BooleanOp::ReverseSubtract)
    }
}
