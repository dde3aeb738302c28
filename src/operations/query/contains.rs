use crate::math::Point2;
use crate::operations::boolean::{classify_point, PointClassification};

/// Classifies a point against a polygon as inside, outside or on its boundary.
///
/// Useful to tell apart nested and disjoint operands before clipping.
pub struct ContainsPoint<'a> {
    point: Point2,
    polygon: &'a [Point2],
}

impl<'a> ContainsPoint<'a> {
    /// Creates a new `ContainsPoint` query.
    #[must_use]
    pub fn new(point: Point2, polygon: &'a [Point2]) -> Self {
        Self { point, polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> PointClassification {
        classify_point(&self.point, self.polygon)
    }
}
