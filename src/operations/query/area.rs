use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Computes the enclosed area of a polygon, regardless of winding.
pub struct Area<'a> {
    points: &'a [Point2],
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> f64 {
        signed_area_2d(self.points).abs()
    }

    /// Sums the areas of a set of result polygons.
    #[must_use]
    pub fn total(polygons: &[Vec<Point2>]) -> f64 {
        polygons.iter().map(|p| Area::new(p).execute()).sum()
    }
}
