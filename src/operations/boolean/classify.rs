use std::iter;

use crate::error::TopologyError;
use crate::math::intersect_2d::{point_on_segment, segment_crossing};
use crate::math::polygon_2d::x_range;
use crate::math::Point2;
use crate::topology::Ring;

/// Classification of a point relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Odd-even test of `point` against the original edges of `ring`.
///
/// Casts a horizontal ray from `point` to a target beyond the ring's x extent
/// and counts proper crossings with [`segment_crossing`]. Crossings that land
/// exactly on a ring vertex are degenerate and not counted.
///
/// # Errors
///
/// Returns an error if the ring links are inconsistent.
pub fn is_inside(point: &Point2, ring: &Ring) -> Result<bool, TopologyError> {
    let Some((min, max)) = x_range(ring.iter().map(|id| ring[id].point).chain(iter::once(*point)))
    else {
        return Ok(false);
    };
    let far = Point2::new(max + (max - min) + 1.0, point.y);

    let mut crossings = 0usize;
    for edge in ring.original_edges() {
        let (start, end) = edge?;
        if segment_crossing(point, &far, &ring[start].point, &ring[end].point).is_some() {
            crossings += 1;
        }
    }
    Ok(crossings % 2 == 1)
}

/// Classifies `point` against a closed polygon, detecting the boundary.
///
/// Uses the half-open crossing rule, so rays through vertices are counted
/// consistently.
#[must_use]
pub fn classify_point(point: &Point2, polygon: &[Point2]) -> PointClassification {
    let n = polygon.len();
    if n < 3 {
        return PointClassification::Outside;
    }

    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if point_on_segment(point, a, b) {
            return PointClassification::OnBoundary;
        }
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
    }

    if inside {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

/// Classifies `polygon` as a whole against `other`, assuming their
/// boundaries do not cross.
///
/// Tries each vertex and then each edge midpoint until one lands clear of
/// `other`'s boundary. A polygon whose samples all lie on the boundary
/// coincides with `other`.
#[must_use]
pub fn classify_polygon(polygon: &[Point2], other: &[Point2]) -> PointClassification {
    let n = polygon.len();
    let midpoints = (0..n).map(|i| nalgebra::center(&polygon[i], &polygon[(i + 1) % n]));
    polygon
        .iter()
        .copied()
        .chain(midpoints)
        .map(|p| classify_point(&p, other))
        .find(|c| *c != PointClassification::OnBoundary)
        .unwrap_or(PointClassification::OnBoundary)
}
