use super::intersect_2d::{orient_2d, segments_touch};
use super::{Point2, TOLERANCE};
use crate::error::{Operand, PolygonError};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the `(min, max)` x coordinates of the points, or `None` if empty.
#[must_use]
pub fn x_range(points: impl IntoIterator<Item = Point2>) -> Option<(f64, f64)> {
    points
        .into_iter()
        .map(|p| (p.x, p.x))
        .reduce(|(lo, hi), (x, _)| (lo.min(x), hi.max(x)))
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Gives a deterministic start for comparisons.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Checks that `points` describe a simple polygon the clipper can work with.
///
/// Requires at least three vertices, finite coordinates, no zero-length edges
/// and no two edges meeting anywhere other than their shared vertex.
///
/// # Errors
///
/// Returns the first [`PolygonError`] found, tagged with `operand`.
pub fn validate_polygon(points: &[Point2], operand: Operand) -> Result<(), PolygonError> {
    let n = points.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { operand, count: n });
    }

    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(PolygonError::NonFiniteCoordinate { operand, index });
    }

    for i in 0..n {
        if (points[(i + 1) % n] - points[i]).norm() < TOLERANCE {
            return Err(PolygonError::ZeroLengthEdge { operand, index: i });
        }
    }

    for i in 0..n {
        let (a0, a1) = (&points[i], &points[(i + 1) % n]);
        for j in (i + 1)..n {
            let (b0, b1) = (&points[j], &points[(j + 1) % n]);
            let overlapping = if j == i + 1 {
                folds_back(a0, a1, b1)
            } else if i == 0 && j == n - 1 {
                folds_back(b0, a0, a1)
            } else {
                segments_touch(a0, a1, b0, b1)
            };
            if overlapping {
                return Err(PolygonError::SelfIntersection {
                    operand,
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(())
}

/// Adjacent edges `prev -> corner -> next` overlap when they are collinear
/// and `next` turns straight back along `prev`.
fn folds_back(prev: &Point2, corner: &Point2, next: &Point2) -> bool {
    let back = prev - corner;
    let forward = next - corner;
    let scale = back.norm() * forward.norm();
    (orient_2d(corner, prev, next) / scale).abs() < TOLERANCE && back.dot(&forward) > 0.0
}
