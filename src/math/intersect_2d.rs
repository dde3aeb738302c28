use super::{Point2, Vector2, TOLERANCE};

/// A proper crossing between a subject edge and a clip edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing {
    /// The crossing point, interpolated along the subject edge.
    pub point: Point2,
    /// Parameter of the crossing along the subject edge, in `(0, 1)`.
    pub alpha_subject: f64,
    /// Parameter of the crossing along the clip edge, in `(0, 1)`.
    pub alpha_clip: f64,
}

/// Finds the interior crossing of the directed edges `s1 -> s2` and `c1 -> c2`.
///
/// Returns `None` for parallel or collinear edges, for crossings outside either
/// edge, and for the degenerate case where the crossing lands exactly on an
/// endpoint of one edge while lying within the other. The degenerate case is
/// reported through a `warn!` event and otherwise treated as no crossing.
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn segment_crossing(
    s1: &Point2,
    s2: &Point2,
    c1: &Point2,
    c2: &Point2,
) -> Option<SegmentCrossing> {
    let den = (c2.y - c1.y) * (s2.x - s1.x) - (c2.x - c1.x) * (s2.y - s1.y);
    if den == 0.0 {
        return None;
    }

    let us = ((c2.x - c1.x) * (s1.y - c1.y) - (c2.y - c1.y) * (s1.x - c1.x)) / den;
    let uc = ((s2.x - s1.x) * (s1.y - c1.y) - (s2.y - s1.y) * (s1.x - c1.x)) / den;

    let at_endpoint = |u: f64| u == 0.0 || u == 1.0;
    let within = |u: f64| (0.0..=1.0).contains(&u);
    if (at_endpoint(us) && within(uc)) || (at_endpoint(uc) && within(us)) {
        tracing::warn!(
            subject = ?(s1, s2),
            clip = ?(c1, c2),
            us,
            uc,
            "degenerate crossing on an edge endpoint ignored"
        );
        return None;
    }

    if us > 0.0 && us < 1.0 && uc > 0.0 && uc < 1.0 {
        let point = s1 + (s2 - s1) * us;
        return Some(SegmentCrossing {
            point,
            alpha_subject: us,
            alpha_clip: uc,
        });
    }

    None
}

/// 2D cross product of `b - a` and `c - a`.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab: Vector2 = b - a;
    let ac: Vector2 = c - a;
    ab.perp(&ac)
}

/// Returns `true` if `p` lies on the closed segment `a -> b` within [`TOLERANCE`].
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    let len = ab.norm();
    if len < TOLERANCE {
        return (p - a).norm() < TOLERANCE;
    }
    if (orient_2d(a, b, p) / len).abs() > TOLERANCE {
        return false;
    }
    let t = (p - a).dot(&ab) / (len * len);
    t >= -TOLERANCE && t <= 1.0 + TOLERANCE
}

/// Closed segment-segment test: `true` if the segments share any point,
/// including touching endpoints and collinear overlap.
#[must_use]
pub fn segments_touch(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient_2d(b0, b1, a0);
    let d2 = orient_2d(b0, b1, a1);
    let d3 = orient_2d(a0, a1, b0);
    let d4 = orient_2d(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    point_on_segment(a0, b0, b1)
        || point_on_segment(a1, b0, b1)
        || point_on_segment(b0, a0, a1)
        || point_on_segment(b1, a0, a1)
}
