use crate::error::{Operand, Result};
use crate::math::polygon_2d::validate_polygon;
use crate::math::Point2;
use crate::topology::Ring;

use super::assemble::assemble_results;
use super::classify::classify_polygon;
use super::label::label_entries;
use super::select::{select_without_crossings, BooleanOp, Source};
use super::split::insert_intersections;

/// Outcome of running the three clipping phases on a pair of rings.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipOutcome {
    /// The boundaries crossed; these are the traced result polygons.
    Clipped(Vec<Vec<Point2>>),
    /// The boundaries never crossed, so no polygon could be traced.
    NoCrossings,
}

impl ClipOutcome {
    /// Result polygons, falling back to the unmodified subject when the
    /// boundaries never crossed.
    ///
    /// Whether the subject is then inside or outside the clip polygon is not
    /// decided here; [`boolean_execute`] resolves that case properly.
    #[must_use]
    pub fn into_polygons(self, subject: &Ring) -> Vec<Vec<Point2>> {
        match self {
            Self::Clipped(polygons) => polygons,
            Self::NoCrossings => vec![subject.points()],
        }
    }
}

/// Runs discovery, labeling and assembly on two rings, mutating them in
/// place.
///
/// The rings are left holding their intersection vertices and entry labels,
/// which is useful for inspection. For [`BooleanOp::ReverseSubtract`] the
/// rings swap roles.
///
/// # Errors
///
/// Returns an error if either ring is empty or the traversal fails.
pub fn clip_rings(subject: &mut Ring, clip: &mut Ring, op: BooleanOp) -> Result<ClipOutcome> {
    if op.swaps_operands() {
        return clip_rings(clip, subject, op.normalized());
    }
    let (s_entry, c_entry) = op.entry_flags();

    let found = insert_intersections(subject, clip)?;
    tracing::debug!(?op, crossings = found, "discovered crossings");
    if found == 0 {
        return Ok(ClipOutcome::NoCrossings);
    }

    label_entries(subject, clip, s_entry)?;
    label_entries(clip, subject, c_entry)?;

    let polygons = assemble_results(subject, clip)?;
    tracing::debug!(?op, results = polygons.len(), "assembled result polygons");
    Ok(ClipOutcome::Clipped(polygons))
}

/// Executes a boolean operation on two simple polygons.
///
/// Validates both inputs, clips them, and when their boundaries never cross
/// decides the result from containment instead: disjoint, nested and
/// coincident operands each get the region the operation asks for. A clip
/// polygon nested inside the subject cannot be subtracted as a hole, so the
/// subject is returned unchanged in that case.
///
/// # Errors
///
/// Returns [`PolygonError`](crate::error::PolygonError) for invalid input,
/// or an error if the traversal fails.
pub fn boolean_execute(
    subject: &[Point2],
    clip: &[Point2],
    op: BooleanOp,
) -> Result<Vec<Vec<Point2>>> {
    validate_polygon(subject, Operand::Subject)?;
    validate_polygon(clip, Operand::Clip)?;

    let (a, b) = if op.swaps_operands() {
        (clip, subject)
    } else {
        (subject, clip)
    };
    let op = op.normalized();

    let mut ring_a = Ring::from_points(a);
    let mut ring_b = Ring::from_points(b);
    match clip_rings(&mut ring_a, &mut ring_b, op)? {
        ClipOutcome::Clipped(polygons) => Ok(polygons),
        ClipOutcome::NoCrossings => Ok(handle_no_crossings(a, b, op)),
    }
}

fn handle_no_crossings(a: &[Point2], b: &[Point2], op: BooleanOp) -> Vec<Vec<Point2>> {
    let a_in_b = classify_polygon(a, b);
    let b_in_a = classify_polygon(b, a);
    tracing::debug!(?op, ?a_in_b, ?b_in_a, "boundaries do not cross");

    select_without_crossings(op, a_in_b, b_in_a)
        .into_iter()
        .map(|source| match source {
            Source::Subject => a.to_vec(),
            Source::Clip => b.to_vec(),
        })
        .collect()
}
