use super::classify::is_inside;
use crate::error::{Result, TopologyError};
use crate::topology::{Ring, VertexId};

/// Labels the intersection vertices of `ring` as entries or exits of `other`.
///
/// The first label is `entry` flipped when the ring's anchor lies inside
/// `other`; labels then alternate along the ring, since consecutive crossings
/// always switch between entering and leaving the other polygon.
///
/// # Errors
///
/// Returns an error if `ring` is empty or its links are inconsistent.
pub fn label_entries(ring: &mut Ring, other: &Ring, entry: bool) -> Result<()> {
    let first = ring.first().ok_or(TopologyError::EmptyRing)?;
    let mut toggle = entry ^ is_inside(&ring[first].point, other)?;

    let crossings: Vec<VertexId> = ring.iter().filter(|&id| ring[id].intersection).collect();
    tracing::debug!(
        crossings = crossings.len(),
        first_is_entry = toggle,
        "labeling crossings"
    );
    for id in crossings {
        ring.vertex_mut(id)?.entry = toggle;
        toggle = !toggle;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::boolean::split::insert_intersections;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        let points: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        Ring::from_points(&points)
    }

    fn entries(ring: &Ring) -> Vec<bool> {
        ring.iter()
            .filter(|&id| ring[id].intersection)
            .map(|id| ring[id].entry)
            .collect()
    }

    fn overlapping_squares() -> (Ring, Ring) {
        let mut a = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let mut b = ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        insert_intersections(&mut a, &mut b).unwrap();
        (a, b)
    }

    #[test]
    fn anchor_outside_starts_with_entry() {
        let (mut a, b) = overlapping_squares();
        // (0, 0) is outside b, so walking a the first crossing enters b.
        label_entries(&mut a, &b, true).unwrap();
        assert_eq!(entries(&a), vec![true, false]);
    }

    #[test]
    fn anchor_inside_starts_with_exit() {
        let (a, mut b) = overlapping_squares();
        // (1, 1) is inside a, so walking b the first crossing leaves a.
        label_entries(&mut b, &a, true).unwrap();
        assert_eq!(entries(&b), vec![false, true]);
    }

    #[test]
    fn entry_flag_inverts_labels() {
        let (mut a, b) = overlapping_squares();
        label_entries(&mut a, &b, false).unwrap();
        assert_eq!(entries(&a), vec![false, true]);
    }

    #[test]
    fn empty_ring_is_an_error() {
        let (a, _) = overlapping_squares();
        assert!(label_entries(&mut Ring::new(), &a, true).is_err());
    }
}
