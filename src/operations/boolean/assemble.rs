use crate::error::{OperationError, Result, TopologyError};
use crate::math::Point2;
use crate::topology::{Ring, VertexId};

/// Which of the two rings a traversal cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Subject,
    Clip,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::Subject => Self::Clip,
            Self::Clip => Self::Subject,
        }
    }
}

struct RingPair<'a> {
    subject: &'a mut Ring,
    clip: &'a mut Ring,
}

impl RingPair<'_> {
    fn get(&self, side: Side) -> &Ring {
        match side {
            Side::Subject => &*self.subject,
            Side::Clip => &*self.clip,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut Ring {
        match side {
            Side::Subject => &mut *self.subject,
            Side::Clip => &mut *self.clip,
        }
    }

    /// Marks a vertex checked along with its unchecked neighbour chain.
    fn mark_checked(&mut self, side: Side, id: VertexId) -> std::result::Result<(), TopologyError> {
        let mut pending = vec![(side, id)];
        while let Some((side, id)) = pending.pop() {
            let neighbour = {
                let vertex = self.get_mut(side).vertex_mut(id)?;
                vertex.checked = true;
                vertex.neighbour
            };
            if let Some(neighbour) = neighbour {
                if !self.get(side.other()).vertex(neighbour)?.checked {
                    pending.push((side.other(), neighbour));
                }
            }
        }
        Ok(())
    }
}

/// Walks the labeled rings and collects the result polygons.
///
/// Each result starts at the first unchecked crossing of `subject`, follows
/// the current ring forward from entries and backward from exits up to the
/// next crossing, then hops to that crossing's neighbour on the other ring.
/// It closes when it hops onto an already checked crossing. Results hold
/// coordinate copies only and do not repeat their first point.
///
/// # Errors
///
/// Returns an error if a crossing lacks its neighbour or a result fails to
/// close within the combined vertex count of both rings.
pub fn assemble_results(subject: &mut Ring, clip: &mut Ring) -> Result<Vec<Vec<Point2>>> {
    let step_limit = subject.len() + clip.len();
    let mut rings = RingPair { subject, clip };
    let mut results = Vec::new();

    while let Some(seed) = rings.subject.first_unprocessed_intersection() {
        let mut side = Side::Subject;
        let mut current = seed;
        let mut contour = vec![rings.subject[seed].point];
        let mut steps = 0;

        loop {
            rings.mark_checked(side, current)?;
            let ring = rings.get(side);
            let forward = ring[current].entry;
            loop {
                current = if forward {
                    ring[current].next()
                } else {
                    ring[current].prev()
                };
                contour.push(ring[current].point);
                steps += 1;
                if steps > step_limit {
                    return Err(OperationError::TraversalNotClosed { steps }.into());
                }
                if ring[current].intersection {
                    break;
                }
            }

            current = ring[current]
                .neighbour
                .ok_or(TopologyError::MissingNeighbour)?;
            side = side.other();
            if rings.get(side).vertex(current)?.checked {
                break;
            }
        }

        if contour.len() > 1 && contour.first() == contour.last() {
            contour.pop();
        }
        results.push(contour);
    }

    Ok(results)
}
