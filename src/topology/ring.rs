use std::fmt;
use std::ops::Index;

use slotmap::SlotMap;

use super::vertex::{VertexData, VertexId};
use crate::error::TopologyError;
use crate::math::Point2;

/// A polygon stored as a circular doubly-linked list of vertices.
///
/// Vertices live in an arena and link to each other via [`VertexId`] keys,
/// so the ring has no self-referential ownership. `first` is only the place
/// traversal starts; no vertex is otherwise special.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    vertices: SlotMap<VertexId, VertexData>,
    first: Option<VertexId>,
}

impl Ring {
    /// Creates a new, empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring of original vertices in input order.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut ring = Self::new();
        for &point in points {
            ring.append(VertexData::new(point));
        }
        ring
    }

    /// The anchor vertex traversal starts from, if the ring is not empty.
    #[must_use]
    pub fn first(&self) -> Option<VertexId> {
        self.first
    }

    /// Number of vertices, intersections included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this ring.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices.get(id).ok_or(TopologyError::VertexNotFound)
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not belong to this ring.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices.get_mut(id).ok_or(TopologyError::VertexNotFound)
    }

    /// Inserts a vertex at the end of the ring, just before the anchor.
    pub fn append(&mut self, data: VertexData) -> VertexId {
        let Some(first) = self.first else {
            let id = self.vertices.insert(data);
            let vertex = &mut self.vertices[id];
            vertex.next = id;
            vertex.prev = id;
            self.first = Some(id);
            return id;
        };
        let last = self.vertices[first].prev;
        self.link_before(data, last, first)
    }

    /// Splices `data` into the stretch of ring running from `start` to `end`,
    /// before the first vertex whose alpha is not less than `data.alpha`.
    ///
    /// `start` and `end` are the original endpoints of one edge, so repeated
    /// insertions along the same edge stay sorted by alpha.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` or `end` is not in this ring.
    pub fn insert_between(
        &mut self,
        data: VertexData,
        start: VertexId,
        end: VertexId,
    ) -> Result<VertexId, TopologyError> {
        self.vertex(end)?;
        let mut curr = start;
        while curr != end && self.vertex(curr)?.alpha < data.alpha {
            curr = self.vertices[curr].next;
        }
        let prev = self.vertices[curr].prev;
        Ok(self.link_before(data, prev, curr))
    }

    fn link_before(&mut self, mut data: VertexData, prev: VertexId, next: VertexId) -> VertexId {
        data.prev = prev;
        data.next = next;
        let id = self.vertices.insert(data);
        self.vertices[prev].next = id;
        self.vertices[next].prev = id;
        id
    }

    /// Starting at `id`, skips forward over intersection vertices and returns
    /// the first original vertex reached.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in this ring.
    pub fn next_original(&self, id: VertexId) -> Result<VertexId, TopologyError> {
        let mut curr = id;
        for _ in 0..self.vertices.len() {
            let vertex = self.vertex(curr)?;
            if !vertex.intersection {
                return Ok(curr);
            }
            curr = vertex.next;
        }
        Ok(curr)
    }

    /// Iterates over every vertex once, starting at the anchor.
    #[must_use]
    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            current: self.first,
        }
    }

    /// Iterates over the original edges as `(start, end)` vertex pairs,
    /// looking through any intersection vertices spliced into them.
    pub fn original_edges(
        &self,
    ) -> impl Iterator<Item = Result<(VertexId, VertexId), TopologyError>> + '_ {
        self.iter()
            .filter(|&id| !self.vertices[id].intersection)
            .map(|id| Ok((id, self.next_original(self.vertices[id].next)?)))
    }

    /// The first intersection vertex in traversal order not yet checked.
    #[must_use]
    pub fn first_unprocessed_intersection(&self) -> Option<VertexId> {
        self.iter().find(|&id| self.vertices[id].is_unprocessed())
    }

    /// Returns `true` if any intersection vertex is still unchecked.
    #[must_use]
    pub fn has_unprocessed_intersections(&self) -> bool {
        self.first_unprocessed_intersection().is_some()
    }

    /// Number of intersection vertices in the ring.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.vertices.values().filter(|v| v.intersection).count()
    }

    /// Copies the vertex positions in traversal order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.iter().map(|id| self.vertices[id].point).collect()
    }
}

impl Index<VertexId> for Ring {
    type Output = VertexData;

    fn index(&self, id: VertexId) -> &VertexData {
        &self.vertices[id]
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, id) in self.iter().enumerate() {
            let v = &self.vertices[id];
            let prev = self.vertices[v.prev].point;
            let next = self.vertices[v.next].point;
            let kind = if v.intersection { "i" } else { " " };
            let label = match (v.intersection, v.entry) {
                (false, _) => " ",
                (true, true) => "e",
                (true, false) => "x",
            };
            let pending = if v.is_unprocessed() { " !" } else { "" };
            writeln!(
                f,
                "{:02}: ({:.2}, {:.2}) <-> {kind}({:.2}, {:.2}){label} <-> ({:.2}, {:.2}){pending}",
                n + 1,
                prev.x,
                prev.y,
                v.point.x,
                v.point.y,
                next.x,
                next.y,
            )?;
        }
        Ok(())
    }
}

/// Iterator over the vertex keys of a [`Ring`], anchor first.
pub struct RingIter<'a> {
    ring: &'a Ring,
    current: Option<VertexId>,
}

impl Iterator for RingIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let id = self.current?;
        let next = self.ring.vertices[id].next;
        self.current = if Some(next) == self.ring.first {
            None
        } else {
            Some(next)
        };
        Some(id)
    }
}
