use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a [`Ring`](super::Ring).
    pub struct VertexId;
}

/// A node of a polygon ring.
///
/// Original vertices come from the caller's input; intersection vertices are
/// spliced in while clipping and always come in pairs, one per ring, linked
/// through [`neighbour`](Self::neighbour).
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The position of the vertex.
    pub point: Point2,
    /// Parametric position along the original edge this vertex was inserted
    /// into. Always `0.0` for original vertices.
    pub alpha: f64,
    /// `true` for vertices created at a crossing of the two polygons.
    pub intersection: bool,
    /// Entry (`true`) or exit (`false`) label. Only meaningful on
    /// intersection vertices once labeling has run.
    pub entry: bool,
    /// Set once the vertex has been consumed while assembling results.
    pub checked: bool,
    /// The matching intersection vertex in the *other* ring.
    ///
    /// This key indexes the other ring's arena, never this one.
    pub neighbour: Option<VertexId>,
    pub(super) next: VertexId,
    pub(super) prev: VertexId,
}

impl VertexData {
    /// Creates an original (non-intersection) vertex.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            alpha: 0.0,
            intersection: false,
            entry: false,
            checked: false,
            neighbour: None,
            next: VertexId::default(),
            prev: VertexId::default(),
        }
    }

    /// Creates an intersection vertex at `point`, `alpha` along its edge.
    #[must_use]
    pub fn intersection(point: Point2, alpha: f64) -> Self {
        Self {
            alpha,
            intersection: true,
            ..Self::new(point)
        }
    }

    /// The following vertex in the ring.
    #[must_use]
    pub fn next(&self) -> VertexId {
        self.next
    }

    /// The preceding vertex in the ring.
    #[must_use]
    pub fn prev(&self) -> VertexId {
        self.prev
    }

    /// `true` for an intersection vertex that results assembly has not visited.
    #[must_use]
    pub fn is_unprocessed(&self) -> bool {
        self.intersection && !self.checked
    }
}
