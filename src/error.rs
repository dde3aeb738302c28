use thiserror::Error;

/// Top-level error type for polygon clipping.
#[derive(Debug, Error)]
pub enum PolyclipError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Which operand of a boolean operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Subject,
    Clip,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subject => f.write_str("subject"),
            Self::Clip => f.write_str("clip"),
        }
    }
}

/// Input polygons that fall outside what the clipper can handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("invalid {operand} polygon: {count} vertices, at least 3 required")]
    TooFewVertices { operand: Operand, count: usize },

    #[error("invalid {operand} polygon: vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { operand: Operand, index: usize },

    #[error("invalid {operand} polygon: edge {index} has zero length")]
    ZeroLengthEdge { operand: Operand, index: usize },

    #[error("invalid {operand} polygon: edges {first} and {second} intersect")]
    SelfIntersection {
        operand: Operand,
        first: usize,
        second: usize,
    },
}

/// Errors related to the vertex rings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("vertex not found in ring")]
    VertexNotFound,

    #[error("intersection vertex has no neighbour")]
    MissingNeighbour,

    #[error("ring is empty")]
    EmptyRing,
}

/// Errors raised while running a clipping operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("result polygon did not close after {steps} steps")]
    TraversalNotClosed { steps: usize },
}

/// Errors from parsing the `"x1,y1;x2,y2;..."` polygon syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("polygon definition is empty")]
    Empty,

    #[error("vertex {index} ({text:?}) is not an `x,y` pair")]
    MissingCoordinate { index: usize, text: String },

    #[error("vertex {index}: {text:?} is not a number")]
    InvalidNumber { index: usize, text: String },

    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
}

/// Convenience type alias for results using [`PolyclipError`].
pub type Result<T> = std::result::Result<T, PolyclipError>;
