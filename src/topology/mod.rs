pub mod ring;
pub mod vertex;

pub use ring::{Ring, RingIter};
pub use vertex::{VertexData, VertexId};
