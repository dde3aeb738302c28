mod assemble;
mod classify;
mod engine;
mod intersect_op;
mod label;
mod select;
mod split;
mod subtract;
mod union;

pub use assemble::assemble_results;
pub use classify::{classify_point, classify_polygon, is_inside, PointClassification};
pub use engine::{boolean_execute, clip_rings, ClipOutcome};
pub use intersect_op::Intersect;
pub use label::label_entries;
pub use select::{select_without_crossings, BooleanOp, Source};
pub use split::insert_intersections;
pub use subtract::{ReverseSubtract, Subtract};
pub use union::Union;
