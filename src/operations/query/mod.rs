mod area;
mod contains;
mod is_valid;

pub use area::Area;
pub use contains::ContainsPoint;
pub use is_valid::IsValid;
