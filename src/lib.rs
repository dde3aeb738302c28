//! Boolean operations on simple 2D polygons using the Greiner-Hormann
//! clipping algorithm.
//!
//! ```
//! use polyclip::math::Point2;
//! use polyclip::operations::boolean::Intersect;
//!
//! let a = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//! let b = [
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ];
//! let result = Intersect::new(&a, &b).execute()?;
//! assert_eq!(result.len(), 1);
//! # Ok::<(), polyclip::PolyclipError>(())
//! ```

pub mod error;
pub mod io;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{PolyclipError, Result};
