//! Immutable 2D and 3D coordinate vectors for world-space math.
//!
//! [`Vector2`] addresses the horizontal (x, z) ground plane of a y-up world,
//! and [`Vector3`] adds the vertical axis. Both are small `Copy` value
//! types: no operation mutates its receiver, every result is a fresh vector,
//! and negative zero components are normalized away on construction.
//!
//! ```
//! use worldvec::Vector2;
//!
//! let origin = Vector2::default();
//! let corner = Vector2::new(3.0, 4.0);
//! assert_eq!(5.0, origin.distance(corner));
//! assert_eq!(5.0, corner.length());
//! ```
//!
//! # Line interpolation
//!
//! The `intermediate_with_*` methods treat two vectors as a line segment and
//! query the point where the segment reaches a given axis value. The result
//! is `None` when the segment has no extent on that axis or the value lies
//! outside the segment:
//!
//! ```
//! use worldvec::Vector2;
//!
//! let start = Vector2::new(0.0, 0.0);
//! let end = Vector2::new(10.0, 10.0);
//! assert_eq!(Some(Vector2::new(5.0, 5.0)), start.intermediate_with_x(end, 5.0));
//! assert_eq!(None, start.intermediate_with_x(end, 11.0));
//! assert_eq!(None, start.intermediate_with_x(start, 0.0));
//! ```
//!
//! # String format
//!
//! Vectors display as `(x, z)` and `(x, y, z)` and parse back from the same
//! format, with the comma-only form `(x,z)` accepted as well. Components
//! are unsigned decimals: signed and exponential values display fine but do
//! not round-trip.
//!
//! ```
//! use worldvec::Vector3;
//!
//! let vector: Vector3 = "(1, 2, 3)".parse().unwrap();
//! assert_eq!("(1, 2, 3)", vector.to_string());
//! assert_eq!(None, Vector3::parse("(1, 2, banana)"));
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod utils;
mod vector2;
mod vector3;

pub use crate::error::Error;
pub use crate::vector2::Vector2;
pub use crate::vector3::Vector3;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
