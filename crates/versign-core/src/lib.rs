//! versign-core - Basic data structures for signature image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the versign workspace:
//!
//! - [`Pix`] / [`PixMut`] - The 8-bit image container (immutable / mutable)
//! - [`Bounds`] - Half-open rectangle regions scanned by the analysers
//! - [`BoundingBox`] - Closed rectangle produced by ink localisation
//!
//! A binary signature image stores [`INK`] for stroke samples and
//! [`BACKGROUND`] for paper.

pub mod bounds;
pub mod error;
pub mod pix;

pub use bounds::{BoundingBox, Bounds};
pub use error::{Error, Result};
pub use pix::graphics::{generate_box_outline_pts, generate_line_pts};
pub use pix::{BACKGROUND, INK, Pix, PixMut};
