//! # Tile Layout
//!
//! Enumerates every visible tile of a shape and positions it on screen.
//!
//! ## Draw Order
//!
//! ```text
//!     .----.
//!    /  R /|      F: face tiles   height × width   (front plane)
//!   *----. |      R: roof tiles   width  × depth   (top)
//!   |  F |S.      S: side tiles   height × depth   (right)
//!   |    |/
//!   .----.        * = tile origin (upper-left front corner)
//! ```
//!
//! Faces are emitted first, then roofs, then sides. Face tiles never
//! overlap each other, and roof and side outlines are stacked on top of the
//! finished front plane, so painting in this order needs no depth sorting.
//! A zero dimension simply empties the families that involve it.

mod tiles;

pub use tiles::{layout_tiles, Tile, TileFamily};
