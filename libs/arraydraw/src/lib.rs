//! # ArrayDraw
//!
//! Draws 1D/2D/3D array shapes as stacks of unit cubes in cabinet
//! (oblique) projection. A `(height, width, depth)` shape becomes a front
//! face grid, a receding roof and a receding side, plus optional axis
//! legends and a title.
//!
//! ## Architecture
//!
//! ```text
//! DrawOptions ─validate→ DrawConfig ─layout→ Tiles ─emit→ Primitives ─assemble→ Document
//!                           │                                            ▲
//!                           └──────────────── labels ────────────────────┘
//! ```
//!
//! The crate is backend-neutral: a [`Document`] is an ordered list of
//! rectangles, polygons and text in a declared viewport. `arraydraw-svg`
//! writes it out as SVG.
//!
//! ## Usage
//!
//! ```rust
//! use arraydraw::{render, DrawOptions, Legends, Rgb};
//!
//! let options = DrawOptions::new(&[4, 3, 2])
//!     .with_cube_color(Rgb::from_hex("#304e6c").unwrap())
//!     .with_legends(Legends::new("Frequency", "Time", "Channel"))
//!     .with_title("Spectrogram");
//! let doc = render(&options).unwrap();
//! assert_eq!(doc.primitives().len(), 26 + 4);
//! assert!(doc.encloses_all());
//! ```

pub mod color;
pub mod document;
pub mod error;
mod labels;
pub mod layout;
pub mod options;
pub mod primitive;
pub mod projection;
pub mod render;
pub mod shape;

pub use color::{ColorGrid, CubeColor, FamilyFills, Fill, Rgb};
pub use document::{Document, Margins};
pub use error::DrawError;
pub use layout::{layout_tiles, Tile, TileFamily};
pub use options::{DrawConfig, DrawOptions, Legends};
pub use primitive::{
    emit_tile, Background, LabelRole, LineJoin, PolygonShape, Primitive, RectShape, Stroke,
    TextAnchor, TextLabel,
};
pub use projection::Projection;
pub use render::{render, render_batch, ArrayDraw};
pub use shape::Shape;
