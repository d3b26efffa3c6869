//! # Rendering
//!
//! Entry points that turn [`DrawOptions`] into a [`Document`].

use rayon::prelude::*;
use tracing::debug;

use crate::document::{assemble, Document, Margins};
use crate::error::DrawError;
use crate::layout::{layout_tiles, Tile, TileFamily};
use crate::options::{DrawConfig, DrawOptions};

/// A validated drawing, ready to render any number of times.
///
/// # Example
///
/// ```rust
/// use arraydraw::{ArrayDraw, DrawOptions, TileFamily};
///
/// let draw = ArrayDraw::new(&DrawOptions::new(&[4, 3, 2])).unwrap();
/// let doc = draw.render();
/// assert_eq!(doc.tile_count(TileFamily::Face), 12);
/// assert_eq!(doc.tile_count(TileFamily::Roof), 6);
/// assert_eq!(doc.tile_count(TileFamily::Side), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDraw {
    config: DrawConfig,
}

impl ArrayDraw {
    /// Validates `options`; no layout happens until [`ArrayDraw::render`].
    pub fn new(options: &DrawOptions) -> Result<Self, DrawError> {
        Ok(Self {
            config: options.validate()?,
        })
    }

    /// Wraps an already validated configuration.
    pub fn from_config(config: DrawConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Positioned tiles in paint order, without outlines or labels.
    pub fn tiles(&self) -> Vec<Tile> {
        let margins = Margins::for_config(&self.config);
        layout_tiles(&self.config, margins.origin())
    }

    /// Builds the document. Pure: the same config always yields an equal
    /// document.
    pub fn render(&self) -> Document {
        let shape = self.config.shape();
        let _span = tracing::debug_span!(
            "render",
            height = shape.height(),
            width = shape.width(),
            depth = shape.depth(),
        )
        .entered();

        let doc = assemble(&self.config);
        debug!(
            faces = doc.tile_count(TileFamily::Face),
            roofs = doc.tile_count(TileFamily::Roof),
            sides = doc.tile_count(TileFamily::Side),
            legends = self.config.legends().any(),
            labels = doc.labels().count(),
            width = doc.width(),
            height = doc.height(),
            "document assembled"
        );
        doc
    }
}

/// Validates and renders in one step.
///
/// # Example
///
/// ```rust
/// use arraydraw::{render, DrawError, DrawOptions};
///
/// let err = render(&DrawOptions::new(&[0, 0, 5])).unwrap_err();
/// assert!(matches!(err, DrawError::InvalidShape { .. }));
/// ```
pub fn render(options: &DrawOptions) -> Result<Document, DrawError> {
    Ok(ArrayDraw::new(options)?.render())
}

/// Renders many drawings in parallel.
///
/// Results keep the order of `batch`; one failing entry does not affect the
/// others.
pub fn render_batch(batch: &[DrawOptions]) -> Vec<Result<Document, DrawError>> {
    debug!(count = batch.len(), "rendering batch");
    batch.par_iter().map(render).collect()
}
