//! # Document Assembly
//!
//! Composes background, tiles and labels into one finished drawing with a
//! declared viewport that encloses all of them.

use config::constants::{approx_equal, approx_zero, LABEL_MARGIN_FACTOR};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::labels::place_labels;
use crate::layout::{layout_tiles, TileFamily};
use crate::options::DrawConfig;
use crate::primitive::{emit_tile, Background, Primitive, TextLabel};

/// Space around the projected solid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// One cube size on every side plus room for each configured label.
    ///
    /// Height legend → left, width legend → bottom, depth legend → right,
    /// title → top; each gets `1.5 ×` its font size.
    pub fn for_config(config: &DrawConfig) -> Self {
        let s = config.cube_size();
        let legend = LABEL_MARGIN_FACTOR * config.legend_size();
        let legends = config.legends();
        let reserve = |present: bool, amount: f64| if present { amount } else { 0.0 };

        Self {
            top: s + reserve(config.title().is_some(), LABEL_MARGIN_FACTOR * config.title_size()),
            right: s + reserve(legends.depth.is_some(), legend),
            bottom: s + reserve(legends.width.is_some(), legend),
            left: s + reserve(legends.height.is_some(), legend),
        }
    }

    /// Top-left corner of the area holding the projected solid.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}

/// A finished drawing: primitives in paint order inside a viewport whose
/// top-left corner is the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    width: f64,
    height: f64,
    primitives: Vec<Primitive>,
}

impl Document {
    /// Viewport width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Primitives in paint order.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of tile primitives of one family.
    pub fn tile_count(&self, family: TileFamily) -> usize {
        self.primitives
            .iter()
            .filter(|p| p.family() == Some(family))
            .count()
    }

    /// Text labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(label) => Some(label),
            _ => None,
        })
    }

    /// Returns true when every primitive coordinate lies in
    /// `[0, width] × [0, height]`, up to `config::constants::EPSILON` at the edges.
    pub fn encloses_all(&self) -> bool {
        let within = |v: f64, max: f64| {
            (v >= 0.0 || approx_zero(v)) && (v <= max || approx_equal(v, max))
        };
        self.primitives
            .iter()
            .flat_map(Primitive::points)
            .all(|p| within(p.x, self.width) && within(p.y, self.height))
    }
}

/// Canvas size from the margins and the projected solid, before labels are
/// placed.
pub(crate) fn canvas_size(config: &DrawConfig) -> DVec2 {
    let margins = Margins::for_config(config);
    let solid = config
        .projection()
        .bounding_size(config.shape(), config.cube_size());
    DVec2::new(
        margins.left + solid.x + margins.right,
        margins.top + solid.y + margins.bottom,
    )
}

/// Builds the document for a validated configuration.
pub(crate) fn assemble(config: &DrawConfig) -> Document {
    let base = Margins::for_config(config).origin();

    let tiles = layout_tiles(config, base);
    let labels = place_labels(config, base);

    // An oversized depth legend can push its anchor past the bottom margin
    let size = labels
        .iter()
        .fold(canvas_size(config), |size, label| size.max(label.position));

    let mut primitives = Vec::with_capacity(1 + tiles.len() + labels.len());
    if let Some(fill) = config.background() {
        primitives.push(Primitive::Background(Background { size, fill }));
    }

    let depth_step = config.projection().depth_step(config.cube_size());
    primitives.extend(
        tiles
            .iter()
            .map(|tile| emit_tile(tile, config.cube_size(), depth_step, config.stroke())),
    );
    primitives.extend(labels.into_iter().map(Primitive::Text));

    Document {
        width: size.x,
        height: size.y,
        primitives,
    }
}
