//! Tile families and their screen placement.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::options::DrawConfig;
use crate::shape::Shape;

/// The three visible tile families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileFamily {
    /// Front-facing square, one per (row, column) of the height × width grid.
    Face,
    /// Top parallelogram, one per (column, layer) of the width × depth grid.
    Roof,
    /// Right parallelogram, one per (row, layer) of the height × depth grid.
    Side,
}

impl TileFamily {
    /// All families in draw order.
    pub const ALL: [TileFamily; 3] = [TileFamily::Face, TileFamily::Roof, TileFamily::Side];

    /// `(rows, cols)` of this family's tile grid for `shape`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arraydraw::{Shape, TileFamily};
    ///
    /// let shape = Shape::new(4, 3, 2).unwrap();
    /// assert_eq!(TileFamily::Face.grid_dims(&shape), (4, 3));
    /// assert_eq!(TileFamily::Roof.grid_dims(&shape), (3, 2));
    /// assert_eq!(TileFamily::Side.grid_dims(&shape), (4, 2));
    /// ```
    pub fn grid_dims(self, shape: &Shape) -> (usize, usize) {
        match self {
            TileFamily::Face => (shape.height(), shape.width()),
            TileFamily::Roof => (shape.width(), shape.depth()),
            TileFamily::Side => (shape.height(), shape.depth()),
        }
    }
}

impl fmt::Display for TileFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileFamily::Face => "face",
            TileFamily::Roof => "roof",
            TileFamily::Side => "side",
        };
        f.write_str(name)
    }
}

/// A positioned, colored tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tile {
    pub family: TileFamily,
    /// Row in the family's own grid.
    pub row: usize,
    /// Column in the family's own grid.
    pub col: usize,
    /// Upper-left front corner of the cube this tile belongs to.
    pub origin: DVec2,
    pub fill: Rgb,
}

/// Lays out all tiles of a validated drawing in draw order.
///
/// `base` is the upper-left corner of the area holding the projected
/// solid. The front plane is pushed down by `depth·s·y_proj` to leave room
/// for the roof. Fills come from the same config as the shape, so per-cell
/// grids always cover every tile.
///
/// # Example
///
/// ```rust
/// use arraydraw::{layout_tiles, DrawOptions};
/// use glam::DVec2;
///
/// let config = DrawOptions::new(&[4, 3, 2]).validate().unwrap();
/// let tiles = layout_tiles(&config, DVec2::ZERO);
/// assert_eq!(tiles.len(), config.shape().tile_count());
/// ```
pub fn layout_tiles(config: &DrawConfig, base: DVec2) -> Vec<Tile> {
    let shape = config.shape();
    let tile_size = config.cube_size();
    let projection = config.projection();
    let fills = config.fills();

    let mut tiles = Vec::with_capacity(shape.tile_count());
    let step = projection.depth_step(tile_size);
    let front = base + DVec2::new(0.0, shape.depth() as f64 * tile_size * projection.y_proj());

    let mut push = |family: TileFamily, row: usize, col: usize, origin: DVec2| {
        tiles.push(Tile {
            family,
            row,
            col,
            origin,
            fill: fills.color_at(family, row, col),
        });
    };

    // Face: axis-aligned height × width grid
    for row in 0..shape.height() {
        for col in 0..shape.width() {
            let origin = front + DVec2::new(col as f64, row as f64) * tile_size;
            push(TileFamily::Face, row, col, origin);
        }
    }

    // Roof: one row of tiles per column, receding one step per layer
    for col in 0..shape.width() {
        for layer in 0..shape.depth() {
            let origin = front + DVec2::new(col as f64 * tile_size, 0.0) + step * layer as f64;
            push(TileFamily::Roof, col, layer, origin);
        }
    }

    // Side: anchored on the last face column, receding one step per layer
    let side_base = front + DVec2::new((shape.width() as f64 - 1.0) * tile_size, 0.0);
    for row in 0..shape.height() {
        for layer in 0..shape.depth() {
            let origin = side_base + DVec2::new(0.0, row as f64 * tile_size) + step * layer as f64;
            push(TileFamily::Side, row, layer, origin);
        }
    }

    tiles
}
