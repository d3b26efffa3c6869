//! # Drawing Primitives
//!
//! Backend-neutral shapes with enough information to be written out as any
//! vector markup: coordinates, fill, stroke, rotation and text anchor.
//!
//! ```text
//!   roof                      side
//!   (x+xp,y-yp)---(x+xp+s,y-yp)      (x+s+xp,y-yp)
//!      /             /               /|
//!   (x,y)-------(x+s,y)       (x+s,y) |
//!                                |  (x+s+xp,y-yp+s)
//!                                | /
//!                             (x+s,y+s)
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::layout::{Tile, TileFamily};

/// How stroked segments are joined at corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Outline style shared by all tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
    pub line_join: LineJoin,
}

impl Stroke {
    /// A stroke with round joins, so adjacent tile borders meet cleanly.
    pub fn new(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            line_join: LineJoin::Round,
        }
    }
}

/// Full-canvas background fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub size: DVec2,
    pub fill: Rgb,
}

/// An axis-aligned rectangle (face tiles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub family: TileFamily,
    pub origin: DVec2,
    pub size: DVec2,
    pub fill: Rgb,
    pub stroke: Stroke,
}

impl RectShape {
    /// Corners clockwise from the origin.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.origin,
            self.origin + DVec2::new(self.size.x, 0.0),
            self.origin + self.size,
            self.origin + DVec2::new(0.0, self.size.y),
        ]
    }
}

/// A closed polygon (roof and side tiles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub family: TileFamily,
    pub points: Vec<DVec2>,
    pub fill: Rgb,
    pub stroke: Stroke,
}

/// Horizontal alignment of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// What a text label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    HeightLegend,
    WidthLegend,
    DepthLegend,
    Title,
}

/// A text label centered on `position` (both axes) and rotated about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub role: LabelRole,
    pub content: String,
    pub position: DVec2,
    /// Clockwise rotation in degrees about `position`.
    pub rotation: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: Rgb,
    pub anchor: TextAnchor,
}

/// One element of a finished drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Background(Background),
    Rect(RectShape),
    Polygon(PolygonShape),
    Text(TextLabel),
}

impl Primitive {
    /// Every coordinate this primitive occupies.
    ///
    /// Text contributes its anchor point only; glyph extents depend on the
    /// renderer's fonts.
    pub fn points(&self) -> Vec<DVec2> {
        match self {
            Primitive::Background(bg) => vec![
                DVec2::ZERO,
                DVec2::new(bg.size.x, 0.0),
                bg.size,
                DVec2::new(0.0, bg.size.y),
            ],
            Primitive::Rect(rect) => rect.corners().to_vec(),
            Primitive::Polygon(polygon) => polygon.points.clone(),
            Primitive::Text(text) => vec![text.position],
        }
    }

    /// The tile family, for tile primitives.
    pub fn family(&self) -> Option<TileFamily> {
        match self {
            Primitive::Rect(rect) => Some(rect.family),
            Primitive::Polygon(polygon) => Some(polygon.family),
            Primitive::Background(_) | Primitive::Text(_) => None,
        }
    }
}

/// Turns a positioned tile into its outline.
///
/// `depth_step` is the screen displacement of one depth layer, i.e.
/// `(xp, -yp)` already multiplied by the tile size.
///
/// # Example
///
/// ```rust
/// use arraydraw::{emit_tile, Primitive, Rgb, Stroke, Tile, TileFamily};
/// use glam::DVec2;
///
/// let tile = Tile {
///     family: TileFamily::Roof,
///     row: 0,
///     col: 0,
///     origin: DVec2::new(10.0, 20.0),
///     fill: Rgb::new(255, 128, 128),
/// };
/// let stroke = Stroke::new(Rgb::BLACK, 3.0);
/// let Primitive::Polygon(roof) = emit_tile(&tile, 30.0, DVec2::new(5.0, -5.0), stroke) else {
///     unreachable!()
/// };
/// assert_eq!(roof.points[1], DVec2::new(15.0, 15.0));
/// ```
pub fn emit_tile(tile: &Tile, tile_size: f64, depth_step: DVec2, stroke: Stroke) -> Primitive {
    let s = tile_size;
    let o = tile.origin;
    match tile.family {
        TileFamily::Face => Primitive::Rect(RectShape {
            family: TileFamily::Face,
            origin: o,
            size: DVec2::splat(s),
            fill: tile.fill,
            stroke,
        }),
        TileFamily::Roof => {
            // Bottom edge along the face top, top edge shifted by one step
            let far = o + depth_step;
            Primitive::Polygon(PolygonShape {
                family: TileFamily::Roof,
                points: vec![o, far, far + DVec2::new(s, 0.0), o + DVec2::new(s, 0.0)],
                fill: tile.fill,
                stroke,
            })
        }
        TileFamily::Side => {
            // Left edge along the face's right edge, right edge shifted by one step
            let near = o + DVec2::new(s, 0.0);
            let far = near + depth_step;
            Primitive::Polygon(PolygonShape {
                family: TileFamily::Side,
                points: vec![near, far, far + DVec2::new(0.0, s), near + DVec2::new(0.0, s)],
                fill: tile.fill,
                stroke,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(family: TileFamily) -> Tile {
        Tile {
            family,
            row: 0,
            col: 0,
            origin: DVec2::new(100.0, 50.0),
            fill: Rgb::new(1, 2, 3),
        }
    }

    const STEP: DVec2 = DVec2::new(4.0, -3.0);

    fn stroke() -> Stroke {
        Stroke::new(Rgb::BLACK, 2.0)
    }

    #[test]
    fn test_face_is_square() {
        let Primitive::Rect(rect) = emit_tile(&tile(TileFamily::Face), 10.0, STEP, stroke()) else {
            panic!("face tiles are rectangles");
        };
        assert_eq!(
            rect.corners(),
            [
                DVec2::new(100.0, 50.0),
                DVec2::new(110.0, 50.0),
                DVec2::new(110.0, 60.0),
                DVec2::new(100.0, 60.0),
            ]
        );
        assert_eq!(rect.fill, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_roof_parallelogram() {
        let Primitive::Polygon(roof) = emit_tile(&tile(TileFamily::Roof), 10.0, STEP, stroke()) else {
            panic!("roof tiles are polygons");
        };
        assert_eq!(
            roof.points,
            vec![
                DVec2::new(100.0, 50.0),
                DVec2::new(104.0, 47.0),
                DVec2::new(114.0, 47.0),
                DVec2::new(110.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_side_parallelogram() {
        let Primitive::Polygon(side) = emit_tile(&tile(TileFamily::Side), 10.0, STEP, stroke()) else {
            panic!("side tiles are polygons");
        };
        assert_eq!(
            side.points,
            vec![
                DVec2::new(110.0, 50.0),
                DVec2::new(114.0, 47.0),
                DVec2::new(114.0, 57.0),
                DVec2::new(110.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_tiles_use_round_joins() {
        for family in TileFamily::ALL {
            let primitive = emit_tile(&tile(family), 10.0, STEP, stroke());
            let join = match &primitive {
                Primitive::Rect(rect) => rect.stroke.line_join,
                Primitive::Polygon(polygon) => polygon.stroke.line_join,
                _ => unreachable!(),
            };
            assert_eq!(join, LineJoin::Round);
            assert_eq!(primitive.family(), Some(family));
        }
    }

    #[test]
    fn test_primitive_json_is_tagged() {
        let primitive = emit_tile(&tile(TileFamily::Face), 10.0, STEP, stroke());
        let json = serde_json::to_value(&primitive).unwrap();
        assert_eq!(json["kind"], "rect");
        assert_eq!(json["fill"], "#010203");
    }
}
