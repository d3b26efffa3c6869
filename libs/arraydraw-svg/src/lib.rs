//! # ArrayDraw SVG
//!
//! Serializes an [`arraydraw::Document`] to SVG markup.
//!
//! ## Mapping
//!
//! ```text
//! Background → <rect width="100%" height="100%">
//! Rect       → <rect x y width height>
//! Polygon    → <polygon points="x1,y1 x2,y2 ...">
//! Text       → <text x y transform="rotate(a,x,y)">
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use arraydraw::{render, DrawOptions};
//! use arraydraw_svg::render_svg_string;
//!
//! let doc = render(&DrawOptions::new(&[4, 3, 2])).unwrap();
//! let markup = render_svg_string(&doc);
//! assert!(markup.starts_with("<svg"));
//! assert_eq!(markup.matches("<polygon").count(), 6 + 8);
//! ```

pub mod error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arraydraw::{
    Background, Document, DrawOptions, LineJoin, PolygonShape, Primitive, RectShape, Stroke,
    TextAnchor, TextLabel,
};
use config::constants::SVG_NAMESPACE;
use svg::node::element::{Polygon, Rectangle, Text};
use tracing::debug;

pub use error::SvgError;

/// Builds the SVG tree for a document.
pub fn to_svg(doc: &Document) -> svg::Document {
    doc.primitives().iter().fold(
        svg::Document::new()
            .set("xmlns", SVG_NAMESPACE)
            .set("viewBox", (0.0, 0.0, doc.width(), doc.height())),
        |svg_doc, primitive| match primitive {
            Primitive::Background(bg) => svg_doc.add(background(bg)),
            Primitive::Rect(rect) => svg_doc.add(rectangle(rect)),
            Primitive::Polygon(polygon) => svg_doc.add(polygon_element(polygon)),
            Primitive::Text(label) => svg_doc.add(text(label)),
        },
    )
}

/// SVG markup for a document.
pub fn render_svg_string(doc: &Document) -> String {
    to_svg(doc).to_string()
}

/// Writes SVG markup to any writer.
pub fn write_svg<W: Write>(doc: &Document, writer: W) -> std::io::Result<()> {
    svg::write(writer, &to_svg(doc))
}

/// Writes SVG markup to a file, replacing it if present.
///
/// The file is buffered and flushed before returning; the handle is closed
/// on every path.
pub fn save_svg(doc: &Document, path: impl AsRef<Path>) -> Result<(), SvgError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SvgError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_svg(doc, &mut writer).map_err(|e| SvgError::io(path, e))?;
    writer.flush().map_err(|e| SvgError::io(path, e))?;
    debug!(path = %path.display(), primitives = doc.primitives().len(), "wrote svg");
    Ok(())
}

/// Validates, renders and saves in one step.
pub fn render_to_file(options: &DrawOptions, path: impl AsRef<Path>) -> Result<(), SvgError> {
    let doc = arraydraw::render(options)?;
    save_svg(&doc, path)
}

fn background(bg: &Background) -> Rectangle {
    Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", bg.fill.to_hex())
}

fn rectangle(rect: &RectShape) -> Rectangle {
    let node = Rectangle::new()
        .set("x", rect.origin.x)
        .set("y", rect.origin.y)
        .set("width", rect.size.x)
        .set("height", rect.size.y)
        .set("fill", rect.fill.to_hex());
    stroked(node, &rect.stroke)
}

fn polygon_element(polygon: &PolygonShape) -> Polygon {
    let points = polygon
        .points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let node = Polygon::new()
        .set("points", points)
        .set("fill", polygon.fill.to_hex());
    stroked(node, &polygon.stroke)
}

fn stroked<N: svg::Node>(node: N, stroke: &Stroke) -> N {
    let join = match stroke.line_join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
        LineJoin::Bevel => "bevel",
    };
    let mut node = node;
    node.assign("stroke", stroke.color.to_hex());
    node.assign("stroke-width", stroke.width);
    node.assign("stroke-linejoin", join);
    node
}

fn text(label: &TextLabel) -> Text {
    let anchor = match label.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let (x, y) = (label.position.x, label.position.y);
    Text::new(label.content.as_str())
        .set("x", x)
        .set("y", y)
        .set("transform", format!("rotate({},{},{})", label.rotation, x, y))
        .set("font-size", label.font_size)
        .set("font-family", label.font_family.as_str())
        .set("fill", label.color.to_hex())
        .set("dominant-baseline", "middle")
        .set("text-anchor", anchor)
}
