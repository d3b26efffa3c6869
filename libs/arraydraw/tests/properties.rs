//! Properties of rendered documents across representative shapes.

use approx::assert_abs_diff_eq;
use arraydraw::projection::projection_offsets;
use arraydraw::{
    render, render_batch, ArrayDraw, DrawError, DrawOptions, Legends, Primitive, Rgb, Shape,
    TileFamily,
};

const SHAPES: [[usize; 3]; 6] = [[1, 1, 0], [4, 3, 0], [4, 3, 2], [1, 1, 1], [0, 3, 2], [5, 0, 4]];

fn labelled(shape: &[usize]) -> DrawOptions {
    DrawOptions::new(shape)
        .with_legends(Legends::new("Frequency", "Time", "Channel"))
        .with_title("Spectrogram")
        .with_background(Rgb::WHITE)
}

#[test]
fn tile_count_is_sum_of_family_grids() {
    for [h, w, d] in SHAPES {
        let doc = render(&DrawOptions::new(&[h, w, d])).unwrap();
        let tiles = doc.primitives().iter().filter(|p| p.family().is_some()).count();
        assert_eq!(tiles, h * w + w * d + h * d, "shape {h}x{w}x{d}");
    }
}

#[test]
fn default_projection_offsets() {
    let offsets = projection_offsets(45.0, 0.5);
    assert_abs_diff_eq!(offsets.x, 0.3536, epsilon = 1e-4);
    assert_abs_diff_eq!(offsets.y, 0.3536, epsilon = 1e-4);
}

#[test]
fn viewport_encloses_every_point() {
    for shape in SHAPES {
        for options in [DrawOptions::new(&shape), labelled(&shape)] {
            let doc = render(&options).unwrap();
            assert!(doc.encloses_all(), "shape {shape:?} escapes viewport");
        }
    }
}

#[test]
fn viewport_encloses_every_point_across_angles() {
    for theta in [0.0, 15.0, 45.0, 60.0, 90.0] {
        for projection in [0.25, 0.5, 1.0] {
            let options = labelled(&[4, 3, 2]).with_theta(theta).with_projection(projection);
            let doc = render(&options).unwrap();
            assert!(doc.encloses_all(), "theta {theta}, projection {projection}");
        }
    }
}

#[test]
fn red_base_derives_roof_and_side() {
    let red = Rgb::from_hex("#FF0000").unwrap();
    assert_eq!(red.lighten().to_hex(), "#FF8080");
    assert_eq!(red.darken().to_hex(), "#800000");
}

#[test]
fn hex_round_trips_uppercase() {
    for hex in ["#000000", "#FFFFFF", "#304E6C", "#6F6F6F"] {
        assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
    }
    assert_eq!(Rgb::from_hex("#ff8c00").unwrap().to_hex(), "#FF8C00");
}

#[test]
fn two_zero_dimensions_is_invalid_shape() {
    assert!(matches!(Shape::new(0, 0, 5), Err(DrawError::InvalidShape { .. })));
    assert!(matches!(
        render(&DrawOptions::new(&[0, 0, 5])),
        Err(DrawError::InvalidShape { .. })
    ));
}

#[test]
fn malformed_hex_is_invalid_color() {
    assert!(matches!(
        Rgb::from_hex("#ZZZZZZ"),
        Err(DrawError::InvalidColor { .. })
    ));
}

#[test]
fn out_of_range_theta_is_invalid_projection() {
    for theta in [-1.0, 91.0, f64::NAN] {
        assert!(matches!(
            render(&DrawOptions::new(&[1, 1, 1]).with_theta(theta)),
            Err(DrawError::InvalidProjection { .. })
        ));
    }
}

#[test]
fn render_is_deterministic() {
    let draw = ArrayDraw::new(&labelled(&[4, 3, 2])).unwrap();
    assert_eq!(draw.render(), draw.render());
    assert_eq!(render(&labelled(&[4, 3, 2])).unwrap(), draw.render());
}

#[test]
fn paint_order_is_background_faces_roofs_sides_labels() {
    let doc = render(&labelled(&[2, 2, 2])).unwrap();
    let rank = |p: &Primitive| match p {
        Primitive::Background(_) => 0,
        Primitive::Rect(_) => 1,
        Primitive::Polygon(poly) if poly.family == TileFamily::Roof => 2,
        Primitive::Polygon(_) => 3,
        Primitive::Text(_) => 4,
    };
    let ranks: Vec<_> = doc.primitives().iter().map(rank).collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn batch_keeps_input_order() {
    let batch: Vec<_> = SHAPES.iter().map(|s| labelled(s)).collect();
    let results = render_batch(&batch);
    for (options, result) in batch.iter().zip(results) {
        assert_eq!(result.unwrap(), render(options).unwrap());
    }
}
