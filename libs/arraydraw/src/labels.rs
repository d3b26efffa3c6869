//! # Labels
//!
//! Axis legends and the title, placed around the projected solid.
//!
//! ```text
//!          TITLE
//!         .----.
//!        /    /|
//!       *----. |
//!     H |    | .
//!       |    |/ D
//!       .----.
//!         W
//! ```
//!
//! The depth legend is rotated by `-θ` to run parallel to the depth axis and
//! pushed off it by `(x_proj, y_proj) / scale · legend_size`.

use config::constants::{FONT_FAMILY, HEIGHT_LABEL_ROTATION};
use glam::DVec2;

use crate::options::DrawConfig;
use crate::primitive::{LabelRole, TextAnchor, TextLabel};

/// Places every configured legend and the title.
///
/// `base` is the upper-left corner of the area holding the projected solid.
/// Labels come out in the order height, width, depth, title.
pub(crate) fn place_labels(config: &DrawConfig, base: DVec2) -> Vec<TextLabel> {
    let shape = config.shape();
    let projection = config.projection();
    let s = config.cube_size();
    let (h, w, d) = (
        shape.height() as f64,
        shape.width() as f64,
        shape.depth() as f64,
    );
    let (xp, yp) = (projection.x_proj(), projection.y_proj());
    let legend = config.legend_size();
    let legends = config.legends();

    let label = |role: LabelRole, content: &str, position: DVec2, rotation: f64, font_size: f64| {
        TextLabel {
            role,
            content: content.to_owned(),
            position,
            rotation,
            font_size,
            font_family: FONT_FAMILY.to_owned(),
            color: config.text_color(),
            anchor: TextAnchor::Middle,
        }
    };

    let mut labels = Vec::with_capacity(4);

    if let Some(text) = legends.height.as_deref() {
        let position = base + DVec2::new(-legend, d * yp * s + h * s / 2.0);
        labels.push(label(
            LabelRole::HeightLegend,
            text,
            position,
            HEIGHT_LABEL_ROTATION,
            legend,
        ));
    }

    if let Some(text) = legends.width.as_deref() {
        let position = base + DVec2::new(w * s / 2.0, s * (d * yp + h) + legend);
        labels.push(label(LabelRole::WidthLegend, text, position, 0.0, legend));
    }

    if let Some(text) = legends.depth.as_deref() {
        let scale = projection.scale();
        let position = base
            + DVec2::new(
                w * s + d * xp * s / 2.0 + xp / scale * legend,
                d * yp * s / 2.0 + h * s + yp / scale * legend,
            );
        labels.push(label(
            LabelRole::DepthLegend,
            text,
            position,
            -projection.theta_degrees(),
            legend,
        ));
    }

    if let Some(text) = config.title() {
        let title_size = config.title_size();
        let position = base + DVec2::new(s * (w + d * xp) / 2.0, -title_size);
        labels.push(label(LabelRole::Title, text, position, 0.0, title_size));
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DrawOptions, Legends};
    use approx::assert_abs_diff_eq;

    fn labels_for(options: DrawOptions) -> Vec<TextLabel> {
        place_labels(&options.validate().unwrap(), DVec2::new(100.0, 100.0))
    }

    #[test]
    fn test_no_labels_by_default() {
        assert!(labels_for(DrawOptions::new(&[4, 3, 2])).is_empty());
    }

    #[test]
    fn test_label_order_and_rotation() {
        let labels = labels_for(
            DrawOptions::new(&[4, 3, 2])
                .with_legends(Legends::new("H", "W", "D"))
                .with_title("T")
                .with_theta(30.0),
        );
        let roles: Vec<_> = labels.iter().map(|l| l.role).collect();
        assert_eq!(
            roles,
            vec![
                LabelRole::HeightLegend,
                LabelRole::WidthLegend,
                LabelRole::DepthLegend,
                LabelRole::Title
            ]
        );
        assert_eq!(labels[0].rotation, -90.0);
        assert_eq!(labels[1].rotation, 0.0);
        assert_eq!(labels[2].rotation, -30.0);
        assert_eq!(labels[3].rotation, 0.0);
    }

    #[test]
    fn test_height_legend_position() {
        let labels = labels_for(
            DrawOptions::new(&[4, 3, 2]).with_legends(Legends {
                height: Some("Frequency".into()),
                ..Legends::default()
            }),
        );
        let yp = 0.5 * 45f64.to_radians().sin();
        assert_abs_diff_eq!(labels[0].position.x, 100.0 - 7.5, epsilon = 1e-9);
        assert_abs_diff_eq!(labels[0].position.y, 100.0 + 2.0 * yp * 30.0 + 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_depth_legend_offset_follows_axis() {
        let labels = labels_for(
            DrawOptions::new(&[4, 3, 2]).with_legends(Legends {
                depth: Some("Channel".into()),
                ..Legends::default()
            }),
        );
        let c = 45f64.to_radians().cos();
        let xp = 0.5 * c;
        assert_abs_diff_eq!(
            labels[0].position.x,
            100.0 + 90.0 + 2.0 * xp * 30.0 / 2.0 + c * 7.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_title_above_solid() {
        let labels = labels_for(DrawOptions::new(&[4, 3, 0]).with_title("Plane"));
        assert_eq!(labels[0].position, DVec2::new(100.0 + 45.0, 100.0 - 15.0));
        assert_eq!(labels[0].font_size, 15.0);
        assert_eq!(labels[0].font_family, FONT_FAMILY);
    }

    #[test]
    fn test_text_color_applied() {
        let labels = labels_for(
            DrawOptions::new(&[1, 1, 1])
                .with_title("T")
                .with_text_color(crate::Rgb::new(9, 9, 9)),
        );
        assert_eq!(labels[0].color, crate::Rgb::new(9, 9, 9));
    }
}
