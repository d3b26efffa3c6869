//! # Drawing Options
//!
//! Caller-facing inputs and their eager validation into an immutable
//! [`DrawConfig`]. Every check runs here, before any layout work.

use config::constants::{
    DEFAULT_CUBE_COLOR, DEFAULT_CUBE_SIZE, DEFAULT_LINE_COLOR, DEFAULT_PROJECTION_SCALE,
    DEFAULT_TEXT_COLOR, DEFAULT_THETA_DEGREES, LEGEND_SIZE_DIVISOR, LINE_SIZE_DIVISOR,
    TITLE_SIZE_DIVISOR,
};
use serde::{Deserialize, Serialize};

use crate::color::{CubeColor, FamilyFills, Rgb};
use crate::document::canvas_size;
use crate::error::DrawError;
use crate::primitive::Stroke;
use crate::projection::Projection;
use crate::shape::Shape;

/// Axis legends. `Some("")` reserves the legend's margin without text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legends {
    pub height: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
}

impl Legends {
    pub fn new(
        height: impl Into<String>,
        width: impl Into<String>,
        depth: impl Into<String>,
    ) -> Self {
        Self {
            height: Some(height.into()),
            width: Some(width.into()),
            depth: Some(depth.into()),
        }
    }

    /// Returns true when at least one legend is configured.
    pub fn any(&self) -> bool {
        self.height.is_some() || self.width.is_some() || self.depth.is_some()
    }
}

/// Everything a caller can configure about a drawing.
///
/// `None` fields are derived from the cube size during validation.
///
/// # Example
///
/// ```rust
/// use arraydraw::{DrawOptions, Legends, Rgb};
///
/// let options = DrawOptions::new(&[4, 3, 2])
///     .with_cube_color(Rgb::new(0x30, 0x4E, 0x6C))
///     .with_line_color(Rgb::new(0x6F, 0x6F, 0x6F))
///     .with_legends(Legends::new("Frequency", "Time", "Channel"))
///     .with_title("Spectrogram");
/// let config = options.validate().unwrap();
/// assert_eq!(config.line_size(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    /// Height, width, depth.
    pub shape: Vec<usize>,
    #[serde(default = "default_cube_size")]
    pub cube_size: f64,
    #[serde(default = "default_cube_color")]
    pub cube_color: CubeColor,
    #[serde(default)]
    pub line_size: Option<f64>,
    #[serde(default = "default_line_color")]
    pub line_color: Rgb,
    #[serde(default)]
    pub legends: Legends,
    #[serde(default)]
    pub legend_size: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_size: Option<f64>,
    #[serde(default)]
    pub background_color: Option<Rgb>,
    #[serde(default = "default_text_color")]
    pub text_color: Rgb,
    /// Depth-axis angle in degrees, within [0, 90].
    #[serde(default = "default_theta")]
    pub theta: f64,
    /// Depth-unit length relative to a tile side.
    #[serde(default = "default_projection")]
    pub projection: f64,
}

fn default_cube_size() -> f64 {
    DEFAULT_CUBE_SIZE
}

fn default_cube_color() -> CubeColor {
    CubeColor::Base(Rgb::from_array(DEFAULT_CUBE_COLOR))
}

fn default_line_color() -> Rgb {
    Rgb::from_array(DEFAULT_LINE_COLOR)
}

fn default_text_color() -> Rgb {
    Rgb::from_array(DEFAULT_TEXT_COLOR)
}

fn default_theta() -> f64 {
    DEFAULT_THETA_DEGREES
}

fn default_projection() -> f64 {
    DEFAULT_PROJECTION_SCALE
}

impl DrawOptions {
    /// Options for `shape` with every other field at its default.
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            cube_size: default_cube_size(),
            cube_color: default_cube_color(),
            line_size: None,
            line_color: default_line_color(),
            legends: Legends::default(),
            legend_size: None,
            title: None,
            title_size: None,
            background_color: None,
            text_color: default_text_color(),
            theta: default_theta(),
            projection: default_projection(),
        }
    }

    pub fn with_cube_size(mut self, cube_size: f64) -> Self {
        self.cube_size = cube_size;
        self
    }

    pub fn with_cube_color(mut self, cube_color: impl Into<CubeColor>) -> Self {
        self.cube_color = cube_color.into();
        self
    }

    pub fn with_line_size(mut self, line_size: f64) -> Self {
        self.line_size = Some(line_size);
        self
    }

    pub fn with_line_color(mut self, line_color: Rgb) -> Self {
        self.line_color = line_color;
        self
    }

    pub fn with_legends(mut self, legends: Legends) -> Self {
        self.legends = legends;
        self
    }

    pub fn with_legend_size(mut self, legend_size: f64) -> Self {
        self.legend_size = Some(legend_size);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_title_size(mut self, title_size: f64) -> Self {
        self.title_size = Some(title_size);
        self
    }

    pub fn with_background(mut self, background_color: Rgb) -> Self {
        self.background_color = Some(background_color);
        self
    }

    pub fn with_text_color(mut self, text_color: Rgb) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    pub fn with_projection(mut self, projection: f64) -> Self {
        self.projection = projection;
        self
    }

    /// Validates every field and resolves the derived defaults.
    ///
    /// Checks run shape first, then sizes, projection and colors, and the
    /// first failure is returned.
    pub fn validate(&self) -> Result<DrawConfig, DrawError> {
        let shape = Shape::from_slice(&self.shape)?;

        let cube_size = positive("cube size", self.cube_size)?;
        let line_size = self.line_size.unwrap_or(cube_size / LINE_SIZE_DIVISOR);
        if !line_size.is_finite() || line_size < 0.0 {
            return Err(DrawError::invalid_size(format!(
                "line size must be zero or positive, got {line_size}"
            )));
        }
        let legend_size = positive(
            "legend size",
            self.legend_size.unwrap_or(cube_size / LEGEND_SIZE_DIVISOR),
        )?;
        let title_size = positive(
            "title size",
            self.title_size.unwrap_or(cube_size / TITLE_SIZE_DIVISOR),
        )?;

        let projection = Projection::new(self.theta, self.projection)?;
        let fills = FamilyFills::resolve(&self.cube_color, &shape)?;

        let config = DrawConfig {
            shape,
            cube_size,
            stroke: Stroke::new(self.line_color, line_size),
            fills,
            legends: self.legends.clone(),
            legend_size,
            title: self.title.clone(),
            title_size,
            background: self.background_color,
            text_color: self.text_color,
            projection,
        };

        let canvas = canvas_size(&config);
        if !canvas.is_finite() {
            return Err(DrawError::invalid_size(format!(
                "drawing of shape {} at cube size {cube_size} does not fit a finite canvas",
                config.shape
            )));
        }
        Ok(config)
    }
}

fn positive(what: &str, value: f64) -> Result<f64, DrawError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DrawError::invalid_size(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

/// A fully validated drawing configuration.
///
/// Immutable; rendering the same config always yields the same document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawConfig {
    shape: Shape,
    cube_size: f64,
    stroke: Stroke,
    fills: FamilyFills,
    legends: Legends,
    legend_size: f64,
    title: Option<String>,
    title_size: f64,
    background: Option<Rgb>,
    text_color: Rgb,
    projection: Projection,
}

impl DrawConfig {
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn cube_size(&self) -> f64 {
        self.cube_size
    }

    #[inline]
    pub fn line_size(&self) -> f64 {
        self.stroke.width
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[inline]
    pub fn fills(&self) -> &FamilyFills {
        &self.fills
    }

    #[inline]
    pub fn legends(&self) -> &Legends {
        &self.legends
    }

    #[inline]
    pub fn legend_size(&self) -> f64 {
        self.legend_size
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn title_size(&self) -> f64 {
        self.title_size
    }

    #[inline]
    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    #[inline]
    pub fn text_color(&self) -> Rgb {
        self.text_color
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}
