//! # Configuration Constants
//!
//! Centralized constants for the arraydraw pipeline. Drawing defaults,
//! projection parameters, label layout factors and safety limits are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sizing**: Cube size and the divisors deriving stroke and font sizes
//! - **Projection**: Depth-axis angle and foreshortening defaults
//! - **Colors**: Default palette and shading targets
//! - **Labels**: Margins and fonts for legends and titles
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Projected coordinates are products of trigonometric values and pixel
/// sizes, so exact equality is never meaningful.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(0.1 + 0.2, 0.3));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// SIZING CONSTANTS
// =============================================================================

/// Default side length of one face tile, in pixels.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CUBE_SIZE;
///
/// let user_size: Option<f64> = None;
/// assert_eq!(user_size.unwrap_or(DEFAULT_CUBE_SIZE), 30.0);
/// ```
pub const DEFAULT_CUBE_SIZE: f64 = 30.0;

/// Divisor deriving the default stroke width from the cube size.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CUBE_SIZE, LINE_SIZE_DIVISOR};
///
/// assert_eq!(DEFAULT_CUBE_SIZE / LINE_SIZE_DIVISOR, 3.0);
/// ```
pub const LINE_SIZE_DIVISOR: f64 = 10.0;

/// Divisor deriving the default legend font size from the cube size.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CUBE_SIZE, LEGEND_SIZE_DIVISOR};
///
/// assert_eq!(DEFAULT_CUBE_SIZE / LEGEND_SIZE_DIVISOR, 7.5);
/// ```
pub const LEGEND_SIZE_DIVISOR: f64 = 4.0;

/// Divisor deriving the default title font size from the cube size.
pub const TITLE_SIZE_DIVISOR: f64 = 2.0;

// =============================================================================
// PROJECTION CONSTANTS
// =============================================================================

/// Default angle of the depth axis, in degrees from the horizontal.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_THETA_DEGREES, MIN_THETA_DEGREES, MAX_THETA_DEGREES};
///
/// assert!((MIN_THETA_DEGREES..=MAX_THETA_DEGREES).contains(&DEFAULT_THETA_DEGREES));
/// ```
pub const DEFAULT_THETA_DEGREES: f64 = 45.0;

/// Smallest accepted depth-axis angle (depth drawn horizontally).
pub const MIN_THETA_DEGREES: f64 = 0.0;

/// Largest accepted depth-axis angle (depth drawn vertically).
pub const MAX_THETA_DEGREES: f64 = 90.0;

/// Default length of one depth unit relative to one tile side.
///
/// Values below 1.0 foreshorten the depth axis, giving the cabinet look.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PROJECTION_SCALE;
///
/// assert!(DEFAULT_PROJECTION_SCALE > 0.0 && DEFAULT_PROJECTION_SCALE < 1.0);
/// ```
pub const DEFAULT_PROJECTION_SCALE: f64 = 0.5;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default base color for face tiles (`#FF0000`).
pub const DEFAULT_CUBE_COLOR: [u8; 3] = [0xFF, 0x00, 0x00];

/// Default stroke color for tile outlines (`#000000`).
pub const DEFAULT_LINE_COLOR: [u8; 3] = [0x00, 0x00, 0x00];

/// Default fill color for legend and title text (`#000000`).
pub const DEFAULT_TEXT_COLOR: [u8; 3] = [0x00, 0x00, 0x00];

/// Interpolation target for roof shading.
pub const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Interpolation target for side shading.
pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];

/// Fraction of the way a derived shade moves from the base color toward
/// its target (white for roofs, black for sides).
///
/// # Example
///
/// ```rust
/// use config::constants::SHADE_STEP;
///
/// let channel = 0.0 + (255.0 - 0.0) * SHADE_STEP;
/// assert_eq!(channel.round(), 128.0);
/// ```
pub const SHADE_STEP: f64 = 0.5;

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Multiplier applied to a font size to obtain the margin reserved for it.
///
/// # Example
///
/// ```rust
/// use config::constants::LABEL_MARGIN_FACTOR;
///
/// let legend_size = 7.5;
/// assert_eq!(legend_size * LABEL_MARGIN_FACTOR, 11.25);
/// ```
pub const LABEL_MARGIN_FACTOR: f64 = 1.5;

/// Font stack used for legends and titles.
pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Rotation of the height legend, in degrees.
pub const HEIGHT_LABEL_ROTATION: f64 = -90.0;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// XML namespace declared on the root SVG element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of tiles in a single drawing.
///
/// Safety limit on `h·w + w·d + h·d` to prevent memory exhaustion from
/// absurd shapes.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TILES;
///
/// let (h, w, d) = (4usize, 3usize, 2usize);
/// assert!(h * w + w * d + h * d < MAX_TILES);
/// ```
pub const MAX_TILES: usize = 1_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
