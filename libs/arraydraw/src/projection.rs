//! # Cabinet Projection
//!
//! Converts the depth-axis angle and foreshortening scale into per-unit
//! screen offsets, and sizes the projected solid.
//!
//! Screen coordinates grow rightward in x and downward in y, so one unit
//! of depth moves a point by `(+x_proj, -y_proj)` tile sides.

use config::constants::{
    DEFAULT_PROJECTION_SCALE, DEFAULT_THETA_DEGREES, MAX_THETA_DEGREES, MIN_THETA_DEGREES,
};
use glam::DVec2;
use serde::Serialize;

use crate::error::DrawError;
use crate::shape::Shape;

/// Computes `(scale·cos θ, scale·sin θ)` for an angle in degrees.
///
/// No validation happens here; see [`Projection::new`].
///
/// # Example
///
/// ```rust
/// use arraydraw::projection::projection_offsets;
///
/// let offsets = projection_offsets(45.0, 0.5);
/// assert!((offsets.x - 0.353_553_39).abs() < 1e-8);
/// assert!((offsets.y - 0.353_553_39).abs() < 1e-8);
/// ```
pub fn projection_offsets(theta_degrees: f64, scale: f64) -> DVec2 {
    let theta = theta_degrees.to_radians();
    DVec2::new(scale * theta.cos(), scale * theta.sin())
}

/// Validated projection parameters with their derived offsets.
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    theta_degrees: f64,
    scale: f64,
    offsets: DVec2,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            theta_degrees: DEFAULT_THETA_DEGREES,
            scale: DEFAULT_PROJECTION_SCALE,
            offsets: projection_offsets(DEFAULT_THETA_DEGREES, DEFAULT_PROJECTION_SCALE),
        }
    }
}

impl Projection {
    /// Validates the angle and scale and computes the offsets.
    ///
    /// Angles outside [0, 90] degrees would mirror or invert the solid, so
    /// they are rejected (and logged) instead of drawn.
    pub fn new(theta_degrees: f64, scale: f64) -> Result<Self, DrawError> {
        if !theta_degrees.is_finite()
            || !(MIN_THETA_DEGREES..=MAX_THETA_DEGREES).contains(&theta_degrees)
        {
            tracing::warn!(theta_degrees, "depth angle outside [0, 90] degrees");
            return Err(DrawError::invalid_projection(format!(
                "theta must be within [{MIN_THETA_DEGREES}, {MAX_THETA_DEGREES}] degrees, got {theta_degrees}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            tracing::warn!(scale, "non-positive projection scale");
            return Err(DrawError::invalid_projection(format!(
                "projection scale must be positive, got {scale}"
            )));
        }

        Ok(Self {
            theta_degrees,
            scale,
            offsets: projection_offsets(theta_degrees, scale),
        })
    }

    #[inline]
    pub fn theta_degrees(&self) -> f64 {
        self.theta_degrees
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Horizontal offset per unit of depth, in tile sides.
    #[inline]
    pub fn x_proj(&self) -> f64 {
        self.offsets.x
    }

    /// Vertical offset per unit of depth, in tile sides.
    #[inline]
    pub fn y_proj(&self) -> f64 {
        self.offsets.y
    }

    /// Screen displacement of one depth layer for a given tile size.
    ///
    /// The y component is negative because depth recedes upward.
    pub fn depth_step(&self, tile_size: f64) -> DVec2 {
        DVec2::new(self.offsets.x * tile_size, -self.offsets.y * tile_size)
    }

    /// Size of the projected solid before margins.
    ///
    /// `width·s + depth·s·x_proj` by `height·s + depth·s·y_proj`.
    pub fn bounding_size(&self, shape: &Shape, tile_size: f64) -> DVec2 {
        let depth = shape.depth() as f64;
        DVec2::new(
            shape.width() as f64 * tile_size + depth * tile_size * self.offsets.x,
            shape.height() as f64 * tile_size + depth * tile_size * self.offsets.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_offsets() {
        let projection = Projection::default();
        assert_abs_diff_eq!(projection.x_proj(), 0.3536, epsilon = 1e-4);
        assert_abs_diff_eq!(projection.y_proj(), 0.3536, epsilon = 1e-4);
    }

    #[test]
    fn test_extreme_angles() {
        let flat = Projection::new(0.0, 0.5).unwrap();
        assert_abs_diff_eq!(flat.x_proj(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(flat.y_proj(), 0.0, epsilon = 1e-12);

        let vertical = Projection::new(90.0, 0.5).unwrap();
        assert_abs_diff_eq!(vertical.x_proj(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vertical.y_proj(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_angle_rejected() {
        assert!(matches!(
            Projection::new(-1.0, 0.5),
            Err(DrawError::InvalidProjection { .. })
        ));
        assert!(Projection::new(90.5, 0.5).is_err());
        assert!(Projection::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        assert!(Projection::new(45.0, 0.0).is_err());
        assert!(Projection::new(45.0, -0.5).is_err());
        assert!(Projection::new(45.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounding_size() {
        let projection = Projection::new(30.0, 1.0).unwrap();
        let shape = Shape::new(4, 3, 2).unwrap();
        let size = projection.bounding_size(&shape, 10.0);
        assert_abs_diff_eq!(size.x, 30.0 + 20.0 * 30f64.to_radians().cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(size.y, 40.0 + 20.0 * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_shape_has_no_depth_extent() {
        let projection = Projection::default();
        let shape = Shape::new(4, 3, 0).unwrap();
        assert_eq!(projection.bounding_size(&shape, 30.0), DVec2::new(90.0, 120.0));
    }

    #[test]
    fn test_depth_step_points_up_right() {
        let step = Projection::default().depth_step(30.0);
        assert!(step.x > 0.0);
        assert!(step.y < 0.0);
    }
}
