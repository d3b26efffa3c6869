//! # Array Shape
//!
//! The (height, width, depth) triple being drawn.

use std::fmt;
use std::str::FromStr;

use config::constants::MAX_TILES;
use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// Grid counts along the three drawn axes.
///
/// At most one dimension may be zero. A zero depth draws a flat grid with
/// no roof or side tiles; a zero height or width keeps only the families
/// that do not involve it.
///
/// # Example
///
/// ```rust
/// use arraydraw::Shape;
///
/// let shape = Shape::new(4, 3, 2).unwrap();
/// assert_eq!(shape.tile_count(), 4 * 3 + 3 * 2 + 4 * 2);
/// assert!(Shape::new(0, 0, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct Shape {
    height: usize,
    width: usize,
    depth: usize,
}

impl Shape {
    /// Creates a validated shape.
    pub fn new(height: usize, width: usize, depth: usize) -> Result<Self, DrawError> {
        let zeros = [height, width, depth].iter().filter(|&&d| d == 0).count();
        if zeros > 1 {
            return Err(DrawError::invalid_shape(format!(
                "at most one dimension may be zero: [{height}, {width}, {depth}]"
            )));
        }

        let shape = Self {
            height,
            width,
            depth,
        };
        match shape.checked_tile_count() {
            Some(count) if count <= MAX_TILES => Ok(shape),
            _ => Err(DrawError::invalid_shape(format!(
                "[{height}, {width}, {depth}] exceeds the limit of {MAX_TILES} tiles"
            ))),
        }
    }

    /// Creates a shape from a dimension list, which must have exactly three
    /// entries.
    pub fn from_slice(dims: &[usize]) -> Result<Self, DrawError> {
        match *dims {
            [height, width, depth] => Self::new(height, width, depth),
            _ => Err(DrawError::invalid_shape(format!(
                "expected 3 dimensions, got {}",
                dims.len()
            ))),
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true when the drawing has no depth (no roof or side tiles).
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.depth == 0
    }

    /// Number of face tiles (height × width).
    pub fn face_count(&self) -> usize {
        self.height * self.width
    }

    /// Number of roof tiles (width × depth).
    pub fn roof_count(&self) -> usize {
        self.width * self.depth
    }

    /// Number of side tiles (height × depth).
    pub fn side_count(&self) -> usize {
        self.height * self.depth
    }

    /// Total number of tiles across the three families.
    pub fn tile_count(&self) -> usize {
        self.face_count() + self.roof_count() + self.side_count()
    }

    fn checked_tile_count(&self) -> Option<usize> {
        let faces = self.height.checked_mul(self.width)?;
        let roofs = self.width.checked_mul(self.depth)?;
        let sides = self.height.checked_mul(self.depth)?;
        faces.checked_add(roofs)?.checked_add(sides)
    }
}

impl TryFrom<[usize; 3]> for Shape {
    type Error = DrawError;

    fn try_from(dims: [usize; 3]) -> Result<Self, Self::Error> {
        Self::new(dims[0], dims[1], dims[2])
    }
}

impl From<Shape> for [usize; 3] {
    fn from(shape: Shape) -> Self {
        [shape.height, shape.width, shape.depth]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.height, self.width, self.depth)
    }
}

/// Parses `"4,3,2"` or `"4x3x2"`.
impl FromStr for Shape {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims = s
            .split(|c| c == ',' || c == 'x')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    DrawError::invalid_shape(format!("not a dimension: {:?}", part.trim()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&dims)
    }
}
