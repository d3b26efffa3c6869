//! Per-family tile fills.
//!
//! A family is painted either with one uniform color or with a grid that
//! holds one color per tile, indexed by the family's own (row, column).

use serde::{Deserialize, Serialize};

use super::Rgb;
use crate::error::DrawError;
use crate::layout::TileFamily;
use crate::shape::Shape;

/// A dense row-major grid of colors.
///
/// Serializes as a list of rows.
///
/// # Example
///
/// ```rust
/// use arraydraw::{ColorGrid, Rgb};
///
/// let grid = ColorGrid::from_hex_rows(&[["#FF0000", "#00FF00"], ["#0000FF", "#FFFFFF"]]).unwrap();
/// assert_eq!(grid.dims(), (2, 2));
/// assert_eq!(grid.get(1, 0), Some(Rgb::new(0, 0, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Rgb>>", into = "Vec<Vec<Rgb>>")]
pub struct ColorGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Rgb>,
}

impl ColorGrid {
    /// Creates a grid from row-major cells.
    pub fn new(rows: usize, cols: usize, cells: Vec<Rgb>) -> Result<Self, DrawError> {
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(DrawError::invalid_color(format!(
                "a {rows}x{cols} color grid needs {} cells, got {}",
                rows.saturating_mul(cols),
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Creates a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, DrawError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(DrawError::invalid_color(format!(
                "color grid row {bad} has {} cells, expected {cols}",
                rows[bad].len()
            )));
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a grid from nested `#RRGGBB` strings.
    pub fn from_hex_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self, DrawError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|hex| Rgb::from_hex(hex.as_ref()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the color at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl TryFrom<Vec<Vec<Rgb>>> for ColorGrid {
    type Error = DrawError;

    fn try_from(rows: Vec<Vec<Rgb>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<ColorGrid> for Vec<Vec<Rgb>> {
    fn from(grid: ColorGrid) -> Self {
        if grid.cols == 0 {
            return vec![Vec::new(); grid.rows];
        }
        grid.cells.chunks(grid.cols).map(<[Rgb]>::to_vec).collect()
    }
}

/// How one tile family is painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    /// Every tile of the family gets the same color.
    Uniform(Rgb),
    /// One color per tile, indexed by the family's (row, col).
    PerCell(ColorGrid),
}

impl Fill {
    /// Checks a per-cell grid against the family's tile grid.
    ///
    /// A family with no tiles accepts any grid without cells.
    fn check_dims(&self, family: TileFamily, expected: (usize, usize)) -> Result<(), DrawError> {
        let Fill::PerCell(grid) = self else {
            return Ok(());
        };
        let empty_family = expected.0 == 0 || expected.1 == 0;
        if grid.dims() == expected || (empty_family && grid.is_empty()) {
            return Ok(());
        }
        Err(DrawError::invalid_color(format!(
            "{family} color grid is {}x{}, tile grid is {}x{}",
            grid.rows, grid.cols, expected.0, expected.1
        )))
    }

    /// Color of the tile at `(row, col)`.
    ///
    /// Coordinates must lie inside a grid that passed validation.
    fn color_at(&self, row: usize, col: usize) -> Rgb {
        match self {
            Fill::Uniform(color) => *color,
            Fill::PerCell(grid) => grid.cells[row * grid.cols + col],
        }
    }
}

impl From<Rgb> for Fill {
    fn from(color: Rgb) -> Self {
        Fill::Uniform(color)
    }
}

impl From<ColorGrid> for Fill {
    fn from(grid: ColorGrid) -> Self {
        Fill::PerCell(grid)
    }
}

/// Color input for the cube.
///
/// # Example
///
/// ```rust
/// use arraydraw::{CubeColor, Rgb};
///
/// // One base color: roof and side shades are derived.
/// let base = CubeColor::Base(Rgb::new(0x30, 0x4E, 0x6C));
///
/// // Explicit colors for face, roof and side.
/// let families = CubeColor::families(
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 255, 0),
///     Rgb::new(0, 0, 255),
/// );
/// # let _ = (base, families);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CubeColor {
    /// Face color; the roof is lightened and the side darkened from it.
    Base(Rgb),
    /// Explicit fills for each family, uniform or per cell.
    Families { face: Fill, roof: Fill, side: Fill },
}

impl CubeColor {
    /// Per-family fills from anything convertible into a [`Fill`].
    pub fn families(face: impl Into<Fill>, roof: impl Into<Fill>, side: impl Into<Fill>) -> Self {
        CubeColor::Families {
            face: face.into(),
            roof: roof.into(),
            side: side.into(),
        }
    }
}

impl From<Rgb> for CubeColor {
    fn from(color: Rgb) -> Self {
        CubeColor::Base(color)
    }
}

/// Fills resolved for a particular shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyFills {
    face: Fill,
    roof: Fill,
    side: Fill,
}

impl FamilyFills {
    /// Derives shades or checks grid dimensions against `shape`.
    pub fn resolve(color: &CubeColor, shape: &Shape) -> Result<Self, DrawError> {
        let fills = match color {
            CubeColor::Base(base) => Self {
                face: Fill::Uniform(*base),
                roof: Fill::Uniform(base.lighten()),
                side: Fill::Uniform(base.darken()),
            },
            CubeColor::Families { face, roof, side } => Self {
                face: face.clone(),
                roof: roof.clone(),
                side: side.clone(),
            },
        };

        for family in TileFamily::ALL {
            fills
                .fill(family)
                .check_dims(family, family.grid_dims(shape))?;
        }
        Ok(fills)
    }

    /// The fill of one family.
    pub fn fill(&self, family: TileFamily) -> &Fill {
        match family {
            TileFamily::Face => &self.face,
            TileFamily::Roof => &self.roof,
            TileFamily::Side => &self.side,
        }
    }

    /// Color of a single tile. Coordinates must lie inside the grid of the
    /// shape these fills were resolved for.
    pub(crate) fn color_at(&self, family: TileFamily, row: usize, col: usize) -> Rgb {
        self.fill(family).color_at(row, col)
    }
}
