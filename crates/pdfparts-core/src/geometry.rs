//! Grid geometry: page boxes, grid shapes, and the cell-splitting math.
//!
//! A [`PageBox`] follows the PDF MediaBox convention (bottom-left origin,
//! y increasing upward), while [`GridCell`] row indices follow reading order
//! (row 0 is the top row). [`PageBox::cell`] reconciles the two.

use crate::error::GeometryError;

/// Bounding box with bottom-left origin coordinate system.
///
/// Coordinates follow the PDF MediaBox convention:
/// - `x1`: left edge
/// - `y1`: bottom edge
/// - `x2`: right edge
/// - `y2`: top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PageBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Returns true if the box has positive width and height.
    pub fn is_valid(&self) -> bool {
        self.x2 > self.x1 && self.y2 > self.y1
    }

    /// Compute the sub-box covering one grid cell of this box.
    ///
    /// Cell `(0, 0)` is the top-left cell in reading order. Because the
    /// coordinate system's y axis increases upward, row `i` maps to the
    /// vertical band starting at `y1 + (rows - 1 - i) * height`. The
    /// resulting sub-boxes exactly tile the parent box.
    pub fn cell(&self, grid: GridSpec, cell: GridCell) -> PageBox {
        let width = self.width() / f64::from(grid.columns);
        let height = self.height() / f64::from(grid.rows);
        let x1 = self.x1 + f64::from(cell.column) * width;
        let y1 = self.y1 + f64::from(grid.rows - 1 - cell.row) * height;
        PageBox::new(x1, y1, x1 + width, y1 + height)
    }
}

/// A grid shape: how many rows and columns each page is split into.
///
/// Construct through [`GridSpec::new`], which rejects zero rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: u32,
    columns: u32,
}

impl GridSpec {
    /// Create a grid shape. Both `rows` and `columns` must be at least 1.
    pub fn new(rows: u32, columns: u32) -> Result<Self, GeometryError> {
        if rows == 0 || columns == 0 {
            return Err(GeometryError::InvalidGrid { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cells per page.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Iterate over all cells in reading order: row 0 first, columns left
    /// to right within each row.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| GridCell { row, column }))
    }

    /// Position of a cell of a given source page in the expanded sequence.
    ///
    /// Pages expand in nested page -> row -> column order, so the cell
    /// `(i, j)` of 0-indexed page `p` lands at `j + (i + p * rows) * columns`.
    pub fn position(&self, page: usize, cell: GridCell) -> usize {
        cell.column as usize + (cell.row as usize + page * self.rows as usize) * self.columns as usize
    }
}

/// One cell of a grid: 0-indexed row and column, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
}
