use crate::foundation::{
    core::{Canvas, CellSize, Margin, Point},
    error::{GridError, GridResult},
};

/// Immutable description of one alignment grid: the two sequences plus the
/// canvas and margin the grid is drawn into.
///
/// A spec is a pure data model; building its visual geometry is
/// [`GridSpec::build`]. Sequence A runs along the horizontal axis, sequence
/// B along the vertical axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec<T> {
    /// Sequence placed along the horizontal axis (length `m`).
    pub seq_a: Vec<T>,
    /// Sequence placed along the vertical axis (length `n`).
    pub seq_b: Vec<T>,
    /// Host canvas dimensions.
    pub canvas: Canvas,
    /// Inset applied once around the drawable area.
    pub margin: Margin,
}

impl GridSpec<char> {
    /// Spec over the characters of two strings.
    pub fn from_text(seq_a: &str, seq_b: &str, canvas: Canvas, margin: Margin) -> GridResult<Self> {
        Self::new(
            seq_a.chars().collect(),
            seq_b.chars().collect(),
            canvas,
            margin,
        )
    }
}

impl<T: PartialEq> GridSpec<T> {
    /// Build a validated spec.
    pub fn new(seq_a: Vec<T>, seq_b: Vec<T>, canvas: Canvas, margin: Margin) -> GridResult<Self> {
        let spec = Self {
            seq_a,
            seq_b,
            canvas,
            margin,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate that the spec produces positively sized cells.
    ///
    /// Zero-length sequences are rejected rather than rendered as a
    /// degenerate grid; so is a canvas the margin leaves no drawable area in.
    pub fn validate(&self) -> GridResult<()> {
        if self.seq_a.is_empty() || self.seq_b.is_empty() {
            return Err(GridError::invalid_dimension(
                "sequences must be non-empty (degenerate grids are not drawable)",
            ));
        }
        let drawable_w = f64::from(self.canvas.width) - 2.0 * self.margin.horizontal;
        let drawable_h = f64::from(self.canvas.height) - 2.0 * self.margin.vertical;
        if drawable_w <= 0.0 || drawable_h <= 0.0 {
            return Err(GridError::invalid_dimension(format!(
                "canvas {}x{} leaves no drawable area inside margin {}x{}",
                self.canvas.width, self.canvas.height, self.margin.horizontal, self.margin.vertical
            )));
        }
        Ok(())
    }

    /// Drawable area divided by sequence length, per axis.
    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: (f64::from(self.canvas.width) - 2.0 * self.margin.horizontal)
                / self.seq_a.len() as f64,
            height: (f64::from(self.canvas.height) - 2.0 * self.margin.vertical)
                / self.seq_b.len() as f64,
        }
    }

    /// Build the visual model: `(m+1)(n+1)` grid vertices and `m+n+2`
    /// boundary lines, in local (post-margin) coordinates.
    ///
    /// Pure and deterministic: equal specs build structurally equal models,
    /// element for element.
    #[tracing::instrument(skip(self), fields(m = self.seq_a.len(), n = self.seq_b.len()))]
    pub fn build(&self) -> GridResult<GridModel> {
        self.validate()?;

        let cell = self.cell_size();
        let m = self.seq_a.len();
        let n = self.seq_b.len();

        let mut points = Vec::with_capacity((m + 1) * (n + 1));
        for i in 0..=m {
            for j in 0..=n {
                // Boundary vertices index past the sequences and never match.
                let diagonal_match = i < m && j < n && self.seq_a[i] == self.seq_b[j];
                points.push(PointCell {
                    i: i as u32,
                    j: j as u32,
                    pos: Point::new(i as f64 * cell.width, j as f64 * cell.height),
                    diagonal_match,
                });
            }
        }

        let full_w = m as f64 * cell.width;
        let full_h = n as f64 * cell.height;
        let mut lines = Vec::with_capacity(m + n + 2);
        for j in 0..=n {
            let y = j as f64 * cell.height;
            lines.push(GridLine {
                orientation: Orientation::Horizontal,
                from: Point::new(0.0, y),
                to: Point::new(full_w, y),
            });
        }
        for i in 0..=m {
            let x = i as f64 * cell.width;
            lines.push(GridLine {
                orientation: Orientation::Vertical,
                from: Point::new(x, 0.0),
                to: Point::new(x, full_h),
            });
        }

        Ok(GridModel {
            cell,
            points,
            lines,
        })
    }
}

/// A grid vertex at integer indices `(i, j)`.
///
/// There are `(m+1) x (n+1)` of these for sequences of length `m` and `n`;
/// they are vertices of the lattice, not matrix cells.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointCell {
    /// Horizontal grid index in `[0, m]`.
    pub i: u32,
    /// Vertical grid index in `[0, n]`.
    pub j: u32,
    /// Position in local grid coordinates.
    pub pos: Point,
    /// True when both sequences hold an equal element at `(i, j)`,
    /// suggesting an alignment step along the diagonal.
    pub diagonal_match: bool,
}

/// Orientation of a grid boundary line.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Orientation {
    /// Row boundary, spanning the full horizontal extent.
    Horizontal,
    /// Column boundary, spanning the full vertical extent.
    Vertical,
}

/// One full-extent grid boundary line in local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridLine {
    /// Line orientation, used downstream to pick the growth axis.
    pub orientation: Orientation,
    /// First endpoint.
    pub from: Point,
    /// Second endpoint; the one the entrance animation grows toward.
    pub to: Point,
}

/// The complete visual model of one grid.
///
/// Computed once at grid construction and immutable thereafter; drawing a
/// changed spec means building a new model.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridModel {
    /// Derived cell size.
    pub cell: CellSize,
    /// Grid vertices, row-major (`i` outer, `j` inner).
    pub points: Vec<PointCell>,
    /// Boundary lines: `n+1` horizontals, then `m+1` verticals.
    pub lines: Vec<GridLine>,
}

#[cfg(test)]
#[path = "../../tests/unit/model/geometry.rs"]
mod tests;
