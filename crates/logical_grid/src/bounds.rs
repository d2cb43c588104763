//! Cell bounds assembly.
//!
//! Turns final column widths and row heights into one pixel rectangle per
//! cell and reports the min, preferred and max extent of the grid.

use crate::distribution::distribute_space;
use crate::error::LayoutError;
use crate::layout::LayoutInfo;
use crate::types::{GridAxis, GridConstraint, Insets, Rect, Size, Track};

/// Extent of the whole grid, gaps and insets included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridExtent {
    /// Smallest useful size: the logical (preferred) track sizes
    pub min: Size,
    /// Preferred size
    pub pref: Size,
    /// Largest size the tracks can grow to
    pub max: Size,
}

/// Laid out cells of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellBounds {
    /// Cell rectangles indexed as `cells[row][col]`
    pub cells: Vec<Vec<Rect>>,
    /// Final width per column
    pub column_widths: Vec<i32>,
    /// Final height per row
    pub row_heights: Vec<i32>,
    /// Grid extent computed with these bounds
    pub extent: GridExtent,
}

impl CellBounds {
    /// Rectangle of a single cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Union of the cells covered by a normalized constraint.
    ///
    /// Returns `None` if the constraint reaches outside the grid.
    pub fn span_area(&self, cons: &GridConstraint) -> Option<Rect> {
        let first_row = usize::try_from(cons.row).ok()?;
        let first_col = usize::try_from(cons.col).ok()?;
        let last_row = usize::try_from(cons.end(GridAxis::Row) - 1).ok()?;
        let last_col = usize::try_from(cons.end(GridAxis::Column) - 1).ok()?;

        let top_left = self.cell(first_row, first_col)?;
        let bottom_right = self.cell(last_row, last_col)?;
        Some(top_left.union(&bottom_right))
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Total extent of the given track sizes plus interior gaps and insets.
///
/// An axis without tracks contributes 0, insets included.
fn grid_dimension(
    column_widths: &[i32],
    row_heights: &[i32],
    insets: Insets,
    column_gap: i32,
    row_gap: i32,
) -> Size {
    Size::new(
        axis_extent(column_widths, column_gap, insets.along(GridAxis::Column)),
        axis_extent(row_heights, row_gap, insets.along(GridAxis::Row)),
    )
}

fn axis_extent(sizes: &[i32], gap: i32, insets: i32) -> i32 {
    if sizes.is_empty() {
        return 0;
    }
    let gaps = gap.saturating_mul(sizes.len() as i32 - 1);
    sizes
        .iter()
        .fold(0i32, |total, &size| total.saturating_add(size))
        .saturating_add(gaps)
        .saturating_add(insets)
}

fn prefs(tracks: &[Track]) -> Vec<i32> {
    tracks.iter().map(|track| track.size.pref).collect()
}

fn maxes(tracks: &[Track]) -> Vec<i32> {
    tracks.iter().map(|track| track.size.max).collect()
}

/// Pixels left for the tracks of one axis.
fn available_size(parent: i32, insets: i32, track_count: usize, gap: i32) -> i32 {
    let gaps = (track_count as i32 - 1).saturating_mul(gap).max(0);
    parent.saturating_sub(insets).saturating_sub(gaps).max(0)
}

/// Final track sizes along one axis.
fn axis_sizes(
    axis: GridAxis,
    tracks: &[Track],
    parent: i32,
    insets: i32,
    gap: i32,
) -> Result<Vec<i32>, LayoutError> {
    let target = available_size(parent, insets, tracks.len(), gap);
    let sizes: Vec<_> = tracks.iter().map(|track| track.size).collect();
    let weights: Vec<f64> = tracks.iter().map(|track| track.weight).collect();
    distribute_space(axis, target, &sizes, &weights)
}

/// Lay out the cell rectangles of `info` inside a parent of `parent_size`.
///
/// Cells start at the top left inset and are separated by the snapshot's
/// gaps. A parent of size `0 x 0` is treated as not sized yet: every track
/// gets size 0 and the preferred extent comes from the logical sizes.
///
/// # Errors
/// Returns [`LayoutError::NegativeTargetSize`] if either dimension of
/// `parent_size` is negative.
pub fn layout_cell_bounds<NodeId>(
    info: &LayoutInfo<NodeId>,
    parent_size: Size,
    insets: Insets,
) -> Result<CellBounds, LayoutError> {
    if parent_size.width < 0 {
        return Err(LayoutError::NegativeTargetSize {
            axis: GridAxis::Column,
            size: parent_size.width,
        });
    }
    if parent_size.height < 0 {
        return Err(LayoutError::NegativeTargetSize {
            axis: GridAxis::Row,
            size: parent_size.height,
        });
    }

    let columns = info.columns();
    let rows = info.rows();
    let column_gap = info.hgap();
    let row_gap = info.vgap();
    let initialization = parent_size == Size::default();

    let column_widths = axis_sizes(
        GridAxis::Column,
        columns,
        parent_size.width,
        insets.along(GridAxis::Column),
        column_gap,
    )?;
    let row_heights = axis_sizes(
        GridAxis::Row,
        rows,
        parent_size.height,
        insets.along(GridAxis::Row),
        row_gap,
    )?;

    let mut cells = Vec::with_capacity(row_heights.len());
    let mut y = insets.top;
    for &height in &row_heights {
        let mut row = Vec::with_capacity(column_widths.len());
        let mut x = insets.left;
        for &width in &column_widths {
            row.push(Rect::new(x, y, width, height));
            x = x.saturating_add(width).saturating_add(column_gap);
        }
        cells.push(row);
        y = y.saturating_add(height).saturating_add(row_gap);
    }

    let logical_widths = prefs(columns);
    let logical_heights = prefs(rows);
    let logical = grid_dimension(&logical_widths, &logical_heights, insets, column_gap, row_gap);
    let pref = if initialization || info.use_logical_pref_size() {
        logical
    } else {
        grid_dimension(&column_widths, &logical_heights, insets, column_gap, row_gap)
    };
    let extent = GridExtent {
        min: logical,
        pref,
        max: grid_dimension(&maxes(columns), &maxes(rows), insets, column_gap, row_gap),
    };

    tracing::debug!(
        "layout_cell_bounds: parent={:?}, widths={:?}, heights={:?}, extent={:?}",
        parent_size,
        column_widths,
        row_heights,
        extent
    );

    Ok(CellBounds {
        cells,
        column_widths,
        row_heights,
        extent,
    })
}
