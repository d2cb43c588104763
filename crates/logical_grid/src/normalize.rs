//! Constraint normalization.
//!
//! Clamps raw constraints and compacts the column and row index spaces so
//! every track index in `[0, count)` is covered by at least one item.

use crate::types::{GridAxis, GridConstraint};

/// Constraints with dense, gap-free track indices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedGrid {
    /// Clamped and renumbered constraints, in input order
    pub constraints: Vec<GridConstraint>,
    /// Number of columns
    pub column_count: usize,
    /// Number of rows
    pub row_count: usize,
}

impl NormalizedGrid {
    /// Track count along the axis.
    pub const fn track_count(&self, axis: GridAxis) -> usize {
        match axis {
            GridAxis::Column => self.column_count,
            GridAxis::Row => self.row_count,
        }
    }

    /// Check if there is nothing to lay out.
    pub const fn is_empty(&self) -> bool {
        self.column_count == 0 || self.row_count == 0
    }
}

/// Clamp a weight to a finite, non-negative value.
fn clamp_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Clamp anchors to `>= 0`, spans to `>= 1` and weights to `>= 0`.
fn clamp_constraint(raw: &GridConstraint) -> GridConstraint {
    let mut cons = raw.clone();
    cons.col = cons.col.clamp(0, i32::MAX - 1);
    cons.row = cons.row.clamp(0, i32::MAX - 1);
    cons.col_span = cons.col_span.clamp(1, i32::MAX - cons.col);
    cons.row_span = cons.row_span.clamp(1, i32::MAX - cons.row);
    cons.weight_x = clamp_weight(cons.weight_x);
    cons.weight_y = clamp_weight(cons.weight_y);
    cons
}

/// Covered index runs `[start, end)` along one axis, sorted and merged.
fn covered_runs(constraints: &[GridConstraint], axis: GridAxis) -> Vec<(i32, i32)> {
    let mut intervals: Vec<(i32, i32)> = constraints
        .iter()
        .map(|cons| (cons.start(axis), cons.end(axis)))
        .collect();
    intervals.sort_unstable();

    let mut runs: Vec<(i32, i32)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match runs.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => runs.push((start, end)),
        }
    }
    runs
}

/// Map a raw anchor index to its compacted index.
///
/// Every anchor lies inside exactly one covered run; the compacted index is the
/// anchor minus all uncovered indices below it.
fn compact_index(runs: &[(i32, i32)], start: i32) -> i32 {
    let mut removed = 0;
    let mut previous_end = 0;
    for &(run_start, run_end) in runs {
        if run_start > start {
            break;
        }
        removed += run_start - previous_end;
        previous_end = run_end;
    }
    start - removed
}

/// Sanitize constraints and eliminate unused columns and rows.
///
/// Returns an empty grid (`0 x 0`) for an empty input.
pub fn normalize_constraints(constraints: &[GridConstraint]) -> NormalizedGrid {
    if constraints.is_empty() {
        log::debug!("normalize_constraints: no items, empty grid");
        return NormalizedGrid::default();
    }

    let mut clamped: Vec<GridConstraint> = constraints.iter().map(clamp_constraint).collect();

    let col_runs = covered_runs(&clamped, GridAxis::Column);
    let row_runs = covered_runs(&clamped, GridAxis::Row);

    for cons in &mut clamped {
        cons.col = compact_index(&col_runs, cons.col);
        cons.row = compact_index(&row_runs, cons.row);
    }

    let column_count = col_runs.iter().map(|(start, end)| (end - start) as usize).sum();
    let row_count = row_runs.iter().map(|(start, end)| (end - start) as usize).sum();

    tracing::debug!(
        "normalize_constraints: items={}, columns={}, rows={}, column_runs={:?}, row_runs={:?}",
        clamped.len(),
        column_count,
        row_count,
        col_runs,
        row_runs
    );

    NormalizedGrid {
        constraints: clamped,
        column_count,
        row_count,
    }
}
