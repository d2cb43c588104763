//! Helper functions for track sizing.

use crate::config::GridEnvironment;
use crate::types::{GridAxis, GridConstraint, Size, UNBOUNDED_TRACK_SIZE};

/// Resolve the size an item asks for along one axis.
///
/// Priority: explicit hint, then the host measurement (when the item opts in),
/// then the logical default of its span.
pub fn resolve_item_size(
    cons: &GridConstraint,
    axis: GridAxis,
    measured: Option<Size>,
    env: &GridEnvironment,
) -> i32 {
    let hint = cons.hint(axis);
    if hint > 0 {
        return hint;
    }
    if let Some(size) = measured.filter(|_| cons.uses_intrinsic(axis)) {
        return size.along(axis).max(0);
    }
    env.logical_size(axis, cons.span(axis))
}

/// Pixels taken by the gaps inside a span.
pub const fn interior_gaps(span: i32, gap: i32) -> i32 {
    if span > 1 { (span - 1).saturating_mul(gap) } else { 0 }
}

/// Split a span cap evenly, the last slot takes the remainder.
///
/// The even share is bounded by [`UNBOUNDED_TRACK_SIZE`].
fn split_cap(available: i32, span: i32) -> Vec<i32> {
    let slots = span.max(1);
    let share = (available / slots).min(UNBOUNDED_TRACK_SIZE);
    let mut shares = vec![share; slots as usize];
    if let Some(last) = shares.last_mut() {
        *last = last.saturating_add(available % slots);
    }
    shares
}

/// Per-track caps imposed by items with a maximum size along the axis.
///
/// A track's cap is the smallest share of every item covering it (see
/// [`split_cap`]).
pub fn track_caps(
    axis: GridAxis,
    constraints: &[GridConstraint],
    gap: i32,
    track_count: usize,
) -> Vec<Option<i32>> {
    let mut caps: Vec<Option<i32>> = vec![None; track_count];
    for cons in constraints {
        let max_size = cons.max_size(axis);
        if max_size <= 0 {
            continue;
        }
        let span = cons.span(axis);
        let available = (max_size - interior_gaps(span, gap)).max(0);
        let start = cons.start(axis) as usize;
        let shares = split_cap(available, span);
        for (offset, share) in shares.into_iter().enumerate() {
            if let Some(cap) = caps.get_mut(start + offset) {
                *cap = Some(cap.map_or(share, |current| current.min(share)));
            }
        }
    }
    caps
}
