//! First sizing pass: items covering exactly one track.

use super::TrackPrefs;
use crate::types::{GridAxis, GridConstraint};

/// Seed track prefs from single-span items.
///
/// A track's pref is the largest size asked for by its single-span items; a
/// single-span item with zero weight pins its track.
pub fn single_span_pass(
    axis: GridAxis,
    constraints: &[GridConstraint],
    item_sizes: &[i32],
    track_count: usize,
) -> TrackPrefs {
    let mut prefs = TrackPrefs::new(track_count);

    for (cons, &size) in constraints.iter().zip(item_sizes) {
        if cons.span(axis) != 1 {
            continue;
        }
        let track = cons.start(axis) as usize;
        if track >= track_count {
            continue;
        }
        prefs.pref[track] = prefs.pref[track].max(size);
        if cons.weight(axis) <= 0.0 {
            prefs.fixed[track] = true;
        }
    }

    tracing::trace!(
        "single_span_pass: axis={:?}, pref={:?}, fixed={:?}",
        axis,
        prefs.pref,
        prefs.fixed
    );
    prefs
}
