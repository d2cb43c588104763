//! Second sizing pass: items covering several tracks.

use super::TrackPrefs;
use super::helpers::interior_gaps;
use crate::types::{GridAxis, GridConstraint};

/// Grow the non-fixed tracks under each multi-span item until the span can
/// hold the item.
///
/// Items are processed in input order; each sees the prefs left by the
/// previous ones. The deficit is spread evenly over the non-fixed tracks of
/// the span and the last of them absorbs the integer remainder. A zero-weight
/// item that had to grow its span pins every track of it.
pub fn multi_span_pass(
    axis: GridAxis,
    constraints: &[GridConstraint],
    item_sizes: &[i32],
    gap: i32,
    seed: &TrackPrefs,
) -> TrackPrefs {
    let mut prefs = seed.clone();
    let track_count = prefs.pref.len();

    for (cons, &size) in constraints.iter().zip(item_sizes) {
        let span = cons.span(axis);
        if span <= 1 {
            continue;
        }
        let start = cons.start(axis) as usize;
        let end = (start + span as usize).min(track_count);
        if start >= end {
            continue;
        }

        let required = i64::from(size) - i64::from(interior_gaps(span, gap));
        let fixed_sum: i64 = (start..end)
            .filter(|&track| prefs.fixed[track])
            .map(|track| i64::from(prefs.pref[track]))
            .sum();
        let flexible: Vec<usize> = (start..end).filter(|&track| !prefs.fixed[track]).collect();
        let span_pref_sum: i64 = flexible
            .iter()
            .map(|&track| i64::from(prefs.pref[track]))
            .sum();
        let deficit = required - fixed_sum - span_pref_sum;
        if deficit <= 0 {
            continue;
        }

        if let Some(&last) = flexible.last() {
            let total = deficit + span_pref_sum;
            let slots = flexible.len() as i64;
            let equal_share = i32::try_from(total / slots).unwrap_or(i32::MAX);
            let remainder = i32::try_from(total % slots).unwrap_or(0);

            for &track in &flexible {
                prefs.pref[track] = prefs.pref[track].max(equal_share);
            }
            prefs.pref[last] = prefs.pref[last].saturating_add(remainder);

            tracing::trace!(
                "multi_span_pass: axis={:?}, span={}..{}, required={}, fixed_sum={}, deficit={}, equal_share={}, remainder={}",
                axis,
                start,
                end,
                required,
                fixed_sum,
                deficit,
                equal_share,
                remainder
            );
        }

        if cons.weight(axis) <= 0.0 {
            for track in start..end {
                prefs.fixed[track] = true;
            }
        }
    }

    prefs
}
