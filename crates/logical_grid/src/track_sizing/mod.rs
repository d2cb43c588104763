//! Track sizing algorithm.
//!
//! Derives `min`/`pref`/`max` for every column or row from the items mapped
//! onto it, in two passes: single-span items seed the prefs, multi-span items
//! then grow the tracks they cover.

mod helpers;
mod multi_span;
mod single_span;

use crate::types::{GridAxis, GridConstraint, Track, TrackSize, UNBOUNDED_TRACK_SIZE};

pub use helpers::resolve_item_size;
use helpers::track_caps;
use multi_span::multi_span_pass;
use single_span::single_span_pass;

/// Intermediate prefs and fixed flags produced by one sizing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPrefs {
    /// Preferred size per track
    pub pref: Vec<i32>,
    /// Whether the track is pinned
    pub fixed: Vec<bool>,
}

impl TrackPrefs {
    /// Zero prefs, all tracks flexible.
    pub fn new(track_count: usize) -> Self {
        Self {
            pref: vec![0; track_count],
            fixed: vec![false; track_count],
        }
    }
}

/// Sized tracks of one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSizing {
    /// Axis these tracks belong to
    pub axis: GridAxis,
    /// Final size bounds per track
    pub sizes: Vec<TrackSize>,
    /// Whether each track is pinned
    pub fixed: Vec<bool>,
}

impl AxisSizing {
    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Check if the axis has no tracks.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Combine the sizes with normalized weights into tracks.
    pub fn into_tracks(self, weights: &[f64]) -> Vec<Track> {
        self.sizes
            .into_iter()
            .zip(self.fixed)
            .enumerate()
            .map(|(index, (size, fixed))| Track {
                index,
                size,
                weight: if fixed {
                    0.0
                } else {
                    weights.get(index).copied().unwrap_or(0.0)
                },
                fixed,
            })
            .collect()
    }
}

/// Compute the size bounds of every track along one axis.
///
/// `constraints` must be normalized and `item_sizes` holds the resolved size
/// of each item along `axis` (see [`resolve_item_size`]).
pub fn compute_track_sizes(
    axis: GridAxis,
    constraints: &[GridConstraint],
    item_sizes: &[i32],
    gap: i32,
    track_count: usize,
) -> AxisSizing {
    let seeded = single_span_pass(axis, constraints, item_sizes, track_count);
    let spanned = multi_span_pass(axis, constraints, item_sizes, gap, &seeded);
    let caps = track_caps(axis, constraints, gap, track_count);

    let sizes: Vec<TrackSize> = spanned
        .pref
        .iter()
        .zip(&spanned.fixed)
        .zip(&caps)
        .map(|((&pref, &fixed), &cap)| match (fixed, cap) {
            (true, Some(cap)) => TrackSize::fixed(pref.min(cap)),
            (true, None) => TrackSize::fixed(pref),
            (false, Some(cap)) => TrackSize::flexible(pref.min(cap), cap),
            (false, None) => TrackSize::flexible(pref, UNBOUNDED_TRACK_SIZE.max(pref)),
        })
        .collect();

    tracing::debug!(
        "compute_track_sizes: axis={:?}, tracks={}, sizes={:?}",
        axis,
        track_count,
        sizes
    );

    AxisSizing {
        axis,
        sizes,
        fixed: spanned.fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(sizing: &AxisSizing) -> Vec<i32> {
        sizing.sizes.iter().map(|size| size.pref).collect()
    }

    /// Test single-span items take the largest request and weight 0 pins the track.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_single_span_max_and_fixed() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1).with_weights(0.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[60, 80, 100], 0, 2);

        assert_eq!(sizing.sizes[0], TrackSize::fixed(80));
        assert_eq!(sizing.sizes[1], TrackSize::flexible(100, UNBOUNDED_TRACK_SIZE));
        assert_eq!(sizing.fixed, vec![true, false]);
    }

    /// Test a span deficit is split evenly with the remainder on the last track.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_deficit_even() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1)
                .with_span(2, 1)
                .with_weights(1.0, 0.0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[60, 60, 250], 0, 2);
        assert_eq!(prefs(&sizing), vec![125, 125]);

        let odd = compute_track_sizes(GridAxis::Column, &constraints, &[60, 60, 251], 0, 2);
        assert_eq!(prefs(&odd), vec![125, 126]);
    }

    /// Test fixed tracks in a span are subtracted and keep their size.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_skips_fixed_tracks() {
        let constraints = vec![
            GridConstraint::cell(0, 0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(2, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1)
                .with_span(3, 1)
                .with_weights(1.0, 0.0),
        ];
        // 310 - 2 * 5 gap = 300 required, 100 taken by the fixed column.
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[100, 50, 50, 310], 5, 3);

        assert_eq!(prefs(&sizing), vec![100, 100, 100]);
        assert_eq!(sizing.fixed, vec![true, false, false]);
    }

    /// Test a satisfied span leaves prefs untouched.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_no_deficit() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1)
                .with_span(2, 1)
                .with_weights(1.0, 0.0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[90, 40, 100], 0, 2);
        assert_eq!(prefs(&sizing), vec![90, 40]);
    }

    /// Test a zero-weight span that had to grow pins every track it covers.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_zero_weight_pins() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1).with_span(2, 1),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[60, 60, 250], 0, 2);

        assert_eq!(sizing.sizes, vec![TrackSize::fixed(125), TrackSize::fixed(125)]);
    }

    /// Test a zero-weight span that already fits leaves its tracks flexible.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_zero_weight_satisfied() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1).with_span(2, 1),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[100, 100, 50], 0, 2);

        assert_eq!(sizing.fixed, vec![false, false]);
        assert_eq!(prefs(&sizing), vec![100, 100]);
    }

    /// Test huge requests saturate instead of overflowing.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_multi_span_huge_hints() {
        let constraints = vec![
            GridConstraint::cell(0, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
            GridConstraint::cell(0, 1)
                .with_span(2, 1)
                .with_weights(1.0, 0.0),
        ];
        let sizes = [i32::MAX, i32::MAX, i32::MAX];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &sizes, 5, 2);

        assert_eq!(prefs(&sizing), vec![i32::MAX, i32::MAX]);

        // (i32::MAX - 5 gap) split over two flexible tracks.
        let deficit =
            compute_track_sizes(GridAxis::Column, &constraints, &[10, 10, i32::MAX], 5, 2);
        assert_eq!(prefs(&deficit), vec![1_073_741_821, 1_073_741_821]);
    }

    /// Test caps lower max and pref, and pinned tracks stay pinned.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_caps_bound_tracks() {
        let constraints = vec![
            GridConstraint::cell(0, 0)
                .with_weights(1.0, 0.0)
                .with_max(80, 0),
            GridConstraint::cell(1, 0).with_max(80, 0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[50, 100], 5, 2);

        assert_eq!(sizing.sizes[0], TrackSize::flexible(50, 80));
        assert_eq!(sizing.sizes[1], TrackSize::fixed(80));
    }

    /// Test caps above the unbounded size fall back to it, plus a span's remainder.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_caps_above_unbounded() {
        let single = vec![
            GridConstraint::cell(0, 0)
                .with_weights(1.0, 0.0)
                .with_max(40_000, 0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &single, &[50], 5, 1);
        assert_eq!(sizing.sizes, vec![TrackSize::flexible(50, UNBOUNDED_TRACK_SIZE)]);

        let spanning = vec![
            GridConstraint::cell(0, 0)
                .with_span(2, 1)
                .with_weights(1.0, 0.0)
                .with_max(40_000, 0),
        ];
        let spanned = compute_track_sizes(GridAxis::Column, &spanning, &[105], 5, 2);
        assert_eq!(
            spanned.sizes,
            vec![
                TrackSize::flexible(50, UNBOUNDED_TRACK_SIZE),
                TrackSize::flexible(50, UNBOUNDED_TRACK_SIZE + 1),
            ]
        );
    }

    /// Test fixed tracks carry zero weight when turned into tracks.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_into_tracks() {
        let constraints = vec![
            GridConstraint::cell(0, 0),
            GridConstraint::cell(1, 0).with_weights(1.0, 0.0),
        ];
        let sizing = compute_track_sizes(GridAxis::Column, &constraints, &[50, 50], 0, 2);
        let tracks = sizing.into_tracks(&[0.3, 1.0]);

        assert_eq!(tracks[0].index, 0);
        assert!(tracks[0].fixed);
        assert!(tracks[0].weight.abs() < f64::EPSILON);
        assert!((tracks[1].weight - 1.0).abs() < f64::EPSILON);
    }
}
