//! Growth weight normalization.

use crate::types::{GridAxis, GridConstraint};

/// Weights below this are treated as zero.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Compute the normalized growth weight of every track along one axis.
///
/// A flexible track's raw weight is the mean of `weight / span` over the
/// weighted items covering it; fixed tracks get 0. When the raw weights sum
/// to at least [`WEIGHT_EPSILON`] they are scaled to sum to 1.0, otherwise all
/// weights stay 0.
pub fn normalize_weights(
    axis: GridAxis,
    constraints: &[GridConstraint],
    fixed: &[bool],
    track_count: usize,
) -> Vec<f64> {
    let raw: Vec<f64> = (0..track_count)
        .map(|track| {
            if fixed.get(track).copied().unwrap_or(false) {
                return 0.0;
            }
            let (weight_sum, weight_count) = constraints
                .iter()
                .filter(|cons| cons.weight(axis) > 0.0 && cons.covers(axis, track))
                .fold((0.0f64, 0u32), |(sum, count), cons| {
                    (
                        sum + cons.weight(axis) / f64::from(cons.span(axis)),
                        count + 1,
                    )
                });
            if weight_count > 0 {
                weight_sum / f64::from(weight_count)
            } else {
                0.0
            }
        })
        .collect();

    let total: f64 = raw.iter().sum();
    if total < WEIGHT_EPSILON {
        tracing::debug!("normalize_weights: axis={:?}, no flexible weight", axis);
        return vec![0.0; track_count];
    }

    let normalized: Vec<f64> = raw.iter().map(|weight| weight / total).collect();
    tracing::debug!(
        "normalize_weights: axis={:?}, raw={:?}, normalized={:?}",
        axis,
        raw,
        normalized
    );
    normalized
}
