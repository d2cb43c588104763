//! Space distribution.
//!
//! Converts track prefs and weights into final integer track sizes for a
//! given target size, growing or shrinking weighted tracks within their
//! `min`/`max` bounds.

use crate::error::LayoutError;
use crate::types::{GridAxis, TrackSize};
use crate::weights::WEIGHT_EPSILON;

/// Absorbs floating point error when flooring a pixel share.
const ROUNDING_SLACK: f64 = 1e-9;

/// Growth direction of one distribution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Expand,
    Shrink,
}

/// Weights used for redistribution.
///
/// A track with (near) zero weight that can still move between `min` and
/// `max` is treated as weight 1; a pinned one as weight 0. The result is
/// scaled to sum to 1.
fn corrected_weights(sizes: &[TrackSize], weights: &[f64]) -> Vec<f64> {
    let raw: Vec<f64> = sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let weight = weights.get(index).copied().unwrap_or(0.0);
            if weight >= WEIGHT_EPSILON {
                weight
            } else if size.max > size.min {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    let total: f64 = raw.iter().sum();
    if total > 0.0 {
        raw.iter().map(|weight| weight / total).collect()
    } else {
        raw
    }
}

/// Pixels each track can still move in the given direction.
fn room(sizes: &[TrackSize], current: &[i32], weights: &[f64], direction: Direction) -> Vec<i64> {
    sizes
        .iter()
        .zip(current)
        .zip(weights)
        .map(|((size, &out), &weight)| {
            if weight <= 0.0 {
                return 0;
            }
            let free = match direction {
                Direction::Expand => i64::from(size.max) - i64::from(out),
                Direction::Shrink => i64::from(out) - i64::from(size.min),
            };
            free.max(0)
        })
        .collect()
}

/// Split `remaining` pixels over the tracks with room, proportionally to weight.
///
/// Pass one floors every ideal share (capped by the track's room) and keeps
/// the fractional remainder of uncapped tracks. Pass two hands the leftover
/// pixels out one by one by descending remainder; equal remainders go to the
/// higher index first.
fn pixel_shares(remaining: i64, weights: &[f64], room: &[i64]) -> Vec<i64> {
    let weight_sum: f64 = weights
        .iter()
        .zip(room)
        .filter(|&(_, &free)| free > 0)
        .map(|(&weight, _)| weight)
        .sum();

    let mut grants = vec![0i64; weights.len()];
    if weight_sum <= 0.0 {
        return grants;
    }

    let mut fractions: Vec<(usize, f64)> = Vec::with_capacity(weights.len());
    for (index, (&weight, &free)) in weights.iter().zip(room).enumerate() {
        if free <= 0 || weight <= 0.0 {
            continue;
        }
        let ideal = remaining as f64 * weight / weight_sum;
        let whole = (ideal + ROUNDING_SLACK).floor();
        let whole_px = whole as i64;
        if whole_px >= free {
            grants[index] = free;
        } else {
            grants[index] = whole_px;
            fractions.push((index, (ideal - whole).max(0.0)));
        }
    }

    fractions.sort_by(|left, right| right.1.total_cmp(&left.1).then(right.0.cmp(&left.0)));

    let mut leftover = remaining - grants.iter().sum::<i64>();
    for (index, _) in fractions {
        if leftover <= 0 {
            break;
        }
        grants[index] += 1;
        leftover -= 1;
    }
    grants
}

/// Compute final track sizes for `target_size` pixels.
///
/// Starts from each track's pref and moves weighted tracks towards `max`
/// (expand) or `min` (shrink) until the total equals `target_size`. When every
/// eligible track hits its bound first, the remaining difference is left
/// unresolved. Fixed tracks never move, with one exception: a target of 0
/// means the container is not sized yet and yields all-zero sizes, fixed
/// tracks included.
///
/// # Errors
/// Returns [`LayoutError::NegativeTargetSize`] if `target_size` is negative.
pub fn distribute_space(
    axis: GridAxis,
    target_size: i32,
    sizes: &[TrackSize],
    weights: &[f64],
) -> Result<Vec<i32>, LayoutError> {
    if target_size < 0 {
        return Err(LayoutError::NegativeTargetSize {
            axis,
            size: target_size,
        });
    }
    if target_size == 0 {
        return Ok(vec![0; sizes.len()]);
    }

    let mut out: Vec<i32> = sizes.iter().map(|size| size.pref).collect();
    let sum_pref: i64 = out.iter().copied().map(i64::from).sum();
    let delta = i64::from(target_size) - sum_pref;
    if delta == 0 {
        return Ok(out);
    }

    let direction = if delta > 0 {
        Direction::Expand
    } else {
        Direction::Shrink
    };
    let weights = corrected_weights(sizes, weights);
    let mut remaining = delta.abs();

    // Every round that does not finish saturates at least one track.
    for _ in 0..=sizes.len() {
        if remaining == 0 {
            break;
        }
        let free = room(sizes, &out, &weights, direction);
        let grants = pixel_shares(remaining, &weights, &free);
        let granted: i64 = grants.iter().sum();
        if granted == 0 {
            break;
        }
        for (size, grant) in out.iter_mut().zip(grants) {
            let grant = grant as i32;
            match direction {
                Direction::Expand => *size += grant,
                Direction::Shrink => *size -= grant,
            }
        }
        remaining -= granted;
    }

    if remaining > 0 {
        tracing::debug!(
            "distribute_space: axis={:?}, target={} unreachable, {}px left ({:?})",
            axis,
            target_size,
            remaining,
            direction
        );
    } else {
        tracing::trace!(
            "distribute_space: axis={:?}, target={}, sizes={:?}",
            axis,
            target_size,
            out
        );
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNBOUNDED_TRACK_SIZE;

    fn flexible(pref: i32) -> TrackSize {
        TrackSize::flexible(pref, UNBOUNDED_TRACK_SIZE)
    }

    /// Test equal weights share growth equally.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_expand_equal() {
        let sizes = vec![flexible(100); 3];
        let weights = vec![1.0 / 3.0; 3];
        let out = distribute_space(GridAxis::Column, 360, &sizes, &weights).unwrap_or_default();
        assert_eq!(out, vec![120, 120, 120]);
    }

    /// Test fixed tracks are never resized.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_expand_mixed_fixed() {
        let sizes = vec![TrackSize::fixed(80), flexible(100), flexible(100)];
        let weights = vec![0.0, 0.5, 0.5];
        let out = distribute_space(GridAxis::Column, 400, &sizes, &weights).unwrap_or_default();
        assert_eq!(out, vec![80, 160, 160]);
    }

    /// Test an odd pixel goes to the rightmost of equally weighted tracks.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_remainder_goes_right() {
        let sizes = vec![flexible(0); 2];
        let weights = vec![0.5, 0.5];
        let out = distribute_space(GridAxis::Column, 75, &sizes, &weights).unwrap_or_default();
        assert_eq!(out, vec![37, 38]);

        let thirds = vec![flexible(0); 3];
        let third_weights = vec![1.0 / 3.0; 3];
        let uneven =
            distribute_space(GridAxis::Column, 101, &thirds, &third_weights).unwrap_or_default();
        assert_eq!(uneven, vec![33, 34, 34]);
    }

    /// Test growth saturating at max is handed on to the other tracks.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_expand_respects_max() {
        let sizes = vec![TrackSize::flexible(50, 80), flexible(50)];
        let weights = vec![0.5, 0.5];
        let out = distribute_space(GridAxis::Column, 495, &sizes, &weights).unwrap_or_default();
        assert_eq!(out, vec![80, 415]);
    }

    /// Test shrink is proportional and stops at min.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_shrink_to_min() {
        let sizes = vec![TrackSize::fixed(80), flexible(100), flexible(100)];
        let weights = vec![0.0, 0.5, 0.5];

        let shrunk = distribute_space(GridAxis::Column, 100, &sizes, &weights).unwrap_or_default();
        assert_eq!(shrunk, vec![80, 10, 10]);

        let saturated =
            distribute_space(GridAxis::Column, 50, &sizes, &weights).unwrap_or_default();
        assert_eq!(saturated, vec![80, 0, 0]);
    }

    /// Test an all-fixed axis cannot grow and keeps its prefs.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_all_fixed_unreachable() {
        let sizes = vec![TrackSize::fixed(40), TrackSize::fixed(60)];
        let out = distribute_space(GridAxis::Row, 500, &sizes, &[0.0, 0.0]).unwrap_or_default();
        assert_eq!(out, vec![40, 60]);
    }

    /// Test unweighted flexible tracks are auto-corrected to weight 1.
    ///
    /// # Panics
    /// Panics if distribution fails or assertions fail.
    #[test]
    fn test_zero_weight_flexible_auto_corrected() {
        let sizes = vec![flexible(10), flexible(10)];
        let out = distribute_space(GridAxis::Row, 40, &sizes, &[0.0, 0.0]).unwrap_or_default();
        assert_eq!(out, vec![20, 20]);
    }

    /// Test zero and negative targets.
    ///
    /// # Panics
    /// Panics if the error or zero result is wrong.
    #[test]
    fn test_zero_and_negative_target() {
        let sizes = vec![TrackSize::fixed(40), flexible(60)];
        let out = distribute_space(GridAxis::Row, 0, &sizes, &[0.0, 1.0]).unwrap_or_default();
        // An unsized container collapses the fixed track too.
        assert_eq!(out, vec![0, 0]);

        let negative = distribute_space(GridAxis::Row, -1, &sizes, &[0.0, 1.0]);
        assert_eq!(
            negative,
            Err(LayoutError::NegativeTargetSize {
                axis: GridAxis::Row,
                size: -1
            })
        );
    }
}
