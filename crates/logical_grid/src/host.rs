//! Measurement callback supplied by the layout host.

use crate::types::Size;

/// Measures the natural pixel size of an item.
///
/// Only consulted for items that opt into intrinsic sizing on an axis
/// without an explicit hint.
pub trait IntrinsicSizeHost<NodeId> {
    /// Natural size of `item`, optionally constrained to `width_hint`.
    fn measure_intrinsic_size(&self, item: &NodeId, width_hint: Option<i32>) -> Size;
}

impl<NodeId, F> IntrinsicSizeHost<NodeId> for F
where
    F: Fn(&NodeId, Option<i32>) -> Size,
{
    fn measure_intrinsic_size(&self, item: &NodeId, width_hint: Option<i32>) -> Size {
        self(item, width_hint)
    }
}
