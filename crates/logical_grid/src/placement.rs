//! Item placement inside the covered cells.

use crate::types::{Alignment, GridAxis, GridConstraint, Rect, Size};

/// Final bounds of one grid item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBounds<NodeId = usize> {
    /// Node identifier (generic to support different host handle types)
    pub node_id: NodeId,
    /// Union of the cells the item covers
    pub cell_area: Rect,
    /// Item rectangle after fill and alignment
    pub bounds: Rect,
}

/// Offset and extent of an item within `available` pixels along one axis.
fn align_axis(fill: bool, alignment: Alignment, content: i32, available: i32) -> (i32, i32) {
    if fill {
        return (0, available);
    }
    let extent = content.clamp(0, available.max(0));
    let free = available - extent;
    let offset = match alignment {
        Alignment::Start => 0,
        Alignment::Center => free / 2,
        Alignment::End => free,
    };
    (offset, extent)
}

/// Position an item of `content` size inside `area`.
///
/// On a filled axis the item takes the whole area; otherwise it keeps its
/// content size (shrunk to the area if needed) and is aligned inside it.
pub fn place_item(cons: &GridConstraint, content: Size, area: Rect) -> Rect {
    let (left, width) = align_axis(
        cons.fills(GridAxis::Column),
        cons.alignment(GridAxis::Column),
        content.width,
        area.width,
    );
    let (top, height) = align_axis(
        cons.fills(GridAxis::Row),
        cons.alignment(GridAxis::Row),
        content.height,
        area.height,
    );
    Rect::new(
        area.x.saturating_add(left),
        area.y.saturating_add(top),
        width,
        height,
    )
}
