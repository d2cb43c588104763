//! Grid item, constraint and geometry type definitions.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Upper bound for the size of a flexible track.
pub const UNBOUNDED_TRACK_SIZE: i32 = 10240;

/// Axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridAxis {
    /// Horizontal axis: columns and widths.
    Column,
    /// Vertical axis: rows and heights.
    Row,
}

/// Position of an item inside its cell when it does not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left or top edge
    #[default]
    Start,
    /// Centered
    Center,
    /// Right or bottom edge
    End,
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along the given axis.
    pub const fn along(self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.width,
            GridAxis::Row => self.height,
        }
    }
}

/// Container insets in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    /// Create new insets.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every side.
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of both insets along the given axis.
    pub const fn along(self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.left.saturating_add(self.right),
            GridAxis::Row => self.top.saturating_add(self.bottom),
        }
    }
}

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }
}

/// Placement and sizing constraint of one grid item.
///
/// Raw values are accepted as given; [`crate::normalize_constraints`] clamps
/// them before any sizing happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConstraint {
    /// Anchor column (0-based)
    pub col: i32,
    /// Anchor row (0-based)
    pub row: i32,
    /// Number of columns covered
    pub col_span: i32,
    /// Number of rows covered
    pub row_span: i32,
    /// Horizontal growth weight, 0 pins the covered columns
    pub weight_x: f64,
    /// Vertical growth weight, 0 pins the covered rows
    pub weight_y: f64,
    /// Explicit width in pixels, ignored when `<= 0`
    pub width_hint: i32,
    /// Explicit height in pixels, ignored when `<= 0`
    pub height_hint: i32,
    /// Measure the width through the host instead of the logical default
    pub use_intrinsic_width: bool,
    /// Measure the height through the host instead of the logical default
    pub use_intrinsic_height: bool,
    /// Upper bound for the covered columns, ignored when `<= 0`
    pub max_width: i32,
    /// Upper bound for the covered rows, ignored when `<= 0`
    pub max_height: i32,
    /// Stretch the item over the full cell width
    pub fill_horizontal: bool,
    /// Stretch the item over the full cell height
    pub fill_vertical: bool,
    /// Horizontal position when not filling
    pub horizontal_alignment: Alignment,
    /// Vertical position when not filling
    pub vertical_alignment: Alignment,
}

impl Default for GridConstraint {
    fn default() -> Self {
        Self {
            col: 0,
            row: 0,
            col_span: 1,
            row_span: 1,
            weight_x: 0.0,
            weight_y: 0.0,
            width_hint: 0,
            height_hint: 0,
            use_intrinsic_width: false,
            use_intrinsic_height: false,
            max_width: 0,
            max_height: 0,
            fill_horizontal: true,
            fill_vertical: true,
            horizontal_alignment: Alignment::Start,
            vertical_alignment: Alignment::Start,
        }
    }
}

impl GridConstraint {
    /// Single cell at the given column and row.
    pub fn cell(col: i32, row: i32) -> Self {
        Self {
            col,
            row,
            ..Self::default()
        }
    }

    /// Set the covered column and row count.
    #[must_use]
    pub fn with_span(mut self, col_span: i32, row_span: i32) -> Self {
        self.col_span = col_span;
        self.row_span = row_span;
        self
    }

    /// Set the growth weights.
    #[must_use]
    pub fn with_weights(mut self, weight_x: f64, weight_y: f64) -> Self {
        self.weight_x = weight_x;
        self.weight_y = weight_y;
        self
    }

    /// Set explicit pixel hints.
    #[must_use]
    pub fn with_hints(mut self, width_hint: i32, height_hint: i32) -> Self {
        self.width_hint = width_hint;
        self.height_hint = height_hint;
        self
    }

    /// Opt into host measurement per axis.
    #[must_use]
    pub fn with_intrinsic(mut self, width: bool, height: bool) -> Self {
        self.use_intrinsic_width = width;
        self.use_intrinsic_height = height;
        self
    }

    /// Cap the covered tracks.
    #[must_use]
    pub fn with_max(mut self, max_width: i32, max_height: i32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Set fill flags and alignment used when not filling.
    #[must_use]
    pub fn with_alignment(
        mut self,
        fill_horizontal: bool,
        fill_vertical: bool,
        horizontal: Alignment,
        vertical: Alignment,
    ) -> Self {
        self.fill_horizontal = fill_horizontal;
        self.fill_vertical = fill_vertical;
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Anchor index along the axis.
    pub const fn start(&self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.col,
            GridAxis::Row => self.row,
        }
    }

    /// Span along the axis.
    pub const fn span(&self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.col_span,
            GridAxis::Row => self.row_span,
        }
    }

    /// Exclusive end index along the axis.
    pub const fn end(&self, axis: GridAxis) -> i32 {
        self.start(axis).saturating_add(self.span(axis))
    }

    /// Check if the item covers the given track.
    pub const fn covers(&self, axis: GridAxis, track: usize) -> bool {
        let track = track as i32;
        self.start(axis) <= track && track < self.end(axis)
    }

    /// Growth weight along the axis.
    pub const fn weight(&self, axis: GridAxis) -> f64 {
        match axis {
            GridAxis::Column => self.weight_x,
            GridAxis::Row => self.weight_y,
        }
    }

    /// Pixel hint along the axis (`<= 0` means none).
    pub const fn hint(&self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.width_hint,
            GridAxis::Row => self.height_hint,
        }
    }

    /// Whether the host measures this item along the axis.
    pub const fn uses_intrinsic(&self, axis: GridAxis) -> bool {
        match axis {
            GridAxis::Column => self.use_intrinsic_width,
            GridAxis::Row => self.use_intrinsic_height,
        }
    }

    /// Track cap along the axis (`<= 0` means none).
    pub const fn max_size(&self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.max_width,
            GridAxis::Row => self.max_height,
        }
    }

    /// Whether the item stretches over its cell along the axis.
    pub const fn fills(&self, axis: GridAxis) -> bool {
        match axis {
            GridAxis::Column => self.fill_horizontal,
            GridAxis::Row => self.fill_vertical,
        }
    }

    /// Alignment along the axis.
    pub const fn alignment(&self, axis: GridAxis) -> Alignment {
        match axis {
            GridAxis::Column => self.horizontal_alignment,
            GridAxis::Row => self.vertical_alignment,
        }
    }
}

/// A layoutable unit: the host's handle plus its constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem<NodeId = usize> {
    /// Node identifier (generic to support different host handle types)
    pub node_id: NodeId,
    /// Placement and sizing constraint
    pub constraint: GridConstraint,
}

impl<NodeId> GridItem<NodeId> {
    /// Create a new grid item.
    pub const fn new(node_id: NodeId, constraint: GridConstraint) -> Self {
        Self {
            node_id,
            constraint,
        }
    }
}

/// Min, preferred and max size of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackSize {
    pub min: i32,
    pub pref: i32,
    pub max: i32,
}

impl TrackSize {
    /// Pinned track: `min == pref == max`.
    pub const fn fixed(size: i32) -> Self {
        Self {
            min: size,
            pref: size,
            max: size,
        }
    }

    /// Flexible track that may shrink to zero and grow up to `max`.
    pub const fn flexible(pref: i32, max: i32) -> Self {
        Self { min: 0, pref, max }
    }
}

/// One column or row of the logical grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Dense 0-based index
    pub index: usize,
    /// Size bounds
    pub size: TrackSize,
    /// Normalized growth weight, 0 for fixed tracks
    pub weight: f64,
    /// Whether `min == pref == max`
    pub fixed: bool,
}

/// Pair the host's ordered children with their constraints.
///
/// Children without a constraint are left out of the layout.
///
/// # Errors
/// Returns [`LayoutError::UnknownItem`] if a constraint names a node that is
/// not among `children`.
pub fn collect_grid_items<NodeId: PartialEq + Clone + Debug>(
    children: &[NodeId],
    constraints: &[(NodeId, GridConstraint)],
) -> Result<Vec<GridItem<NodeId>>, LayoutError> {
    if let Some((unknown, _)) = constraints
        .iter()
        .find(|(node_id, _)| !children.contains(node_id))
    {
        return Err(LayoutError::UnknownItem(format!("{unknown:?}")));
    }

    let mut items = Vec::with_capacity(children.len());
    for child in children {
        let Some((_, constraint)) = constraints.iter().find(|(node_id, _)| node_id == child) else {
            log::warn!("grid child {child:?} has no constraint, skipping");
            continue;
        };
        items.push(GridItem::new(child.clone(), constraint.clone()));
    }
    Ok(items)
}
