//! Grid layout algorithm.
//!
//! A [`LayoutInfo`] is the frozen result of normalization, track sizing and
//! weight normalization for one snapshot of items. Cell bounds are computed
//! from it for any parent size without touching the snapshot again.

use crate::bounds::{CellBounds, layout_cell_bounds};
use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::host::IntrinsicSizeHost;
use crate::normalize::normalize_constraints;
use crate::placement::{ItemBounds, place_item};
use crate::track_sizing::{compute_track_sizes, resolve_item_size};
use crate::types::{GridAxis, GridConstraint, GridItem, Insets, Size, Track};
use crate::weights::normalize_weights;

/// Sized tracks of one layout snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutInfo<NodeId = usize> {
    /// Items in input order
    items: Vec<GridItem<NodeId>>,
    /// Normalized constraint per item
    constraints: Vec<GridConstraint>,
    /// Resolved content size per item
    item_sizes: Vec<Size>,
    /// Sized columns
    columns: Vec<Track>,
    /// Sized rows
    rows: Vec<Track>,
    hgap: i32,
    vgap: i32,
    insets: Insets,
    use_logical_pref_size: bool,
}

/// Whether the host has to measure the item on at least one axis.
const fn needs_measurement(cons: &GridConstraint) -> bool {
    (cons.use_intrinsic_width && cons.width_hint <= 0)
        || (cons.use_intrinsic_height && cons.height_hint <= 0)
}

/// Sizes of all items along the axis.
fn sizes_along(item_sizes: &[Size], axis: GridAxis) -> Vec<i32> {
    item_sizes.iter().map(|size| size.along(axis)).collect()
}

/// Size and weigh the tracks of one axis.
fn axis_tracks(
    axis: GridAxis,
    constraints: &[GridConstraint],
    item_sizes: &[Size],
    gap: i32,
    track_count: usize,
) -> Vec<Track> {
    let sizing = compute_track_sizes(
        axis,
        constraints,
        &sizes_along(item_sizes, axis),
        gap,
        track_count,
    );
    let weights = normalize_weights(axis, constraints, &sizing.fixed, track_count);
    sizing.into_tracks(&weights)
}

impl<NodeId: Clone> LayoutInfo<NodeId> {
    /// Normalize, measure and size a snapshot of grid items.
    ///
    /// The host is asked at most once per item, and only for items that opt
    /// into intrinsic sizing on an axis without a pixel hint.
    pub fn new<Host>(items: &[GridItem<NodeId>], host: &Host, config: &GridConfig) -> Self
    where
        Host: IntrinsicSizeHost<NodeId> + ?Sized,
    {
        let raw: Vec<GridConstraint> = items.iter().map(|item| item.constraint.clone()).collect();
        let grid = normalize_constraints(&raw);

        let item_sizes: Vec<Size> = items
            .iter()
            .zip(&grid.constraints)
            .map(|(item, cons)| {
                let measured = needs_measurement(cons).then(|| {
                    let width_hint = (cons.width_hint > 0).then_some(cons.width_hint);
                    host.measure_intrinsic_size(&item.node_id, width_hint)
                });
                Size::new(
                    resolve_item_size(cons, GridAxis::Column, measured, &config.environment),
                    resolve_item_size(cons, GridAxis::Row, measured, &config.environment),
                )
            })
            .collect();

        let columns = axis_tracks(
            GridAxis::Column,
            &grid.constraints,
            &item_sizes,
            config.hgap,
            grid.column_count,
        );
        let rows = axis_tracks(
            GridAxis::Row,
            &grid.constraints,
            &item_sizes,
            config.vgap,
            grid.row_count,
        );

        tracing::debug!(
            "LayoutInfo::new: items={}, columns={}, rows={}",
            items.len(),
            columns.len(),
            rows.len()
        );

        Self {
            items: items.to_vec(),
            constraints: grid.constraints,
            item_sizes,
            columns,
            rows,
            hgap: config.hgap,
            vgap: config.vgap,
            insets: config.insets,
            use_logical_pref_size: config.use_logical_pref_size,
        }
    }

    /// Place every item into the union of its covered cells.
    pub fn item_bounds(&self, cells: &CellBounds) -> Vec<ItemBounds<NodeId>> {
        self.items
            .iter()
            .zip(&self.constraints)
            .zip(&self.item_sizes)
            .filter_map(|((item, cons), &content)| {
                let cell_area = cells.span_area(cons)?;
                Some(ItemBounds {
                    node_id: item.node_id.clone(),
                    cell_area,
                    bounds: place_item(cons, content, cell_area),
                })
            })
            .collect()
    }
}

impl<NodeId> LayoutInfo<NodeId> {
    /// Lay out the cells for `parent_size` using the snapshot's insets.
    ///
    /// # Errors
    /// Returns [`LayoutError::NegativeTargetSize`] if `parent_size` is negative.
    pub fn layout_cell_bounds(&self, parent_size: Size) -> Result<CellBounds, LayoutError> {
        layout_cell_bounds(self, parent_size, self.insets)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if there is nothing to lay out.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Sized columns.
    pub fn columns(&self) -> &[Track] {
        &self.columns
    }

    /// Sized rows.
    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    /// Normalized constraints, in item order.
    pub fn constraints(&self) -> &[GridConstraint] {
        &self.constraints
    }

    /// Resolved content sizes, in item order.
    pub fn item_sizes(&self) -> &[Size] {
        &self.item_sizes
    }

    /// Items of the snapshot.
    pub fn items(&self) -> &[GridItem<NodeId>] {
        &self.items
    }

    /// Horizontal gap between columns.
    pub const fn hgap(&self) -> i32 {
        self.hgap
    }

    /// Vertical gap between rows.
    pub const fn vgap(&self) -> i32 {
        self.vgap
    }

    /// Insets applied by [`Self::layout_cell_bounds`].
    pub const fn insets(&self) -> Insets {
        self.insets
    }

    /// Whether the preferred extent always uses logical track sizes.
    pub const fn use_logical_pref_size(&self) -> bool {
        self.use_logical_pref_size
    }
}

/// Result of a full grid layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayoutResult<NodeId = usize> {
    /// Sized snapshot the layout was computed from
    pub info: LayoutInfo<NodeId>,
    /// Cell rectangles and grid extent
    pub cells: CellBounds,
    /// Placed items, in input order
    pub items: Vec<ItemBounds<NodeId>>,
}

/// Run the grid layout algorithm.
///
/// 1. Normalizes constraints and sizes the tracks ([`LayoutInfo::new`])
/// 2. Distributes `target` over the tracks and builds the cell rectangles
/// 3. Places every item inside its covered cells
///
/// # Errors
/// Returns [`LayoutError::NegativeTargetSize`] if `target` is negative.
pub fn layout_grid<NodeId, Host>(
    items: &[GridItem<NodeId>],
    host: &Host,
    config: &GridConfig,
    target: Size,
) -> Result<GridLayoutResult<NodeId>, LayoutError>
where
    NodeId: Clone,
    Host: IntrinsicSizeHost<NodeId> + ?Sized,
{
    let info = LayoutInfo::new(items, host, config);
    let cells = info.layout_cell_bounds(target)?;
    let placed = info.item_bounds(&cells);

    Ok(GridLayoutResult {
        info,
        cells,
        items: placed,
    })
}
