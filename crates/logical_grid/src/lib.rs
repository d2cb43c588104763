//! Logical grid layout.
//!
//! Maps an abstract grid of items (cells, spans, weights, pixel hints) onto
//! concrete pixel bounds. The pipeline runs leaves first:
//!
//! 1. constraint normalization (dense, gap-free track indices)
//! 2. track sizing (min/pref/max per column and row)
//! 3. weight normalization (growth share per track)
//! 4. space distribution (final integer size per track)
//! 5. cell bounds assembly (pixel rectangle per cell)
//!
//! Every stage is a pure function returning fresh values; a [`LayoutInfo`] is
//! built once per layout pass and never mutated afterwards.

// Errors
mod error;
pub use error::LayoutError;

// Grid item and geometry types
mod types;
pub use types::{
    Alignment, GridAxis, GridConstraint, GridItem, Insets, Rect, Size, Track, TrackSize,
    UNBOUNDED_TRACK_SIZE, collect_grid_items,
};

// Host environment
mod config;
pub use config::{GridConfig, GridEnvironment};
mod host;
pub use host::IntrinsicSizeHost;

// Constraint normalization
mod normalize;
pub use normalize::{NormalizedGrid, normalize_constraints};

// Track sizing algorithm
mod track_sizing;
pub use track_sizing::{AxisSizing, compute_track_sizes, resolve_item_size};

// Weight normalization
mod weights;
pub use weights::{WEIGHT_EPSILON, normalize_weights};

// Space distribution
mod distribution;
pub use distribution::distribute_space;

// Cell bounds assembly
mod bounds;
pub use bounds::{CellBounds, GridExtent, layout_cell_bounds};

// Item alignment inside the covered cells
mod placement;
pub use placement::{ItemBounds, place_item};

// Grid layout algorithm
mod layout;
pub use layout::{GridLayoutResult, LayoutInfo, layout_grid};
