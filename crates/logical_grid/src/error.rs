//! Layout precondition errors.
//!
//! Malformed constraints are clamped, never rejected; only caller mistakes
//! surface here.

use core::fmt;

use crate::types::GridAxis;

/// Errors raised by the grid layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A target or parent size was negative.
    NegativeTargetSize {
        /// Axis the size was given for.
        axis: GridAxis,
        /// Offending size in pixels.
        size: i32,
    },
    /// A constraint names an item that is not part of the layout input.
    UnknownItem(String),
    /// The grid configuration could not be parsed.
    InvalidConfig(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTargetSize { axis, size } => {
                write!(formatter, "Negative target size on {axis:?} axis: {size}px")
            }
            Self::UnknownItem(item) => {
                write!(formatter, "Constraint references unknown item: {item}")
            }
            Self::InvalidConfig(msg) => write!(formatter, "Invalid grid config: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}
