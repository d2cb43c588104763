//! Host environment constants and per-container layout settings.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::types::{GridAxis, Insets};

/// Logical unit sizes used when an item has neither a hint nor an intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridEnvironment {
    /// Width of one logical column
    pub column_width: i32,
    /// Height of one logical row
    pub row_height: i32,
    /// Gap between logical columns inside a span
    pub column_gap: i32,
    /// Gap between logical rows inside a span
    pub row_gap: i32,
}

impl Default for GridEnvironment {
    fn default() -> Self {
        Self {
            column_width: 50,
            row_height: 30,
            column_gap: 5,
            row_gap: 5,
        }
    }
}

impl GridEnvironment {
    /// Logical size of `span` tracks: `span * unit + (span - 1) * gap`.
    pub fn logical_size(&self, axis: GridAxis, span: i32) -> i32 {
        let (unit, gap) = match axis {
            GridAxis::Column => (self.column_width, self.column_gap),
            GridAxis::Row => (self.row_height, self.row_gap),
        };
        let gaps = gap.saturating_mul((span - 1).max(0));
        unit.saturating_mul(span).saturating_add(gaps)
    }
}

/// Settings of one grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Logical unit constants
    pub environment: GridEnvironment,
    /// Horizontal gap between adjacent columns
    pub hgap: i32,
    /// Vertical gap between adjacent rows
    pub vgap: i32,
    /// Container insets
    pub insets: Insets,
    /// Report the preferred extent from logical sizes only
    pub use_logical_pref_size: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            environment: GridEnvironment::default(),
            hgap: 5,
            vgap: 5,
            insets: Insets::default(),
            use_logical_pref_size: true,
        }
    }
}

impl GridConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidConfig`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|err| LayoutError::InvalidConfig(err.to_string()))
    }

    /// Gap between adjacent tracks on the axis.
    pub const fn gap(&self, axis: GridAxis) -> i32 {
        match axis {
            GridAxis::Column => self.hgap,
            GridAxis::Row => self.vgap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test logical sizes include the interior gaps of a span.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_logical_size() {
        let env = GridEnvironment::default();
        assert_eq!(env.logical_size(GridAxis::Column, 1), 50);
        assert_eq!(env.logical_size(GridAxis::Column, 3), 160);
        assert_eq!(env.logical_size(GridAxis::Row, 2), 65);
        assert_eq!(env.logical_size(GridAxis::Column, i32::MAX), i32::MAX);
    }

    /// Test partial JSON falls back to defaults.
    ///
    /// # Panics
    /// Panics if parsing fails or assertions fail.
    #[test]
    fn test_from_json_partial() {
        let json = r#"{ "hgap": 0, "insets": { "left": 4 }, "environment": { "row_height": 24 } }"#;
        let config = GridConfig::from_json_str(json).unwrap_or_default();

        assert_eq!(config.hgap, 0);
        assert_eq!(config.vgap, 5);
        assert_eq!(config.insets, Insets::new(0, 0, 0, 4));
        assert_eq!(config.environment.row_height, 24);
        assert_eq!(config.environment.column_width, 50);
    }

    /// Test malformed JSON is reported as a config error.
    ///
    /// # Panics
    /// Panics if the error variant is wrong.
    #[test]
    fn test_from_json_invalid() {
        let result = GridConfig::from_json_str("{ \"hgap\": \"wide\" }");
        assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
    }
}
