//! Start/end marker configuration.

use crate::error::{Error, Result};

/// Start marker used for cluster role documentation blocks.
pub const DEFAULT_START_MARKER: &str = "<!--- START CLUSTER ROLES DOCUMENTATION --->";

/// End marker used for cluster role documentation blocks.
pub const DEFAULT_END_MARKER: &str = "<!--- END CLUSTER ROLES DOCUMENTATION --->";

/// The pair of literal marker strings delimiting a generated block.
///
/// Both markers are non-empty and distinct; [`MarkerPair::new`] enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() || end.is_empty() {
            return Err(Error::InvalidMarker {
                reason: "markers must not be empty".to_string(),
            });
        }
        if start.contains('\n') || end.contains('\n') {
            return Err(Error::InvalidMarker {
                reason: "markers must fit on a single line".to_string(),
            });
        }
        if start == end {
            return Err(Error::InvalidMarker {
                reason: format!("start and end markers are identical: {start:?}"),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}
