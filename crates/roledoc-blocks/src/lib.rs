//! Marker-delimited block splicing for roledoc.
//!
//! A generated block lives between a start and an end marker line:
//!
//! ```text
//! <!--- START CLUSTER ROLES DOCUMENTATION --->
//! generated content
//! <!--- END CLUSTER ROLES DOCUMENTATION --->
//! ```
//!
//! [`splice`] regenerates that block while keeping every byte outside of it.
//! A file without markers gets the marked block appended; a file that does
//! not exist yet becomes the bare block.

pub mod error;
pub mod markers;
pub mod splice;

pub use error::{Error, Result};
pub use markers::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, MarkerPair};
pub use splice::{SpliceKind, SpliceTarget, splice};
