//! Filesystem helpers for roledoc
//!
//! Whole-file reads that distinguish a missing file from an unreadable one,
//! and atomic locked writes for regenerated documents.

pub mod error;
pub mod io;

pub use error::{Error, Result};
