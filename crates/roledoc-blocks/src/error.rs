//! Error types for roledoc-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("start marker {start:?} found but end marker {end:?} is missing")]
    UnterminatedMarker { start: String, end: String },

    #[error("end marker {end:?} appears before start marker {start:?}")]
    MisorderedMarkers { start: String, end: String },

    #[error("Invalid marker: {reason}")]
    InvalidMarker { reason: String },
}
