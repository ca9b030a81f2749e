//! Splicing a generated block into existing file content.
//!
//! The whole destination is handled as one in-memory byte snapshot; every
//! marker search runs against that same snapshot.

use crate::error::{Error, Result};
use crate::markers::MarkerPair;

/// Which path the splice took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceKind {
    /// No destination yet: the block becomes the whole file, without markers.
    Created,
    /// Destination without a start marker: the marked block goes at the end.
    Appended,
    /// Destination with markers: the content between them is replaced.
    Replaced,
}

/// The destination split into the three regions that make up the result.
///
/// `prefix` ends with the start marker line (empty on first creation),
/// `body` is the new content, `suffix` starts with the end marker (empty on
/// first creation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceTarget<'a> {
    pub kind: SpliceKind,
    pub prefix: Vec<u8>,
    pub body: &'a [u8],
    pub suffix: &'a [u8],
}

impl<'a> SpliceTarget<'a> {
    /// Work out the regions for splicing `body` into `existing`.
    ///
    /// `existing` is `None` when the destination file does not exist.
    ///
    /// # Errors
    ///
    /// - [`Error::UnterminatedMarker`] when the start marker is present but
    ///   the end marker occurs nowhere in the content.
    /// - [`Error::MisorderedMarkers`] when the first end marker comes before
    ///   the first start marker.
    pub fn plan(
        existing: Option<&'a [u8]>,
        markers: &'a MarkerPair,
        body: &'a [u8],
    ) -> Result<Self> {
        let start = markers.start().as_bytes();
        let end = markers.end().as_bytes();

        let Some(existing) = existing else {
            return Ok(Self {
                kind: SpliceKind::Created,
                prefix: Vec::new(),
                body,
                suffix: &[],
            });
        };

        let Some(start_pos) = find(existing, start) else {
            let mut prefix = Vec::with_capacity(existing.len() + start.len() + 2);
            prefix.extend_from_slice(existing);
            prefix.push(b'\n');
            prefix.extend_from_slice(start);
            prefix.push(b'\n');
            return Ok(Self {
                kind: SpliceKind::Appended,
                prefix,
                body,
                suffix: end,
            });
        };

        let end_pos = find(existing, end).ok_or_else(|| Error::UnterminatedMarker {
            start: markers.start().to_string(),
            end: markers.end().to_string(),
        })?;

        if end_pos < start_pos {
            return Err(Error::MisorderedMarkers {
                start: markers.start().to_string(),
                end: markers.end().to_string(),
            });
        }

        let mut prefix = Vec::with_capacity(start_pos + start.len() + 1);
        prefix.extend_from_slice(&existing[..start_pos]);
        prefix.extend_from_slice(start);
        prefix.push(b'\n');

        Ok(Self {
            kind: SpliceKind::Replaced,
            prefix,
            body,
            suffix: &existing[end_pos..],
        })
    }

    /// Concatenate the regions into the final file content.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = self.prefix;
        out.reserve(self.body.len() + self.suffix.len());
        out.extend_from_slice(self.body);
        out.extend_from_slice(self.suffix);
        out
    }
}

/// Splice `body` into `existing` between the given markers.
///
/// - `existing` is `None`: the result is `body` unchanged.
/// - no start marker: `existing + "\n" + start + "\n" + body + end`.
/// - markers present: everything up to the start marker line and from the
///   end marker on is kept, the bytes in between become `body`.
///
/// Splicing the same body a second time reproduces the first result.
///
/// # Example
/// ```
/// use roledoc_blocks::{MarkerPair, splice};
///
/// let markers = MarkerPair::new("<!-- BEGIN -->", "<!-- END -->").unwrap();
/// let existing: &[u8] = b"intro\n<!-- BEGIN -->\nold\n<!-- END -->\noutro";
///
/// let (content, _) = splice(Some(existing), &markers, b"new\n").unwrap();
/// assert_eq!(content, b"intro\n<!-- BEGIN -->\nnew\n<!-- END -->\noutro");
/// ```
pub fn splice(
    existing: Option<&[u8]>,
    markers: &MarkerPair,
    body: &[u8],
) -> Result<(Vec<u8>, SpliceKind)> {
    let target = SpliceTarget::plan(existing, markers, body)?;
    let kind = target.kind;
    tracing::debug!(?kind, body_bytes = body.len(), "planned splice");
    Ok((target.into_bytes(), kind))
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
