//! End-to-end generation: read the policy, render, and write or print.

use crate::error::{Error, Result};
use crate::policy::parse_policy;
use crate::render::Renderer;
use crate::rule::RuleSet;
use roledoc_blocks::{MarkerPair, SpliceKind, splice};
use roledoc_fs::io;
use similar::TextDiff;
use std::path::PathBuf;

/// Resolved settings for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Policy document to document.
    pub input: PathBuf,
    /// Markdown file to update. `None` means return the table for printing.
    pub output: Option<PathBuf>,
    /// Markers delimiting the generated block in `output`.
    pub markers: MarkerPair,
    /// Compare instead of write; fail if `output` would change.
    pub check: bool,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            markers: MarkerPair::default(),
            check: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_markers(mut self, markers: MarkerPair) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No output path: the rendered table, to be printed.
    Rendered(String),
    /// The output file was written.
    Written { path: PathBuf, kind: SpliceKind },
    /// The output file already had the generated content.
    Unchanged { path: PathBuf },
}

/// Render the policy from `options.input` into a table.
pub fn render_policy(options: &GenerateOptions) -> Result<String> {
    let source = io::read_text(&options.input)?;
    let rules = RuleSet::from_raw(&parse_policy(&source, &options.input)?)?;
    tracing::info!(
        input = %options.input.display(),
        rules = rules.len(),
        "documenting rules"
    );
    Renderer::new()?.render(&rules)
}

/// Run the generator.
///
/// Every failure aborts before the output file is touched: the destination
/// is read once, spliced in memory and written atomically at the end.
///
/// # Errors
///
/// - policy errors ([`Error::Yaml`], [`Error::MissingRules`],
///   [`Error::MissingField`])
/// - [`Error::Splice`] when the output's markers are unusable
/// - [`Error::Stale`] in check mode when the output would change
/// - [`Error::Fs`] for unreadable input or output, or a failed write
pub fn generate(options: &GenerateOptions) -> Result<Outcome> {
    let table = render_policy(options)?;

    let Some(path) = options.output.as_ref() else {
        return Ok(Outcome::Rendered(table));
    };

    let existing = io::read_optional(path)?;
    let (content, kind) = splice(existing.as_deref(), &options.markers, table.as_bytes())
        .map_err(|source| Error::Splice {
            path: path.clone(),
            source,
        })?;

    if existing.as_deref() == Some(content.as_slice()) {
        tracing::info!(path = %path.display(), "documentation is up to date");
        return Ok(Outcome::Unchanged { path: path.clone() });
    }

    if options.check {
        let current = existing
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        let expected = String::from_utf8_lossy(&content);
        let diff = TextDiff::from_lines(&*current, &*expected)
            .unified_diff()
            .header("current", "generated")
            .to_string();
        return Err(Error::Stale {
            path: path.clone(),
            diff,
        });
    }

    io::write_atomic(path, &content)?;
    tracing::info!(path = %path.display(), ?kind, "documentation written");
    Ok(Outcome::Written {
        path: path.clone(),
        kind,
    })
}
