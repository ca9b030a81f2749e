//! Core pipeline for roledoc.
//!
//! Reads an access-control policy (a YAML document with a top-level `rules`
//! list), normalizes each rule, renders a markdown table and optionally
//! splices it into an existing document between marker lines.
//!
//! ```text
//! policy.yaml --parse--> RawRule* --normalize--> RuleSet --render--> table --splice--> README.md
//! ```

pub mod comments;
pub mod error;
pub mod generate;
pub mod policy;
pub mod render;
pub mod rule;

pub use error::{Error, Result};
pub use generate::{GenerateOptions, Outcome, generate};
pub use policy::{RawRule, parse_policy};
pub use render::Renderer;
pub use rule::{Rule, RuleSet, flatten_comment, normalize, sorted_unique};
