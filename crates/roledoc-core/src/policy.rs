//! Policy document parsing.

use crate::comments::rule_comments;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// A rule as written in the policy, before normalization.
///
/// A list field is `None` only when its key is absent; a key with a null
/// value reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRule {
    #[serde(rename = "apiGroups", default, deserialize_with = "present")]
    pub api_groups: Option<Vec<String>>,

    #[serde(default, deserialize_with = "present")]
    pub resources: Option<Vec<String>>,

    #[serde(default, deserialize_with = "present")]
    pub verbs: Option<Vec<String>>,

    #[serde(rename = "resourceNames", default, deserialize_with = "present")]
    pub resource_names: Option<Vec<String>>,

    #[serde(rename = "nonResourceURLs", default, deserialize_with = "present")]
    pub non_resource_urls: Option<Vec<String>>,

    /// Raw leading comment, filled from the source text.
    #[serde(skip)]
    pub comment: String,
}

#[derive(Debug, Deserialize)]
struct RawPolicy {
    #[serde(default, deserialize_with = "present")]
    rules: Option<Vec<RawRule>>,
}

/// Maps a present key to `Some`, treating an explicit null as empty.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Parse a policy document into its raw rules, in document order.
///
/// `path` names the document in errors; it is not read.
///
/// Keys other than `rules` (`kind`, `metadata`, ...) are ignored. Each
/// rule's leading comment is attached when the comment scan lines up with
/// the parsed rules; otherwise comments are left empty.
///
/// # Errors
///
/// - [`Error::Yaml`] for malformed YAML, multiple documents, or values of
///   the wrong shape.
/// - [`Error::MissingRules`] when there is no top-level `rules` key.
pub fn parse_policy(source: &str, path: &Path) -> Result<Vec<RawRule>> {
    let policy: RawPolicy = serde_yaml::from_str(source).map_err(|e| Error::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut rules = policy.rules.ok_or(Error::MissingRules)?;

    let comments = rule_comments(source);
    if comments.len() == rules.len() {
        for (rule, comment) in rules.iter_mut().zip(comments) {
            rule.comment = comment;
        }
    } else if !rules.is_empty() {
        tracing::warn!(
            rules = rules.len(),
            entries = comments.len(),
            "could not match comments to rules; rendering without comments"
        );
    }

    tracing::debug!(rules = rules.len(), "parsed policy");
    Ok(rules)
}
