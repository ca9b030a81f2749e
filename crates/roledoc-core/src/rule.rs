//! Rule normalization and the rule set handed to the renderer.

use crate::error::{Error, Result};
use crate::policy::RawRule;
use serde::Serialize;
use std::collections::HashSet;

/// A normalized rule.
///
/// Every list holds unique, non-empty values in ascending ordinal order.
/// `comment` is a single line and is rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub api_groups: Vec<String>,
    pub resources: Vec<String>,
    pub verbs: Vec<String>,
    pub resource_names: Vec<String>,
    pub non_resource_urls: Vec<String>,
    pub comment: String,
}

/// Normalize the rule found at `position` in the policy's `rules` list.
///
/// # Errors
///
/// Returns [`Error::MissingField`] if `apiGroups`, `resources` or `verbs`
/// is absent.
pub fn normalize(raw: &RawRule, position: usize) -> Result<Rule> {
    let required = |values: &Option<Vec<String>>, field: &'static str| {
        values
            .as_deref()
            .map(sorted_unique)
            .ok_or(Error::MissingField {
                field,
                rule: position,
            })
    };

    Ok(Rule {
        api_groups: required(&raw.api_groups, "apiGroups")?,
        resources: required(&raw.resources, "resources")?,
        verbs: required(&raw.verbs, "verbs")?,
        resource_names: raw.resource_names.as_deref().map(sorted_unique).unwrap_or_default(),
        non_resource_urls: raw
            .non_resource_urls
            .as_deref()
            .map(sorted_unique)
            .unwrap_or_default(),
        comment: flatten_comment(&raw.comment),
    })
}

/// Unique non-empty values in ascending byte-wise order.
pub fn sorted_unique(values: &[String]) -> Vec<String> {
    let unique: HashSet<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect();

    let mut sorted: Vec<String> = unique.into_iter().map(str::to_owned).collect();
    sorted.sort_unstable();
    sorted
}

/// Collapse a raw comment block into one line.
///
/// Drops every `#` and newline, then joins the remaining words with single
/// spaces. Lines are concatenated without a separator, so words split only
/// by a newline run together.
pub fn flatten_comment(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '#' && *c != '\n').collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized rules in document order plus the optional-column flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
    any_has_resource_names: bool,
    any_has_non_resource_urls: bool,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        let any_has_resource_names = rules.iter().any(|r| !r.resource_names.is_empty());
        let any_has_non_resource_urls = rules.iter().any(|r| !r.non_resource_urls.is_empty());
        Self {
            rules,
            any_has_resource_names,
            any_has_non_resource_urls,
        }
    }

    /// Normalize every raw rule, failing on the first invalid one.
    pub fn from_raw(raw: &[RawRule]) -> Result<Self> {
        let rules = raw
            .iter()
            .enumerate()
            .map(|(position, rule)| normalize(rule, position))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn any_has_resource_names(&self) -> bool {
        self.any_has_resource_names
    }

    pub fn any_has_non_resource_urls(&self) -> bool {
        self.any_has_non_resource_urls
    }
}
