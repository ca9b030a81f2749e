//! Leading comments of the entries in a policy's `rules` list.
//!
//! `serde_yaml` discards comments, so they are recovered with a line scan of
//! the source. A rule's comment is the run of `#` lines directly above its
//! `-` entry; a blank line or any other content ends the run.
//!
//! ```yaml
//! rules:
//!   # Read access to pods.        <- comment of the first rule
//!   - apiGroups: [""]
//!     resources: ["pods"]
//!     verbs: ["get"]
//! ```

/// Raw comment text (with `#` leaders, one line per comment line) for each
/// block-style entry of the top-level `rules` sequence, in order.
///
/// Entries without a comment get an empty string. Flow-style sequences
/// (`rules: [...]`) yield no entries.
pub fn rule_comments(source: &str) -> Vec<String> {
    let mut lines = source.lines();

    if !lines.by_ref().any(is_rules_key) {
        return Vec::new();
    }

    let mut comments = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut item_indent: Option<usize> = None;

    for line in lines {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            pending.clear();
            continue;
        }

        let indent = line.len() - trimmed.len();

        if trimmed.starts_with('#') {
            pending.push(trimmed);
            continue;
        }

        let is_item = trimmed == "-" || trimmed.starts_with("- ");

        // Next top-level key (or document marker) ends the sequence.
        if indent == 0 && !is_item {
            break;
        }

        if is_item && *item_indent.get_or_insert(indent) == indent {
            comments.push(pending.join("\n"));
        }
        pending.clear();
    }

    comments
}

fn is_rules_key(line: &str) -> bool {
    line.strip_prefix("rules:").is_some_and(|rest| {
        let rest = rest.trim_start();
        rest.is_empty() || rest.starts_with('#')
    })
}
