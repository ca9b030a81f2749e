//! Markdown table rendering.

use crate::error::Result;
use crate::rule::RuleSet;
use std::collections::HashMap;
use tera::{Context as TeraContext, Tera, Value};

const TEMPLATE_NAME: &str = "rules.md";
const TEMPLATE: &str = include_str!("../templates/rules.md.tera");

/// Renders a [`RuleSet`] as a markdown table.
///
/// The Resource Names and Non-Resource URLs columns are only emitted when
/// at least one rule uses them. List cells are backtick-quoted values
/// joined with `, `; comments are inserted as-is. The output always ends
/// with a newline.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("cell", cell_filter);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, rules: &RuleSet) -> Result<String> {
        let context = TeraContext::from_serialize(rules)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Format a list of strings as one table cell.
fn cell_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let items = value
        .as_array()
        .ok_or_else(|| tera::Error::msg("cell filter expects a list"))?;

    let cell = items
        .iter()
        .map(|item| {
            item.as_str()
                .map(code_span)
                .ok_or_else(|| tera::Error::msg("cell filter expects a list of strings"))
        })
        .collect::<tera::Result<Vec<_>>>()?
        .join(", ");

    Ok(Value::String(cell))
}

/// Backtick-quote a value, escaping `|` so it cannot end the cell.
///
/// The fence is one backtick longer than the longest backtick run inside
/// the value, padded with spaces when the value starts or ends with one.
fn code_span(value: &str) -> String {
    let longest_run = value
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if value.starts_with('`') || value.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{}{pad}{fence}", value.replace('|', "\\|"))
}
