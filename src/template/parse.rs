//! Scanner for `{variable}` placeholders.
//!
//! # Syntax
//!
//! - `{name}` - A placeholder for variable `name`, taken verbatim (no trimming)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A lone `}` is an error, as in Python's `str.format`. Conversions and format
//! specs (`{name!r}`, `{count:>3}`) and nested fields are rejected rather than
//! half-supported, so every placeholder accepted here is a bare field name that
//! Python's formatter reads the same way.

use super::TemplateError;
use std::collections::HashMap;

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Literal text, with escapes already collapsed.
    Text(String),
    /// A `{name}` placeholder found at `position` (byte offset of the `{`).
    Variable { name: String, position: usize },
}

/// Split a template into literal text and placeholders.
pub(crate) fn scan(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    text.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }
                if name.contains(['!', ':', '{']) {
                    return Err(TemplateError::UnsupportedField {
                        field: name,
                        position: pos,
                    });
                }

                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Variable {
                    name,
                    position: pos,
                });
            }
            '}' => match chars.next() {
                Some((_, '}')) => text.push('}'),
                _ => return Err(TemplateError::LoneClosingBrace { position: pos }),
            },
            _ => text.push(ch),
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    Ok(segments)
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for segment in scan(template)? {
        if let Segment::Variable { name, .. } = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    Ok(names)
}

/// Render a template string by substituting variables.
///
/// Undefined variables are an error rather than an empty substitution.
///
/// ```
/// use prompt_hub_push::template::{render_template, vars};
///
/// let vars = vars([("title", "CRISPR"), ("url", "https://example.org")]);
/// let out = render_template("{title} ({url})", &vars).unwrap();
/// assert_eq!(out, "CRISPR (https://example.org)");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in scan(template)? {
        match segment {
            Segment::Text(text) => result.push_str(&text),
            Segment::Variable { name, position } => match variables.get(&name) {
                Some(value) => result.push_str(value),
                None => return Err(TemplateError::UndefinedVariable { name, position }),
            },
        }
    }

    Ok(result)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
