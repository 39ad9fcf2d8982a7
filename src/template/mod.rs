//! Renderable prompt templates.
//!
//! A [`PromptTemplate`] pairs a body containing `{variable}` placeholders with
//! the list of variables a caller must supply when rendering it. Construction
//! validates that every declared variable actually appears in the body, so a
//! template that builds here is safe to publish.
//!
//! # Template Syntax
//!
//! ```text
//! Article Title: {title}
//! Article URL: {url}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod parse;


pub use parse::{placeholders, render_template, vars};

use serde_json::{Value, json};
use std::collections::HashMap;
use thiserror::Error;

/// Error type for template validation and rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// A `}` was found that is neither doubled nor closing a placeholder.
    #[error("single '}}' at position {position} in template (use '}}}}' for a literal brace)")]
    LoneClosingBrace { position: usize },

    /// A placeholder carries a conversion, format spec, or nested field.
    #[error("unsupported placeholder '{{{field}}}' at position {position}: only bare names are allowed")]
    UnsupportedField { field: String, position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },

    /// An input variable was declared but never appears in the body.
    #[error("declared input variable '{name}' does not appear as {{{name}}} in template")]
    MissingPlaceholder { name: String },
}

/// An f-string prompt template with its declared input variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    input_variables: Vec<String>,
}

impl PromptTemplate {
    /// Build a template, checking the body's brace syntax and that each
    /// declared input variable appears as a placeholder.
    pub fn new<I, S>(template: impl Into<String>, input_variables: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = template.into();
        let input_variables: Vec<String> = input_variables.into_iter().map(Into::into).collect();

        let found = placeholders(&template)?;
        if let Some(missing) = input_variables.iter().find(|v| !found.contains(v)) {
            return Err(TemplateError::MissingPlaceholder {
                name: missing.clone(),
            });
        }

        Ok(Self {
            template,
            input_variables,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// Render the body with the given variables.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        render_template(&self.template, variables)
    }

    /// LangChain's serialized form of this template, as stored in a hub commit.
    pub fn to_manifest(&self) -> Value {
        json!({
            "lc": 1,
            "type": "constructor",
            "id": ["langchain", "prompts", "prompt", "PromptTemplate"],
            "kwargs": {
                "input_variables": self.input_variables,
                "template": self.template,
                "template_format": "f-string",
            },
        })
    }
}
