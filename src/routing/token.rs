//! Path and host pattern tokens.
//!
//! A pattern is stored back-to-front: the first token of a sequence is the
//! last fragment of the rendered string. Walks iterate in stored order and
//! prepend.
//!
//! Tokens carry no discriminant of their own. They are classified by shape:
//! a `text` field makes a text token, a `name` field a variable token.
//! Anything else is kept as an opaque token so that substitution can refuse
//! it explicitly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A literal fragment, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToken {
    pub text: String,
}

/// A substitutable segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableToken {
    /// Literal separator emitted before the value (usually `/`).
    #[serde(default)]
    pub prefix: String,
    /// Constraint on the value. Informational only.
    #[serde(default)]
    pub regex: String,
    /// Name of the bound parameter.
    pub name: String,
    #[serde(default)]
    pub utf8: bool,
}

/// One unit of a path or host pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Text(TextToken),
    Variable(VariableToken),
    /// A token of unrecognised shape.
    Opaque(Value),
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(TextToken { text: text.into() })
    }

    pub fn variable(
        prefix: impl Into<String>,
        regex: impl Into<String>,
        name: impl Into<String>,
        utf8: bool,
    ) -> Self {
        Token::Variable(VariableToken {
            prefix: prefix.into(),
            regex: regex.into(),
            name: name.into(),
            utf8,
        })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Token::Variable(_))
    }

    /// Compact JSON rendering, used in error messages.
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
