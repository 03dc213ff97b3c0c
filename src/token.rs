/// Flat token stream produced by the renderer
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One entry of the token stream.
///
/// Nesting is not stored on the token itself: a `<kind>_open` token is
/// closed by the next unmatched `<kind>_close` in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

/// Whether a token opens or closes a pair, and which kind of pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket<'a> {
    Open(&'a str),
    Close(&'a str),
}

impl Token {
    pub fn new(kind: impl Into<String>) -> Self {
        Token {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn open(kind: &str) -> Self {
        Token::new(format!("{kind}_open"))
    }

    pub fn close(kind: &str) -> Self {
        Token::new(format!("{kind}_close"))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Token::new("text").with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn bracket(&self) -> Option<Bracket<'_>> {
        if let Some(kind) = self.kind.strip_suffix("_open") {
            Some(Bracket::Open(kind))
        } else {
            self.kind.strip_suffix("_close").map(Bracket::Close)
        }
    }
}

/// Serializable wrapper around a rendered token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
}

impl TokenStream {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }
}
