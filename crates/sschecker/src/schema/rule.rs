//! Field rules: exact literals or regular expressions.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;

/// Rule a single field value is checked against.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must equal this string exactly.
    Literal(String),
    /// Value must match this expression, starting at its first character.
    Pattern(Regex),
    /// A rule that could not be understood. Fields carrying it are
    /// always reported invalid.
    Unsupported(Value),
}

impl Rule {
    /// Create a literal rule.
    pub fn literal(value: impl Into<String>) -> Self {
        Rule::Literal(value.into())
    }

    /// Compile a pattern rule.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Rule::Pattern(Regex::new(pattern)?))
    }

    /// Check a value against the rule.
    ///
    /// Returns `None` for [`Rule::Unsupported`]. Patterns are not implicitly
    /// anchored at the end: `^\d+` accepts `"12ab"`.
    pub fn matches(&self, value: &str) -> Option<bool> {
        match self {
            Rule::Literal(expected) => Some(value == expected),
            Rule::Pattern(regex) => Some(regex.find(value).is_some_and(|m| m.start() == 0)),
            Rule::Unsupported(_) => None,
        }
    }

    /// Short label for the rule kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Literal(_) => "literal",
            Rule::Pattern(_) => "pattern",
            Rule::Unsupported(_) => "unsupported",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal(value) => write!(f, "{}", value),
            Rule::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
            Rule::Unsupported(value) => write!(f, "{}", value),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rule::Literal(a), Rule::Literal(b)) => a == b,
            (Rule::Pattern(a), Rule::Pattern(b)) => a.as_str() == b.as_str(),
            (Rule::Unsupported(a), Rule::Unsupported(b)) => a == b,
            _ => false,
        }
    }
}

/// On-disk shape of a rule.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Literal(String),
    Pattern { pattern: String },
    Other(Value),
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let raw = match self {
            Rule::Literal(value) => RawRule::Literal(value.clone()),
            Rule::Pattern(regex) => RawRule::Pattern {
                pattern: regex.as_str().to_string(),
            },
            Rule::Unsupported(value) => RawRule::Other(value.clone()),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawRule::deserialize(deserializer)? {
            RawRule::Literal(value) => Ok(Rule::Literal(value)),
            RawRule::Pattern { pattern } => Regex::new(&pattern)
                .map(Rule::Pattern)
                .map_err(serde::de::Error::custom),
            RawRule::Other(value) => Ok(Rule::Unsupported(value)),
        }
    }
}
