use serde::{Serialize, Serializer};
use std::fmt;

/// The aggregation key for evidence: either a `"mission/instrument"`
/// subject paired with a variable, or an exception name paired with
/// `"none"`.
///
/// Tags are not pre-declared; they emerge from the combinations a
/// document's sentences actually produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    /// `"mission/instrument"` composite, or the exception name
    pub subject: String,
    /// Canonical variable short name, or `"none"` for exceptions
    pub variable: String,
}

impl Tag {
    /// Tag for a resolved (mission, instrument, variable) triple
    #[must_use]
    pub fn entity(mission: &str, instrument: &str, variable: &str) -> Self {
        Self {
            subject: format!("{mission}/{instrument}"),
            variable: variable.to_string(),
        }
    }

    /// Tag for an exception term
    #[must_use]
    pub fn exception(name: &str) -> Self {
        Self {
            subject: name.to_string(),
            variable: "none".to_string(),
        }
    }

    /// True for exception tags
    #[must_use]
    pub fn is_exception(&self) -> bool {
        self.variable == "none"
    }

    /// Mission half of an entity tag's subject
    #[must_use]
    pub fn mission(&self) -> Option<&str> {
        self.subject.split_once('/').map(|(mission, _)| mission)
    }

    /// Instrument half of an entity tag's subject
    #[must_use]
    pub fn instrument(&self) -> Option<&str> {
        self.subject.split_once('/').map(|(_, instrument)| instrument)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the tuple rendering the legacy pipeline printed and keyed on.
        write!(f, "({}, {})", self.subject, self.variable)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
