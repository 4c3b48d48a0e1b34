use crate::error::{Result, TaggerError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Entity category a phrase or alias belongs to.
///
/// Alias resolution is category-scoped: a mission alias never rewrites an
/// instrument match and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mission,
    Instrument,
    Variable,
    Exception,
}

/// Alias tables mapping raw/alternate phrases to canonical short forms.
///
/// Field names follow the legacy aliases JSON (`mission_aliases`,
/// `instrument_aliases`, `var_aliases`, `exception_aliases`). All four
/// keys must be present; a missing table is a load-time error. Extra keys
/// (the legacy files also carry `*_main` reverse maps) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasTables {
    pub mission_aliases: HashMap<String, String>,
    pub instrument_aliases: HashMap<String, String>,
    pub var_aliases: HashMap<String, String>,
    pub exception_aliases: HashMap<String, String>,
}

impl AliasTables {
    /// Alias map for a category
    #[must_use]
    pub fn table(&self, category: Category) -> &HashMap<String, String> {
        match category {
            Category::Mission => &self.mission_aliases,
            Category::Instrument => &self.instrument_aliases,
            Category::Variable => &self.var_aliases,
            Category::Exception => &self.exception_aliases,
        }
    }
}

// Wire shape of the vocabulary document.
#[derive(Debug, Clone, Deserialize)]
struct PhraseLists {
    missions: Vec<String>,
    instruments: Vec<String>,
    variables: Vec<String>,
    exceptions: Vec<String>,
}

/// The phrase lists and alias tables for one run.
///
/// Loaded once, then treated as immutable configuration: every document is
/// tagged against the same vocabulary, so a batch of documents can be
/// processed by independent callers with no coordination.
///
/// Phrase lists are expected in lower case (matching lower-cases the
/// sentence, never the vocabulary). Alias *values* keep their declared
/// casing for instruments and variables; mission canonical forms are
/// lower-cased at resolution time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub missions: Vec<String>,
    pub instruments: Vec<String>,
    pub variables: Vec<String>,
    pub exceptions: Vec<String>,
    pub aliases: AliasTables,
}

impl Vocabulary {
    /// Build a vocabulary from already-loaded parts.
    #[must_use]
    pub fn new(
        missions: Vec<String>,
        instruments: Vec<String>,
        variables: Vec<String>,
        exceptions: Vec<String>,
        aliases: AliasTables,
    ) -> Self {
        Self {
            missions,
            instruments,
            variables,
            exceptions,
            aliases,
        }
    }

    /// Parse a combined vocabulary document plus an aliases document.
    ///
    /// The vocabulary document must carry all four category keys
    /// (`missions`, `instruments`, `variables`, `exceptions`); the aliases
    /// document must carry all four alias tables. Anything else is fatal;
    /// the tagger never runs with partial vocabulary.
    pub fn from_json(vocab_json: &str, aliases_json: &str) -> Result<Self> {
        let lists: PhraseLists = serde_json::from_str(vocab_json)
            .map_err(|e| TaggerError::malformed(format!("vocabulary lists: {e}")))?;
        let aliases: AliasTables = serde_json::from_str(aliases_json)
            .map_err(|e| TaggerError::malformed(format!("alias tables: {e}")))?;

        log::debug!(
            "Loaded vocabulary: {} missions, {} instruments, {} variables, {} exceptions",
            lists.missions.len(),
            lists.instruments.len(),
            lists.variables.len(),
            lists.exceptions.len()
        );

        Ok(Self::new(
            lists.missions,
            lists.instruments,
            lists.variables,
            lists.exceptions,
            aliases,
        ))
    }

    /// Load from the two-file layout used by the labeling pipeline:
    /// a vocabulary JSON and an aliases JSON.
    pub fn load(vocab_path: impl AsRef<Path>, aliases_path: impl AsRef<Path>) -> Result<Self> {
        let vocab_json = std::fs::read_to_string(vocab_path.as_ref())?;
        let aliases_json = std::fs::read_to_string(aliases_path.as_ref())?;
        Self::from_json(&vocab_json, &aliases_json)
    }

    /// Phrase list for a category
    #[must_use]
    pub fn phrases(&self, category: Category) -> &[String] {
        match category {
            Category::Mission => &self.missions,
            Category::Instrument => &self.instruments,
            Category::Variable => &self.variables,
            Category::Exception => &self.exceptions,
        }
    }
}
