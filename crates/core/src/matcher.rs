use crate::config::ScanPolicy;
use crate::vocabulary::Vocabulary;

/// Raw (surface-form) phrases matched in one sentence, one set per
/// category. Built fresh per sentence and discarded after tag generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    pub missions: Vec<String>,
    pub instruments: Vec<String>,
    pub variables: Vec<String>,
    pub exceptions: Vec<String>,
}

impl MatchSet {
    /// True when no category matched anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
            && self.instruments.is_empty()
            && self.variables.is_empty()
            && self.exceptions.is_empty()
    }

    /// True when the sentence carries a full mission+instrument+variable
    /// combination
    #[must_use]
    pub fn has_full_triple(&self) -> bool {
        !self.missions.is_empty() && !self.instruments.is_empty() && !self.variables.is_empty()
    }
}

/// Check whether `phrase`'s words occur as a contiguous, order-preserving
/// run of `sentence`'s words.
///
/// Words are split on whitespace and compared for exact equality; no
/// substring, fuzzy, or stemmed matching. A phrase longer than the
/// remaining window never matches.
#[must_use]
pub fn phrase_in_sentence(phrase: &str, sentence: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() {
        return false;
    }
    let words: Vec<&str> = sentence.split_whitespace().collect();
    words.windows(needle.len()).any(|window| window == needle)
}

/// Scan one sentence against every vocabulary phrase, accumulating all
/// matching phrases per category.
///
/// The sentence is lower-cased before matching; accumulated phrases are
/// the raw vocabulary surface forms (alias resolution happens later).
/// Under [`ScanPolicy::EarlyExit`] the instrument and variable lists are
/// left empty when neither a mission nor an exception matched.
#[must_use]
pub fn scan_sentence(vocabulary: &Vocabulary, sentence: &str, policy: ScanPolicy) -> MatchSet {
    let lowered = sentence.to_lowercase();
    let mut matches = MatchSet::default();

    for exception in &vocabulary.exceptions {
        if phrase_in_sentence(exception, &lowered) {
            matches.exceptions.push(exception.clone());
        }
    }

    for mission in &vocabulary.missions {
        if phrase_in_sentence(mission, &lowered) {
            matches.missions.push(mission.clone());
        }
    }

    if policy == ScanPolicy::EarlyExit
        && matches.missions.is_empty()
        && matches.exceptions.is_empty()
    {
        return matches;
    }

    for instrument in &vocabulary.instruments {
        if phrase_in_sentence(instrument, &lowered) {
            matches.instruments.push(instrument.clone());
        }
    }

    for variable in &vocabulary.variables {
        if phrase_in_sentence(variable, &lowered) {
            matches.variables.push(variable.clone());
        }
    }

    matches
}
