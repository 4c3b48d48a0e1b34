use serde::{Deserialize, Serialize};

/// Configuration for sentence tagging behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Category scanning policy
    pub scan: ScanPolicy,

    /// Duplicate-triple suppression policy
    pub dedup: DedupPolicy,
}

impl TaggerConfig {
    /// Config reproducing the legacy short-circuit labeling variant:
    /// early-exit scanning plus per-triple deduplication.
    #[must_use]
    pub const fn legacy_short_circuit() -> Self {
        Self {
            scan: ScanPolicy::EarlyExit,
            dedup: DedupPolicy::PerTriple,
        }
    }
}

/// How much of the vocabulary to scan per sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Scan all four categories unconditionally (simpler, more
    /// predictable; the any-entity-found decision is deferred to tag
    /// generation)
    #[default]
    Exhaustive,

    /// Skip instrument and variable scanning for sentences with no
    /// mission and no exception match. Cheaper, but exception-only
    /// sentences are the only ones that survive the cut, so the two
    /// policies produce different evidence sets for sentences carrying
    /// only a subset of entity types.
    EarlyExit,
}

/// Whether identical resolved (mission, instrument, variable) triples
/// within one sentence collapse to a single evidence record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// One record per produced permutation, duplicates included. Two
    /// surface forms resolving to the same canonical triple ("mls" and
    /// "microwave limb sounder") yield two records.
    #[default]
    KeepAll,

    /// A seen-set collapses identical resolved triples to one record per
    /// sentence.
    PerTriple,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_exhaustive_keep_all() {
        let config = TaggerConfig::default();
        assert_eq!(config.scan, ScanPolicy::Exhaustive);
        assert_eq!(config.dedup, DedupPolicy::KeepAll);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = TaggerConfig::legacy_short_circuit();
        let json = serde_json::to_string(&config).unwrap();
        let back: TaggerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
