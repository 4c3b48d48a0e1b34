use crate::config::{DedupPolicy, TaggerConfig};
use crate::evidence::{EvidenceRecord, EvidenceStore};
use crate::matcher::{scan_sentence, MatchSet};
use crate::resolve::{resolve, standardize};
use crate::segment::segment;
use crate::tag::Tag;
use crate::vocabulary::{Category, Vocabulary};
use std::collections::HashSet;

/// Sentence-level multi-entity tagger.
///
/// Holds the run's immutable vocabulary and policy configuration;
/// `tag_document` is a pure function of (text, vocabulary, config), so
/// callers may tag documents in parallel with shared references.
#[derive(Debug, Clone)]
pub struct Tagger {
    vocabulary: Vocabulary,
    config: TaggerConfig,
}

impl Tagger {
    /// Tagger with default policies (exhaustive scanning, no duplicate
    /// suppression)
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_config(vocabulary, TaggerConfig::default())
    }

    #[must_use]
    pub fn with_config(vocabulary: Vocabulary, config: TaggerConfig) -> Self {
        Self { vocabulary, config }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn config(&self) -> TaggerConfig {
        self.config
    }

    /// Tag a whole document: clean, segment, and run every sentence
    /// through matching, alias resolution, and tag generation.
    ///
    /// Empty or matchless text is not an error; it yields an empty store.
    #[must_use]
    pub fn tag_document(&self, text: &str) -> EvidenceStore {
        let mut store = EvidenceStore::new();
        for sentence in segment(text) {
            self.tag_sentence(&sentence, &mut store);
        }
        log::debug!(
            "Tagged document: {} tags, {} evidence records",
            store.len(),
            store.record_count()
        );
        store
    }

    /// Tag a single pre-segmented sentence into `store`.
    pub fn tag_sentence(&self, sentence: &str, store: &mut EvidenceStore) {
        let matches = scan_sentence(&self.vocabulary, sentence, self.config.scan);
        if matches.is_empty() {
            return;
        }
        log::trace!(
            "Sentence matched {} missions / {} instruments / {} variables / {} exceptions: {sentence}",
            matches.missions.len(),
            matches.instruments.len(),
            matches.variables.len(),
            matches.exceptions.len()
        );

        let resolved = standardize(&self.vocabulary.aliases, matches);
        self.emit_entity_tags(&resolved, sentence, store);
        self.emit_exception_tags(&resolved, sentence, store);
    }

    /// Cross-product (mission x instrument x variable) emission.
    ///
    /// Requires at least one match in all three categories; exceptions do
    /// not gate this and are handled independently. Under
    /// [`DedupPolicy::PerTriple`] identical resolved triples within the
    /// sentence collapse to one record.
    fn emit_entity_tags(&self, matches: &MatchSet, sentence: &str, store: &mut EvidenceStore) {
        if !matches.has_full_triple() {
            return;
        }

        let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
        for mission in &matches.missions {
            for instrument in &matches.instruments {
                for variable in &matches.variables {
                    if self.config.dedup == DedupPolicy::PerTriple
                        && !seen.insert((mission.as_str(), instrument.as_str(), variable.as_str()))
                    {
                        continue;
                    }
                    store.append(
                        Tag::entity(mission, instrument, variable),
                        EvidenceRecord::entity(mission, instrument, variable, sentence),
                    );
                }
            }
        }
    }

    /// Exception emission, unconditional on entity matches: a sentence can
    /// contribute both entity-triple and exception evidence.
    fn emit_exception_tags(&self, matches: &MatchSet, sentence: &str, store: &mut EvidenceStore) {
        for exception in &matches.exceptions {
            let canonical = resolve(&self.vocabulary.aliases, Category::Exception, exception);
            store.append(
                Tag::exception(&canonical),
                EvidenceRecord::exception(&canonical, sentence),
            );
        }
    }
}
