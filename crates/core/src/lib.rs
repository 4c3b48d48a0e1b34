//! # Papertag Core
//!
//! Sentence-level multi-entity tagging for scientific-paper text: find
//! mentions of missions (platforms), instruments, measured variables, and
//! special-cased "exception" terms, resolve aliases to canonical short
//! names, and emit per-sentence evidence records grouped by normalized
//! tag.
//!
//! ## Architecture
//!
//! ```text
//! Document text
//!     │
//!     ├──> Segmenter & Cleaner (strip citations, split on periods)
//!     │
//!     └──> per sentence:
//!          ├─> Vocabulary Matcher  (ordered word-subsequence test)
//!          ├─> Alias Resolver      (surface form → canonical short name)
//!          ├─> Tag Generator       (mission × instrument × variable
//!          │                        cross-product + exception tags)
//!          └─> Evidence Store      (tag → ordered evidence records)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use papertag_core::{AliasTables, Tag, Tagger, Vocabulary};
//!
//! let mut aliases = AliasTables::default();
//! aliases
//!     .instrument_aliases
//!     .insert("microwave limb sounder".to_string(), "mls".to_string());
//!
//! let vocabulary = Vocabulary::new(
//!     vec!["aura".to_string()],
//!     vec!["microwave limb sounder".to_string()],
//!     vec!["h2o".to_string()],
//!     vec![],
//!     aliases,
//! );
//!
//! let store = Tagger::new(vocabulary).tag_document("aura microwave limb sounder retrieves h2o.");
//! assert!(store.records(&Tag::entity("aura", "mls", "h2o")).is_some());
//! ```

mod config;
mod error;
mod evidence;
mod matcher;
mod resolve;
mod segment;
mod tag;
mod tagger;
mod vocabulary;

pub use config::{DedupPolicy, ScanPolicy, TaggerConfig};
pub use error::{Result, TaggerError};
pub use evidence::{EvidenceRecord, EvidenceStore};
pub use matcher::{phrase_in_sentence, scan_sentence, MatchSet};
pub use resolve::{resolve, standardize};
pub use segment::{clean_text, segment, split_sentences};
pub use tag::Tag;
pub use tagger::Tagger;
pub use vocabulary::{AliasTables, Category, Vocabulary};
