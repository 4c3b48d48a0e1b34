use crate::tag::Tag;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One sentence-level observation supporting a tag.
///
/// Entity fields hold canonical (alias-resolved) forms, never raw surface
/// forms. An exception record has all three entity fields absent; an
/// entity record has `exception` absent. Absent fields serialize as JSON
/// `false` for compatibility with previously reviewed datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceRecord {
    #[serde(serialize_with = "field_or_false")]
    pub mission: Option<String>,
    #[serde(serialize_with = "field_or_false")]
    pub instrument: Option<String>,
    #[serde(serialize_with = "field_or_false")]
    pub variable: Option<String>,
    #[serde(serialize_with = "field_or_false")]
    pub exception: Option<String>,
    pub sentence: String,
}

impl EvidenceRecord {
    /// Record for a resolved (mission, instrument, variable) triple
    #[must_use]
    pub fn entity(mission: &str, instrument: &str, variable: &str, sentence: &str) -> Self {
        Self {
            mission: Some(mission.to_string()),
            instrument: Some(instrument.to_string()),
            variable: Some(variable.to_string()),
            exception: None,
            sentence: sentence.to_string(),
        }
    }

    /// Record for an exception term, entity fields forced absent
    #[must_use]
    pub fn exception(name: &str, sentence: &str) -> Self {
        Self {
            mission: None,
            instrument: None,
            variable: None,
            exception: Some(name.to_string()),
            sentence: sentence.to_string(),
        }
    }
}

fn field_or_false<S: Serializer>(
    field: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match field {
        Some(value) => serializer.serialize_str(value),
        None => serializer.serialize_bool(false),
    }
}

/// Insertion-ordered accumulation of evidence records keyed by tag.
///
/// Append-only while a document is processed: record order within a tag
/// reflects document traversal order, and nothing is mutated or removed.
/// Stores from separate documents can be merged for corpus-level
/// aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceStore {
    entries: IndexMap<Tag, Vec<EvidenceRecord>>,
}

impl EvidenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record under a tag, creating the tag on first use
    pub fn append(&mut self, tag: Tag, record: EvidenceRecord) {
        self.entries.entry(tag).or_default().push(record);
    }

    /// Records accumulated for a tag, if any
    #[must_use]
    pub fn records(&self, tag: &Tag) -> Option<&[EvidenceRecord]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// Number of distinct tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of evidence records across all tags
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate tags with their records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &[EvidenceRecord])> {
        self.entries.iter().map(|(tag, records)| (tag, records.as_slice()))
    }

    /// Fold another store into this one, preserving both insertion orders
    pub fn merge(&mut self, other: EvidenceStore) {
        for (tag, records) in other.entries {
            self.entries.entry(tag).or_default().extend(records);
        }
    }
}

impl Serialize for EvidenceStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tag, records) in &self.entries {
            map.serialize_entry(tag, records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_fields_serialize_as_false() {
        let record = EvidenceRecord::exception("merra-2", "merra-2 is a reanalysis product");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "mission": false,
                "instrument": false,
                "variable": false,
                "exception": "merra-2",
                "sentence": "merra-2 is a reanalysis product"
            })
        );
    }

    #[test]
    fn entity_records_carry_the_triple() {
        let record = EvidenceRecord::entity("aura", "mls", "h2o", "s");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "mission": "aura",
                "instrument": "mls",
                "variable": "h2o",
                "exception": false,
                "sentence": "s"
            })
        );
    }

    #[test]
    fn append_preserves_traversal_order() {
        let mut store = EvidenceStore::new();
        let tag = Tag::entity("aura", "mls", "h2o");
        store.append(tag.clone(), EvidenceRecord::entity("aura", "mls", "h2o", "first"));
        store.append(tag.clone(), EvidenceRecord::entity("aura", "mls", "h2o", "second"));

        let records = store.records(&tag).unwrap();
        assert_eq!(records[0].sentence, "first");
        assert_eq!(records[1].sentence, "second");
    }

    #[test]
    fn merge_extends_existing_tags() {
        let tag = Tag::exception("merra-2");
        let mut a = EvidenceStore::new();
        a.append(tag.clone(), EvidenceRecord::exception("merra-2", "one"));
        let mut b = EvidenceStore::new();
        b.append(tag.clone(), EvidenceRecord::exception("merra-2", "two"));
        b.append(
            Tag::entity("aura", "mls", "o3"),
            EvidenceRecord::entity("aura", "mls", "o3", "three"),
        );

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.records(&tag).unwrap().len(), 2);
    }

    #[test]
    fn store_serializes_keyed_by_tag_string() {
        let mut store = EvidenceStore::new();
        store.append(
            Tag::entity("aura", "mls", "h2o"),
            EvidenceRecord::entity("aura", "mls", "h2o", "s"),
        );
        let value = serde_json::to_value(&store).unwrap();
        assert!(value.get("(aura/mls, h2o)").is_some());
    }
}
