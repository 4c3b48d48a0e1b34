use serde::{Deserialize, Serialize};

/// Best-matching dataset returned for one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// CMR concept id (e.g. "C1251101777-GES_DISC")
    pub concept_id: String,

    /// Collection short name
    pub short_name: Option<String>,

    /// Human-readable dataset id
    pub dataset_id: Option<String>,
}

// Wire shape of the collections.json response.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsResponse {
    pub feed: CollectionsFeed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsFeed {
    #[serde(default)]
    pub entry: Vec<CollectionEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionEntry {
    pub id: String,
    pub short_name: Option<String>,
    pub dataset_id: Option<String>,
}

impl From<CollectionEntry> for DatasetRecord {
    fn from(entry: CollectionEntry) -> Self {
        Self {
            concept_id: entry.id,
            short_name: entry.short_name,
            dataset_id: entry.dataset_id,
        }
    }
}
