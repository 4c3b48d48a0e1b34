use anyhow::{bail, Result};
use serde_json::Value;

/// Merge a features document into a manually-reviewed ground-truth
/// document.
///
/// Ground truth is keyed by review entry; each entry names its paper via
/// a `pdf` field. For every reviewed entry whose paper appears in the
/// features document, the paper's feature fields are copied into the
/// entry. Entries without features pass through untouched, so the merged
/// file keeps exactly the manually reviewed papers.
pub fn merge_features(ground_truth: &mut Value, features: &Value) -> Result<()> {
    let Some(entries) = ground_truth.as_object_mut() else {
        bail!("ground truth must be a JSON object keyed by review entry");
    };
    let Some(features) = features.as_object() else {
        bail!("features must be a JSON object keyed by paper");
    };

    let mut merged = 0usize;
    for entry in entries.values_mut() {
        let Some(paper) = entry.get("pdf").and_then(Value::as_str) else {
            continue;
        };
        let Some(paper_features) = features.get(paper).and_then(Value::as_object) else {
            continue;
        };
        let paper_features = paper_features.clone();

        let Some(entry) = entry.as_object_mut() else {
            continue;
        };
        for (key, value) in paper_features {
            entry.insert(key, value);
        }
        merged += 1;
    }

    log::info!("Merged features for {merged} reviewed papers");
    Ok(())
}
