use papertag_core::EvidenceStore;

const CSV_COLUMNS: [&str; 6] = [
    "paper",
    "mission",
    "instrument",
    "variable",
    "exception",
    "sentence",
];

/// Render one paper's evidence store as a legacy-format CSV section.
///
/// The format mirrors the previously reviewed datasets exactly: a blank
/// pair of lines, the header, the paper name on its own line, then one
/// row per record with the paper column left blank, absent fields printed
/// as `False`, and commas stripped from sentences rather than quoted.
#[must_use]
pub fn render_csv_section(paper: &str, store: &EvidenceStore) -> String {
    let mut csv = String::new();
    csv.push_str("\n\n");
    csv.push_str(&CSV_COLUMNS.join(","));
    csv.push('\n');
    csv.push_str(paper);

    for (_, records) in store.iter() {
        for record in records {
            csv.push(',');
            csv.push_str(cell(&record.mission));
            csv.push(',');
            csv.push_str(cell(&record.instrument));
            csv.push(',');
            csv.push_str(cell(&record.variable));
            csv.push(',');
            csv.push_str(cell(&record.exception));
            csv.push(',');
            csv.push_str(&record.sentence.replace(',', ""));
            csv.push_str("\n\n");
        }
    }

    csv
}

fn cell(field: &Option<String>) -> &str {
    // Legacy rows printed Python's str(False) for absent fields.
    field.as_deref().unwrap_or("False")
}

/// Timestamped output file name, so repeated runs never overwrite.
#[must_use]
pub fn timestamped_name(prefix: &str, extension: &str) -> String {
    let now = chrono::Local::now().format("%H-%M-%S");
    format!("{now}{prefix}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use papertag_core::{EvidenceRecord, Tag};
    use pretty_assertions::assert_eq;

    #[test]
    fn csv_section_matches_legacy_layout() {
        let mut store = EvidenceStore::new();
        store.append(
            Tag::entity("aura", "mls", "h2o"),
            EvidenceRecord::entity("aura", "mls", "h2o", "aura mls retrieves h2o, at 190 ghz"),
        );
        store.append(
            Tag::exception("merra-2"),
            EvidenceRecord::exception("merra-2", "merra-2 is a reanalysis"),
        );

        let csv = render_csv_section("paper.txt", &store);
        assert_eq!(
            csv,
            "\n\npaper,mission,instrument,variable,exception,sentence\n\
             paper.txt,aura,mls,h2o,False,aura mls retrieves h2o at 190 ghz\n\n\
             ,False,False,False,merra-2,merra-2 is a reanalysis\n\n"
        );
    }

    #[test]
    fn empty_store_renders_header_and_paper_only() {
        let csv = render_csv_section("empty.txt", &EvidenceStore::new());
        assert!(csv.ends_with("empty.txt"));
        assert!(csv.contains("paper,mission,instrument"));
    }

    #[test]
    fn timestamped_names_carry_prefix_and_extension() {
        let name = timestamped_name("forward_gesdisc_features", "json");
        assert!(name.ends_with("forward_gesdisc_features.json"));
    }
}
