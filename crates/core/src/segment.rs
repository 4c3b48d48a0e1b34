use once_cell::sync::Lazy;
use regex::Regex;

// Coarse citation removal: any parenthesized or bracketed span goes.
// This also strips legitimate acronym expansions like
// "Global Positioning System (GPS)"; kept as-is for output
// compatibility with previously reviewed datasets.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\(\[].*?[\)\]]").expect("valid parenthetical regex"));

/// Clean raw document text ahead of sentence splitting.
///
/// - removes parenthesized/bracketed spans (citations, acronym expansions)
/// - collapses newlines to spaces
/// - drops `"- "` line-break hyphenation artifacts
/// - replaces `/` with a space so "mission/instrument" notation still
///   matches word-by-word
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = PARENTHETICAL.replace_all(text, "");
    text.replace('\n', " ").replace("- ", "").replace('/', " ")
}

/// Split cleaned text into trimmed candidate sentences.
///
/// Splitting is on the period character only. Abbreviations such as "e.g."
/// still cause a split, a known source of over-segmentation that is not
/// corrected here.
pub fn split_sentences(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split('.').map(str::trim)
}

/// Clean and segment a raw document in one pass.
///
/// Empty text yields zero sentences; empty candidates between consecutive
/// periods are kept (they match nothing downstream).
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let cleaned = clean_text(text);
    split_sentences(&cleaned).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_parenthetical_spans() {
        assert_eq!(
            clean_text("the global positioning system (gps) and mls [2]"),
            "the global positioning system  and mls "
        );
    }

    #[test]
    fn rejoins_line_break_hyphenation() {
        assert_eq!(clean_text("strato- spheric ozone"), "stratospheric ozone");
    }

    #[test]
    fn collapses_newlines_to_spaces() {
        assert_eq!(clean_text("aura\nmls"), "aura mls");
    }

    #[test]
    fn replaces_slashes_with_spaces() {
        assert_eq!(clean_text("aura/mls retrievals"), "aura mls retrievals");
    }

    #[test]
    fn splits_on_periods_and_trims() {
        let sentences = segment("first sentence. second one.\nthird");
        assert_eq!(sentences, ["first sentence", "second one", "third"]);
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn abbreviations_still_split() {
        let sentences = segment("e.g. ozone");
        assert_eq!(sentences, ["e", "g", "ozone"]);
    }

    #[test]
    fn approximate_round_trip() {
        let text = "aura mls measures ozone. merra is a reanalysis";
        let rejoined = segment(text).join(". ");
        assert_eq!(rejoined, text);
    }
}
