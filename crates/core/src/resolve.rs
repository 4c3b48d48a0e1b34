use crate::matcher::MatchSet;
use crate::vocabulary::{AliasTables, Category};

/// Resolve one matched phrase to its canonical short form.
///
/// Lookups are category-scoped; a phrase with no alias entry is
/// self-canonical. Mission canonical forms are lower-cased; instrument,
/// variable, and exception forms keep the alias table's declared casing.
#[must_use]
pub fn resolve(aliases: &AliasTables, category: Category, phrase: &str) -> String {
    match aliases.table(category).get(phrase) {
        Some(canonical) if category == Category::Mission => canonical.to_lowercase(),
        Some(canonical) => canonical.clone(),
        None => phrase.to_string(),
    }
}

/// Alias-resolve every matched phrase in place, category by category.
///
/// Exceptions are intentionally left as surface forms here; they resolve
/// at tag-emission time so the evidence record and the tag agree.
#[must_use]
pub fn standardize(aliases: &AliasTables, mut matches: MatchSet) -> MatchSet {
    for mission in &mut matches.missions {
        *mission = resolve(aliases, Category::Mission, mission);
    }
    for instrument in &mut matches.instruments {
        *instrument = resolve(aliases, Category::Instrument, instrument);
    }
    for variable in &mut matches.variables {
        *variable = resolve(aliases, Category::Variable, variable);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn aliases() -> AliasTables {
        AliasTables {
            mission_aliases: [("earth observing system".to_string(), "EOS".to_string())].into(),
            instrument_aliases: [("microwave limb sounder".to_string(), "mls".to_string())].into(),
            var_aliases: [("water vapor".to_string(), "h2o".to_string())].into(),
            exception_aliases: [("merra version 2".to_string(), "merra-2".to_string())].into(),
        }
    }

    #[test]
    fn missions_resolve_to_lowercase() {
        assert_eq!(
            resolve(&aliases(), Category::Mission, "earth observing system"),
            "eos"
        );
    }

    #[test]
    fn instruments_keep_declared_casing() {
        assert_eq!(
            resolve(&aliases(), Category::Instrument, "microwave limb sounder"),
            "mls"
        );
    }

    #[test]
    fn unaliased_phrases_are_self_canonical() {
        assert_eq!(resolve(&aliases(), Category::Variable, "o3"), "o3");
    }

    #[test]
    fn alias_target_outside_vocabulary_is_not_an_error() {
        // "merra version 2" maps to "merra-2" whether or not "merra-2"
        // appears in the exception phrase list.
        assert_eq!(
            resolve(&aliases(), Category::Exception, "merra version 2"),
            "merra-2"
        );
    }

    #[test]
    fn standardize_rewrites_entities_but_not_exceptions() {
        let matches = MatchSet {
            missions: vec!["aura".into()],
            instruments: vec!["mls".into(), "microwave limb sounder".into()],
            variables: vec!["water vapor".into()],
            exceptions: vec!["merra version 2".into()],
        };
        let resolved = standardize(&aliases(), matches);
        assert_eq!(resolved.missions, ["aura"]);
        assert_eq!(resolved.instruments, ["mls", "mls"]);
        assert_eq!(resolved.variables, ["h2o"]);
        assert_eq!(resolved.exceptions, ["merra version 2"]);
    }
}
