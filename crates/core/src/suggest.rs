//! Autocomplete suggestions over catalogued symptom tags.

use symcheck_types::normalise;

use crate::config::CoreConfig;

/// Suggest tags containing `input`, skipping those already `selected`.
///
/// Nothing is suggested until the trimmed input has at least
/// [`CoreConfig::suggestion_min_chars`] characters. Matching is a case-insensitive substring
/// test; the order of `tags` is kept and at most [`CoreConfig::suggestion_limit`] are returned.
/// `selected` entries are compared after normalisation.
pub fn suggest<'t, S: AsRef<str>>(
    tags: &[&'t str],
    input: &str,
    selected: &[S],
    config: &CoreConfig,
) -> Vec<&'t str> {
    if input.trim().chars().count() < config.suggestion_min_chars() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    tags.iter()
        .copied()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .filter(|tag| !selected.iter().any(|s| normalise(s.as_ref()) == *tag))
        .take(config.suggestion_limit())
        .collect()
}
