//! Top-level declaration scanning

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `var NAME` or `function NAME` at the very start of a line. The capture
/// runs to the end of the identifier, so comparing it against a candidate
/// is a whole-word match.
static TOP_LEVEL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:var|function) ([\p{XID_Start}_$][\p{XID_Continue}$]*)")
        .expect("valid declaration regex")
});

/// Which of `candidates` does `text` define at top level?
///
/// Only names in `candidates` are ever reported; unrelated top-level
/// bindings are ignored. Results follow their order of appearance in the
/// text, each name at most once.
pub fn extract_definitions(text: &str, candidates: &HashSet<String>) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    TOP_LEVEL_DECL
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
        .filter(|name| candidates.contains(*name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
