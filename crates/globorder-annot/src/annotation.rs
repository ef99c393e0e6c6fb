//! `/*global ... */` annotation blocks

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `/*global a, b:true */`. The body may not contain `*`.
static GLOBAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*global\b([^*]*)\*/").expect("valid annotation regex")
});

/// A located `/*global ... */` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Required identifiers, in declaration order
    pub names: Vec<String>,
    /// Byte range of the whole block, delimiters included
    pub span: Range<usize>,
}

/// Find the first annotation block in `text`.
///
/// Entries are split on `,`; anything after a `:` is a qualifier and is
/// dropped. Empty entries (`/*global a,,b*/`, `/*global*/`) are skipped
/// rather than reported.
pub fn find_annotation(text: &str) -> Option<Annotation> {
    let captures = GLOBAL_BLOCK.captures(text)?;
    let block = captures.get(0)?;
    let body = captures.get(1).map_or("", |m| m.as_str());

    let names = body
        .split(',')
        .map(|entry| entry.split_once(':').map_or(entry, |(name, _)| name).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    Some(Annotation {
        names,
        span: block.range(),
    })
}

/// Identifiers a file declares as required. Empty when there is no block.
pub fn extract_requirements(text: &str) -> Vec<String> {
    find_annotation(text)
        .map(|annotation| annotation.names)
        .unwrap_or_default()
}
