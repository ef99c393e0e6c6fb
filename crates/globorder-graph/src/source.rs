//! Input files

use globorder_annot::extract_requirements;

/// A named source file and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Name the file is known by in the graph, usually its path
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identifiers named in this file's `/*global*/` block. Recomputed on
    /// every call.
    pub fn requirements(&self) -> Vec<String> {
        extract_requirements(&self.text)
    }
}
