//! Annotation parsing for globorder
//!
//! Reads the two facts a file states about itself: the external
//! identifiers it expects (its `/*global ... */` block) and the
//! identifiers it defines at top level (`var NAME` / `function NAME`).

pub mod annotation;
pub mod declaration;

pub use annotation::{extract_requirements, find_annotation, Annotation};
pub use declaration::extract_definitions;
