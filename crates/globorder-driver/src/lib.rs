//! globorder driver library
//!
//! The I/O side of globorder: reading input files, printing the
//! dependency graph, and rendering cycle reports.

pub mod diagnostics;
pub mod error;
pub mod sources;

pub use diagnostics::{render_graph, report_cycle};
pub use error::DriverError;
pub use sources::load_sources;
