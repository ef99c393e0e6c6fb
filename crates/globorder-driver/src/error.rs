//! Driver errors

use std::io;
use std::path::PathBuf;

use globorder_graph::CycleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// An input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Cycle(#[from] CycleError),
}
