//! Loading input files

use std::fs;
use std::path::PathBuf;

use globorder_graph::SourceFile;
use tracing::debug;

use crate::error::DriverError;

/// Read every path into a [`SourceFile`] named by the path as given.
///
/// Stops at the first file that cannot be read.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>, DriverError> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = text.len(), "loaded source");
            Ok(SourceFile::new(path.display().to_string(), text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_missing() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("globorder_sources_{}_{}", std::process::id(), id));
        let _ = fs::create_dir_all(&temp_dir);

        let present = temp_dir.join("present.js");
        fs::write(&present, "/*global x*/\n").unwrap();

        let sources = load_sources(&[present.clone()]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), present.display().to_string());
        assert_eq!(sources[0].requirements(), vec!["x"]);

        let missing = temp_dir.join("missing.js");
        match load_sources(&[present, missing.clone()]) {
            Err(DriverError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Read error, got {:?}", other),
        }

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }
}
