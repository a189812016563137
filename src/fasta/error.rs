use std::path::PathBuf;
use thiserror::Error;

use crate::result::Failure;

/// Error returned when loading a FASTA file
#[derive(Debug, Error)]
pub enum FastaError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid FASTA document: {0}")]
    Parse(#[from] Failure),
}
