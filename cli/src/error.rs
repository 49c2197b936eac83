use std::io;
use std::path::PathBuf;

use group_maker_core::GroupingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Grouping(#[from] GroupingError),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The session reads commands from stdin; pass the names with --input")]
    SessionNeedsInputFile,
}
