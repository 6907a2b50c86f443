use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot error: could not read [{path}]: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },
    #[error("Snapshot error: [{path}] is not a valid backend response: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error
    },
    #[error("Snapshot error: reader task failed: {0}")]
    Join(#[from] JoinError)
}
