use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot order status values: {left} and {right} are not comparable")]
    Ordering {
        left: crate::status::order::StatusKind,
        right: crate::status::order::StatusKind,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;
