use crate::errors::GotoWindowError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Failed to read host snapshot '{path}': {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse host snapshot: {message}")]
    SnapshotParse { message: String },

    #[error("Host snapshot lists window {id} more than once")]
    DuplicateWindow { id: u64 },
}

impl GotoWindowError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::SnapshotRead { .. } => "HOST_SNAPSHOT_READ_FAILED",
            HostError::SnapshotParse { .. } => "HOST_SNAPSHOT_PARSE_ERROR",
            HostError::DuplicateWindow { .. } => "HOST_DUPLICATE_WINDOW",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            HostError::SnapshotParse { .. } | HostError::DuplicateWindow { .. }
        )
    }
}
