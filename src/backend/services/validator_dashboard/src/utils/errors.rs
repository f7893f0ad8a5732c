use serde::Serialize;
use std::{fmt, time::Duration};
use thiserror::Error;

/// The three accessors a page can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ValidatorData,
    NetworkData,
    SnapshotData,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Self::ValidatorData, Self::NetworkData, Self::SnapshotData];

    /// Message a page shows in its error panel.
    pub fn user_message(&self) -> String {
        format!("Failed to load {self}. Please try again later.")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ValidatorData => "validator data",
            Self::NetworkData => "network data",
            Self::SnapshotData => "snapshot data",
        })
    }
}

/// The single failure kind of the data provider. A fetch either yields a
/// complete record set or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("fetching {operation} timed out after {}ms", .after.as_millis())]
    Timeout { operation: Operation, after: Duration },

    #[error("failed to fetch {operation}: {reason}")]
    Failed { operation: Operation, reason: String },
}

impl FetchError {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Timeout { operation, .. } | Self::Failed { operation, .. } => *operation,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn user_message(&self) -> String {
        self.operation().user_message()
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
