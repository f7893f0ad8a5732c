pub mod validator;
pub mod performance;
pub mod network;
pub mod snapshot;
pub mod presentation;

use thiserror::Error;

pub use network::{Network, NetworkStatus, NetworkType};
pub use performance::PerformanceSample;
pub use snapshot::Snapshot;
pub use validator::{Node, ValidatorData, ValidatorStatus, ValidatorSummary};

// Common shared types and traits
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Returned when a wire name does not belong to an enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
