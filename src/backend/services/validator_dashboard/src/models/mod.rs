pub mod fixtures;

pub use dashboard_models::{
    presentation, Identifiable, Network, NetworkStatus, NetworkType, Node, PerformanceSample,
    Snapshot, ValidatorData, ValidatorStatus, ValidatorSummary,
};
