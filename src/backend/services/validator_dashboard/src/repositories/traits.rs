use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Snapshot, ValidatorData};

/// Where the provider gets its records from. The fixture source answers
/// instantly; latency and timeouts are applied by `DashboardService`.
///
/// Network listings are always projected from `load_validator_data`, so a
/// source cannot serve networks that disagree with its validator dataset.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load_validator_data(&self) -> Result<ValidatorData>;
    async fn load_snapshots(&self) -> Result<Vec<Snapshot>>;
}
