use anyhow::Context;
use std::{future::Future, sync::Arc};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::{
    config::FetchConfig,
    models::{Network, Snapshot, ValidatorData},
    repositories::{DataSource, FixtureSource},
    utils::{
        errors::{FetchError, Operation, Result},
        validation::{validate_snapshots, validate_validator_data},
    },
};

/// The data provider pages fetch from.
///
/// Every accessor waits its configured delay, loads from the source and
/// validates the result, all under a single timeout. Calls share no state, so
/// the service is cheap to clone into tasks.
#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DataSource>,
    config: FetchConfig,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>, config: FetchConfig) -> Self {
        Self { source, config }
    }

    /// Service backed by the reference dataset
    pub fn with_fixtures(config: FetchConfig) -> Self {
        Self::new(Arc::new(FixtureSource::new()), config)
    }

    pub async fn fetch_validator_data(&self) -> Result<ValidatorData> {
        self.run(Operation::ValidatorData, self.load_validator_data())
            .await
    }

    /// The `networks` of the validator dataset, behind the network delay.
    pub async fn fetch_network_data(&self) -> Result<Vec<Network>> {
        self.run(Operation::NetworkData, async {
            Ok::<_, anyhow::Error>(self.load_validator_data().await?.networks)
        })
        .await
    }

    pub async fn fetch_snapshot_data(&self) -> Result<Vec<Snapshot>> {
        self.run(Operation::SnapshotData, async {
            let snapshots = self.source.load_snapshots().await?;
            validate_snapshots(&snapshots).context("malformed snapshot listing")?;
            Ok::<_, anyhow::Error>(snapshots)
        })
        .await
    }

    async fn load_validator_data(&self) -> anyhow::Result<ValidatorData> {
        let data = self.source.load_validator_data().await?;
        validate_validator_data(&data).context("malformed validator dataset")?;
        Ok(data)
    }

    async fn run<T, F>(&self, operation: Operation, load: F) -> Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        let delay = self.config.delay(operation);
        let timeout = self.config.timeout();
        let started = Instant::now();
        info!(%operation, "Fetching");

        let outcome = time::timeout(timeout, async {
            debug!(%operation, delay_ms = delay.as_millis() as u64, "Simulating network delay");
            time::sleep(delay).await;
            load.await
        })
        .await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match outcome {
            Ok(Ok(value)) => {
                info!(%operation, elapsed_ms, "Fetch resolved");
                Ok(value)
            }
            Ok(Err(err)) => {
                let reason = format!("{err:#}");
                warn!(%operation, elapsed_ms, error = %reason, "Fetch rejected");
                Err(FetchError::Failed { operation, reason })
            }
            Err(_) => {
                warn!(%operation, timeout_ms = timeout.as_millis() as u64, "Fetch timed out");
                Err(FetchError::Timeout {
                    operation,
                    after: timeout,
                })
            }
        }
    }
}
