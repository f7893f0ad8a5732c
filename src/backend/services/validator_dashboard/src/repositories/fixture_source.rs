use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::warn;

use crate::models::{fixtures, Snapshot, ValidatorData};
use crate::repositories::traits::DataSource;

/// Serves the reference dataset.
///
/// Can be told to fail its next `n` loads, which lets front ends exercise
/// their error and retry paths against an otherwise deterministic source.
#[derive(Debug, Default)]
pub struct FixtureSource {
    forced_failures: AtomicU32,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(loads: u32) -> Self {
        Self {
            forced_failures: AtomicU32::new(loads),
        }
    }

    fn take_forced_failure(&self) -> bool {
        self.forced_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn load_validator_data(&self) -> Result<ValidatorData> {
        if self.take_forced_failure() {
            warn!("fixture source forced to fail validator data load");
            bail!("simulated source outage");
        }
        Ok(fixtures::validator_data())
    }

    async fn load_snapshots(&self) -> Result<Vec<Snapshot>> {
        if self.take_forced_failure() {
            warn!("fixture source forced to fail snapshot load");
            bail!("simulated source outage");
        }
        Ok(fixtures::snapshots())
    }
}
