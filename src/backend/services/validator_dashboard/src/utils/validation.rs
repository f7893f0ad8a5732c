//! Sanity checks applied to every dataset before it is handed to a page.
//!
//! A source that violates these is reported as a fetch failure rather than
//! returning partially usable data.

use anyhow::{bail, ensure, Result};
use dashboard_models::{presentation::parse_percent, Identifiable, Snapshot, ValidatorData};

use super::format::parse_gigabytes;

fn check_percent(field: &str, value: &str) -> Result<()> {
    match parse_percent(value) {
        Some(percent) if (0.0..=100.0).contains(&percent) => Ok(()),
        _ => bail!("{field} `{value}` is not a percentage"),
    }
}

// Repeated ids are tolerated; missing ones are not.
fn check_ids<I: Identifiable>(kind: &str, items: &[I]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        ensure!(!item.id().is_empty(), "{kind} #{index} has an empty id");
    }
    Ok(())
}

pub fn validate_validator_data(data: &ValidatorData) -> Result<()> {
    check_percent("summary uptime", &data.summary.uptime)?;
    check_percent("summary commission", &data.summary.commission)?;

    check_ids("node", &data.nodes)?;
    for node in &data.nodes {
        check_percent(&format!("uptime of node {}", node.id), &node.uptime)?;
        check_percent(&format!("commission of node {}", node.id), &node.commission)?;
    }

    for sample in &data.performance {
        ensure!(
            (0.0..=100.0).contains(&sample.uptime),
            "performance sample {} has uptime {} outside 0-100",
            sample.time,
            sample.uptime
        );
    }

    check_ids("network", &data.networks)
}

pub fn validate_snapshots(snapshots: &[Snapshot]) -> Result<()> {
    for snapshot in snapshots {
        ensure!(
            parse_gigabytes(&snapshot.size).is_some(),
            "snapshot of {} has unreadable size `{}`",
            snapshot.network,
            snapshot.size
        );
    }
    Ok(())
}
