use dashboard_models::presentation::{Presentable, UptimeTier};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;
use tracing::warn;
use validator_dashboard::{
    models::{Network, Node, Snapshot, ValidatorData},
    utils::format::{format_number, short_id},
    views::{summary_cards, NetworkStats, NetworkTab, SnapshotStats},
    DashboardService, PageController, ViewState,
};

use crate::types::{NodeFilter, OutputFormat};

/// Error type for dashboard commands
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Unavailable(String),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Commands for the dashboard pages
pub struct DashboardCommands {
    service: DashboardService,
    format: OutputFormat,
    retries: u32,
}

impl DashboardCommands {
    pub fn new(service: DashboardService, format: OutputFormat, retries: u32) -> Self {
        Self {
            service,
            format,
            retries,
        }
    }

    /// Headline cards, status and the performance series
    pub async fn summary(&self) -> Result<String, Error> {
        let data = self
            .load(PageController::dashboard(self.service.clone()))
            .await?;

        match self.format {
            OutputFormat::Json => to_json(&data),
            OutputFormat::Table => Ok(render_summary(&data)),
        }
    }

    /// Validator nodes, optionally narrowed by status or network
    pub async fn nodes(&self, filter: &NodeFilter) -> Result<String, Error> {
        let data = self
            .load(PageController::dashboard(self.service.clone()))
            .await?;

        let nodes: Vec<&Node> = match (filter.status, filter.network.as_deref()) {
            (Some(status), Some(network)) => data
                .nodes_with_status(status)
                .filter(|node| {
                    data.nodes_on_network(network)
                        .any(|other| std::ptr::eq(other, *node))
                })
                .collect(),
            (Some(status), None) => data.nodes_with_status(status).collect(),
            (None, Some(network)) => data.nodes_on_network(network).collect(),
            (None, None) => data.nodes.iter().collect(),
        };

        match self.format {
            OutputFormat::Json => to_json(&nodes),
            OutputFormat::Table => Ok(render_nodes(&nodes)),
        }
    }

    pub async fn networks(&self, tab: NetworkTab) -> Result<String, Error> {
        let networks = self
            .load(PageController::networks(self.service.clone()))
            .await?;
        let shown = tab.filter(&networks);

        match self.format {
            OutputFormat::Json => to_json(&shown),
            OutputFormat::Table => Ok(render_networks(
                &NetworkStats::from_networks(&networks),
                &shown,
            )),
        }
    }

    pub async fn snapshots(&self) -> Result<String, Error> {
        let snapshots = self
            .load(PageController::snapshots(self.service.clone()))
            .await?;

        match self.format {
            OutputFormat::Json => to_json(&snapshots),
            OutputFormat::Table => Ok(render_snapshots(&snapshots)),
        }
    }

    /// Activates the page and waits for it to settle, using the retry
    /// action of the error panel up to the configured number of times.
    async fn load<T>(&self, page: PageController<T>) -> Result<T, Error>
    where
        T: Clone + Send + Sync + 'static,
    {
        eprintln!("Loading {} ...", page.name());
        page.activate();

        let mut attempts_left = self.retries;
        loop {
            match page.settled().await {
                ViewState::Ready(data) => return Ok(data),
                ViewState::Error(message) if attempts_left > 0 => {
                    attempts_left -= 1;
                    warn!(page = page.name(), attempts_left, "Fetch failed, retrying");
                    eprintln!("{message} Retrying...");
                    page.retry();
                }
                ViewState::Error(message) => return Err(Error::Unavailable(message)),
                ViewState::Loading => {
                    return Err(Error::Unavailable(format!(
                        "Loading {} was interrupted.",
                        page.name()
                    )))
                }
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_summary(data: &ValidatorData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Validator Dashboard");
    let _ = writeln!(out);

    for card in summary_cards(&data.summary) {
        let value = match card.trend.arrow() {
            Some(arrow) => format!("{} {}", card.value, arrow),
            None => card.value,
        };
        let _ = writeln!(out, "{:<14} {:<16} {}", card.title, value, card.subtitle);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Status: {}   Commission: {}",
        data.summary.status.badge().label.to_uppercase(),
        data.summary.commission
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Performance Metrics (Last 24 Hours)");
    let _ = writeln!(out, "{:<6} {:>7} {:>14} {:>11}", "TIME", "UPTIME", "VOTING POWER", "DELEGATORS");
    for sample in &data.performance {
        let _ = writeln!(
            out,
            "{:<6} {:>6.1}% {:>14} {:>11}",
            sample.time,
            sample.uptime,
            format_number(sample.voting_power),
            format_number(u64::from(sample.delegators))
        );
    }
    out
}

fn render_nodes(nodes: &[&Node]) -> String {
    if nodes.is_empty() {
        return "No node data available.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<12} {:<18} {:>12} {:>10} {:<6} {:<11} LAST SEEN",
        "VALIDATOR", "NETWORK", "UPTIME", "VOTING POWER", "DELEGATORS", "COMM", "STATUS"
    );
    for node in nodes {
        let uptime = format!(
            "{} ({})",
            node.uptime,
            UptimeTier::from_display(&node.uptime).badge().label
        );
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:<18} {:>12} {:>10} {:<6} {:<11} {}",
            short_id(&node.id),
            node.network,
            uptime,
            format_number(node.voting_power),
            format_number(u64::from(node.delegators)),
            node.commission,
            node.status.badge().label,
            node.last_seen
        );
    }
    out
}

fn render_networks(stats: &NetworkStats, networks: &[&Network]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Networks: {}   Mainnets: {}   Testnets: {}   Active: {}",
        stats.total, stats.mainnets, stats.testnets, stats.active
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20} {:<20} {:<8} {:<9} {:>10} {:>12} {:>14} BLOCK TIME",
        "ID", "NAME", "TYPE", "STATUS", "VALIDATORS", "BLOCK HEIGHT", "TOTAL STAKED"
    );
    for network in networks {
        let _ = writeln!(
            out,
            "{:<20} {:<20} {:<8} {:<9} {:>10} {:>12} {:>14} {}",
            network.id,
            network.name,
            network.network_type.badge().label,
            network.status.badge().label,
            format_number(u64::from(network.validators)),
            format_number(network.block_height),
            network.total_staked,
            network.block_time
        );
    }
    out
}

fn render_snapshots(snapshots: &[Snapshot]) -> String {
    let stats = SnapshotStats::from_snapshots(snapshots);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Available Snapshots: {}   Total Size: {} GB   Latest Update: {}",
        stats.count,
        stats.total_size_display(),
        stats.latest_date.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>8} {:<10} DOWNLOAD",
        "NETWORK", "HEIGHT", "SIZE", "DATE"
    );
    for snapshot in snapshots {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>8} {:<10} {}",
            snapshot.network,
            format_number(snapshot.height),
            snapshot.size,
            snapshot.date,
            snapshot.download_url
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use validator_dashboard::{models::fixtures, repositories::FixtureSource, FetchConfig};

    fn commands(format: OutputFormat, failures: u32, retries: u32) -> DashboardCommands {
        let service = DashboardService::new(
            Arc::new(FixtureSource::failing_for(failures)),
            FetchConfig::default(),
        );
        DashboardCommands::new(service, format, retries)
    }

    #[tokio::test(start_paused = true)]
    async fn summary_table_shows_grouped_voting_power() {
        let out = commands(OutputFormat::Table, 0, 0).summary().await.unwrap();

        assert!(out.contains("1,234,567 ↗"));
        assert!(out.contains("Status: ACTIVE   Commission: 5%"));
        assert!(out.contains("20:00"));
    }

    #[tokio::test(start_paused = true)]
    async fn nodes_can_be_filtered_by_status() {
        let filter = NodeFilter {
            status: Some(dashboard_models::ValidatorStatus::Jailed),
            network: None,
        };
        let out = commands(OutputFormat::Json, 0, 0)
            .nodes(&filter)
            .await
            .unwrap();

        let nodes: Vec<Node> = serde_json::from_str(&out).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].network, "Juno");
    }

    #[tokio::test(start_paused = true)]
    async fn status_and_network_filters_combine() {
        let filter = NodeFilter {
            status: Some(dashboard_models::ValidatorStatus::Active),
            network: Some("osmosis".to_string()),
        };
        let out = commands(OutputFormat::Json, 0, 0)
            .nodes(&filter)
            .await
            .unwrap();

        let nodes: Vec<Node> = serde_json::from_str(&out).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "osmovaloper1def456");

        let jailed_on_osmosis = NodeFilter {
            status: Some(dashboard_models::ValidatorStatus::Jailed),
            network: Some("Osmosis".to_string()),
        };
        let out = commands(OutputFormat::Table, 0, 0)
            .nodes(&jailed_on_osmosis)
            .await
            .unwrap();
        assert_eq!(out, "No node data available.\n");
    }

    #[tokio::test(start_paused = true)]
    async fn node_table_shows_uptime_tier() {
        let out = commands(OutputFormat::Table, 0, 0)
            .nodes(&NodeFilter::default())
            .await
            .unwrap();
        assert!(out.contains("(healthy)"));
    }

    #[tokio::test(start_paused = true)]
    async fn unmatched_filter_renders_empty_message() {
        let filter = NodeFilter {
            status: None,
            network: Some("Cosmos Hub Testnet".to_string()),
        };
        let out = commands(OutputFormat::Table, 0, 0)
            .nodes(&filter)
            .await
            .unwrap();
        assert_eq!(out, "No node data available.\n");
    }

    #[tokio::test(start_paused = true)]
    async fn networks_tab_limits_rows_but_not_stats() {
        let out = commands(OutputFormat::Table, 0, 0)
            .networks(NetworkTab::Only(dashboard_models::NetworkType::Testnet))
            .await
            .unwrap();

        assert!(out.contains("Total Networks: 4   Mainnets: 3   Testnets: 1   Active: 4"));
        assert!(out.contains("theta-testnet-001"));
        assert!(!out.contains("osmosis-1"));
    }

    #[tokio::test(start_paused = true)]
    async fn retries_after_a_failed_fetch() {
        let out = commands(OutputFormat::Json, 1, 1).snapshots().await.unwrap();

        let snapshots: Vec<Snapshot> = serde_json::from_str(&out).unwrap();
        assert_eq!(snapshots, fixtures::snapshots());
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_when_retries_are_exhausted() {
        let err = commands(OutputFormat::Table, 2, 1)
            .snapshots()
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to load snapshot data. Please try again later."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_table_includes_totals() {
        let out = commands(OutputFormat::Table, 0, 0).snapshots().await.unwrap();
        assert!(out.contains("Available Snapshots: 3   Total Size: 5.3 GB   Latest Update: 2024-01-15"));
    }
}
