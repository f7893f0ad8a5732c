//! Derived figures the pages show above their tables.

use serde::Serialize;
use std::str::FromStr;

use dashboard_models::{
    presentation::{Tone, Trend},
    ParseEnumError,
};

use crate::{
    models::{Network, NetworkStatus, NetworkType, Snapshot, ValidatorSummary},
    utils::format::{format_number, parse_gigabytes},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    pub trend: Trend,
    pub tone: Tone,
}

impl InfoCard {
    fn new(title: &'static str, value: String, subtitle: String, trend: Trend) -> Self {
        Self {
            title,
            value,
            subtitle,
            trend,
            tone: trend.tone(),
        }
    }
}

/// The four headline cards of the dashboard page, in display order.
pub fn summary_cards(summary: &ValidatorSummary) -> [InfoCard; 4] {
    [
        InfoCard::new(
            "Total Uptime",
            summary.uptime.clone(),
            "Last 30 days".to_string(),
            Trend::Up,
        ),
        InfoCard::new(
            "Voting Power",
            format_number(summary.voting_power),
            "Current delegation".to_string(),
            Trend::Up,
        ),
        InfoCard::new(
            "Delegators",
            summary.delegators.to_string(),
            "Active delegators".to_string(),
            Trend::Neutral,
        ),
        InfoCard::new(
            "Total Staked",
            summary.total_staked.clone(),
            format!("{} commission", summary.commission),
            Trend::Up,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NetworkStats {
    pub total: usize,
    pub mainnets: usize,
    pub testnets: usize,
    pub active: usize,
}

impl NetworkStats {
    pub fn from_networks(networks: &[Network]) -> Self {
        networks.iter().fold(Self::default(), |mut stats, network| {
            stats.total += 1;
            match network.network_type {
                NetworkType::Mainnet => stats.mainnets += 1,
                NetworkType::Testnet => stats.testnets += 1,
            }
            if network.status == NetworkStatus::Active {
                stats.active += 1;
            }
            stats
        })
    }
}

/// Tabs of the networks page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkTab {
    #[default]
    All,
    Only(NetworkType),
}

impl NetworkTab {
    pub fn matches(&self, network: &Network) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => network.network_type == *kind,
        }
    }

    pub fn filter<'a>(&self, networks: &'a [Network]) -> Vec<&'a Network> {
        networks.iter().filter(|n| self.matches(n)).collect()
    }
}

impl From<NetworkType> for NetworkTab {
    fn from(kind: NetworkType) -> Self {
        Self::Only(kind)
    }
}

impl FromStr for NetworkTab {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<NetworkType>().map(Self::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotStats {
    pub count: usize,
    pub total_size_gb: f64,
    pub latest_date: Option<String>,
}

impl SnapshotStats {
    /// Sizes that cannot be read count as zero.
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        // `Sum` for f64 starts at -0.0, which would display as "-0.0".
        let total_size_gb = snapshots
            .iter()
            .filter_map(|s| parse_gigabytes(&s.size))
            .fold(0.0, |total, size| total + size);

        // ISO dates order lexicographically; the first of equal dates wins.
        let latest_date = snapshots
            .iter()
            .fold(None::<&Snapshot>, |latest, current| match latest {
                Some(latest) if current.date <= latest.date => Some(latest),
                _ => Some(current),
            })
            .map(|s| s.date.clone());

        Self {
            count: snapshots.len(),
            total_size_gb,
            latest_date,
        }
    }

    /// Total size rounded to one decimal, e.g. `"5.3"`.
    pub fn total_size_display(&self) -> String {
        format!("{:.1}", self.total_size_gb)
    }
}
