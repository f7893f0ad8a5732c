use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Identifiable, Network, ParseEnumError, PerformanceSample};

/// Consensus standing of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorStatus {
    /// Signing blocks and eligible for rewards
    Active,
    /// Temporarily removed from the set, e.g. for downtime
    Jailed,
    /// Permanently removed, e.g. for double-signing
    Tombstoned,
}

impl ValidatorStatus {
    pub const ALL: [ValidatorStatus; 3] = [Self::Active, Self::Jailed, Self::Tombstoned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Jailed => "jailed",
            Self::Tombstoned => "tombstoned",
        }
    }
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("validator status", s))
    }
}

/// Aggregate snapshot across every validator we operate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorSummary {
    pub uptime: String,
    pub voting_power: u64,
    pub delegators: u32,
    pub total_staked: String,
    pub commission: String,
    pub status: ValidatorStatus,
}

/// One validator instance on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub uptime: String,
    pub voting_power: u64,
    pub delegators: u32,
    pub status: ValidatorStatus,
    pub commission: String,
    pub last_seen: String,
    pub network: String,
}

impl Identifiable for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Everything the dashboard page renders, produced by a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorData {
    pub summary: ValidatorSummary,
    pub nodes: Vec<Node>,
    pub performance: Vec<PerformanceSample>,
    pub networks: Vec<Network>,
}

impl ValidatorData {
    /// Nodes with the given status, in their original order.
    pub fn nodes_with_status(&self, status: ValidatorStatus) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| node.status == status)
    }

    /// Nodes running on the named network, in their original order.
    pub fn nodes_on_network<'a>(&'a self, network: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes
            .iter()
            .filter(move |node| node.network.eq_ignore_ascii_case(network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, status: ValidatorStatus, network: &str) -> Node {
        Node {
            id: id.to_string(),
            name: format!("{id} validator"),
            uptime: "99.0%".to_string(),
            voting_power: 1,
            delegators: 1,
            status,
            commission: "5%".to_string(),
            last_seen: "now".to_string(),
            network: network.to_string(),
        }
    }

    #[test]
    fn status_round_trips_through_wire_names() {
        for status in ValidatorStatus::ALL {
            assert_eq!(status.as_str().parse::<ValidatorStatus>(), Ok(status));
        }
        assert_eq!("JAILED".parse::<ValidatorStatus>(), Ok(ValidatorStatus::Jailed));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "slashed".parse::<ValidatorStatus>().unwrap_err();
        assert_eq!(err.kind, "validator status");
        assert_eq!(err.to_string(), "invalid validator status `slashed`");
    }

    #[test]
    fn node_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(node("abc", ValidatorStatus::Tombstoned, "Juno")).unwrap();
        assert_eq!(json["votingPower"], 1);
        assert_eq!(json["lastSeen"], "now");
        assert_eq!(json["status"], "tombstoned");
    }

    #[test]
    fn status_outside_enumeration_fails_to_deserialize() {
        let result = serde_json::from_str::<ValidatorStatus>("\"retired\"");
        assert!(result.is_err());
    }

    #[test]
    fn node_filters_preserve_order() {
        let data = ValidatorData {
            summary: ValidatorSummary {
                uptime: "99%".to_string(),
                voting_power: 3,
                delegators: 3,
                total_staked: "3 ATOM".to_string(),
                commission: "5%".to_string(),
                status: ValidatorStatus::Active,
            },
            nodes: vec![
                node("a", ValidatorStatus::Active, "Juno"),
                node("b", ValidatorStatus::Jailed, "Osmosis"),
                node("c", ValidatorStatus::Active, "Osmosis"),
            ],
            performance: vec![],
            networks: vec![],
        };

        let active: Vec<_> = data
            .nodes_with_status(ValidatorStatus::Active)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(active, ["a", "c"]);

        let osmosis: Vec<_> = data.nodes_on_network("osmosis").map(|n| n.id()).collect();
        assert_eq!(osmosis, ["b", "c"]);
    }
}
