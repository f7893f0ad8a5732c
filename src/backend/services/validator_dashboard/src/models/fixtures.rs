//! Reference dataset served by the fixture source.
//!
//! Each function builds fresh owned values; nothing here is cached.

use dashboard_models::{
    Network, NetworkStatus, NetworkType, Node, PerformanceSample, Snapshot, ValidatorData,
    ValidatorStatus, ValidatorSummary,
};

pub fn validator_summary() -> ValidatorSummary {
    ValidatorSummary {
        uptime: "99.8%".to_string(),
        voting_power: 1_234_567,
        delegators: 892,
        total_staked: "45.2M ATOM".to_string(),
        commission: "5%".to_string(),
        status: ValidatorStatus::Active,
    }
}

pub fn nodes() -> Vec<Node> {
    vec![
        Node {
            id: "cosmosvaloper1abc123".to_string(),
            name: "Cosmos Hub Validator".to_string(),
            uptime: "99.9%".to_string(),
            voting_power: 500_000,
            delegators: 234,
            status: ValidatorStatus::Active,
            commission: "5%".to_string(),
            last_seen: "2 minutes ago".to_string(),
            network: "Cosmos Hub".to_string(),
        },
        Node {
            id: "osmovaloper1def456".to_string(),
            name: "Osmosis Validator".to_string(),
            uptime: "98.5%".to_string(),
            voting_power: 300_000,
            delegators: 189,
            status: ValidatorStatus::Active,
            commission: "7%".to_string(),
            last_seen: "1 minute ago".to_string(),
            network: "Osmosis".to_string(),
        },
        Node {
            id: "junovaloper1ghi789".to_string(),
            name: "Juno Validator".to_string(),
            uptime: "97.2%".to_string(),
            voting_power: 234_567,
            delegators: 156,
            status: ValidatorStatus::Jailed,
            commission: "8%".to_string(),
            last_seen: "15 minutes ago".to_string(),
            network: "Juno".to_string(),
        },
        Node {
            id: "akashvaloper1jkl012".to_string(),
            name: "Akash Validator".to_string(),
            uptime: "99.1%".to_string(),
            voting_power: 200_000,
            delegators: 313,
            status: ValidatorStatus::Active,
            commission: "6%".to_string(),
            last_seen: "30 seconds ago".to_string(),
            network: "Akash".to_string(),
        },
    ]
}

pub fn performance() -> Vec<PerformanceSample> {
    [
        ("00:00", 99.5, 1_200_000, 850),
        ("04:00", 99.7, 1_210_000, 860),
        ("08:00", 99.8, 1_220_000, 870),
        ("12:00", 99.6, 1_230_000, 880),
        ("16:00", 99.9, 1_234_567, 892),
        ("20:00", 99.8, 1_240_000, 900),
    ]
    .into_iter()
    .map(|(time, uptime, voting_power, delegators)| PerformanceSample {
        time: time.to_string(),
        uptime,
        voting_power,
        delegators,
    })
    .collect()
}

pub fn networks() -> Vec<Network> {
    vec![
        Network {
            id: "cosmoshub-4".to_string(),
            name: "Cosmos Hub".to_string(),
            network_type: NetworkType::Mainnet,
            status: NetworkStatus::Active,
            validators: 175,
            total_staked: "245.6M ATOM".to_string(),
            block_height: 18_234_567,
            block_time: "6.8s".to_string(),
        },
        Network {
            id: "osmosis-1".to_string(),
            name: "Osmosis".to_string(),
            network_type: NetworkType::Mainnet,
            status: NetworkStatus::Active,
            validators: 150,
            total_staked: "156.3M OSMO".to_string(),
            block_height: 12_456_789,
            block_time: "5.2s".to_string(),
        },
        Network {
            id: "juno-1".to_string(),
            name: "Juno".to_string(),
            network_type: NetworkType::Mainnet,
            status: NetworkStatus::Active,
            validators: 125,
            total_staked: "89.4M JUNO".to_string(),
            block_height: 9_876_543,
            block_time: "6.1s".to_string(),
        },
        Network {
            id: "theta-testnet-001".to_string(),
            name: "Cosmos Hub Testnet".to_string(),
            network_type: NetworkType::Testnet,
            status: NetworkStatus::Active,
            validators: 50,
            total_staked: "12.3M ATOM".to_string(),
            block_height: 5_432_109,
            block_time: "6.5s".to_string(),
        },
    ]
}

pub fn validator_data() -> ValidatorData {
    ValidatorData {
        summary: validator_summary(),
        nodes: nodes(),
        performance: performance(),
        networks: networks(),
    }
}

/// One snapshot per mainnet, taken at the mainnet's current height.
pub fn snapshots() -> Vec<Snapshot> {
    [
        ("Cosmos Hub", 18_234_567, "2.3 GB"),
        ("Osmosis", 12_456_789, "1.8 GB"),
        ("Juno", 9_876_543, "1.2 GB"),
    ]
    .into_iter()
    .map(|(network, height, size)| Snapshot {
        network: network.to_string(),
        height,
        size: size.to_string(),
        date: "2024-01-15".to_string(),
        download_url: "#".to_string(),
    })
    .collect()
}
