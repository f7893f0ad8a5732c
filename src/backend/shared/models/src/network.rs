use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Identifiable, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

impl NetworkType {
    pub const ALL: [NetworkType; 2] = [Self::Mainnet, Self::Testnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("network type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Active,
    Inactive,
}

impl NetworkStatus {
    pub const ALL: [NetworkStatus; 2] = [Self::Active, Self::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("network status", s))
    }
}

/// Chain-level metadata for one network we validate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Chain id, e.g. "cosmoshub-4"
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    pub status: NetworkStatus,
    /// Size of the active validator set
    pub validators: u32,
    pub total_staked: String,
    pub block_height: u64,
    pub block_time: String,
}

impl Identifiable for Network {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Network {
    pub fn is_mainnet(&self) -> bool {
        self.network_type == NetworkType::Mainnet
    }
}
