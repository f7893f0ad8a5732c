use serde::{Deserialize, Serialize};

/// A downloadable copy of chain state used to bootstrap a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub network: String,
    pub height: u64,
    /// Display size with the unit embedded, e.g. "2.3 GB"
    pub size: String,
    pub date: String,
    pub download_url: String,
}
