use serde::{Deserialize, Serialize};

/// One point of the 24 hour performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    /// Hour label, e.g. "04:00"
    pub time: String,
    /// Uptime percentage in the range 0-100
    pub uptime: f64,
    pub voting_power: u64,
    pub delegators: u32,
}
