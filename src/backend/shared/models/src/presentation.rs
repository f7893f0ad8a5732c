//! Mapping from domain enumerations to display badges.
//!
//! Every mapping is an exhaustive `match`, so adding a status variant fails to
//! compile until it is given a badge.

use serde::Serialize;

use crate::{NetworkStatus, NetworkType, ValidatorStatus};

/// Colour family a front end should use for a badge or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Warning,
    Critical,
    Accent,
    Info,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

pub trait Presentable {
    fn badge(&self) -> Badge;
}

impl Presentable for ValidatorStatus {
    fn badge(&self) -> Badge {
        let tone = match self {
            ValidatorStatus::Active => Tone::Positive,
            ValidatorStatus::Jailed => Tone::Warning,
            ValidatorStatus::Tombstoned => Tone::Critical,
        };
        Badge { label: self.as_str(), tone }
    }
}

impl Presentable for NetworkStatus {
    fn badge(&self) -> Badge {
        let tone = match self {
            NetworkStatus::Active => Tone::Positive,
            NetworkStatus::Inactive => Tone::Critical,
        };
        Badge { label: self.as_str(), tone }
    }
}

impl Presentable for NetworkType {
    fn badge(&self) -> Badge {
        let tone = match self {
            NetworkType::Mainnet => Tone::Accent,
            NetworkType::Testnet => Tone::Info,
        };
        Badge { label: self.as_str(), tone }
    }
}

/// Parses a percentage such as `"99.8%"`. The `%` sign is optional.
pub fn parse_percent(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches('%')
        .trim_end()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Health bucket for a node's uptime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UptimeTier {
    /// 99% and above
    Healthy,
    /// 95% up to 99%
    Degraded,
    Critical,
}

impl UptimeTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 99.0 {
            Self::Healthy
        } else if percent >= 95.0 {
            Self::Degraded
        } else {
            Self::Critical
        }
    }

    /// Unparseable values are treated as critical.
    pub fn from_display(uptime: &str) -> Self {
        parse_percent(uptime).map_or(Self::Critical, Self::from_percent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }
}

impl Presentable for UptimeTier {
    fn badge(&self) -> Badge {
        let tone = match self {
            Self::Healthy => Tone::Positive,
            Self::Degraded => Tone::Warning,
            Self::Critical => Tone::Critical,
        };
        Badge { label: self.as_str(), tone }
    }
}

/// Direction hint shown next to a summary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub fn arrow(&self) -> Option<&'static str> {
        match self {
            Self::Up => Some("↗"),
            Self::Down => Some("↘"),
            Self::Neutral => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Up => Tone::Positive,
            Self::Down => Tone::Critical,
            Self::Neutral => Tone::Muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_status_badges() {
        assert_eq!(ValidatorStatus::Active.badge().tone, Tone::Positive);
        assert_eq!(ValidatorStatus::Jailed.badge().tone, Tone::Warning);
        assert_eq!(ValidatorStatus::Tombstoned.badge().tone, Tone::Critical);
        assert_eq!(ValidatorStatus::Tombstoned.badge().label, "tombstoned");
    }

    #[test]
    fn network_badges() {
        assert_eq!(NetworkStatus::Inactive.badge().tone, Tone::Critical);
        assert_eq!(NetworkType::Mainnet.badge().tone, Tone::Accent);
        assert_eq!(NetworkType::Testnet.badge().tone, Tone::Info);
    }

    #[test]
    fn uptime_tiers_use_inclusive_thresholds() {
        assert_eq!(UptimeTier::from_display("99.0%"), UptimeTier::Healthy);
        assert_eq!(UptimeTier::from_display("98.5%"), UptimeTier::Degraded);
        assert_eq!(UptimeTier::from_display("95%"), UptimeTier::Degraded);
        assert_eq!(UptimeTier::from_display("94.9%"), UptimeTier::Critical);
        assert_eq!(UptimeTier::from_display("n/a"), UptimeTier::Critical);
    }

    #[test]
    fn uptime_tier_badges() {
        assert_eq!(UptimeTier::Healthy.badge(), Badge { label: "healthy", tone: Tone::Positive });
        assert_eq!(UptimeTier::Degraded.badge().tone, Tone::Warning);
        assert_eq!(UptimeTier::Critical.badge().tone, Tone::Critical);
    }

    #[test]
    fn parse_percent_accepts_optional_sign() {
        assert_eq!(parse_percent("99.8%"), Some(99.8));
        assert_eq!(parse_percent(" 97.2 % "), Some(97.2));
        assert_eq!(parse_percent("42"), Some(42.0));
        assert_eq!(parse_percent("%"), None);
        assert_eq!(parse_percent("NaN%"), None);
    }

    #[test]
    fn neutral_trend_has_no_arrow() {
        assert_eq!(Trend::Up.arrow(), Some("↗"));
        assert_eq!(Trend::Neutral.arrow(), None);
    }

    #[test]
    fn trend_tones() {
        assert_eq!(Trend::Up.tone(), Tone::Positive);
        assert_eq!(Trend::Down.tone(), Tone::Critical);
        assert_eq!(Trend::Down.arrow(), Some("↘"));
        assert_eq!(Trend::default().tone(), Tone::Muted);
    }
}
