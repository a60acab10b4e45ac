//! Identifiers and session configuration.
//!
//! Scene code names its drop zones with string keys (`"discard"`,
//! `"challenge"`) and tags them with a [`ZoneKind`]. The resolution logic
//! only ever compares ids; kinds are for the collaborators that build zones
//! and pick visuals.
//!
//! [`SessionConfig`] holds the tuning knobs of the drag session. Device
//! profiles produce one via `DeviceProfile::session_config`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Drop zone identifier. Unique within a registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(String);

impl ZoneId {
    /// Create a new zone ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ZoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ZoneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ZoneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a zone is for. Not consulted by hit testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Play a card against the active challenge.
    Challenge,
    /// Throw a card away.
    Discard,
    /// Scenario-specific target.
    #[default]
    Special,
}

/// What `start` does when a drag is already in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestartPolicy {
    /// Refuse the new drag; the active one continues untouched.
    #[default]
    Reject,
    /// Drop the active drag without resolving it and start the new one.
    Replace,
}

/// Drag session tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Minimum time between two expensive hover recomputations
    /// (default: 16ms, roughly one frame at 60Hz).
    pub throttle_interval: Duration,

    /// Behavior when a drag starts while another is active.
    pub restart_policy: RestartPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            throttle_interval: Duration::from_millis(16),
            restart_policy: RestartPolicy::Reject,
        }
    }
}

impl SessionConfig {
    /// Set the throttle interval.
    #[must_use]
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    /// Set the restart policy.
    #[must_use]
    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id() {
        let id = ZoneId::new("discard");
        assert_eq!(id.as_str(), "discard");
        assert_eq!(format!("{}", id), "discard");
        assert_eq!(id, "discard");
        assert_eq!(ZoneId::from("discard"), id);
    }

    #[test]
    fn test_zone_id_ordering() {
        let mut ids: Vec<ZoneId> = ["special", "challenge", "discard"].map(ZoneId::new).into();
        ids.sort();
        let sorted: Vec<ZoneId> = ["challenge", "discard", "special"].map(ZoneId::new).into();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.throttle_interval, Duration::from_millis(16));
        assert_eq!(config.restart_policy, RestartPolicy::Reject);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_throttle_interval(Duration::from_millis(33))
            .with_restart_policy(RestartPolicy::Replace);

        assert_eq!(config.throttle_interval, Duration::from_millis(33));
        assert_eq!(config.restart_policy, RestartPolicy::Replace);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_restart_policy(RestartPolicy::Replace);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let kind: ZoneKind = serde_json::from_str("\"Challenge\"").unwrap();
        assert_eq!(kind, ZoneKind::Challenge);
    }
}
