//! Fleet policy configuration.
//!
//! [`FleetPolicy`] holds the tunable thresholds of the vehicle lifecycle.
//! Defaults reproduce the standard fleet rules: a ride finishing below 20%
//! battery raises a bounty, and a vehicle idle in `ready` for 48 hours is
//! marked `unknown`.

use crate::core::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Highest battery level, and the level a vehicle is reset to when readied.
pub const FULL_BATTERY: u8 = 100;

/// Battery level below which finishing a ride raises a bounty.
pub const DEFAULT_LOW_BATTERY_THRESHOLD: u8 = 20;

/// Hours a vehicle may rest in one state before it counts as stale.
pub const DEFAULT_STALE_AFTER_HOURS: u32 = 48;

/// A single reason a policy was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("low_battery_threshold {value} exceeds full battery (100)")]
    ThresholdAboveFull { value: u8 },

    #[error("stale_after_hours must be greater than zero")]
    ZeroStaleWindow,

    #[error("history_limit must be greater than zero")]
    ZeroHistoryLimit,
}

/// Errors that can occur when loading a policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse policy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid policy: {}", describe(.0))]
    Invalid(Vec<PolicyViolation>),
}

pub(crate) fn describe(violations: &[PolicyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Tunable lifecycle thresholds.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::config::FleetPolicy;
///
/// let policy = FleetPolicy::from_json(r#"{ "stale_after_hours": 24 }"#).unwrap();
/// assert_eq!(policy.stale_after_hours, 24);
/// assert_eq!(policy.low_battery_threshold, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetPolicy {
    /// Finishing a ride strictly below this level raises a bounty.
    pub low_battery_threshold: u8,
    /// Idle time after which a `ready` vehicle is swept to `unknown`.
    pub stale_after_hours: u32,
    /// Number of transitions each vehicle keeps in its history.
    pub history_limit: usize,
}

impl Default for FleetPolicy {
    fn default() -> Self {
        Self {
            low_battery_threshold: DEFAULT_LOW_BATTERY_THRESHOLD,
            stale_after_hours: DEFAULT_STALE_AFTER_HOURS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl FleetPolicy {
    /// Parse and validate a policy from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.check()?;
        Ok(policy)
    }

    /// Validate every field, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PolicyViolation>>> = Vec::new();

        checks.push(if self.low_battery_threshold > FULL_BATTERY {
            Validation::fail(PolicyViolation::ThresholdAboveFull {
                value: self.low_battery_threshold,
            })
        } else {
            Validation::success(())
        });

        checks.push(if self.stale_after_hours == 0 {
            Validation::fail(PolicyViolation::ZeroStaleWindow)
        } else {
            Validation::success(())
        });

        checks.push(if self.history_limit == 0 {
            Validation::fail(PolicyViolation::ZeroHistoryLimit)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every violation found by [`validate`](Self::validate), possibly none.
    pub fn violations(&self) -> Vec<PolicyViolation> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(violations) => violations.iter().cloned().collect(),
        }
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }

    /// Idle time after which a `ready` vehicle is stale.
    pub fn stale_after(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.stale_after_hours))
    }

    /// Whether a reported battery level counts as low.
    pub fn is_low_battery(&self, battery: u8) -> bool {
        battery < self.low_battery_threshold
    }
}
