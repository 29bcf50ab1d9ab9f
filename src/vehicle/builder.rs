//! Builder for rehydrating vehicles.

use crate::config::{FleetPolicy, FULL_BATTERY};
use crate::core::StateHistory;
use crate::machine::StateMachine;
use crate::vehicle::entity::Vehicle;
use crate::vehicle::error::BuildError;
use crate::vehicle::lifecycle::VehicleState;
use chrono::{DateTime, Utc};

/// Builder for constructing a [`Vehicle`] in an arbitrary state.
///
/// Unset fields take the values of [`Vehicle::new`].
///
/// # Example
///
/// ```rust
/// use fleet_fsm::vehicle::{VehicleBuilder, VehicleState};
/// use chrono::{Duration, Utc};
///
/// let vehicle = VehicleBuilder::new()
///     .state(VehicleState::Riding)
///     .battery(64)
///     .last_change_of_state(Utc::now() - Duration::minutes(12))
///     .build()
///     .unwrap();
///
/// assert_eq!(vehicle.current_state(), VehicleState::Riding);
/// assert_eq!(vehicle.battery(), 64);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VehicleBuilder {
    state: Option<VehicleState>,
    battery: Option<u8>,
    last_change_of_state: Option<DateTime<Utc>>,
    policy: Option<FleetPolicy>,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current state. Entry hooks do not run, so a vehicle can be
    /// restored in `batteryLow`.
    pub fn state(mut self, state: VehicleState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn battery(mut self, battery: u8) -> Self {
        self.battery = Some(battery);
        self
    }

    pub fn last_change_of_state(mut self, at: DateTime<Utc>) -> Self {
        self.last_change_of_state = Some(at);
        self
    }

    pub fn policy(mut self, policy: FleetPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the vehicle.
    /// Returns an error if the battery or policy is out of range.
    pub fn build(self) -> Result<Vehicle, BuildError> {
        let battery = self.battery.unwrap_or(FULL_BATTERY);
        if battery > FULL_BATTERY {
            return Err(BuildError::BatteryOutOfRange { value: battery });
        }

        let policy = self.policy.unwrap_or_default();
        let violations = policy.violations();
        if !violations.is_empty() {
            return Err(BuildError::InvalidPolicy(violations));
        }

        let machine = StateMachine::with_history(
            self.state.unwrap_or(VehicleState::Ready),
            self.last_change_of_state.unwrap_or_else(Utc::now),
            StateHistory::with_limit(policy.history_limit),
        );

        Ok(Vehicle {
            machine,
            battery,
            policy,
        })
    }
}
