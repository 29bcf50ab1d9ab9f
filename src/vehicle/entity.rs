//! The vehicle aggregate and its role-gated operations.

use crate::config::{FleetPolicy, FULL_BATTERY};
use crate::core::{StateHistory, StateTransition};
use crate::machine::StateMachine;
use crate::policy::{authorize, Access, Role};
use crate::vehicle::command::Command;
use crate::vehicle::error::{VehicleError, VehicleTransitionError};
use crate::vehicle::lifecycle::{VehicleEvent, VehicleState};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// A shared vehicle: lifecycle state, battery level and the time of the
/// last state change.
///
/// Operations take the caller's [`Role`] and are either attempted through
/// the transition table, forced, or denied (see [`crate::policy`]). A
/// failed operation changes nothing.
///
/// `Vehicle` is not internally synchronized. Callers sharing one across
/// threads must serialize access to it, for example behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::policy::Role;
/// use fleet_fsm::vehicle::{Vehicle, VehicleState};
///
/// let mut vehicle = Vehicle::new();
/// vehicle.start_ride(Role::EndUser).unwrap();
/// vehicle.finish_ride(15, Role::EndUser).unwrap();
///
/// assert_eq!(vehicle.current_state(), VehicleState::Bounty);
/// assert_eq!(vehicle.battery(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub(crate) machine: StateMachine<VehicleEvent>,
    pub(crate) battery: u8,
    pub(crate) policy: FleetPolicy,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle {
    /// A fresh vehicle: `ready`, fully charged, last changed now.
    pub fn new() -> Self {
        Self::with_policy(FleetPolicy::default())
    }

    /// A fresh vehicle governed by `policy`.
    ///
    /// The policy is not validated here; use
    /// [`VehicleBuilder`](super::VehicleBuilder) to reject invalid ones.
    pub fn with_policy(policy: FleetPolicy) -> Self {
        Self {
            machine: StateMachine::with_history(
                VehicleState::Ready,
                Utc::now(),
                StateHistory::with_limit(policy.history_limit),
            ),
            battery: FULL_BATTERY,
            policy,
        }
    }

    pub fn battery(&self) -> u8 {
        self.battery
    }

    pub fn current_state(&self) -> VehicleState {
        self.machine.current_state()
    }

    /// Time of the most recent state change, forced changes included.
    pub fn last_change_of_state(&self) -> DateTime<Utc> {
        self.machine.entered_at()
    }

    /// Time spent in the current state as of `now`.
    pub fn idle_for(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.last_change_of_state())
    }

    pub fn policy(&self) -> &FleetPolicy {
        &self.policy
    }

    pub fn history(&self) -> &StateHistory<VehicleState> {
        self.machine.history()
    }

    /// Most recent state change, if any happened since creation.
    pub fn last_transition(&self) -> Option<&StateTransition<VehicleState>> {
        self.machine.history().last()
    }

    /// Check whether `event` may fire from the current state.
    pub fn can_fire(&self, event: VehicleEvent) -> bool {
        self.machine.can_fire(event)
    }

    pub fn start_ride(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::StartRide, role)
    }

    /// End a ride, recording the battery level left.
    ///
    /// On the validated path a battery below the policy threshold sends the
    /// vehicle to `bounty` (through `batteryLow`); otherwise it becomes
    /// `ready`. Forced finishes always land in `ready`. Levels above 100 are
    /// recorded as 100.
    pub fn finish_ride(&mut self, battery_left: u8, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::FinishRide { battery_left }, role)
    }

    pub fn collect(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::Collect, role)
    }

    pub fn drop(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::Drop, role)
    }

    /// Return the vehicle to service, resetting the battery to full.
    pub fn ready(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::Ready, role)
    }

    /// Admin only. The redirect on `batteryLow` still applies, so the
    /// vehicle ends up in `bounty`.
    pub fn set_battery_low(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::SetBatteryLow, role)
    }

    /// Admin only.
    pub fn set_bounty(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::SetBounty, role)
    }

    /// Admin only, and still subject to the transition table.
    pub fn unknown(&mut self, role: Role) -> Result<(), VehicleError> {
        self.execute(Command::Unknown, role)
    }

    /// Run `command` as `role`, stamping changes with the current time.
    pub fn execute(&mut self, command: Command, role: Role) -> Result<(), VehicleError> {
        self.execute_at(command, role, Utc::now())
    }

    /// Run `command` as `role`, stamping changes with `at`.
    pub fn execute_at(
        &mut self,
        command: Command,
        role: Role,
        at: DateTime<Utc>,
    ) -> Result<(), VehicleError> {
        let operation = command.operation();

        match authorize(operation, role) {
            Access::Denied => {
                debug!(%operation, %role, "operation denied");
                Err(VehicleError::PermissionDenied { operation, role })
            }
            Access::Validated => self.attempt(command, at),
            Access::Forced => {
                self.force(command, at);
                info!(%operation, %role, state = %self.current_state(), "forced state change");
                Ok(())
            }
        }
    }

    fn attempt(&mut self, command: Command, at: DateTime<Utc>) -> Result<(), VehicleError> {
        let operation = command.operation();
        let event = command.event(&self.policy);

        if !self.machine.can_fire(event) {
            let current = self.current_state();
            debug!(%operation, %event, %current, "transition rejected");
            return Err(VehicleError::InvalidTransition { operation, current });
        }

        self.apply_battery(command);
        self.machine
            .fire(event, at)
            .map_err(|err| VehicleError::rejected(operation, err))
    }

    fn force(&mut self, command: Command, at: DateTime<Utc>) {
        self.apply_battery(command);
        self.machine.force_state(command.forced_state(), at);
    }

    fn apply_battery(&mut self, command: Command) {
        match command {
            Command::FinishRide { battery_left } => self.battery = battery_left.min(FULL_BATTERY),
            Command::Ready => self.battery = FULL_BATTERY,
            _ => {}
        }
    }

    /// Fire `event` directly, bypassing role checks. Used by fleet sweeps.
    pub(crate) fn fire(
        &mut self,
        event: VehicleEvent,
        at: DateTime<Utc>,
    ) -> Result<(), VehicleTransitionError> {
        self.machine.fire(event, at)
    }
}
