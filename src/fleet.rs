//! Fleet-wide sweeps.
//!
//! A sweep scans a caller-supplied collection of vehicles and fires one
//! event on each vehicle that qualifies. Every vehicle is handled
//! independently: a failure is recorded and the scan moves on, and all
//! failures are returned together.
//!
//! Sweeps bypass role checks; they are fleet maintenance, not user actions.

use crate::core::Event;
use crate::vehicle::{Vehicle, VehicleEvent, VehicleTransitionError};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Move every `ready` or `batteryLow` vehicle to `bounty`.
///
/// Vehicles in any other state are left untouched.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::fleet::sweep_ready_and_battery_low_to_bounty;
/// use fleet_fsm::policy::Role;
/// use fleet_fsm::vehicle::{Vehicle, VehicleState};
///
/// let mut fleet = vec![Vehicle::new(), Vehicle::new()];
/// fleet[1].start_ride(Role::EndUser).unwrap();
///
/// let errors = sweep_ready_and_battery_low_to_bounty(fleet.iter_mut());
///
/// assert!(errors.is_empty());
/// assert_eq!(fleet[0].current_state(), VehicleState::Bounty);
/// assert_eq!(fleet[1].current_state(), VehicleState::Riding);
/// ```
pub fn sweep_ready_and_battery_low_to_bounty<'a, I>(vehicles: I) -> Vec<VehicleTransitionError>
where
    I: IntoIterator<Item = &'a mut Vehicle>,
{
    sweep_ready_and_battery_low_to_bounty_at(vehicles, Utc::now())
}

/// [`sweep_ready_and_battery_low_to_bounty`] with an explicit clock reading.
pub fn sweep_ready_and_battery_low_to_bounty_at<'a, I>(
    vehicles: I,
    now: DateTime<Utc>,
) -> Vec<VehicleTransitionError>
where
    I: IntoIterator<Item = &'a mut Vehicle>,
{
    sweep(VehicleEvent::Bounty, vehicles, now, |_, _| true)
}

/// Move every vehicle that has rested in `ready` for at least its policy's
/// staleness window (48 hours by default) to `unknown`.
pub fn sweep_stale_ready_to_unknown<'a, I>(vehicles: I) -> Vec<VehicleTransitionError>
where
    I: IntoIterator<Item = &'a mut Vehicle>,
{
    sweep_stale_ready_to_unknown_at(vehicles, Utc::now())
}

/// [`sweep_stale_ready_to_unknown`] with an explicit clock reading.
pub fn sweep_stale_ready_to_unknown_at<'a, I>(
    vehicles: I,
    now: DateTime<Utc>,
) -> Vec<VehicleTransitionError>
where
    I: IntoIterator<Item = &'a mut Vehicle>,
{
    sweep(VehicleEvent::Unknown, vehicles, now, |vehicle, now| {
        vehicle.idle_for(now) >= vehicle.policy().stale_after()
    })
}

fn sweep<'a, I, F>(
    event: VehicleEvent,
    vehicles: I,
    now: DateTime<Utc>,
    qualifies: F,
) -> Vec<VehicleTransitionError>
where
    I: IntoIterator<Item = &'a mut Vehicle>,
    F: Fn(&Vehicle, DateTime<Utc>) -> bool,
{
    let mut scanned = 0usize;
    let mut changed = 0usize;
    let mut errors = Vec::new();

    // A failing vehicle is recorded and skipped; the scan never stops early.
    for vehicle in vehicles {
        scanned += 1;
        if !(qualifies(vehicle, now) && vehicle.can_fire(event)) {
            continue;
        }
        match vehicle.fire(event, now) {
            Ok(()) => changed += 1,
            Err(err) => {
                warn!(event = event.name(), error = %err, "sweep skipped vehicle");
                errors.push(err);
            }
        }
    }

    info!(
        event = event.name(),
        scanned,
        changed,
        failed = errors.len(),
        "fleet sweep complete"
    );
    errors
}
