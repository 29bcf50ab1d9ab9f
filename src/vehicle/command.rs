//! Vehicle operations as values.

use crate::config::FleetPolicy;
use crate::policy::Operation;
use crate::vehicle::lifecycle::{VehicleEvent, VehicleState};
use serde::{Deserialize, Serialize};

/// A request to change a vehicle, with any argument it carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    StartRide,
    #[serde(rename_all = "camelCase")]
    FinishRide {
        battery_left: u8,
    },
    Collect,
    Drop,
    Ready,
    SetBatteryLow,
    SetBounty,
    Unknown,
}

impl Command {
    /// Operation this command is authorized as.
    pub fn operation(&self) -> Operation {
        match self {
            Self::StartRide => Operation::StartRide,
            Self::FinishRide { .. } => Operation::FinishRide,
            Self::Collect => Operation::Collect,
            Self::Drop => Operation::Drop,
            Self::Ready => Operation::Ready,
            Self::SetBatteryLow => Operation::SetBatteryLow,
            Self::SetBounty => Operation::SetBounty,
            Self::Unknown => Operation::Unknown,
        }
    }

    /// Event fired on the validated path.
    ///
    /// A finished ride fires `batteryLow` instead of `finishRide` when the
    /// reported battery is below the policy threshold.
    pub fn event(&self, policy: &FleetPolicy) -> VehicleEvent {
        match self {
            Self::StartRide => VehicleEvent::StartRide,
            Self::FinishRide { battery_left } if policy.is_low_battery(*battery_left) => {
                VehicleEvent::BatteryLow
            }
            Self::FinishRide { .. } => VehicleEvent::FinishRide,
            Self::Collect => VehicleEvent::Collected,
            Self::Drop => VehicleEvent::Dropped,
            Self::Ready => VehicleEvent::Ready,
            Self::SetBatteryLow => VehicleEvent::BatteryLow,
            Self::SetBounty => VehicleEvent::Bounty,
            Self::Unknown => VehicleEvent::Unknown,
        }
    }

    /// State set directly on the forced path.
    ///
    /// A forced ride finish always lands in `ready`, whatever the battery.
    pub fn forced_state(&self) -> VehicleState {
        match self {
            Self::StartRide => VehicleState::Riding,
            Self::FinishRide { .. } | Self::Ready => VehicleState::Ready,
            Self::Collect => VehicleState::Collected,
            Self::Drop => VehicleState::Dropped,
            Self::SetBatteryLow => VehicleState::BatteryLow,
            Self::SetBounty => VehicleState::Bounty,
            Self::Unknown => VehicleState::Unknown,
        }
    }
}
