//! Vehicle error types.

use crate::config::{describe, PolicyViolation};
use crate::machine::TransitionError;
use crate::policy::{Operation, Role};
use crate::vehicle::lifecycle::VehicleState;
use thiserror::Error;

/// Engine error for the vehicle lifecycle.
pub type VehicleTransitionError = TransitionError<VehicleState>;

/// Errors returned by vehicle operations. No state is changed when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleError {
    #[error("role {role} is not allowed to {operation}")]
    PermissionDenied { operation: Operation, role: Role },

    #[error("cannot {operation} while the vehicle is {current}")]
    InvalidTransition {
        operation: Operation,
        current: VehicleState,
    },
}

impl VehicleError {
    pub(crate) fn rejected(operation: Operation, err: VehicleTransitionError) -> Self {
        Self::InvalidTransition {
            operation,
            current: err.current(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::PermissionDenied { operation, .. } | Self::InvalidTransition { operation, .. } => {
                *operation
            }
        }
    }
}

/// Errors that can occur when building a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("battery level {value} is outside 0..=100")]
    BatteryOutOfRange { value: u8 },

    #[error("invalid policy: {}", describe(.0))]
    InvalidPolicy(Vec<PolicyViolation>),
}
