//! Role-based authorization for vehicle operations.
//!
//! [`authorize`] is a pure lookup from an (operation, role) pair to the kind
//! of access granted. It is consulted before the engine is touched.
//!
//! | Operation       | EndUser   | Hunter    | Admin     |
//! |-----------------|-----------|-----------|-----------|
//! | `startRide`     | validated | validated | forced    |
//! | `finishRide`    | validated | validated | forced    |
//! | `collect`       | denied    | validated | forced    |
//! | `drop`          | denied    | validated | forced    |
//! | `ready`         | denied    | validated | forced    |
//! | `setBatteryLow` | denied    | denied    | forced    |
//! | `setBounty`     | denied    | denied    | forced    |
//! | `unknown`       | denied    | denied    | validated |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller role. Established by the caller; never validated here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Role {
    EndUser,
    Hunter,
    Admin,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::EndUser, Role::Hunter, Role::Admin];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EndUser => "EndUser",
            Self::Hunter => "Hunter",
            Self::Admin => "Admin",
        })
    }
}

/// Vehicle operations subject to authorization.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    StartRide,
    FinishRide,
    Collect,
    Drop,
    Ready,
    SetBatteryLow,
    SetBounty,
    Unknown,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::StartRide,
        Operation::FinishRide,
        Operation::Collect,
        Operation::Drop,
        Operation::Ready,
        Operation::SetBatteryLow,
        Operation::SetBounty,
        Operation::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StartRide => "startRide",
            Self::FinishRide => "finishRide",
            Self::Collect => "collect",
            Self::Drop => "drop",
            Self::Ready => "ready",
            Self::SetBatteryLow => "setBatteryLow",
            Self::SetBounty => "setBounty",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of access a role has to an operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    /// The transition is attempted and must pass the table check.
    Validated,
    /// The destination state is set directly.
    Forced,
    /// The operation is refused before any state is read or written.
    Denied,
}

/// Classify an (operation, role) pair.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::policy::{authorize, Access, Operation, Role};
///
/// assert_eq!(authorize(Operation::Collect, Role::EndUser), Access::Denied);
/// assert_eq!(authorize(Operation::Collect, Role::Hunter), Access::Validated);
/// assert_eq!(authorize(Operation::Collect, Role::Admin), Access::Forced);
/// ```
pub fn authorize(operation: Operation, role: Role) -> Access {
    use Operation as Op;

    match (operation, role) {
        (Op::Unknown, Role::Admin) => Access::Validated,
        (Op::Unknown, _) => Access::Denied,
        (_, Role::Admin) => Access::Forced,
        (Op::StartRide | Op::FinishRide, Role::EndUser | Role::Hunter) => Access::Validated,
        (Op::Collect | Op::Drop | Op::Ready, Role::Hunter) => Access::Validated,
        (Op::Collect | Op::Drop | Op::Ready, Role::EndUser) => Access::Denied,
        (Op::SetBatteryLow | Op::SetBounty, Role::EndUser | Role::Hunter) => Access::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: Access = Access::Validated;
    const F: Access = Access::Forced;
    const D: Access = Access::Denied;

    #[test]
    fn matrix_matches_policy_table() {
        let expected: [(Operation, [Access; 3]); 8] = [
            (Operation::StartRide, [V, V, F]),
            (Operation::FinishRide, [V, V, F]),
            (Operation::Collect, [D, V, F]),
            (Operation::Drop, [D, V, F]),
            (Operation::Ready, [D, V, F]),
            (Operation::SetBatteryLow, [D, D, F]),
            (Operation::SetBounty, [D, D, F]),
            (Operation::Unknown, [D, D, V]),
        ];

        for (operation, row) in expected {
            for (role, access) in Role::ALL.iter().zip(row) {
                assert_eq!(
                    authorize(operation, *role),
                    access,
                    "{operation} as {role}"
                );
            }
        }
    }

    #[test]
    fn only_admin_is_ever_forced() {
        for operation in Operation::ALL {
            assert_ne!(authorize(*operation, Role::EndUser), Access::Forced);
            assert_ne!(authorize(*operation, Role::Hunter), Access::Forced);
        }
    }

    #[test]
    fn admin_is_never_denied() {
        for operation in Operation::ALL {
            assert_ne!(authorize(*operation, Role::Admin), Access::Denied);
        }
    }

    #[test]
    fn names_are_camel_case() {
        assert_eq!(Operation::SetBatteryLow.to_string(), "setBatteryLow");
        assert_eq!(
            serde_json::to_string(&Operation::FinishRide).unwrap(),
            "\"finishRide\""
        );
        assert_eq!(Role::EndUser.to_string(), "EndUser");
    }
}
