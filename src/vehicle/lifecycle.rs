//! Vehicle states and the lifecycle transition table.

use crate::{state_enum, transition_table};

state_enum! {
    /// Lifecycle stage of a vehicle. Exactly one is active at a time.
    pub enum VehicleState {
        /// Parked and available to ride.
        Ready => "ready",
        /// In use by a rider.
        Riding => "riding",
        /// Ride ended with a low battery. Never a resting state: entering it
        /// immediately redirects to `Bounty`.
        BatteryLow => "batteryLow",
        /// Needs field recovery by a hunter.
        Bounty => "bounty",
        /// Picked up by a hunter.
        Collected => "collected",
        /// Returned to the field by a hunter.
        Dropped => "dropped",
        /// Location or condition unknown.
        Unknown => "unknown",
    }
    redirect: [BatteryLow => Bounty]
}

transition_table! {
    /// Named lifecycle transitions.
    pub enum VehicleEvent for VehicleState {
        StartRide => "startRide": [Ready] => Riding,
        FinishRide => "finishRide": [Riding] => Ready,
        BatteryLow => "batteryLow": [Riding] => BatteryLow,
        Bounty => "bounty": [Ready, BatteryLow] => Bounty,
        Collected => "collected": [Bounty] => Collected,
        Dropped => "dropped": [Collected] => Dropped,
        Ready => "ready": [Dropped] => Ready,
        Unknown => "unknown": [Ready] => Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, State};

    #[test]
    fn table_rows() {
        use VehicleState as S;

        let rows: [(VehicleEvent, &[VehicleState], VehicleState); 8] = [
            (VehicleEvent::StartRide, &[S::Ready], S::Riding),
            (VehicleEvent::FinishRide, &[S::Riding], S::Ready),
            (VehicleEvent::BatteryLow, &[S::Riding], S::BatteryLow),
            (VehicleEvent::Bounty, &[S::Ready, S::BatteryLow], S::Bounty),
            (VehicleEvent::Collected, &[S::Bounty], S::Collected),
            (VehicleEvent::Dropped, &[S::Collected], S::Dropped),
            (VehicleEvent::Ready, &[S::Dropped], S::Ready),
            (VehicleEvent::Unknown, &[S::Ready], S::Unknown),
        ];

        for (event, sources, destination) in rows {
            assert_eq!(event.sources(), sources, "{event}");
            assert_eq!(event.destination(), destination, "{event}");
        }
        assert_eq!(VehicleEvent::ALL.len(), rows.len());
    }

    #[test]
    fn only_battery_low_redirects() {
        for state in VehicleState::ALL {
            let expected = (*state == VehicleState::BatteryLow).then_some(VehicleState::Bounty);
            assert_eq!(state.redirect(), expected, "{state}");
        }
    }

    #[test]
    fn wire_names() {
        assert_eq!(VehicleState::BatteryLow.to_string(), "batteryLow");
        assert_eq!(VehicleEvent::StartRide.to_string(), "startRide");
        assert_eq!(
            serde_json::to_string(&VehicleState::Collected).unwrap(),
            "\"collected\""
        );
    }
}
