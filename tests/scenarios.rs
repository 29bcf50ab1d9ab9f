//! End-to-end lifecycle scenarios.

use chrono::{Duration, Utc};
use fleet_fsm::core::TransitionCause;
use fleet_fsm::fleet::{sweep_ready_and_battery_low_to_bounty, sweep_stale_ready_to_unknown};
use fleet_fsm::{Operation, Role, Vehicle, VehicleBuilder, VehicleError, VehicleState};

fn vehicle_in(state: VehicleState) -> Vehicle {
    VehicleBuilder::new().state(state).build().unwrap()
}

#[test]
fn rider_finishing_on_low_battery_raises_bounty() {
    let mut vehicle = vehicle_in(VehicleState::Riding);

    assert_eq!(vehicle.finish_ride(15, Role::EndUser), Ok(()));
    assert_eq!(vehicle.current_state(), VehicleState::Bounty);
    assert_eq!(vehicle.battery(), 15);
}

#[test]
fn rider_finishing_with_charge_leaves_vehicle_ready() {
    let mut vehicle = vehicle_in(VehicleState::Riding);

    assert_eq!(vehicle.finish_ride(50, Role::EndUser), Ok(()));
    assert_eq!(vehicle.current_state(), VehicleState::Ready);
    assert_eq!(vehicle.battery(), 50);
}

#[test]
fn rider_cannot_collect_bounty() {
    let mut vehicle = vehicle_in(VehicleState::Bounty);

    assert_eq!(
        vehicle.collect(Role::EndUser),
        Err(VehicleError::PermissionDenied {
            operation: Operation::Collect,
            role: Role::EndUser,
        })
    );
    assert_eq!(vehicle.current_state(), VehicleState::Bounty);
}

#[test]
fn hunter_collects_bounty() {
    let mut vehicle = vehicle_in(VehicleState::Bounty);

    assert_eq!(vehicle.collect(Role::Hunter), Ok(()));
    assert_eq!(vehicle.current_state(), VehicleState::Collected);
}

#[test]
fn hunter_readies_dropped_vehicle() {
    let mut vehicle = VehicleBuilder::new()
        .state(VehicleState::Dropped)
        .battery(8)
        .build()
        .unwrap();

    assert_eq!(vehicle.ready(Role::Hunter), Ok(()));
    assert_eq!(vehicle.current_state(), VehicleState::Ready);
    assert_eq!(vehicle.battery(), 100);
}

#[test]
fn admin_forces_ride_from_collected() {
    let mut vehicle = vehicle_in(VehicleState::Collected);

    assert_eq!(vehicle.start_ride(Role::Admin), Ok(()));
    assert_eq!(vehicle.current_state(), VehicleState::Riding);
}

#[test]
fn full_day_in_the_life() {
    let mut vehicle = Vehicle::new();

    vehicle.start_ride(Role::EndUser).unwrap();
    vehicle.finish_ride(12, Role::EndUser).unwrap();
    vehicle.collect(Role::Hunter).unwrap();
    vehicle.drop(Role::Hunter).unwrap();
    vehicle.ready(Role::Hunter).unwrap();

    assert_eq!(vehicle.current_state(), VehicleState::Ready);
    assert_eq!(vehicle.battery(), 100);
    assert_eq!(
        vehicle.history().get_path(),
        vec![
            &VehicleState::Ready,
            &VehicleState::Riding,
            &VehicleState::BatteryLow,
            &VehicleState::Bounty,
            &VehicleState::Collected,
            &VehicleState::Dropped,
            &VehicleState::Ready,
        ]
    );
    let redirects = vehicle
        .history()
        .transitions()
        .filter(|t| t.cause == TransitionCause::Redirected)
        .count();
    assert_eq!(redirects, 1);
}

#[test]
fn nightly_sweeps_over_mixed_fleet() {
    let long_ago = Utc::now() - Duration::hours(72);
    let mut idle = VehicleBuilder::new()
        .last_change_of_state(long_ago)
        .build()
        .unwrap();
    let mut riding = vehicle_in(VehicleState::Riding);
    let mut fresh = Vehicle::new();

    let errors = sweep_stale_ready_to_unknown(vec![&mut idle, &mut riding, &mut fresh]);
    assert!(errors.is_empty());
    assert_eq!(idle.current_state(), VehicleState::Unknown);
    assert_eq!(fresh.current_state(), VehicleState::Ready);

    let errors = sweep_ready_and_battery_low_to_bounty(vec![&mut idle, &mut riding, &mut fresh]);
    assert!(errors.is_empty());
    assert_eq!(idle.current_state(), VehicleState::Unknown);
    assert_eq!(riding.current_state(), VehicleState::Riding);
    assert_eq!(fresh.current_state(), VehicleState::Bounty);
}

#[test]
fn vehicles_can_be_shared_behind_a_lock() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let vehicle = Arc::new(Mutex::new(Vehicle::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let vehicle = Arc::clone(&vehicle);
            thread::spawn(move || {
                let mut guard = vehicle.lock().unwrap();
                guard.start_ride(Role::EndUser).is_ok()
            })
        })
        .collect();

    let started = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(started, 1);
    assert_eq!(vehicle.lock().unwrap().current_state(), VehicleState::Riding);
}
