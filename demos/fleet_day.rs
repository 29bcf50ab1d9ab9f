//! Fleet Day
//!
//! This example walks a small fleet through a day of operations.
//!
//! Key concepts:
//! - Role-gated operations (rider, hunter, admin)
//! - Low-battery rides turning into bounties
//! - Nightly sweeps over the whole fleet
//! - Structured logs from the engine via `tracing`
//!
//! Run with: cargo run --example fleet_day

use chrono::{Duration, Utc};
use fleet_fsm::fleet::{sweep_ready_and_battery_low_to_bounty, sweep_stale_ready_to_unknown};
use fleet_fsm::{FleetPolicy, Role, Vehicle, VehicleBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let policy = FleetPolicy::from_json(r#"{ "low_battery_threshold": 25 }"#)
        .expect("policy literal is valid");

    let mut fleet = vec![
        Vehicle::with_policy(policy),
        Vehicle::with_policy(policy),
        VehicleBuilder::new()
            .policy(policy)
            .last_change_of_state(Utc::now() - Duration::hours(60))
            .build()
            .expect("builder inputs are in range"),
    ];

    println!("=== Morning rides ===");
    fleet[0].start_ride(Role::EndUser).unwrap();
    fleet[0].finish_ride(22, Role::EndUser).unwrap();
    println!("  vehicle 0: {} ({}%)", fleet[0].current_state(), fleet[0].battery());

    fleet[1].start_ride(Role::EndUser).unwrap();
    fleet[1].finish_ride(70, Role::EndUser).unwrap();
    println!("  vehicle 1: {} ({}%)", fleet[1].current_state(), fleet[1].battery());

    println!("\n=== A rider tries to collect ===");
    match fleet[0].collect(Role::EndUser) {
        Ok(()) => println!("  unexpectedly allowed"),
        Err(err) => println!("  refused: {err}"),
    }

    println!("\n=== Hunter shift ===");
    fleet[0].collect(Role::Hunter).unwrap();
    fleet[0].drop(Role::Hunter).unwrap();
    fleet[0].ready(Role::Hunter).unwrap();
    println!("  vehicle 0: {} ({}%)", fleet[0].current_state(), fleet[0].battery());

    println!("\n=== Nightly sweeps ===");
    let errors = sweep_stale_ready_to_unknown(fleet.iter_mut());
    println!("  stale sweep failures: {}", errors.len());
    let errors = sweep_ready_and_battery_low_to_bounty(fleet.iter_mut());
    println!("  bounty sweep failures: {}", errors.len());

    for (i, vehicle) in fleet.iter().enumerate() {
        let path: Vec<String> = vehicle
            .history()
            .get_path()
            .iter()
            .map(|s| s.to_string())
            .collect();
        println!("  vehicle {i}: {} via [{}]", vehicle.current_state(), path.join(" -> "));
    }
}
