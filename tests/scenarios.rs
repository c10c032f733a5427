// railplan: integrated fleet scheduling and maintenance planning for rail vehicles
// Copyright (C) 2026 The railplan Authors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! End-to-end scenarios S1-S6, driven against the public [`railplan::plan`]
//! entry point rather than against individual constraint emitters.

use std::collections::BTreeMap;
use std::time::Duration;

use railplan::model::{
    Instance, Location, LocationKind, MaintenanceKind, MaintenanceType, PendingTask, Route, Shift, Vehicle,
};

const TIME_LIMIT: Duration = Duration::from_secs(10);

fn depot(capacity: u32, manhours: u32, specializations: &[&str]) -> Location {
    Location {
        kind: LocationKind::Depot,
        capacity,
        manhours_per_shift: Some(manhours),
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
    }
}

fn vehicle(id: &str, initial_location: &str, initial_km: u64) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        initial_location: initial_location.to_string(),
        initial_km,
        pending_corrective_tasks: Vec::new(),
        pending_preventive_tasks: Vec::new(),
    }
}

fn route(id: &str, day: u32, start: &str, end: &str, distance_km: u64) -> Route {
    Route { id: id.to_string(), day, shift: Shift::Day, start_location: start.to_string(), end_location: end.to_string(), distance_km }
}

/// S1: a single vehicle and a single route it must cover; no maintenance at all.
#[test]
fn s1_trivial_feasibility() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(5, 80, &[]));
    locations.insert("depot_2".to_string(), depot(5, 80, &[]));

    let vehicles = vec![vehicle("v_1", "depot_1", 0)];
    let routes = vec![route("route_day1_1", 1, "depot_1", "depot_2", 100)];

    let instance = Instance::new(vehicles, locations, Vec::new(), routes).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT).unwrap();

    assert!(matches!(result.optimization_info.status.as_str(), "OPTIMAL" | "FEASIBLE"));
    let v1 = &result.vehicles["v_1"];
    assert_eq!(v1.route_assignments["1_day"].as_ref().unwrap().route_id, "route_day1_1");
    assert_eq!(v1.states["1_day"].km, 0);
    assert_eq!(v1.states["1_night"].km, 100);
    assert!(v1.maintenance_activities.is_empty());
    assert_eq!(result.optimization_info.objective_value, Some(0.0));
}

/// S2: a vehicle with no routes but a pending corrective task must still receive
/// exactly one matching performed maintenance instance within its km window.
#[test]
fn s2_forced_corrective() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(5, 80, &[]));
    locations.insert("depot_2".to_string(), depot(5, 80, &[]));

    let maintenance_types = vec![MaintenanceType {
        id: "corrective_1".to_string(),
        kind: MaintenanceKind::Corrective,
        manhours: 6,
        specialization: None,
        optimal_km: None,
        max_km: None,
        max_km_window: Some(500),
        safety_critical: true,
    }];

    let mut v1 = vehicle("v_1", "depot_1", 1_000);
    v1.pending_corrective_tasks.push(PendingTask { maintenance_type_id: "corrective_1".to_string(), remaining_km: 50 });

    // v_1 itself has no routes; a second vehicle's route is the only thing that
    // gives the instance a multi-day horizon (`Instance::planning_days` is
    // derived from the route timetable) so there are shift indices for v_1's
    // maintenance to land in.
    let v2 = vehicle("v_2", "depot_2", 0);
    let routes = vec![route("route_day3_1", 3, "depot_2", "depot_1", 50)];

    let instance = Instance::new(vec![v1, v2], locations, maintenance_types, routes).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT).unwrap();

    assert!(matches!(result.optimization_info.status.as_str(), "OPTIMAL" | "FEASIBLE"));
    let activities = &result.vehicles["v_1"].maintenance_activities;
    let performed: Vec<_> = activities.iter().filter(|a| a.maintenance_type == "corrective").collect();
    assert_eq!(performed.len(), 1);
    assert!(performed[0].km_at_start <= 1_050);
}

/// S3: a corrective type requires `electrical`, only `depot_2` declares it; C8
/// forces the pending task to be performed, and since `depot_2` is the only
/// capable depot, the vehicle must route there before the activity can land
/// (corrective, not preventive: a preventive instance is never forced, so
/// whether it lands at `depot_2` would just be solver tie-breaking).
#[test]
fn s3_specialization_routing() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(5, 80, &[]));
    locations.insert("depot_2".to_string(), depot(5, 80, &["electrical"]));

    let maintenance_types = vec![MaintenanceType {
        id: "corrective_electrical".to_string(),
        kind: MaintenanceKind::Corrective,
        manhours: 8,
        specialization: Some("electrical".to_string()),
        optimal_km: None,
        max_km: None,
        max_km_window: Some(150),
        safety_critical: true,
    }];

    let mut v1 = vehicle("v_1", "depot_1", 0);
    v1.pending_corrective_tasks.push(PendingTask { maintenance_type_id: "corrective_electrical".to_string(), remaining_km: 150 });

    let routes = vec![route("route_day1_1", 1, "depot_1", "depot_2", 150)];

    let instance = Instance::new(vec![v1], locations, maintenance_types, routes).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT).unwrap();

    assert!(matches!(result.optimization_info.status.as_str(), "OPTIMAL" | "FEASIBLE"));
    let activities = &result.vehicles["v_1"].maintenance_activities;
    assert_eq!(activities.len(), 1, "the pending corrective task must be performed");
    assert!(activities.iter().any(|a| a.depot == "depot_2"));
}

/// S4: ten vehicles, two depots with capacity five each, no routes — capacity
/// must force the fleet to split evenly rather than piling onto one depot.
#[test]
fn s4_capacity_pressure() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(5, 80, &[]));
    locations.insert("depot_2".to_string(), depot(5, 80, &[]));

    let vehicles: Vec<_> = (0..10)
        .map(|i| vehicle(&format!("v_{}", i + 1), if i % 2 == 0 { "depot_1" } else { "depot_2" }, 0))
        .collect();

    let instance = Instance::new(vehicles, locations, Vec::new(), Vec::new()).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT).unwrap();

    assert!(matches!(result.optimization_info.status.as_str(), "OPTIMAL" | "FEASIBLE"));
    let mut at_depot_1 = 0;
    for v in result.vehicles.values() {
        if v.initial_state.location == "depot_1" {
            at_depot_1 += 1;
        }
    }
    assert_eq!(at_depot_1, 5);
}

/// S5: three pending corrective tasks, each a one-shift activity (`manhours <=
/// 8` keeps `dur(m) == 1`, per the `clamp(ceil(manhours/8), 1, DUR_MAX)`
/// formula) that alone saturates the depot's per-shift manhour budget; C8
/// forces all three to be performed, so they must land in three distinct
/// shifts. (Corrective, not preventive: only corrective tasks are forced by
/// C8 — a preventive task with no forcing constraint would let the solver
/// just never perform it, at zero objective cost, which wouldn't exercise
/// C11 at all.)
#[test]
fn s5_manhour_saturation() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(10, 8, &[]));
    locations.insert("depot_2".to_string(), depot(10, 8, &[]));

    let maintenance_types = vec![MaintenanceType {
        id: "corrective_heavy".to_string(),
        kind: MaintenanceKind::Corrective,
        manhours: 8,
        specialization: None,
        optimal_km: None,
        max_km: None,
        max_km_window: Some(5_000),
        safety_critical: false,
    }];

    let mut vehicles: Vec<_> = (0..3)
        .map(|i| {
            let mut v = vehicle(&format!("v_{}", i + 1), "depot_1", 0);
            v.pending_corrective_tasks.push(PendingTask { maintenance_type_id: "corrective_heavy".to_string(), remaining_km: 5_000 });
            v
        })
        .collect();

    // Extend the horizon past a single day so three activities have room to
    // spread out (see s2_forced_corrective for why a route is needed at all).
    vehicles.push(vehicle("v_extend", "depot_2", 0));
    let routes = vec![route("route_day3_1", 3, "depot_2", "depot_1", 50)];

    let instance = Instance::new(vehicles, locations, maintenance_types, routes).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT).unwrap();

    assert!(matches!(result.optimization_info.status.as_str(), "OPTIMAL" | "FEASIBLE"));
    let mut starts = Vec::new();
    for v in result.vehicles.values() {
        for a in &v.maintenance_activities {
            starts.push((a.start_day, a.start_shift.clone()));
        }
    }
    assert_eq!(starts.len(), 3, "all three pending corrective tasks must be performed");
    let mut unique = starts.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), starts.len(), "all three activities must land in distinct shifts");
}

/// S6: a pending corrective task whose window cannot be reached before it lapses
/// — the instance must be reported infeasible, with no schedule emitted.
#[test]
fn s6_infeasibility() {
    let mut locations = BTreeMap::new();
    locations.insert("depot_1".to_string(), depot(5, 80, &[]));
    locations.insert("depot_2".to_string(), depot(5, 80, &[]));

    let maintenance_types = vec![MaintenanceType {
        id: "corrective_1".to_string(),
        kind: MaintenanceKind::Corrective,
        manhours: 6,
        specialization: None,
        optimal_km: None,
        max_km: None,
        max_km_window: Some(10),
        safety_critical: true,
    }];

    let mut v1 = vehicle("v_1", "depot_1", 0);
    v1.pending_corrective_tasks.push(PendingTask { maintenance_type_id: "corrective_1".to_string(), remaining_km: 10 });

    // Every route out of depot_1 is far longer than the 10km window, so the
    // vehicle can never reach a depot (to perform the activity) before lapsing.
    let routes = vec![route("route_day1_1", 1, "depot_1", "depot_2", 500)];

    let instance = Instance::new(vec![v1], locations, maintenance_types, routes).unwrap();
    let result = railplan::plan(&instance, TIME_LIMIT);

    assert!(matches!(result, Err(railplan::PlanError::Infeasible)));
}
