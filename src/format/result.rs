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

//! Result JSON types, produced by [`crate::solver::projector`].

use std::collections::HashMap;

use serde::Serialize;

/// Top-level result document.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult {
    pub optimization_info: OptimizationInfo,
    pub vehicles: HashMap<String, VehicleResult>,
}

/// `{status, wall_time, objective_value}`.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationInfo {
    pub status: String,
    pub wall_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_value: Option<f64>,
}

/// One vehicle's projected schedule.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleResult {
    pub initial_state: InitialState,
    /// Keyed `"{day}_{shift}"`, `None` where the vehicle has no route that shift.
    pub route_assignments: HashMap<String, Option<RouteAssignment>>,
    pub maintenance_activities: Vec<MaintenanceActivity>,
    /// Keyed `"{day}_{shift}"`, one entry per real shift in the horizon.
    pub states: HashMap<String, ShiftState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitialState {
    pub location: String,
    pub km: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteAssignment {
    pub route_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceActivity {
    pub maintenance_id: String,
    pub maintenance_type: String,
    pub start_day: u32,
    pub start_shift: String,
    pub end_day: u32,
    pub end_shift: String,
    pub depot: String,
    pub km_at_start: u64,
    pub required_manhours: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftState {
    pub location: String,
    pub km: u64,
    pub is_idle: bool,
    pub is_under_maintenance: bool,
}
