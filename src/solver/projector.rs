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

//! Solution projector: reads assigned variable values back out of a solved
//! model and synthesizes the per-vehicle schedule artifact.

use std::collections::HashMap;

use good_lp::Solution;

use crate::format::{
    InitialState, MaintenanceActivity, OptimizationInfo, RouteAssignment, ScheduleResult, ShiftState, VehicleResult,
};
use crate::model::Instance;
use crate::time_grid::{DayShift, TimeGrid};

use super::driver::{SolveStatus, Solved};
use super::variables::{MaintInstance, VariableSet};

fn shift_key(day: u32, shift: crate::model::Shift) -> String {
    format!("{day}_{shift}")
}

fn shift_label(grid: &TimeGrid, sigma: usize) -> Option<(u32, crate::model::Shift)> {
    match grid.day_shift_of(sigma) {
        DayShift::Initial => None,
        DayShift::Real(day, shift) => Some((day, shift)),
    }
}

fn rounded(solution: &dyn Solution, var: good_lp::Variable) -> f64 {
    solution.value(var).round()
}

/// Build the result document from a solved model. Only meaningful for
/// `OPTIMAL`/`FEASIBLE` outcomes; callers never invoke this for `INFEASIBLE`.
pub fn project(
    instance: &Instance,
    grid: &TimeGrid,
    vars: &VariableSet,
    maint: &[MaintInstance],
    solved: &Solved,
) -> ScheduleResult {
    let solution = solved.solution.as_ref();

    let objective_value = match solved.status {
        SolveStatus::Optimal | SolveStatus::Feasible => Some(
            maint
                .iter()
                .enumerate()
                .filter_map(|(mi, _)| vars.dev.get(&mi).map(|&v| rounded(solution, v)))
                .sum(),
        ),
        _ => None,
    };

    let optimization_info = OptimizationInfo {
        status: solved.status.as_str().to_string(),
        wall_time: solved.wall_time,
        objective_value,
    };

    // Route assignment, by (vehicle, day, shift).
    let mut route_of: HashMap<(usize, u32, crate::model::Shift), String> = HashMap::new();
    for (ri, route) in instance.routes.iter().enumerate() {
        for (vi, _) in instance.vehicles.iter().enumerate() {
            if let Some(&assign) = vars.assign.get(&(vi, ri)) {
                if rounded(solution, assign) > 0.5 {
                    route_of.insert((vi, route.day, route.shift), route.id.clone());
                }
            }
        }
    }

    // Performed maintenance activities, grouped by vehicle.
    let mut maint_of: HashMap<usize, Vec<MaintenanceActivity>> = HashMap::new();
    for (mi, m) in maint.iter().enumerate() {
        if rounded(solution, vars.perf[mi]) < 0.5 {
            continue;
        }
        let mt = &instance.maintenance_types[m.maint_type];
        let depot = vars
            .candidate_depots_for(mi)
            .find(|&li| rounded(solution, vars.at_dep[&(mi, li)]) > 0.5)
            .map(|li| instance.loc_id(li).to_string())
            .unwrap_or_default();
        let km_at_start = rounded(solution, vars.kms[mi]).max(0.0) as u64;
        let (start_day, start_shift) =
            shift_label(grid, m.sigma_start).expect("maintenance never starts at the initial pseudo-shift");
        let end_sigma = m.sigma_start + m.dur - 1;
        let (end_day, end_shift) = shift_label(grid, end_sigma.min(grid.last())).unwrap_or((start_day, start_shift));

        maint_of.entry(m.vehicle).or_default().push(MaintenanceActivity {
            maintenance_id: mt.id.clone(),
            maintenance_type: mt.kind.to_string(),
            start_day,
            start_shift: start_shift.to_string(),
            end_day,
            end_shift: end_shift.to_string(),
            depot,
            km_at_start,
            required_manhours: mt.manhours,
        });
    }

    let mut vehicles = HashMap::new();
    for (vi, vehicle) in instance.vehicles.iter().enumerate() {
        let mut route_assignments = HashMap::new();
        let mut states = HashMap::new();

        for sigma in grid.indices() {
            let Some((day, shift)) = shift_label(grid, sigma) else { continue };
            let key = shift_key(day, shift);

            let assignment = route_of.get(&(vi, day, shift)).map(|id| RouteAssignment { route_id: id.clone() });
            route_assignments.insert(key.clone(), assignment);

            let loc_idx = rounded(solution, vars.loc_int[&(vi, sigma)]).max(0.0) as usize;
            let km = rounded(solution, vars.km[&(vi, sigma)]).max(0.0) as u64;
            let is_idle = vars.idle.get(&(vi, sigma)).map(|&v| rounded(solution, v) > 0.5).unwrap_or(false);
            let is_under_maintenance = maint
                .iter()
                .enumerate()
                .any(|(mi, m)| m.vehicle == vi && m.window().contains(&sigma) && rounded(solution, vars.perf[mi]) > 0.5);

            states.insert(
                key,
                ShiftState { location: instance.loc_id(loc_idx).to_string(), km, is_idle, is_under_maintenance },
            );
        }

        vehicles.insert(
            vehicle.id.clone(),
            VehicleResult {
                initial_state: InitialState {
                    location: vehicle.initial_location.clone(),
                    km: vehicle.initial_km,
                },
                route_assignments,
                maintenance_activities: maint_of.remove(&vi).unwrap_or_default(),
                states,
            },
        );
    }

    ScheduleResult { optimization_info, vehicles }
}
