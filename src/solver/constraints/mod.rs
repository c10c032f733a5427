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

//! The constraint assembler: emits route-coverage, vehicle-exclusivity,
//! location-transition, capacity, kilometer-accumulation, maintenance-location,
//! maintenance-activity, manhour, and corrective-forcing constraints.
//!
//! Constraints are emitted in the fixed order C1..C11 so that the number of rows
//! added by each stage is a deterministic function of the instance, mirroring how
//! this codebase's own ILP scheduler logs a row-count delta after every constraint
//! group as a cheap, always-on sanity check during development.

mod coverage;
mod kilometers;
mod location;
mod maintenance;
mod manhours;

use std::collections::HashMap;

use good_lp::{solvers::coin_cbc::CoinCbcProblem, SolverModel};
use log::debug;

use crate::model::Instance;
use crate::time_grid::TimeGrid;

use super::variables::{MaintInstance, VariableSet};

/// Shared, read-only context every constraint-emitting function in this module
/// closes over. Built once per solve by [`setup_constraints`].
pub(crate) struct Ctx<'a> {
    pub instance: &'a Instance,
    pub grid: &'a TimeGrid,
    pub vars: &'a VariableSet,
    pub maint: &'a [MaintInstance],
    /// `K_max`, the upper bound every kilometer-valued big-M uses.
    pub k_max: f64,
    /// `L - 1`, the upper bound every location-valued big-M uses.
    pub loc_max: f64,
    /// Route indices scheduled at each shift index, precomputed once.
    pub routes_at: HashMap<usize, Vec<usize>>,
    /// Maintenance instance indices, grouped by vehicle, for fast per-vehicle iteration.
    pub maint_by_vehicle: HashMap<usize, Vec<usize>>,
}

impl<'a> Ctx<'a> {
    fn new(instance: &'a Instance, grid: &'a TimeGrid, vars: &'a VariableSet, maint: &'a [MaintInstance]) -> Self {
        let mut routes_at: HashMap<usize, Vec<usize>> = HashMap::new();
        for (ri, route) in instance.routes.iter().enumerate() {
            if let Some(sigma) = grid.sigma_of(route.day, route.shift) {
                routes_at.entry(sigma).or_default().push(ri);
            }
        }
        let mut maint_by_vehicle: HashMap<usize, Vec<usize>> = HashMap::new();
        for (mi, m) in maint.iter().enumerate() {
            maint_by_vehicle.entry(m.vehicle).or_default().push(mi);
        }
        Ctx {
            instance,
            grid,
            vars,
            maint,
            k_max: instance.k_max() as f64,
            loc_max: (instance.location_count() as f64 - 1.0).max(0.0),
            routes_at,
            maint_by_vehicle,
        }
    }
}

/// Emit every constraint (C1 through C11) into `model`, logging the row
/// count contributed by each group at `debug` level.
pub fn setup_constraints(
    model: &mut CoinCbcProblem,
    instance: &Instance,
    grid: &TimeGrid,
    vars: &VariableSet,
    maint: &[MaintInstance],
) {
    let ctx = Ctx::new(instance, grid, vars, maint);

    let mut rows = model.as_inner().num_rows();
    macro_rules! stage {
        ($name:literal, $call:expr) => {{
            $call;
            let new_rows = model.as_inner().num_rows();
            debug!("{} equations for `{}`", new_rows - rows, $name);
            rows = new_rows;
        }};
    }

    stage!("route_coverage", coverage::route_coverage(model, &ctx));
    stage!("vehicle_exclusivity", coverage::vehicle_exclusivity(model, &ctx));
    stage!("initial_pinning", location::initial_pinning(model, &ctx));
    stage!("one_hot_location", location::one_hot_location(model, &ctx));
    stage!("idle_definition", location::idle_definition(model, &ctx));
    stage!("location_transition", location::location_transition(model, &ctx));
    stage!("capacity", location::capacity(model, &ctx));
    stage!("kilometer_accumulation", kilometers::kilometer_accumulation(model, &ctx));
    stage!("preventive_window_and_objective", maintenance::preventive_window_and_objective(model, &ctx));
    stage!("corrective_forcing", maintenance::corrective_forcing(model, &ctx));
    stage!("maintenance_depot_location", maintenance::maintenance_depot_location(model, &ctx));
    stage!("route_vs_maintenance_exclusivity", maintenance::route_vs_maintenance_exclusivity(model, &ctx));
    stage!("manhour_capacity", manhours::manhour_capacity(model, &ctx));

    debug!("{rows} total equations");
}
