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

//! C7 (preventive window and objective coupling), C8 (corrective forcing), C9
//! (maintenance/depot location coupling), and C10 (route vs maintenance
//! exclusivity).

use good_lp::{constraint, solvers::coin_cbc::CoinCbcProblem, Expression, SolverModel};

use crate::model::MaintenanceKind;
use crate::solver::reify::{eq_if, le_if, zero_unless};

use super::Ctx;

/// `dep[m]`'s integer-valued view, as a linear expression over the `at_dep`
/// one-hot booleans restricted to depots capable of `m`'s specialization (C12).
fn dep_expr(ctx: &Ctx, mi: usize) -> Expression {
    ctx.vars
        .candidate_depots_for(mi)
        .map(|li| ctx.vars.at_dep[&(mi, li)] * li as f64)
        .sum()
}

/// C7: for every preventive instance, couple `kms[m]` to the vehicle's km at the
/// start of the activity, cap it at `max_km`, and linearize the deviation from
/// `optimal_km` into the non-negative `dev+`/`dev-` pair the objective sums.
pub fn preventive_window_and_objective(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (mi, m) in ctx.maint.iter().enumerate() {
        let perf = ctx.vars.perf[mi];
        let kms = ctx.vars.kms[mi];
        let km_at_start = ctx.vars.km[&(m.vehicle, m.sigma_start)];

        eq_if(model, kms.into(), km_at_start.into(), perf, ctx.k_max);

        if m.kind != MaintenanceKind::Preventive {
            continue;
        }
        let mt = &ctx.instance.maintenance_types[m.maint_type];
        let max_km = mt.max_km.expect("preventive type always has max_km") as f64;
        let optimal_km = mt.optimal_km.expect("preventive type always has optimal_km") as f64;

        le_if(model, kms.into(), max_km.into(), perf, ctx.k_max);

        let dev = ctx.vars.dev[&mi];
        let dev_pos = ctx.vars.dev_pos[&mi];
        let dev_neg = ctx.vars.dev_neg[&mi];

        eq_if(
            model,
            kms - optimal_km,
            Expression::from(dev_pos) - Expression::from(dev_neg),
            perf,
            2.0 * ctx.k_max,
        );
        eq_if(
            model,
            Expression::from(dev),
            Expression::from(dev_pos) + Expression::from(dev_neg),
            perf,
            2.0 * ctx.k_max,
        );
        zero_unless(model, dev.into(), perf, ctx.k_max);
    }
}

/// C8: every pending corrective task is matched by at least one performed instance
/// for the same `(vehicle, maintenance type)`, and every candidate instance is
/// capped at the vehicle's remaining km window.
pub fn corrective_forcing(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, vehicle) in ctx.instance.vehicles.iter().enumerate() {
        for task in &vehicle.pending_corrective_tasks {
            let Some(maint_type_idx) = ctx
                .instance
                .maintenance_types
                .iter()
                .position(|mt| mt.id == task.maintenance_type_id)
            else {
                continue;
            };
            let candidates: Vec<usize> = ctx
                .maint_by_vehicle
                .get(&vi)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&mi| ctx.maint[mi].maint_type == maint_type_idx)
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let window_limit = vehicle.initial_km + task.remaining_km;
            let sum: Expression = candidates.iter().map(|&mi| ctx.vars.perf[mi]).sum();
            model.add_constraint(constraint!(sum >= 1));

            for &mi in &candidates {
                le_if(
                    model,
                    ctx.vars.kms[mi].into(),
                    (window_limit as f64).into(),
                    ctx.vars.perf[mi],
                    ctx.k_max,
                );
            }
        }
    }
}

/// C9: pin the vehicle's location to the chosen depot at the start of a performed
/// instance, tie `active` to `perf` across the instance's window, and forbid a
/// vehicle from teleporting into maintenance from a route that did not end there.
pub fn maintenance_depot_location(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (mi, m) in ctx.maint.iter().enumerate() {
        let perf = ctx.vars.perf[mi];
        let loc_at_start = ctx.vars.loc_int[&(m.vehicle, m.sigma_start)];
        eq_if(model, loc_at_start.into(), dep_expr(ctx, mi), perf, ctx.loc_max);

        // Exactly one candidate depot is chosen when the instance is performed, none
        // when it isn't — the structural fact C11's manhour accounting relies on to
        // stay linear (`at_dep[m, l]` is then already zero whenever `perf[m]` is).
        let dep_sum: Expression = ctx.vars.candidate_depots_for(mi).map(|li| ctx.vars.at_dep[&(mi, li)]).sum();
        model.add_constraint(constraint!(dep_sum - perf == 0));

        for sigma in m.window() {
            if let Some(&active) = ctx.vars.active.get(&(mi, sigma)) {
                model.add_constraint(constraint!(active == perf));
            }
        }

        // `sigma_start >= 1` always (by construction of the enumeration), so this never underflows.
        let prev = m.sigma_start - 1;
        let Some(routes) = ctx.routes_at.get(&prev) else { continue };
        for &ri in routes {
            let route = &ctx.instance.routes[ri];
            let assign = ctx.vars.assign[&(m.vehicle, ri)];
            for depot in ctx.vars.candidate_depots_for(mi) {
                if ctx.instance.loc_id(depot) == route.end_location {
                    continue;
                }
                let at_dep = ctx.vars.at_dep[&(mi, depot)];
                model.add_constraint(constraint!(assign + at_dep + perf <= 2));
            }
        }
    }
}

/// C10: a vehicle cannot simultaneously perform a route and be under maintenance
/// in the same shift.
pub fn route_vs_maintenance_exclusivity(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, _) in ctx.instance.vehicles.iter().enumerate() {
        for sigma in ctx.grid.indices() {
            let route_sum: Expression = ctx
                .routes_at
                .get(&sigma)
                .into_iter()
                .flatten()
                .map(|&ri| ctx.vars.assign[&(vi, ri)])
                .sum();
            let maint_sum: Expression = ctx
                .maint_by_vehicle
                .get(&vi)
                .into_iter()
                .flatten()
                .filter(|&&mi| ctx.maint[mi].window().contains(&sigma))
                .filter_map(|&mi| ctx.vars.active.get(&(mi, sigma)))
                .copied()
                .sum();
            model.add_constraint(constraint!(route_sum + maint_sum <= 1));
        }
    }
}
