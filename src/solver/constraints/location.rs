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

//! C3 (initial pinning), C4 (location transition), and C5 (capacity), plus the
//! one-hot/idle bookkeeping the rest of this module is built on.
//!
//! `loc[v, sigma]` is not represented as a free-standing bounded integer: it is
//! defined as `Σ_l l * at_loc[v, l, sigma]`, an unconditional identity over the
//! one-hot `at_loc` booleans (`one_hot_location`). This is equivalent to the
//! reified-equality reading of the variable table ("`at_loc[v,l,sigma]` is a reified
//! equality `loc[v,sigma] == l`"), but lets every later constraint treat `loc[v,
//! sigma]` as a plain linear expression instead of re-deriving the reification at
//! every call site.

use good_lp::{constraint, solvers::coin_cbc::CoinCbcProblem, Expression, SolverModel};
use itertools::iproduct;

use crate::solver::reify::eq_if;

use super::Ctx;

/// The integer-valued view of `v`'s location at `sigma`, as a linear expression
/// over the one-hot `at_loc` booleans.
fn loc_expr(ctx: &Ctx, vi: usize, sigma: usize) -> Expression {
    (0..ctx.instance.location_count())
        .map(|li| ctx.vars.at_loc[&(vi, li, sigma)] * li as f64)
        .sum()
}

/// C3: pin every vehicle's location and odometer at the initial pseudo-shift.
pub fn initial_pinning(model: &mut CoinCbcProblem, ctx: &Ctx) {
    let sigma0 = ctx.grid.initial();
    for (vi, vehicle) in ctx.instance.vehicles.iter().enumerate() {
        let start_idx = ctx.instance.loc_idx(&vehicle.initial_location);
        model.add_constraint(constraint!(loc_expr(ctx, vi, sigma0) == start_idx as f64));
        model.add_constraint(constraint!(ctx.vars.km[&(vi, sigma0)] == vehicle.initial_km as f64));
    }
}

/// Exactly one `at_loc[v, l, sigma]` is hot per `(v, sigma)`, and `loc_int[v,
/// sigma]` is defined to equal the corresponding weighted sum.
pub fn one_hot_location(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, sigma) in iproduct!(0..ctx.instance.vehicles.len(), ctx.grid.indices()) {
        let sum: Expression = (0..ctx.instance.location_count())
            .map(|li| ctx.vars.at_loc[&(vi, li, sigma)])
            .sum();
        model.add_constraint(constraint!(sum == 1));
        model.add_constraint(constraint!(ctx.vars.loc_int[&(vi, sigma)] - loc_expr(ctx, vi, sigma) == 0));
    }
}

/// `idle[v, sigma] = 1` iff no route is assigned and no maintenance is active for
/// `v` at `sigma`. Relies on C10 (route/maintenance exclusivity) to guarantee the
/// two sums below can never both be 1 at once.
pub fn idle_definition(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, _) in ctx.instance.vehicles.iter().enumerate() {
        for sigma in ctx.grid.indices() {
            if ctx.grid.is_initial(sigma) {
                continue;
            }
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
            model.add_constraint(constraint!(maint_sum.clone() <= 1));
            let idle = ctx.vars.idle[&(vi, sigma)];
            model.add_constraint(constraint!(idle + route_sum.clone() + maint_sum.clone() >= 1));
            model.add_constraint(constraint!(idle <= 1 - route_sum));
            model.add_constraint(constraint!(idle <= 1 - maint_sum));
        }
    }
}

/// C4: tie each `(v, sigma -> sigma+1)` transition to whichever of route
/// assignment, active maintenance, or idleness actually applies.
pub fn location_transition(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, _) in ctx.instance.vehicles.iter().enumerate() {
        for sigma in ctx.grid.non_terminal_indices() {
            let next = sigma + 1;
            let loc_here = ctx.vars.loc_int[&(vi, sigma)];
            let loc_next = ctx.vars.loc_int[&(vi, next)];

            if let Some(routes) = ctx.routes_at.get(&sigma) {
                for &ri in routes {
                    let route = &ctx.instance.routes[ri];
                    let assign = ctx.vars.assign[&(vi, ri)];
                    let start_idx = ctx.instance.loc_idx(&route.start_location) as f64;
                    let end_idx = ctx.instance.loc_idx(&route.end_location) as f64;
                    eq_if(model, loc_here.into(), start_idx.into(), assign, ctx.loc_max);
                    eq_if(model, loc_next.into(), end_idx.into(), assign, ctx.loc_max);
                }
            }

            if let Some(instances) = ctx.maint_by_vehicle.get(&vi) {
                for &mi in instances {
                    if let Some(&active) = ctx.vars.active.get(&(mi, sigma)) {
                        // Stationary under maintenance: location carries over.
                        eq_if(model, loc_next.into(), loc_here.into(), active, ctx.loc_max);
                    }
                }
            }

            let idle = ctx.vars.idle[&(vi, sigma)];
            eq_if(model, loc_next.into(), loc_here.into(), idle, ctx.loc_max);
        }
    }
}

/// C5: at most `capacity(l)` vehicles physically present at location `l` in any shift.
pub fn capacity(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for li in 0..ctx.instance.location_count() {
        let cap = ctx.instance.location_by_idx(li).capacity as f64;
        for sigma in ctx.grid.indices() {
            let sum: Expression = ctx
                .instance
                .vehicles
                .iter()
                .enumerate()
                .map(|(vi, _)| ctx.vars.at_loc[&(vi, li, sigma)])
                .sum();
            model.add_constraint(constraint!(sum <= cap));
        }
    }
}
