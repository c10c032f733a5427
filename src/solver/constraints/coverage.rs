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

//! C1 (route coverage) and C2 (vehicle exclusivity on routes).

use good_lp::{constraint, solvers::coin_cbc::CoinCbcProblem, Expression, SolverModel};
use itertools::iproduct;

use super::Ctx;

/// C1: every route is covered by exactly one vehicle.
pub fn route_coverage(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for ri in 0..ctx.instance.routes.len() {
        let sum: Expression = ctx
            .instance
            .vehicles
            .iter()
            .enumerate()
            .map(|(vi, _)| ctx.vars.assign[&(vi, ri)])
            .sum();
        model.add_constraint(constraint!(sum == 1));
    }
}

/// C2: no vehicle performs two routes in the same shift.
pub fn vehicle_exclusivity(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, sigma) in iproduct!(0..ctx.instance.vehicles.len(), ctx.grid.indices()) {
        let Some(routes) = ctx.routes_at.get(&sigma) else { continue };
        if routes.is_empty() {
            continue;
        }
        let sum: Expression = routes.iter().map(|&ri| ctx.vars.assign[&(vi, ri)]).sum();
        model.add_constraint(constraint!(sum <= 1));
    }
}
