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

//! C6: kilometer accumulation.

use good_lp::{constraint, solvers::coin_cbc::CoinCbcProblem, Expression, SolverModel};

use super::Ctx;

/// C6: `km[v, sigma+1] = km[v, sigma] + sum of assigned-route distances at sigma`.
///
/// Each route's contribution is `distance_km * assign[v, r]`, a product of a
/// constant and a binary variable, which `good_lp` represents directly as a scaled
/// variable in the sum — no auxiliary term variable is needed (unlike a
/// variable-times-variable product, this one is already linear).
pub fn kilometer_accumulation(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for (vi, _) in ctx.instance.vehicles.iter().enumerate() {
        for sigma in ctx.grid.non_terminal_indices() {
            let next = sigma + 1;
            let increment: Expression = ctx
                .routes_at
                .get(&sigma)
                .into_iter()
                .flatten()
                .map(|&ri| {
                    let route = &ctx.instance.routes[ri];
                    ctx.vars.assign[&(vi, ri)] * route.distance_km as f64
                })
                .sum();
            let here = ctx.vars.km[&(vi, sigma)];
            let there = ctx.vars.km[&(vi, next)];
            model.add_constraint(constraint!(there - here - increment == 0));
        }
    }
}
