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

//! C11: depot manhour capacity.

use good_lp::{constraint, solvers::coin_cbc::CoinCbcProblem, Expression, SolverModel};

use super::Ctx;

/// For every depot and every shift, the manhours drawn by active instances serviced
/// there may not exceed the depot's per-shift budget.
///
/// `at_dep[m, l]` is already forced to 0 whenever `m` isn't performed (C9's
/// depot-selection sum), so the per-`(m, l, sigma)` demand is the plain product
/// `per_shift_manhours(m) * at_dep[m, l]` rather than a fresh conjunction variable —
/// no auxiliary demand variables are needed.
pub fn manhour_capacity(model: &mut CoinCbcProblem, ctx: &Ctx) {
    for li in ctx.instance.depot_indices() {
        let budget = ctx.instance.location_by_idx(li).manhours_per_shift() as f64;
        for sigma in ctx.grid.indices() {
            let demand: Expression = ctx
                .maint
                .iter()
                .enumerate()
                .filter(|(_, m)| m.window().contains(&sigma))
                .filter_map(|(mi, m)| ctx.vars.at_dep.get(&(mi, li)).map(|&v| v * m.per_shift_manhours as f64))
                .sum();
            model.add_constraint(constraint!(demand <= budget));
        }
    }
}
