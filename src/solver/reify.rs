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

//! Reification helpers over a backend with no native `OnlyEnforceIf`.
//!
//! `good_lp`'s `SolverModel` only offers unconditional linear (in)equalities, so
//! every "this constraint only binds when a literal is 1" clause is
//! expressed with the big-M technique: for literal `b` and constraint `C`, add `C`
//! relaxed by `M * (1 - b)` so that `b = 0` makes it vacuous and `b = 1` makes it
//! exact. This mirrors the `c_min`/`c_max`/`c_if_then_else` family this codebase's
//! lineage already uses for the same purpose — the building blocks here are kept
//! separate from the call sites so every constraint emitter in
//! [`crate::solver::constraints`] shares one big-M discipline instead of
//! hand-rolling it inline.
//!
//! None of the helpers here introduce an `if-then-else` variable: they only
//! ever relax one side of an existing (in)equality, which keeps the relaxation
//! linear and the search space as small as the formulation allows.

use good_lp::{constraint, Expression, SolverModel, Variable};

/// Enforce `lhs == rhs` whenever `lit == 1`; vacuous when `lit == 0`. `big_m` must
/// be at least as large as the largest possible value of `|lhs - rhs|`.
pub fn eq_if(model: &mut impl SolverModel, lhs: Expression, rhs: Expression, lit: Variable, big_m: f64) {
    model.add_constraint(constraint!(lhs.clone() - rhs.clone() <= big_m * (1.0 - lit)));
    model.add_constraint(constraint!(rhs - lhs <= big_m * (1.0 - lit)));
}

/// Enforce `lhs <= rhs` whenever `lit == 1`; vacuous when `lit == 0`. `big_m` must
/// be at least as large as the largest possible value of `lhs - rhs`.
pub fn le_if(model: &mut impl SolverModel, lhs: Expression, rhs: Expression, lit: Variable, big_m: f64) {
    model.add_constraint(constraint!(lhs - rhs <= big_m * (1.0 - lit)));
}

/// Enforce `expr == 0` whenever `lit == 0` (the mirror image of [`eq_if`]: the
/// constraint binds on the *negative* literal). Used for "no deviation when the
/// activity isn't performed" style clauses. `big_m` must bound `expr`'s magnitude.
pub fn zero_unless(model: &mut impl SolverModel, expr: Expression, lit: Variable, big_m: f64) {
    model.add_constraint(constraint!(expr.clone() <= big_m * lit));
    model.add_constraint(constraint!(-expr <= big_m * lit));
}

/// Force `lit == 0` whenever `trigger == 1` (i.e. `trigger => !lit`). Used for C9's
/// "cannot teleport into maintenance" clause.
pub fn forbid_if(model: &mut impl SolverModel, lit: Variable, trigger: Variable) {
    model.add_constraint(constraint!(lit + trigger <= 1));
}
