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

//! The constraint-model builder: variable factory, constraint assembler,
//! objective, backend driver, and solution projector, composed behind the single
//! [`plan`] entry point.

pub mod constraints;
pub mod driver;
pub mod objective;
pub mod projector;
pub mod reify;
pub mod variables;

use std::time::Duration;

use good_lp::solvers::coin_cbc::coin_cbc as create_solver;
use log::info;

use crate::error::PlanError;
use crate::format::ScheduleResult;
use crate::model::Instance;
use crate::time_grid::TimeGrid;

use driver::SolveStatus;

/// Build and solve the integer/boolean program for `instance`, then project the
/// result back into a schedule. The single public entry point of the crate.
pub fn plan(instance: &Instance, time_limit: Duration) -> Result<ScheduleResult, PlanError> {
    let grid = TimeGrid::new(instance.planning_days());
    info!(
        "planning {} vehicle(s), {} route(s), {} location(s) over {} day(s)",
        instance.vehicles.len(),
        instance.routes.len(),
        instance.location_count(),
        grid.days()
    );

    let (vars_builder, vars, maint) = variables::build(instance, &grid);
    let objective = objective::total_deviation(&vars);

    let mut problem = create_solver(vars_builder.minimise(objective));

    #[cfg(any(test, feature = "hide-cbc-output"))]
    {
        use good_lp::SolverModel;
        problem.set_parameter("logLevel", "0");
    }

    constraints::setup_constraints(&mut problem, instance, &grid, &vars, &maint);

    let solved = driver::solve(problem, time_limit)?;

    match solved.status {
        SolveStatus::Infeasible => Err(PlanError::Infeasible),
        SolveStatus::Optimal | SolveStatus::Feasible | SolveStatus::Unknown => {
            Ok(projector::project(instance, &grid, &vars, &maint, &solved))
        }
    }
}
