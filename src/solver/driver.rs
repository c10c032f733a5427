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

//! Solver driver: applies the time limit, invokes CBC, and classifies the
//! outcome.

use std::time::{Duration, Instant};

use good_lp::{solvers::coin_cbc::CoinCbcProblem, ResolutionError, Solution, SolverModel, Variable};
use log::info;

use crate::error::PlanError;

/// The four outcomes `optimization_info.status` may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unknown,
}

impl SolveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::Unknown => "UNKNOWN",
        }
    }
}

/// A solved model: the variable-value reader plus the classification and timing
/// the projector and serializer need.
pub struct Solved {
    pub solution: Box<dyn Solution>,
    pub status: SolveStatus,
    pub wall_time: f64,
}

/// Apply `time_limit` to `problem`, solve it, and classify the result.
pub fn solve(mut problem: CoinCbcProblem, time_limit: Duration) -> Result<Solved, PlanError> {
    #[cfg(feature = "cbc-parallel")]
    problem.set_parameter("threads", &num_cpus::get().to_string());

    problem.set_parameter("seconds", &time_limit.as_secs_f64().to_string());

    info!("invoking CBC with a {:.1}s time limit", time_limit.as_secs_f64());
    let start = Instant::now();
    let outcome = problem.solve();
    let wall_time = start.elapsed().as_secs_f64();

    match outcome {
        Ok(solution) => {
            let status = if solution.raw().is_proven_optimal() { SolveStatus::Optimal } else { SolveStatus::Feasible };
            Ok(Solved { solution: Box::new(solution), status, wall_time })
        }
        Err(ResolutionError::Infeasible) => {
            Ok(Solved { solution: Box::new(InfeasibleSolution), status: SolveStatus::Infeasible, wall_time })
        }
        Err(e) => Err(PlanError::ModelInvalid(e.to_string())),
    }
}

/// A placeholder `Solution` for the infeasible path, where no variable values
/// exist to report. Every `value()` call panics: the projector never runs on an
/// infeasible outcome (the projector only ever runs for `Optimal`/`Feasible`).
struct InfeasibleSolution;

impl Solution for InfeasibleSolution {
    fn value(&self, _variable: Variable) -> f64 {
        panic!("attempted to read a variable value from an infeasible solve")
    }
}
