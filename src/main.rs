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

//! CLI entry point: generates a synthetic instance from the given
//! parameters, builds and solves the model, prints a summary, and optionally
//! writes the result JSON.

use clap::Parser;
use log::{error, info};

use railplan::config::PlanConfig;
use railplan::{fixtures, format, PlanError};

/// Plan an integrated fleet schedule from a synthetic instance.
#[derive(Debug, Parser)]
#[command(name = "railplan", about = "Fleet scheduling and maintenance planning")]
struct Cli {
    #[command(flatten)]
    params: PlanConfig,
    /// Write the result JSON to this path instead of only printing a summary.
    #[arg(long)]
    save: Option<String>,
}

fn main() {
    pretty_env_logger::init_timed();
    let cli = Cli::parse();

    let exit_code = run(&cli);
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> i32 {
    let instance = match fixtures::generate(&cli.params) {
        Ok(instance) => instance,
        Err(e) => {
            error!("generated instance failed validation: {e}");
            return 1;
        }
    };

    info!(
        "generated instance: {} vehicle(s), {} location(s), {} route(s) over {} day(s)",
        instance.vehicles.len(),
        instance.location_count(),
        instance.routes.len(),
        cli.params.days
    );

    match railplan::plan(&instance, cli.params.time_limit()) {
        Ok(result) => {
            info!(
                "status={} wall_time={:.2}s objective={:?}",
                result.optimization_info.status, result.optimization_info.wall_time, result.optimization_info.objective_value
            );
            if let Some(path) = &cli.save {
                if let Err(e) = format::write_result(path, &result) {
                    error!("failed to write result to {path}: {e}");
                    return 1;
                }
                info!("wrote result to {path}");
            }
            0
        }
        Err(PlanError::Infeasible) => {
            error!("instance is infeasible");
            2
        }
        Err(e) => {
            error!("planning failed: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }
}
