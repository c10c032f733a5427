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

//! Shared parameter struct for the synthetic instance generator and the solver's
//! time limit, built once and consumed by both the CLI binary and the HTTP façade
//! so the two surfaces can never drift on defaults.

use std::time::Duration;

use clap::Args;
use serde::Deserialize;

/// Default fleet/timetable/seed parameters: 5 vehicles, 2 depots, 2 parkings, 8 routes/day, 7
/// planning days, seed 42, 60s time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Args)]
pub struct PlanConfig {
    /// Number of vehicles in the generated fleet.
    #[arg(long, default_value_t = 5)]
    pub vehicles: usize,
    /// Number of depot locations.
    #[arg(long, default_value_t = 2)]
    pub depots: usize,
    /// Number of parking-only locations.
    #[arg(long, default_value_t = 2)]
    pub parkings: usize,
    /// Revenue routes generated per planning day.
    #[arg(long = "routes-per-day", default_value_t = 8)]
    pub routes_per_day: usize,
    /// Length of the planning horizon, in days.
    #[arg(long, default_value_t = 7)]
    pub days: u32,
    /// Seed for the synthetic instance generator. Same seed, same instance.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Wall-clock budget handed to the backend, in seconds.
    #[arg(long = "time-limit", default_value_t = 60)]
    pub time_limit_seconds: u64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { vehicles: 5, depots: 2, parkings: 2, routes_per_day: 8, days: 7, seed: 42, time_limit_seconds: 60 }
    }
}

impl PlanConfig {
    /// `time_limit_seconds` as a [`Duration`], for [`crate::solver::plan`].
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_seconds)
    }
}

/// The HTTP façade's request body: every field optional, falling back to
/// [`PlanConfig::default`] field by field, exactly like the CLI's `clap` defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub vehicles: Option<usize>,
    pub depots: Option<usize>,
    pub parkings: Option<usize>,
    pub routes_per_day: Option<usize>,
    pub days: Option<u32>,
    pub seed: Option<u64>,
    pub time_limit_seconds: Option<u64>,
}

impl PlanRequest {
    /// Merge `self` over [`PlanConfig::default`], field by field.
    pub fn into_config(self) -> PlanConfig {
        let d = PlanConfig::default();
        PlanConfig {
            vehicles: self.vehicles.unwrap_or(d.vehicles),
            depots: self.depots.unwrap_or(d.depots),
            parkings: self.parkings.unwrap_or(d.parkings),
            routes_per_day: self.routes_per_day.unwrap_or(d.routes_per_day),
            days: self.days.unwrap_or(d.days),
            seed: self.seed.unwrap_or(d.seed),
            time_limit_seconds: self.time_limit_seconds.unwrap_or(d.time_limit_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_config_defaults() {
        let cfg = PlanRequest::default().into_config();
        assert_eq!(cfg, PlanConfig::default());
    }

    #[test]
    fn request_overrides_only_named_fields() {
        let cfg = PlanRequest { seed: Some(7), ..Default::default() }.into_config();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.vehicles, PlanConfig::default().vehicles);
    }
}
