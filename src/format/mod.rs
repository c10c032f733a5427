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

//! Wire-format glue: JSON in, JSON out, with validation always
//! on the path between them.

mod result;

pub use result::{
    MaintenanceActivity, OptimizationInfo, RouteAssignment, ScheduleResult, ShiftState, VehicleResult,
};

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::PlanError;
use crate::model::{Instance, Location, MaintenanceType, Route, Vehicle};

/// The instance JSON's raw shape, deserialized field-for-field and then
/// always routed through [`Instance::new`] so a caller can never observe an
/// unvalidated instance.
#[derive(Debug, Deserialize)]
struct RawInstance {
    vehicles: Vec<Vehicle>,
    locations: BTreeMap<String, Location>,
    maintenance_types: Vec<MaintenanceType>,
    routes: Vec<Route>,
}

/// Parse and validate an instance document from `path`.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance, PlanError> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}

/// Parse and validate an instance document from a JSON string, as used by the
/// HTTP façade for request bodies already deserialized by `axum`.
pub fn parse_instance(text: &str) -> Result<Instance, PlanError> {
    let raw: RawInstance = serde_json::from_str(text)?;
    let instance = Instance::new(raw.vehicles, raw.locations, raw.maintenance_types, raw.routes)?;
    Ok(instance)
}

/// Serialize `result` to `path` as pretty-printed JSON.
pub fn write_result(path: impl AsRef<Path>, result: &ScheduleResult) -> Result<(), PlanError> {
    let text = serde_json::to_string_pretty(result)?;
    std::fs::write(path, text)?;
    Ok(())
}
