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

//! Plain data carried by an [`super::Instance`], mirroring the instance JSON wire
//! shape field for field so `serde` round-trips it without a translation layer.

use serde::{Deserialize, Serialize};

/// A half-day time slot; the [`crate::time_grid`]'s atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// The daytime slot. Routes are only ever scheduled here in the base design.
    Day,
    /// The nighttime slot. No routes are generated for it; vehicles stay put.
    Night,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Day => write!(f, "day"),
            Shift::Night => write!(f, "night"),
        }
    }
}

/// Whether a [`Location`] may host maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Hosts maintenance; has a manhour budget and a set of specializations.
    Depot,
    /// Capacity only, no maintenance.
    Parking,
}

/// A depot or parking location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Depot or parking.
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Maximum number of vehicles simultaneously present.
    pub capacity: u32,
    /// Manhours available per shift. Only meaningful for depots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manhours_per_shift: Option<u32>,
    /// Skill tags this depot can service. Only meaningful for depots.
    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "specialized_maintenance")]
    pub specializations: Vec<String>,
}

impl Location {
    /// Whether this location is a depot.
    pub fn is_depot(&self) -> bool {
        matches!(self.kind, LocationKind::Depot)
    }

    /// The manhour budget per shift, or 0 for a parking (never consulted, since parkings
    /// never host maintenance, but kept total rather than partial to simplify callers).
    pub fn manhours_per_shift(&self) -> u32 {
        self.manhours_per_shift.unwrap_or(0)
    }

    /// Whether this depot declares the given specialization tag.
    pub fn has_specialization(&self, tag: &str) -> bool {
        self.specializations.iter().any(|s| s == tag)
    }
}

/// Preventive or corrective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    /// Scheduled activity targeting `optimal_km`, forbidden past `max_km`.
    Preventive,
    /// Pending repair with a hard kilometer window.
    Corrective,
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceKind::Preventive => write!(f, "preventive"),
            MaintenanceKind::Corrective => write!(f, "corrective"),
        }
    }
}

/// A catalogue entry describing one kind of maintenance activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceType {
    /// Stable string id, referenced by vehicles' pending tasks.
    pub id: String,
    /// Preventive or corrective.
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    /// Manhours of depot labor consumed performing one instance of this activity.
    pub manhours: u32,
    /// Skill tag a servicing depot must declare, if any.
    #[serde(default)]
    pub specialization: Option<String>,
    /// Preventive only: kilometer reading this activity is ideally performed at.
    #[serde(default)]
    pub optimal_km: Option<u64>,
    /// Preventive only: kilometer reading past which this activity may not be performed.
    #[serde(default)]
    pub max_km: Option<u64>,
    /// Corrective only: kilometer window, relative to the vehicle's km when the task
    /// was raised, after which the vehicle is out of service.
    #[serde(default)]
    pub max_km_window: Option<u64>,
    /// Corrective only, informational. Never consulted by a constraint.
    #[serde(default)]
    pub safety_critical: bool,
}

/// A pending maintenance task carried by a [`Vehicle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTask {
    /// Id of the catalogue [`MaintenanceType`] this task instantiates.
    pub maintenance_type_id: String,
    /// Kilometers of slack remaining before the task's window (preventive: km still
    /// to go toward `optimal_km`/`max_km`; corrective: km left in `max_km_window`).
    pub remaining_km: u64,
}

/// A rail vehicle and its state at the start of the planning horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable string id.
    pub id: String,
    /// Depot id the vehicle starts at.
    pub initial_location: String,
    /// Odometer reading at the start of the horizon.
    pub initial_km: u64,
    /// Corrective tasks already outstanding for this vehicle.
    #[serde(default)]
    pub pending_corrective_tasks: Vec<PendingTask>,
    /// Preventive tasks already outstanding for this vehicle.
    #[serde(default)]
    pub pending_preventive_tasks: Vec<PendingTask>,
}

/// A revenue route that must be covered by exactly one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Stable string id.
    pub id: String,
    /// Planning day, 1-indexed.
    pub day: u32,
    /// Shift within the day. All routes are `Shift::Day` in the base design.
    pub shift: Shift,
    /// Depot id the route departs from.
    pub start_location: String,
    /// Depot id the route arrives at.
    pub end_location: String,
    /// Distance covered, added to the assigned vehicle's odometer.
    pub distance_km: u64,
}
