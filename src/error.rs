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

//! Crate-wide error type, assembled the same way [`crate::model`] validation errors and
//! the backend's [`good_lp::ResolutionError`] are kept as distinct `thiserror` enums and
//! then folded into one umbrella at the library boundary.

use thiserror::Error;

/// Failure to validate, build, solve, or serialize a planning instance.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A structural invariant from the data model was violated.
    #[error("instance invalid: {0}")]
    InstanceInvalid(#[from] InstanceError),
    /// The backend rejected the built model. Should be unreachable; a bug in the
    /// constraint assembler if it ever happens.
    #[error("model rejected by backend: {0}")]
    ModelInvalid(String),
    /// No feasible assignment exists for the given instance.
    #[error("instance is infeasible")]
    Infeasible,
    /// Reading or writing an instance/result file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The instance or result JSON could not be parsed or produced.
    #[error("(de)serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Violation of one of the structural invariants of an [`crate::model::Instance`].
#[derive(Debug, Error)]
pub enum InstanceError {
    /// A route's `start_location` or `end_location` does not name a known depot.
    #[error("route {route} references unknown depot {depot:?}")]
    UnknownRouteEndpoint {
        /// Offending route id.
        route: String,
        /// The location id that could not be resolved to a depot.
        depot: String,
    },
    /// A route's endpoints are identical.
    #[error("route {0} starts and ends at the same location")]
    DegenerateRoute(String),
    /// A specialized maintenance type has no depot declaring that specialization.
    #[error("maintenance type {maint_type} requires specialization {specialization:?}, which no depot declares")]
    UncoveredSpecialization {
        /// Offending maintenance type id.
        maint_type: String,
        /// The specialization tag with no covering depot.
        specialization: String,
    },
    /// A pending task references a maintenance type id that does not exist.
    #[error("vehicle {vehicle} has a pending task referencing unknown maintenance type {maint_type:?}")]
    UnknownMaintenanceType {
        /// Offending vehicle id.
        vehicle: String,
        /// The maintenance type id that could not be resolved.
        maint_type: String,
    },
    /// A vehicle's initial location does not name a known depot.
    #[error("vehicle {vehicle} has unknown initial location {location:?}")]
    UnknownInitialLocation {
        /// Offending vehicle id.
        vehicle: String,
        /// The location id that could not be resolved to a depot.
        location: String,
    },
    /// A preventive maintenance type has `optimal_km >= max_km`.
    #[error("preventive maintenance type {0} has optimal_km >= max_km")]
    BadPreventiveWindow(String),
    /// Fewer than two depots were declared.
    #[error("instance declares {0} depot(s); at least 2 are required")]
    TooFewDepots(usize),
}
