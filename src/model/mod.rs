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

//! Typed instance model: vehicles, locations, maintenance types, routes, and the
//! identifier interning that turns the string ids used for I/O into the compact
//! integer indices the solver's variable domains are built from.
//!
//! An [`Instance`] is immutable once validated: all decision variables built
//! from it in [`crate::solver`] live only for the duration of a single solve.

mod instance;
mod interner;
mod types;

pub use instance::Instance;
pub use interner::Interner;
pub use types::{
    Location, LocationKind, MaintenanceKind, MaintenanceType, PendingTask, Route, Shift, Vehicle,
};
