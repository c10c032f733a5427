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

//! # railplan: integrated fleet scheduling and maintenance planning for rail vehicles
//!
//! Given a fleet with initial state, a set of depots and parking locations with
//! capacities and manpower, a catalogue of preventive and corrective maintenance
//! activities, and a daily timetable of revenue routes, this crate builds an
//! integer/boolean program and solves it to produce an integrated schedule that
//!
//! - covers every route with exactly one vehicle,
//! - interleaves maintenance activities at capable depots within manhour budgets, and
//! - minimizes the deviation of preventive maintenance from each activity's optimal
//!   kilometer target.
//!
//! ## Structure
//! - [`model`] holds the validated instance: vehicles, locations, maintenance types,
//!   routes, and the string interning used to turn ids into solver-friendly indices.
//! - [`time_grid`] enumerates the shift sequence every other module indexes against.
//! - [`solver`] is the constraint-model builder: variable allocation
//!   ([`solver::variables`]), the constraint assembler
//!   ([`solver::constraints`]), the objective ([`solver::objective`]), the
//!   backend driver ([`solver::driver`]), and the solution projector
//!   ([`solver::projector`]). [`solver::plan`] is the single public entry point.
//! - [`fixtures`] is the synthetic instance generator used by the CLI, the HTTP
//!   façade, and the test suite.
//! - [`format`] defines the serde wire types for the instance and result JSON
//!   documents and the file I/O around them.
//! - [`config`] holds the parameter struct shared by the CLI and the HTTP façade.
//! - [`error`] collects the per-concern errors into the crate-wide [`error::PlanError`].

#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod model;
pub mod solver;
pub mod time_grid;

pub use error::PlanError;
pub use solver::plan;
