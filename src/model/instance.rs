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

//! The validated, immutable planning instance and the derived indices the
//! solver builds variable domains from.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::InstanceError;

use super::interner::Interner;
use super::types::{Location, MaintenanceKind, MaintenanceType, Route, Vehicle};

/// A validated bundle of vehicles, locations, maintenance types, and routes.
///
/// Construct via [`Instance::new`], which runs every structural invariant check up front and
/// builds the location interner used to turn location ids into solver-domain indices.
/// Once built, an instance is never mutated again. There is deliberately no
/// `Deserialize` impl: the only way to get an `Instance` from JSON is
/// [`crate::format::read_instance`], which parses into a plain wire struct first and
/// then always routes through [`Instance::new`], so an instance can never be
/// observed unvalidated.
#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    /// Fleet, in the order decision-variable ids are assigned from.
    pub vehicles: Vec<Vehicle>,
    /// Depots and parkings, keyed by id. A `BTreeMap` so iteration order (and
    /// therefore the assignment of location indices) is a deterministic function of
    /// the id strings alone, not of input/serialization order.
    pub locations: BTreeMap<String, Location>,
    /// Maintenance catalogue, in catalogue order.
    pub maintenance_types: Vec<MaintenanceType>,
    /// Timetable of revenue routes.
    pub routes: Vec<Route>,

    #[serde(skip)]
    loc_interner: Interner,
}

impl Instance {
    /// Validate `self` against every structural invariant and build the derived indices.
    /// Consumes and returns `self` so construction and validation cannot be
    /// separated: there is no way to observe an unvalidated instance.
    pub fn new(
        vehicles: Vec<Vehicle>,
        locations: BTreeMap<String, Location>,
        maintenance_types: Vec<MaintenanceType>,
        routes: Vec<Route>,
    ) -> Result<Self, InstanceError> {
        let depot_count = locations.values().filter(|l| l.is_depot()).count();
        if depot_count < 2 {
            return Err(InstanceError::TooFewDepots(depot_count));
        }

        let mut loc_interner = Interner::new();
        for id in locations.keys() {
            loc_interner.intern(id);
        }

        let mut maint_index = HashMap::with_capacity(maintenance_types.len());
        for (idx, mt) in maintenance_types.iter().enumerate() {
            if mt.kind == MaintenanceKind::Preventive {
                let (Some(optimal), Some(max)) = (mt.optimal_km, mt.max_km) else {
                    return Err(InstanceError::BadPreventiveWindow(mt.id.clone()));
                };
                if optimal >= max {
                    return Err(InstanceError::BadPreventiveWindow(mt.id.clone()));
                }
            }
            maint_index.insert(mt.id.clone(), idx);
        }

        for mt in &maintenance_types {
            if let Some(spec) = &mt.specialization {
                let covered = locations
                    .values()
                    .any(|l| l.is_depot() && l.has_specialization(spec));
                if !covered {
                    return Err(InstanceError::UncoveredSpecialization {
                        maint_type: mt.id.clone(),
                        specialization: spec.clone(),
                    });
                }
            }
        }

        for route in &routes {
            if route.start_location == route.end_location {
                return Err(InstanceError::DegenerateRoute(route.id.clone()));
            }
            for endpoint in [&route.start_location, &route.end_location] {
                match locations.get(endpoint) {
                    Some(l) if l.is_depot() => {}
                    _ => {
                        return Err(InstanceError::UnknownRouteEndpoint {
                            route: route.id.clone(),
                            depot: endpoint.clone(),
                        })
                    }
                }
            }
        }

        for v in &vehicles {
            match locations.get(&v.initial_location) {
                Some(l) if l.is_depot() => {}
                _ => {
                    return Err(InstanceError::UnknownInitialLocation {
                        vehicle: v.id.clone(),
                        location: v.initial_location.clone(),
                    })
                }
            }
            for task in v.pending_corrective_tasks.iter().chain(&v.pending_preventive_tasks) {
                if !maint_index.contains_key(&task.maintenance_type_id) {
                    return Err(InstanceError::UnknownMaintenanceType {
                        vehicle: v.id.clone(),
                        maint_type: task.maintenance_type_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            vehicles,
            locations,
            maintenance_types,
            routes,
            loc_interner,
        })
    }

    /// Number of planning days covered by the timetable (max route day, or 0 if there
    /// are no routes).
    pub fn planning_days(&self) -> u32 {
        self.routes.iter().map(|r| r.day).max().unwrap_or(0)
    }

    /// Number of interned locations, `L`.
    pub fn location_count(&self) -> usize {
        self.loc_interner.len()
    }

    /// Solver-domain index of a location id. Panics if `id` is not a known location;
    /// every caller resolves ids that were already validated into this instance.
    pub fn loc_idx(&self, id: &str) -> usize {
        self.loc_interner
            .idx_of(id)
            .unwrap_or_else(|| panic!("unknown location id {id:?}"))
    }

    /// Location id for a solver-domain index.
    pub fn loc_id(&self, idx: usize) -> &str {
        self.loc_interner.id_of(idx)
    }

    /// Indices of every depot location.
    pub fn depot_indices(&self) -> Vec<usize> {
        self.loc_interner
            .ids()
            .enumerate()
            .filter(|(_, id)| self.locations[*id].is_depot())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Indices of depots capable of servicing `specialization`, or every depot index
    /// if `specialization` is `None`.
    pub fn capable_depot_indices(&self, specialization: Option<&str>) -> Vec<usize> {
        match specialization {
            None => self.depot_indices(),
            Some(tag) => self
                .loc_interner
                .ids()
                .enumerate()
                .filter(|(_, id)| {
                    let loc = &self.locations[*id];
                    loc.is_depot() && loc.has_specialization(tag)
                })
                .map(|(idx, _)| idx)
                .collect(),
        }
    }

    /// Look up a location by id.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Look up a location by its solver-domain index.
    pub fn location_by_idx(&self, idx: usize) -> &Location {
        &self.locations[self.loc_interner.id_of(idx)]
    }

    /// `K_max`: the largest odometer reading any vehicle could possibly reach, the
    /// upper bound every `km[v, σ]` and `kms[m]` variable domain is built from.
    pub fn k_max(&self) -> u64 {
        let max_initial = self.vehicles.iter().map(|v| v.initial_km).max().unwrap_or(0);
        let total_route_km: u64 = self.routes.iter().map(|r| r.distance_km).sum();
        max_initial + total_route_km
    }
}
