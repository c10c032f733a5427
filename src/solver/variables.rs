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

//! The variable factory: allocates every decision variable parameterized by
//! vehicle, shift, and maintenance instance, before a single constraint is emitted.
//!
//! Variables are created eagerly and in full up front because the chosen backend
//! (`good_lp`) cannot add new variables once a [`good_lp::ProblemVariables`] has been
//! turned into a solver model — so every reification literal the constraint
//! assembler will need must already exist by the time [`crate::solver::constraints`]
//! runs.

use std::collections::HashMap;

use good_lp::{variable, ProblemVariables, Variable};
use itertools::iproduct;

use crate::model::{Instance, MaintenanceKind};
use crate::time_grid::TimeGrid;

/// Maintenance activities never run longer than this many shifts.
pub const DUR_MAX: usize = 5;

/// One potential `(vehicle, maintenance type, start shift)` occurrence. Whether it
/// actually happens is decided by [`VariableSet::perf`]; `sigma_start` and `dur` are
/// fixed parameters, not variables ("Maintenance duration as a parameter, not a variable").
#[derive(Debug, Clone)]
pub struct MaintInstance {
    /// Index into [`Instance::vehicles`].
    pub vehicle: usize,
    /// Index into [`Instance::maintenance_types`].
    pub maint_type: usize,
    /// Shift index this instance would start at, were it performed.
    pub sigma_start: usize,
    /// Fixed duration in shifts, `clamp(ceil(manhours / 8), 1, DUR_MAX)`.
    pub dur: usize,
    /// Manhours drawn from the servicing depot's budget per active shift,
    /// `floor(manhours / dur)`, never less than 1.
    pub per_shift_manhours: u32,
    /// Preventive or corrective, copied from the underlying catalogue entry for
    /// convenient access without a second lookup.
    pub kind: MaintenanceKind,
    /// Specialization required, copied from the underlying catalogue entry.
    pub specialization: Option<String>,
}

impl MaintInstance {
    /// The half-open window of shift indices `[sigma_start, sigma_start + dur)` this
    /// instance would occupy the vehicle for.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.sigma_start..(self.sigma_start + self.dur)
    }
}

/// `dur(m)` and the per-shift manhour draw.
fn duration_and_draw(manhours: u32) -> (usize, u32) {
    let dur = ((manhours as f64) / 8.0).ceil() as usize;
    let dur = dur.clamp(1, DUR_MAX);
    let draw = (manhours / dur as u32).max(1);
    (dur, draw)
}

/// Enumerate every `(vehicle, maintenance type, sigma_start)` triple with
/// `sigma_start >= 1`.
fn enumerate_maint_instances(instance: &Instance, grid: &TimeGrid) -> Vec<MaintInstance> {
    let maint_types: Vec<(usize, (usize, u32))> = instance
        .maintenance_types
        .iter()
        .map(|mt| duration_and_draw(mt.manhours))
        .enumerate()
        .collect();

    iproduct!(0..instance.vehicles.len(), maint_types, 1..grid.len())
        .map(|(vehicle, (maint_type, (dur, per_shift_manhours)), sigma_start)| {
            let mt = &instance.maintenance_types[maint_type];
            MaintInstance {
                vehicle,
                maint_type,
                sigma_start,
                dur,
                per_shift_manhours,
                kind: mt.kind,
                specialization: mt.specialization.clone(),
            }
        })
        .collect()
}

/// Every decision variable and reification literal allocated for one solve,
/// indexed the way the variable table describes.
#[derive(Debug)]
pub struct VariableSet {
    /// `assign[v, r]`, keyed by `(vehicle_idx, route_idx)`.
    pub assign: HashMap<(usize, usize), Variable>,
    /// One-hot `at_loc[v, l, sigma]`, the primitive location decision: exactly one
    /// is 1 per `(v, sigma)` (enforced in the constraint assembler). `loc_int` below
    /// is its integer-valued projection, used wherever a plain location index is
    /// needed in arithmetic.
    pub at_loc: HashMap<(usize, usize, usize), Variable>,
    /// `loc[v, sigma]`, the integer view of `at_loc`, tied to it by an unconditional
    /// defining equality (not a reified one — it is always true by construction).
    pub loc_int: HashMap<(usize, usize), Variable>,
    /// `km[v, sigma]`.
    pub km: HashMap<(usize, usize), Variable>,
    /// `idle[v, sigma]`: v has no route assigned and is not under maintenance at sigma.
    pub idle: HashMap<(usize, usize), Variable>,
    /// `perf[m]`, indexed by position in the parallel `maint_instances` vector.
    pub perf: Vec<Variable>,
    /// `kms[m]`.
    pub kms: Vec<Variable>,
    /// `dev[m]`, only present for preventive instances.
    pub dev: HashMap<usize, Variable>,
    /// `dev+[m]`, only present for preventive instances.
    pub dev_pos: HashMap<usize, Variable>,
    /// `dev-[m]`, only present for preventive instances.
    pub dev_neg: HashMap<usize, Variable>,
    /// `at_dep[m, l]`: one boolean per `(maintenance instance, capable depot)` pair.
    /// `dep[m]`'s domain restriction (C12) falls out structurally from only
    /// ever creating entries for depots capable of `m`'s specialization.
    pub at_dep: HashMap<(usize, usize), Variable>,
    /// `active[m, sigma]`, only present for sigma inside `m`'s window.
    pub active: HashMap<(usize, usize), Variable>,
}

impl VariableSet {
    /// `dep[m]`'s candidate depot indices, i.e. the depots an `at_dep` entry exists
    /// for.
    pub fn candidate_depots_for<'a>(&'a self, m: usize) -> impl Iterator<Item = usize> + 'a {
        self.at_dep.keys().filter(move |(mi, _)| *mi == m).map(|(_, l)| *l)
    }
}

/// Build every variable for the given instance and time grid, returning the raw
/// `ProblemVariables` builder (consumed next by [`crate::solver::objective`] to
/// produce a solver model), the indexed [`VariableSet`], and the enumerated
/// maintenance instances the rest of the pipeline is parameterized over.
pub fn build(instance: &Instance, grid: &TimeGrid) -> (ProblemVariables, VariableSet, Vec<MaintInstance>) {
    let mut p = ProblemVariables::new();
    let k_max = instance.k_max() as f64;
    let l = instance.location_count();

    let mut assign = HashMap::new();
    for (vi, _) in instance.vehicles.iter().enumerate() {
        for (ri, _) in instance.routes.iter().enumerate() {
            assign.insert((vi, ri), p.add(variable().binary()));
        }
    }

    let mut at_loc = HashMap::new();
    let mut loc_int = HashMap::new();
    let mut km = HashMap::new();
    let mut idle = HashMap::new();
    for (vi, _) in instance.vehicles.iter().enumerate() {
        for sigma in grid.indices() {
            for li in 0..l {
                at_loc.insert((vi, li, sigma), p.add(variable().binary()));
            }
            loc_int.insert((vi, sigma), p.add(variable().integer().min(0).max((l as f64 - 1.0).max(0.0))));
            km.insert((vi, sigma), p.add(variable().integer().min(0).max(k_max)));
            if !grid.is_initial(sigma) {
                idle.insert((vi, sigma), p.add(variable().binary()));
            }
        }
    }

    let maint_instances = enumerate_maint_instances(instance, grid);

    let mut perf = Vec::with_capacity(maint_instances.len());
    let mut kms = Vec::with_capacity(maint_instances.len());
    let mut dev = HashMap::new();
    let mut dev_pos = HashMap::new();
    let mut dev_neg = HashMap::new();
    let mut at_dep = HashMap::new();
    let mut active = HashMap::new();

    for (mi, m) in maint_instances.iter().enumerate() {
        perf.push(p.add(variable().binary()));
        kms.push(p.add(variable().integer().min(0).max(k_max)));

        if m.kind == MaintenanceKind::Preventive {
            dev.insert(mi, p.add(variable().integer().min(0).max(k_max)));
            dev_pos.insert(mi, p.add(variable().integer().min(0).max(k_max)));
            dev_neg.insert(mi, p.add(variable().integer().min(0).max(k_max)));
        }

        for depot in instance.capable_depot_indices(m.specialization.as_deref()) {
            at_dep.insert((mi, depot), p.add(variable().binary()));
        }

        for sigma in m.window() {
            if sigma < grid.len() {
                active.insert((mi, sigma), p.add(variable().binary()));
            }
        }
    }

    (
        p,
        VariableSet {
            assign,
            at_loc,
            loc_int,
            km,
            idle,
            perf,
            kms,
            dev,
            dev_pos,
            dev_neg,
            at_dep,
            active,
        },
        maint_instances,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_draw_matches_spec_formula() {
        assert_eq!(duration_and_draw(8), (1, 8));
        assert_eq!(duration_and_draw(80), (5, 16));
        assert_eq!(duration_and_draw(9), (2, 4));
        assert_eq!(duration_and_draw(1), (1, 1));
        // DUR_MAX clamp: even a huge manhour figure tops out at 5 shifts.
        assert_eq!(duration_and_draw(1000).0, DUR_MAX);
    }
}
