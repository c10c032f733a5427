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

//! Enumerates the shift sequence `Σ = [(0, initial)] ++ [(d, day), (d, night) for d in 1..=D]`
//! and the index↔label bijection every other module indexes variables against.
//!
//! The synthetic `initial` pseudo-shift gives a uniform place to pin the starting
//! state so every transition constraint reads `σ → σ+1` without
//! special-casing day 1.

use crate::model::Shift;

/// `(day, shift)` label for a point in the planning horizon, or the synthetic
/// starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayShift {
    /// The synthetic `(0, initial)` pseudo-shift.
    Initial,
    /// A real `(day, shift)` slot, `day` 1-indexed.
    Real(u32, Shift),
}

/// The ordered sequence of shift indices for a planning horizon of `days` days.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    entries: Vec<DayShift>,
    days: u32,
}

impl TimeGrid {
    /// Build the grid for a `days`-day horizon. `days` may be 0 (only the initial
    /// pseudo-shift exists).
    pub fn new(days: u32) -> Self {
        let mut entries = Vec::with_capacity(1 + 2 * days as usize);
        entries.push(DayShift::Initial);
        for day in 1..=days {
            entries.push(DayShift::Real(day, Shift::Day));
            entries.push(DayShift::Real(day, Shift::Night));
        }
        Self { entries, days }
    }

    /// Number of planning days this grid was built for.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Total number of shift indices, `|Σ|`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid has no real shifts (only the initial pseudo-shift, or not
    /// even that).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index of the `(0, initial)` pseudo-shift. Always 0.
    pub fn initial(&self) -> usize {
        0
    }

    /// The last valid index.
    pub fn last(&self) -> usize {
        self.entries.len() - 1
    }

    /// Look up the index for a given `(day, shift)` pair. `None` if `day` exceeds
    /// the horizon.
    pub fn sigma_of(&self, day: u32, shift: Shift) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| *e == DayShift::Real(day, shift))
    }

    /// The `(day, shift)` label for an index. Panics on an out-of-range index; every
    /// caller holds indices this grid itself produced.
    pub fn day_shift_of(&self, sigma: usize) -> DayShift {
        self.entries[sigma]
    }

    /// Whether `sigma` is a day shift.
    pub fn is_day(&self, sigma: usize) -> bool {
        matches!(self.entries[sigma], DayShift::Real(_, Shift::Day))
    }

    /// Whether `sigma` is a night shift.
    pub fn is_night(&self, sigma: usize) -> bool {
        matches!(self.entries[sigma], DayShift::Real(_, Shift::Night))
    }

    /// Whether `sigma` is the synthetic initial pseudo-shift.
    pub fn is_initial(&self, sigma: usize) -> bool {
        matches!(self.entries[sigma], DayShift::Initial)
    }

    /// The next index, if `sigma` is not terminal.
    pub fn next(&self, sigma: usize) -> Option<usize> {
        (sigma + 1 < self.entries.len()).then_some(sigma + 1)
    }

    /// The previous index, if `sigma` is not the initial shift.
    pub fn prev(&self, sigma: usize) -> Option<usize> {
        sigma.checked_sub(1)
    }

    /// All valid shift indices, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + Clone {
        0..self.entries.len()
    }

    /// All indices excluding the terminal one — every `sigma` for which
    /// `next(sigma)` is `Some`.
    pub fn non_terminal_indices(&self) -> impl Iterator<Item = usize> + Clone {
        0..self.entries.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_shape_matches_formula() {
        let grid = TimeGrid::new(3);
        assert_eq!(grid.len(), 1 + 2 * 3);
        assert!(grid.is_initial(0));
        assert_eq!(grid.sigma_of(1, Shift::Day), Some(1));
        assert_eq!(grid.sigma_of(1, Shift::Night), Some(2));
        assert_eq!(grid.sigma_of(3, Shift::Night), Some(grid.last()));
        assert_eq!(grid.sigma_of(4, Shift::Day), None);
    }

    #[test]
    fn next_prev_are_total_on_interior() {
        let grid = TimeGrid::new(2);
        assert_eq!(grid.prev(0), None);
        assert_eq!(grid.next(grid.last()), None);
        for sigma in grid.non_terminal_indices() {
            assert_eq!(grid.next(sigma), Some(sigma + 1));
            assert_eq!(grid.prev(sigma + 1), Some(sigma));
        }
    }

    #[test]
    fn zero_day_horizon_has_only_initial() {
        let grid = TimeGrid::new(0);
        assert_eq!(grid.len(), 1);
        assert!(grid.is_initial(0));
    }
}
