// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy field
//!
//! The field is treated as a directed acyclic graph: every pixel has an
//! edge to each of its (up to) three neighbors in the next row, weighted
//! by the energy of the pixel it points to.  Rows are already in
//! topological order, so a single pass of edge relaxation, row by row,
//! finds the shortest path from an implicit source above the first row
//! to an implicit sink below the last one.  No priority queue needed.
//!
//! Horizontal seams are the same search with the field turned on its
//! side: columns play the part of rows, left to right.

use crate::energy::{EnergyField, BORDER_ENERGY};
use crate::twodmap::TwoDimensionalMap;
use log::trace;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers.
pub trait SeamFinder {
    /// Request a horizontal seam: one row index for every column,
    /// left to right.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam: one column index for every row, top to
    /// bottom.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// The direction a seam runs through the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Top to bottom, one pixel per row.
    Vertical,
    /// Left to right, one pixel per column.
    Horizontal,
}

impl Axis {
    /// The other direction.
    pub fn turn(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    // (depth, breadth): how many steps the seam takes, and how many
    // candidates there are at each step.
    fn extents(self, field: &EnergyField) -> (u32, u32) {
        match self {
            Axis::Vertical => (field.height(), field.width()),
            Axis::Horizontal => (field.width(), field.height()),
        }
    }

    // Read the field as though this axis ran top to bottom.
    fn energy(self, field: &EnergyField, depth: u32, lateral: u32) -> f64 {
        match self {
            Axis::Vertical => field.get(lateral, depth),
            Axis::Horizontal => field.get(depth, lateral),
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct EnergyAndBackPointer {
    energy: f64,
    parent: u32,
}

/// Given an energy field and a direction, return the seam of least
/// total energy running in that direction.  Where two paths cost the
/// same, the one that runs straight wins: a pixel keeps the parent
/// directly behind it, and the sink keeps an end whose last step was
/// straight.  Otherwise the first path the relaxation reached wins.
///
/// The scratch space is built fresh for the field's current size, and
/// dropped on return.
pub fn find_seam(field: &EnergyField, axis: Axis) -> Vec<u32> {
    let (depth, breadth) = axis.extents(field);

    // Indexed (lateral, depth), so the search always runs "downward".
    let mut target = TwoDimensionalMap::filled(
        breadth,
        depth,
        EnergyAndBackPointer {
            energy: f64::INFINITY,
            parent: 0,
        },
    );

    // The source reaches every pixel of the first row at the cost of a
    // border pixel, which is what every one of them is.
    for l in 0..breadth {
        target[(l, 0)].energy = BORDER_ENERGY;
    }

    let last = breadth - 1;
    for d in 1..depth {
        for l in 0..breadth {
            let reached = target[(l, d - 1)].energy;
            for next in l.saturating_sub(1)..=(l + 1).min(last) {
                let candidate = reached + axis.energy(field, d, next);
                let cell = &mut target[(next, d)];
                if cell.energy > candidate || (cell.energy == candidate && next == l) {
                    cell.energy = candidate;
                    cell.parent = l;
                }
            }
        }
    }

    // Relax into the sink.
    let (mut sink, mut seam_col, mut straight) = (f64::INFINITY, 0, false);
    for l in 0..breadth {
        let end = target[(l, depth - 1)];
        let runs_straight = depth == 1 || end.parent == l;
        if sink > end.energy || (sink == end.energy && runs_straight && !straight) {
            sink = end.energy;
            seam_col = l;
            straight = runs_straight;
        }
    }
    trace!("{:?} seam of {} steps, cost {}", axis, depth, sink);

    // Working backwards from the sink, collect the seam, reverse and
    // return.
    (0..depth)
        .rev()
        .fold(Vec::<u32>::with_capacity(depth as usize), |mut acc, d| {
            acc.push(seam_col);
            seam_col = target[(seam_col, d)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Return the list of x-coordinates that, when mapped with the range
/// (0..height), give the coordinates of each pixel in the seam.
pub fn energy_to_vertical_seam(field: &EnergyField) -> Vec<u32> {
    find_seam(field, Axis::Vertical)
}

/// Return the list of y-coordinates that, when mapped with the range
/// (0..width), give the coordinates of each pixel in the seam.
pub fn energy_to_horizontal_seam(field: &EnergyField) -> Vec<u32> {
    find_seam(field, Axis::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Row 0 never matters: the source charges every pixel in it the
    // border energy, whatever the field says.
    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn field() -> EnergyField {
        EnergyField::from_values(5, 4, ENERGY_DATA.to_vec())
    }

    fn seam_cost(field: &EnergyField, seam: &[u32], axis: Axis) -> f64 {
        seam.iter()
            .enumerate()
            .skip(1)
            .map(|(d, &l)| axis.energy(field, d as u32, l))
            .sum::<f64>()
            + BORDER_ENERGY
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = energy_to_vertical_seam(&field());
        assert_eq!(seam, [3, 3, 4, 3]);
        assert_eq!(seam_cost(&field(), &seam, Axis::Vertical), 1008.0);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let seam = energy_to_horizontal_seam(&field());
        assert_eq!(seam, [1, 1, 0, 1, 2]);
        assert_eq!(seam_cost(&field(), &seam, Axis::Horizontal), 1009.0);
    }

    #[test]
    fn uniform_image_seam_runs_through_the_center() {
        let mut values = vec![BORDER_ENERGY; 9];
        values[4] = 0.0;
        let field = EnergyField::from_values(3, 3, values);
        let seam = energy_to_vertical_seam(&field);
        assert_eq!(seam, [1, 1, 1]);
        assert_eq!(seam_cost(&field, &seam, Axis::Vertical), 2000.0);
        let seam = energy_to_horizontal_seam(&field);
        assert_eq!(seam, [1, 1, 1]);
        assert_eq!(seam_cost(&field, &seam, Axis::Horizontal), 2000.0);
    }

    #[test]
    fn equal_costs_prefer_the_straight_path() {
        // A flat field, then a flat channel two columns wide: the
        // zigzags through either cost as much as the straight runs.
        let field = EnergyField::from_values(3, 4, vec![5.0; 12]);
        assert_eq!(energy_to_vertical_seam(&field), [0, 0, 0, 0]);
        let mut values = vec![BORDER_ENERGY; 12];
        values[4] = 0.0;
        values[5] = 0.0;
        values[7] = 0.0;
        values[8] = 0.0;
        let field = EnergyField::from_values(3, 4, values);
        assert_eq!(energy_to_vertical_seam(&field), [1, 1, 1, 1]);
    }

    #[test]
    fn single_column_fields() {
        let field = EnergyField::from_values(1, 5, vec![BORDER_ENERGY; 5]);
        assert_eq!(energy_to_vertical_seam(&field), [0, 0, 0, 0, 0]);
        assert_eq!(energy_to_horizontal_seam(&field), [0]);
    }

    #[test]
    fn single_row_fields() {
        let field = EnergyField::from_values(4, 1, vec![BORDER_ENERGY; 4]);
        assert_eq!(energy_to_horizontal_seam(&field), [0, 0, 0, 0]);
        assert_eq!(energy_to_vertical_seam(&field), [0]);
    }

    #[test]
    fn seams_stay_connected() {
        let values = (0..48).map(|i| f64::from((i * 7919) % 31)).collect();
        let field = EnergyField::from_values(8, 6, values);
        for &(axis, len, bound) in &[(Axis::Vertical, 6, 8), (Axis::Horizontal, 8, 6)] {
            let seam = find_seam(&field, axis);
            assert_eq!(seam.len(), len);
            assert!(seam.iter().all(|&i| i < bound));
            assert!(seam
                .windows(2)
                .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1));
        }
    }

    #[test]
    fn axes_turn() {
        assert_eq!(Axis::Vertical.turn(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.turn(), Axis::Vertical);
    }
}
