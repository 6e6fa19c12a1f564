// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a pixel grid, calculate the dual-gradient energy of every
//! pixel, and keep that field current as seams are carved out of the
//! grid.  The energy of a pixel depends only on its four direct
//! neighbors, so after a seam is removed only the cells on either side
//! of the seam need to be recalculated.

use crate::error::{CarveError, Result};
use crate::pixelgrid::{PixelGrid, Sample};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The energy of every pixel on the edge of the grid.  High enough to
/// steer seams inward, finite so that a seam may still run along the
/// edge when nothing cheaper exists.
pub const BORDER_ENERGY: f64 = 1000.0;

// A one-line conditional.  `cargo fmt` spreads every `if` expression
// over five lines, and the border rule reads better as one.
macro_rules! t {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

// Takes the channels (R,G,B) from two pixels, squares the difference
// of each channel, and sums them.
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
#[inline]
fn energy_of_pair(p1: &Sample, p2: &Sample) -> f64 {
    p1.iter()
        .zip(p2.iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            d * d
        })
        .sum::<i32>()
        .into()
}

/// The dual-gradient energy of a single pixel of the grid as it stands
/// now:
///
/// ```text
///    e(x,y) = √( |(x-1,y) - (x+1,y)|² + |(x,y-1) - (x,y+1)|² )
/// ```
///
/// Pixels on the edge of the grid get `BORDER_ENERGY`.
pub fn pixel_energy(grid: &PixelGrid, x: u32, y: u32) -> f64 {
    let (mw, mh) = (grid.width() - 1, grid.height() - 1);
    t!(
        x == 0 || y == 0 || x >= mw || y >= mh,
        BORDER_ENERGY,
        (energy_of_pair(grid.sample(x - 1, y), grid.sample(x + 1, y))
            + energy_of_pair(grid.sample(x, y - 1), grid.sample(x, y + 1)))
        .sqrt()
    )
}

/// The energy field: one value per pixel of the grid it was computed
/// from, kept the same shape as that grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    energy: TwoDimensionalMap<f64>,
}

impl EnergyField {
    /// Compute the energy of every pixel in the grid.
    pub fn compute(grid: &PixelGrid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let energy = iproduct!(0..height, 0..width)
            .map(|(y, x)| pixel_energy(grid, x, y))
            .collect();
        EnergyField {
            energy: TwoDimensionalMap::from_vec(width, height, energy),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(width: u32, height: u32, energy: Vec<f64>) -> Self {
        EnergyField {
            energy: TwoDimensionalMap::from_vec(width, height, energy),
        }
    }

    pub fn width(&self) -> u32 {
        self.energy.width()
    }

    pub fn height(&self) -> u32 {
        self.energy.height()
    }

    /// The energy values, row-major.
    pub fn values(&self) -> &[f64] {
        self.energy.values()
    }

    pub fn energy_at(&self, x: u32, y: u32) -> Result<f64> {
        if !self.energy.contains(x, y) {
            return Err(CarveError::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.energy[(x, y)])
    }

    // Unchecked, for the seam search.
    pub(crate) fn get(&self, x: u32, y: u32) -> f64 {
        self.energy[(x, y)]
    }

    /// Recompute a single cell against the grid's current shape.
    pub(crate) fn refresh(&mut self, grid: &PixelGrid, x: u32, y: u32) {
        self.energy[(x, y)] = pixel_energy(grid, x, y);
    }

    /// Compact the field after the same seam was removed from `grid`,
    /// then recompute the cells whose neighbors changed: the one now
    /// sitting in the removed slot, and the one just before it.
    pub(crate) fn remove_vertical_seam(&mut self, grid: &PixelGrid, seam: &[u32]) {
        self.energy.remove_vertical_seam(seam);
        let width = self.width();
        for (y, &x) in (0..).zip(seam.iter()) {
            if x < width {
                self.refresh(grid, x, y);
            }
            if x > 0 {
                self.refresh(grid, x - 1, y);
            }
        }
    }

    /// The horizontal analogue of `remove_vertical_seam`.
    pub(crate) fn remove_horizontal_seam(&mut self, grid: &PixelGrid, seam: &[u32]) {
        self.energy.remove_horizontal_seam(seam);
        let height = self.height();
        for (x, &y) in (0..).zip(seam.iter()) {
            if y < height {
                self.refresh(grid, x, y);
            }
            if y > 0 {
                self.refresh(grid, x, y - 1);
            }
        }
    }
}
