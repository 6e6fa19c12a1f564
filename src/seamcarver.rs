// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main engine
//!
//! The carver owns a private copy of the image and its energy field.
//! Callers ask it for a seam, then hand that seam back to be removed;
//! each removal shrinks the grid by one column or row and patches the
//! energy field along the seam, rather than rebuilding it.

use crate::dump::energy_to_image;
use crate::energy::EnergyField;
use crate::error::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{find_seam, Axis, SeamFinder};
use image::{GrayImage, RgbImage};
use log::{debug, trace};

/// A stateful seam carver for a single image.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
    energy: EnergyField,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a copy of `image`.  Fails if the
    /// image has no pixels.
    pub fn new(image: &RgbImage) -> Result<Self> {
        let grid = PixelGrid::from_image(image)?;
        let energy = EnergyField::compute(&grid);
        debug!("carver ready for {}x{} image", grid.width(), grid.height());
        Ok(SeamCarver { grid, energy })
    }

    /// The current picture, as an independent copy.
    pub fn picture(&self) -> RgbImage {
        self.grid.to_image()
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Energy of the pixel at column `x` and row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.energy_at(x, y)
    }

    /// The whole energy field, as it stands.
    pub fn energy_field(&self) -> &EnergyField {
        &self.energy
    }

    /// The energy field rendered as a greyscale image.
    pub fn energy_image(&self) -> GrayImage {
        energy_to_image(&self.energy)
    }

    /// Find the cheapest seam in the given direction.
    pub fn find_seam(&self, axis: Axis) -> Vec<u32> {
        find_seam(&self.energy, axis)
    }

    /// Remove a vertical seam: one column index per row.  Nothing is
    /// touched unless the seam is valid for the current picture.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.validate(seam, Axis::Vertical)?;
        self.grid.remove_vertical_seam(seam);
        self.energy.remove_vertical_seam(&self.grid, seam);
        trace!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove a horizontal seam: one row index per column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.validate(seam, Axis::Horizontal)?;
        self.grid.remove_horizontal_seam(seam);
        self.energy.remove_horizontal_seam(&self.grid, seam);
        trace!("removed horizontal seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove a seam in the given direction.
    pub fn remove_seam(&mut self, seam: &[u32], axis: Axis) -> Result<()> {
        match axis {
            Axis::Vertical => self.remove_vertical_seam(seam),
            Axis::Horizontal => self.remove_horizontal_seam(seam),
        }
    }

    /// Find and remove the cheapest seam in one direction.
    pub fn carve_once(&mut self, axis: Axis) -> Result<()> {
        let seam = self.find_seam(axis);
        self.remove_seam(&seam, axis)
    }

    fn validate(&self, seam: &[u32], axis: Axis) -> Result<()> {
        let (name, length, bound) = match axis {
            Axis::Vertical => ("width", self.height(), self.width()),
            Axis::Horizontal => ("height", self.width(), self.height()),
        };
        if bound <= 1 {
            return Err(CarveError::invalid(format!(
                "cannot remove a {:?} seam from an image of {} 1",
                axis, name
            )));
        }
        if seam.is_empty() {
            return Err(CarveError::invalid("empty seam"));
        }
        if seam.len() != length as usize {
            return Err(CarveError::invalid(format!(
                "{:?} seam has length {}, expected {}",
                axis,
                seam.len(),
                length
            )));
        }
        if let Some((i, &s)) = seam.iter().enumerate().find(|&(_, &s)| s >= bound) {
            return Err(CarveError::invalid(format!(
                "seam entry {} is {}, outside of 0..{}",
                i, s, bound
            )));
        }
        if let Some(i) = seam
            .windows(2)
            .position(|w| (i64::from(w[0]) - i64::from(w[1])).abs() > 1)
        {
            return Err(CarveError::invalid(format!(
                "seam entries {} and {} are not adjacent",
                i,
                i + 1
            )));
        }
        Ok(())
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the picture.  While both dimensions are too large the carver
    /// alternates, starting with a column; then it finishes whichever
    /// dimension is left.
    pub fn carve(&mut self, newwidth: u32, newheight: u32) -> Result<()> {
        if newwidth == 0 || newheight == 0 {
            return Err(CarveError::invalid(format!(
                "cannot carve down to {}x{}",
                newwidth, newheight
            )));
        }
        if self.width() < newwidth || self.height() < newheight {
            return Err(CarveError::invalid(format!(
                "seamcarve cannot upscale a {}x{} image to {}x{}",
                self.width(),
                self.height(),
                newwidth,
                newheight
            )));
        }

        let mut direction = Axis::Vertical;
        while self.width() > newwidth && self.height() > newheight {
            self.carve_once(direction)?;
            debug!("carved {:?}, now {}x{}", direction, self.width(), self.height());
            direction = direction.turn();
        }
        while self.width() > newwidth {
            self.carve_once(Axis::Vertical)?;
            debug!("carved Vertical, now {}x{}", self.width(), self.height());
        }
        while self.height() > newheight {
            self.carve_once(Axis::Horizontal)?;
            debug!("carved Horizontal, now {}x{}", self.width(), self.height());
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.find_seam(Axis::Horizontal)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.find_seam(Axis::Vertical)
    }
}

/// Carve a copy of `image` down to `newwidth` x `newheight`.
pub fn seamcarve(image: &RgbImage, newwidth: u32, newheight: u32) -> Result<RgbImage> {
    let mut carver = SeamCarver::new(image)?;
    carver.carve(newwidth, newheight)?;
    Ok(carver.picture())
}
