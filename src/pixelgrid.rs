// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! The carver's private copy of the image being carved.  Samples go in
//! by copy and come out by copy; nothing the caller holds ever aliases
//! the grid.

use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel, Rgb, RgbImage};

/// One RGB sample.
pub type Sample = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    samples: TwoDimensionalMap<Sample>,
}

impl PixelGrid {
    /// Copy every sample out of `image`.  An image with no pixels can't
    /// be carved at all.
    pub fn from_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::invalid(format!(
                "cannot carve a {}x{} image",
                width, height
            )));
        }
        let samples = image
            .pixels()
            .map(|p| {
                let c = p.channels();
                [c[0], c[1], c[2]]
            })
            .collect();
        Ok(PixelGrid {
            samples: TwoDimensionalMap::from_vec(width, height, samples),
        })
    }

    pub fn width(&self) -> u32 {
        self.samples.width()
    }

    pub fn height(&self) -> u32 {
        self.samples.height()
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.samples.contains(x, y) {
            Ok(())
        } else {
            Err(CarveError::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Sample> {
        self.check(x, y)?;
        Ok(self.samples[(x, y)])
    }

    pub fn set(&mut self, x: u32, y: u32, sample: Sample) -> Result<()> {
        self.check(x, y)?;
        self.samples[(x, y)] = sample;
        Ok(())
    }

    // Unchecked access for the energy calculation, which only ever asks
    // for neighbors of an interior pixel.
    pub(crate) fn sample(&self, x: u32, y: u32) -> &Sample {
        &self.samples[(x, y)]
    }

    /// A fresh image of the grid as it stands now.
    pub fn to_image(&self) -> RgbImage {
        let (width, height) = self.samples.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| *Rgb::from_slice(self.sample(x, y)))
    }

    pub(crate) fn remove_vertical_seam(&mut self, seam: &[u32]) {
        self.samples.remove_vertical_seam(seam)
    }

    pub(crate) fn remove_horizontal_seam(&mut self, seam: &[u32]) {
        self.samples.remove_horizontal_seam(seam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
    }

    #[test]
    fn empty_images_are_rejected() {
        let image: RgbImage = ImageBuffer::new(0, 4);
        match PixelGrid::from_image(&image) {
            Err(CarveError::InvalidArgument(_)) => (),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = PixelGrid::from_image(&gradient(3, 2)).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), [2, 1, 7]);
        grid.set(0, 0, [9, 9, 9]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), [9, 9, 9]);
        assert_eq!(
            grid.get(3, 0),
            Err(CarveError::IndexOutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.set(0, 2, [0, 0, 0]).is_err());
    }

    #[test]
    fn the_grid_never_aliases_the_callers_image() {
        let mut source = gradient(3, 3);
        let mut grid = PixelGrid::from_image(&source).unwrap();
        source.put_pixel(1, 1, Rgb([200, 200, 200]));
        assert_eq!(grid.get(1, 1).unwrap(), [1, 1, 7]);

        let mut exported = grid.to_image();
        exported.put_pixel(0, 0, Rgb([100, 100, 100]));
        assert_eq!(grid.get(0, 0).unwrap(), [0, 0, 7]);

        grid.set(2, 2, [50, 50, 50]).unwrap();
        assert_eq!(exported.get_pixel(2, 2), &Rgb([2, 2, 7]));
    }

    #[test]
    fn export_tracks_the_current_dimensions() {
        let mut grid = PixelGrid::from_image(&gradient(4, 3)).unwrap();
        grid.remove_vertical_seam(&[0, 0, 0]);
        let image = grid.to_image();
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(image.get_pixel(0, 2), &Rgb([1, 2, 7]));
    }
}
