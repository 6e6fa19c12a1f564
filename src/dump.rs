// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a greyscale image, brightest where the
//! energy is highest.  Useful for seeing what the carver sees.

use crate::energy::EnergyField;
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::{clamp, NumCast};

/// Scale every energy by the field's maximum into 0..=255.  A field
/// with no energy at all renders black.
pub fn energy_to_image(field: &EnergyField) -> GrayImage {
    let (width, height) = (field.width(), field.height());
    let factor = field.values().iter().cloned().fold(0.0, f64::max);
    let values = field.values();
    ImageBuffer::from_fn(width, height, |x, y| {
        let e = values[(y as usize) * (width as usize) + (x as usize)];
        let scaled = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
        let c: u8 = NumCast::from(clamp(scaled.round(), 0.0, 255.0)).unwrap_or(0);
        Luma([c])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::BORDER_ENERGY;

    #[test]
    fn the_hottest_pixel_is_white() {
        let mut values = vec![BORDER_ENERGY; 9];
        values[4] = 500.0;
        let image = energy_to_image(&EnergyField::from_values(3, 3, values));
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(image.get_pixel(0, 0), &Luma([255]));
        assert_eq!(image.get_pixel(1, 1), &Luma([128]));
    }

    #[test]
    fn an_empty_field_is_black() {
        let image = energy_to_image(&EnergyField::from_values(2, 1, vec![0.0, 0.0]));
        assert!(image.pixels().all(|p| p == &Luma([0])));
    }
}
