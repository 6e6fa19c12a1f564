// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, stored row-major.  It holds
/// whatever the carver needs one-per-pixel: the RGB samples, the
/// energy field, or the distance + parent pair for the seam search.
///
/// The field can only ever shrink, one seam at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A new map with every cell set to `fill`.
    pub fn filled(width: u32, height: u32, fill: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Panics if the vector is the
    /// wrong size, which is always a bug in the caller.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Self {
        assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The cells, row-major.
    pub fn values(&self) -> &[P] {
        &self.data
    }

    // All of the index math lives here, and only here.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Delete the cell at column `seam[y]` from every row `y`, shifting
    /// the rest of the row left.  The seam must already be validated.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let mut i = 0;
        self.data.retain(|_| {
            let keep = seam[i / width] as usize != i % width;
            i += 1;
            keep
        });
        self.width -= 1;
    }

    /// Delete the cell at row `seam[x]` from every column `x`, shifting
    /// the rest of the column up.  The seam must already be validated.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.width as usize);
        let width = self.width as usize;
        let last = self.height as usize - 1;
        for (x, &row) in seam.iter().enumerate() {
            for y in (row as usize)..last {
                self.data[y * width + x] = self.data[(y + 1) * width + x];
            }
        }
        self.data.truncate(last * width);
        self.height -= 1;
    }
}

impl<P: Copy + Default> TwoDimensionalMap<P> {
    /// Define a new map of default values.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
