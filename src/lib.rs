// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving, using the
//! dual-gradient energy function.
//!
//! ```no_run
//! use rgbseam::{SeamCarver, SeamFinder};
//!
//! let image = image::open("input.png").unwrap().to_rgb();
//! let mut carver = SeamCarver::new(&image).unwrap();
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.picture().save("output.png").unwrap();
//! ```

pub mod dump;
pub mod energy;
pub mod error;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use dump::energy_to_image;
pub use energy::{EnergyField, BORDER_ENERGY};
pub use error::{CarveError, Result};
pub use pixelgrid::PixelGrid;
pub use seamcarver::{seamcarve, SeamCarver};
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, find_seam, Axis, SeamFinder};
