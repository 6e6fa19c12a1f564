// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving errors
//!
//! Every fallible operation in the carver is a precondition check, run
//! before anything is mutated.  Nothing here is transient, and nothing
//! is retried.

use failure::Fail;

/// The two ways a caller can misuse the carver.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CarveError {
    /// A malformed image, seam, or carve target.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A coordinate query outside of the current grid.
    #[fail(
        display = "pixel ({}, {}) is outside of the {}x{} grid",
        x, y, width, height
    )]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl CarveError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        CarveError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CarveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = CarveError::IndexOutOfBounds {
            x: 4,
            y: 1,
            width: 3,
            height: 3,
        };
        assert_eq!(e.to_string(), "pixel (4, 1) is outside of the 3x3 grid");
        assert_eq!(
            CarveError::invalid("empty seam").to_string(),
            "invalid argument: empty seam"
        );
    }
}
