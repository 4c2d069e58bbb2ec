// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The errors a render can fail with.  None of them are recoverable;
//! the binary reports whichever one arrives first and exits.

use std::io;

/// Everything that can go wrong between a pixel and a file on disk.
#[derive(Debug, Fail)]
pub enum MandelError {
    /// The palette was handed a value outside of [0, 1].  The
    /// renderer can't produce one of these, so seeing it means the
    /// iteration count got away from its budget somewhere.
    #[fail(display = "intensity {} is not between zero and one", value)]
    OutOfRange {
        /// The offending value.
        value: f64,
    },

    /// A plane or renderer was built with parameters that can't
    /// describe an image.
    #[fail(display = "invalid render configuration: {}", reason)]
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },

    /// The output file could not be created, written or renamed into
    /// place.
    #[fail(display = "could not write output: {}", _0)]
    Io(#[cause] io::Error),

    /// The PNG encoder refused the raster.
    #[fail(display = "could not encode image: {}", reason)]
    Encoding {
        /// The encoder's complaint.
        reason: String,
    },
}

impl From<io::Error> for MandelError {
    fn from(err: io::Error) -> Self {
        MandelError::Io(err)
    }
}

impl MandelError {
    pub(crate) fn config<S: Into<String>>(reason: S) -> Self {
        MandelError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use failure::Fail;

    #[test]
    fn out_of_range_names_the_value() {
        let err = MandelError::OutOfRange { value: 1.5 };
        assert_eq!(format!("{}", err), "intensity 1.5 is not between zero and one");
    }

    #[test]
    fn io_errors_convert_and_keep_their_cause() {
        let err: MandelError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(format!("{}", err).contains("nope"));
        assert!(err.cause().is_some());
    }
}
