// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a normalized escape time into a colour.

use crate::errors::MandelError;
use image::{Pixel, Rgba};

/// Generate a greyscale colour from a single value in [0, 1].  Zero is
/// white and one is black; the conversion to a byte truncates rather
/// than rounds.  Alpha is always fully opaque.
pub fn greyscale(f: f64) -> Result<Rgba<u8>, MandelError> {
    // Written so that NaN falls out as well.
    if !(f >= 0.0 && f <= 1.0) {
        return Err(MandelError::OutOfRange { value: f });
    }
    let scaled = (255.0 - f * 255.0) as u8;
    Ok(Rgba::from_channels(scaled, scaled, scaled, 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(f: f64) -> Vec<u8> {
        greyscale(f).unwrap().channels().to_vec()
    }

    #[test]
    fn zero_is_white() {
        assert_eq!(channels(0.0), vec![255, 255, 255, 255]);
    }

    #[test]
    fn one_is_black() {
        assert_eq!(channels(1.0), vec![0, 0, 0, 255]);
    }

    #[test]
    fn midpoints_truncate() {
        // 255 - 127.5 = 127.5
        assert_eq!(channels(0.5), vec![127, 127, 127, 255]);
        // 255 - 25.5 = 229.5
        assert_eq!(channels(0.1), vec![229, 229, 229, 255]);
    }

    #[test]
    fn every_step_is_grey_and_opaque() {
        for i in 0..=30 {
            let f = i as f64 / 30.0;
            let c = channels(f);
            assert_eq!(c[0], c[1]);
            assert_eq!(c[1], c[2]);
            assert_eq!(c[3], 255);
            assert_eq!(c[0], (255.0 - f * 255.0) as u8);
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        for &f in &[-0.1, 1.1, -1e-9, 2.0, std::f64::NAN, std::f64::INFINITY] {
            match greyscale(f) {
                Err(MandelError::OutOfRange { .. }) => (),
                other => panic!("{} gave {:?}", f, other),
            }
        }
    }
}
