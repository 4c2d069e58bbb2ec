// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test at the bottom of every pixel.

use num::Complex;

/// How far out an orbit may wander before we call it gone.  Two is
/// enough to prove divergence; sixty is what this renderer has always
/// used, and changing it changes the picture.
pub const ESCAPE_RADIUS: f64 = 60.0;
const ESCAPE_RADIUS_SQR: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// What happened to the orbit of a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// True if the orbit left the escape radius before the budget ran
    /// out.
    pub escaped: bool,
    /// The zero-based iteration on which the orbit escaped, or the
    /// whole budget if it never did.
    pub iterations: usize,
}

/// This is our classic iterator function.  Starting from zero, square
/// and add `c` until either the orbit leaves the escape radius or we
/// have done `max_iterations` rounds.  The escape check happens right
/// after each update, so a point that leaves on the very first update
/// reports zero iterations.
pub fn evaluate(c: Complex<f64>, max_iterations: usize) -> Escape {
    let mut z = Complex {
        re: 0.0_f64,
        im: 0.0_f64,
    };
    for i in 0..max_iterations {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return Escape {
                escaped: true,
                iterations: i,
            };
        }
    }
    Escape {
        escaped: false,
        iterations: max_iterations,
    }
}
