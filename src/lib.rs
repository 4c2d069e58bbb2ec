#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c` to it,
//! starting from zero, never runs off to infinity.  Points outside
//! the set do run off, some faster than others, and how fast is the
//! "escape time" used to colour the picture.
//!
//! This crate draws one fixed view of the set in greyscale: every
//! pixel of a square raster is mapped onto the complex plane, its
//! orbit is iterated until it leaves a generous escape radius or the
//! iteration budget runs out, and the fraction of the budget it used
//! is turned into a shade between white (escaped at once) and black
//! (never escaped).  The finished raster is written out as a PNG.

#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;
extern crate tempfile;

pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;

pub use errors::MandelError;
pub use escape::{evaluate, Escape};
pub use output::write_png;
pub use palette::greyscale;
pub use planes::{Pixel, PlaneMapper};
pub use render::Renderer;
