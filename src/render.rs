// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The raster driver: walk every pixel, find its point on the complex
//! plane, ask how long that point's orbit took to escape, and paint
//! the answer in shades of grey.

use image::{Rgba, RgbaImage};
use itertools::iproduct;
use log::{debug, info};
use num::Complex;

use crate::errors::MandelError;
use crate::escape::evaluate;
use crate::palette::greyscale;
use crate::planes::{Pixel, PlaneMapper};

/// Width and height of the reference image.
pub const SIZE: usize = 1024;
/// Width of the reference view on the complex plane.  Smaller is a
/// bigger zoom.
pub const ZOOM: f64 = 2.0;
/// Real part of the reference offset.
pub const OFFSET_X: f64 = 1.5;
/// Imaginary part of the reference offset.
pub const OFFSET_Y: f64 = 1.5;
/// Iteration budget per pixel for the reference image.
pub const MAX_ITERATIONS: usize = 30;

/// Holds the plane and the iteration budget.  Once built it is not
/// mutated; rendering it twice gives the same pixels twice.
#[derive(Debug, Clone)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
}

impl Renderer {
    /// Requires the size of the (square) image, the zoom and offset
    /// that place it on the complex plane, and the number of
    /// iterations to try on each point before deciding it's in the
    /// set.
    pub fn new(
        size: usize,
        zoom: f64,
        offset: Complex<f64>,
        limit: usize,
    ) -> Result<Self, MandelError> {
        if limit == 0 {
            return Err(MandelError::config("the iteration budget must be positive"));
        }
        if size > u32::max_value() as usize {
            return Err(MandelError::config(format!("{} pixels is too wide for an image", size)));
        }
        let plane = PlaneMapper::new(size, zoom, offset)?;
        Ok(Renderer { plane, limit })
    }

    /// The reference view at a raster size of our choosing.
    pub fn with_size(size: usize) -> Result<Self, MandelError> {
        Renderer::new(size, ZOOM, Complex::new(OFFSET_X, OFFSET_Y), MAX_ITERATIONS)
    }

    /// The reference view at the reference size.
    pub fn reference() -> Result<Self, MandelError> {
        Renderer::with_size(SIZE)
    }

    /// The plane this renderer draws.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The per-pixel iteration budget.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Colour a single pixel.  The escape count can never exceed the
    /// budget, so the palette should never refuse it; if it does, the
    /// error goes back up to the caller with everything else.
    pub fn colour_at(&self, pixel: &Pixel) -> Result<Rgba<u8>, MandelError> {
        let point = self.plane.pixel_to_point(pixel);
        let escape = evaluate(point, self.limit);
        greyscale(escape.iterations as f64 / self.limit as f64)
    }

    /// Render the whole raster.  Every pixel is written exactly once
    /// before the image is handed back.
    pub fn render(&self) -> Result<RgbaImage, MandelError> {
        let size = self.plane.size;
        info!(
            "rendering {}x{} pixels, zoom {}, offset {}, {} iterations",
            size, size, self.plane.zoom, self.plane.offset, self.limit
        );
        let edge = size as u32;
        let mut image = RgbaImage::new(edge, edge);
        for (column, row) in iproduct!(0..size, 0..size) {
            let colour = self.colour_at(&Pixel(column, row))?;
            image.put_pixel(column as u32, row as u32, colour);
            if row == size - 1 && (column + 1) % 128 == 0 {
                debug!("{} of {} columns done", column + 1, size);
            }
        }
        info!("rendered {} pixels", self.plane.len());
        Ok(image)
    }
}
