//! Contains the PlaneMapper struct, which describes a relationship
//! between a square on the integral plane with an origin at 0,0, and
//! the region of the complex plane it looks at.  The region is given
//! the old-fashioned way: a zoom (the width of the complex region, so
//! smaller is closer) and an offset that slides the view back toward
//! the origin after scaling.
use crate::errors::MandelError;
use num::Complex;

/// Describes the x, y of a point on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on a square raster to points on the complex plane and
/// back again.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The width and height of the integral plane.  Pixels run from 0
    /// to size - 1 on both axes.
    pub size: usize,
    /// Width of the visible complex region.
    pub zoom: f64,
    /// Subtracted from every point after scaling.
    pub offset: Complex<f64>,
    // Pixels per unit on the complex plane.
    grid_factor: f64,
}

impl PlaneMapper {
    /// Constructor.  Fails if the raster is empty or if the zoom and
    /// offset can't describe a finite region.
    pub fn new(size: usize, zoom: f64, offset: Complex<f64>) -> Result<PlaneMapper, MandelError> {
        if size == 0 {
            return Err(MandelError::config("the raster must be at least one pixel wide"));
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(MandelError::config(format!(
                "zoom must be a positive number, not {}",
                zoom
            )));
        }

        if !offset.re.is_finite() || !offset.im.is_finite() {
            return Err(MandelError::config(format!(
                "offset must be finite, not {}",
                offset
            )));
        }

        Ok(PlaneMapper {
            size,
            zoom,
            offset,
            grid_factor: (size as f64) / zoom,
        })
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    /// True if the integral plane has no pixels.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// complex number it stands for.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (pixel.0 as f64) / self.grid_factor - self.offset.re,
            (pixel.1 as f64) / self.grid_factor - self.offset.im,
        )
    }

    /// Given a complex number, find the pixel that covers it, or None
    /// if it is off the raster.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re + self.offset.re) * self.grid_factor).floor();
        let top = ((point.im + self.offset.im) * self.grid_factor).floor();
        let edge = self.size as f64;
        if !(left >= 0.0 && left < edge && top >= 0.0 && top < edge) {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}
