//! Viewport-to-ray mapping.

use crate::math3d::Vec3;
use crate::ray::Ray;

/// Fixed-origin camera at (0,0,1) looking down -z through a [-1, 1)
/// normalized viewport.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
}

impl Camera {
    pub const fn new(origin: Vec3) -> Self {
        Self { origin }
    }

    /// Ray through pixel (x, y) of a width x height image.
    ///
    /// u = x/width and v = y/height land in [0, 1) and are remapped to
    /// [-1, 1); the direction picks up a fixed z of -1 and is handed to
    /// the intersector unnormalized. Callers guarantee nonzero dimensions.
    #[inline]
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let u = (x as f32 / width as f32) * 2.0 - 1.0;
        let v = (y as f32 / height as f32) * 2.0 - 1.0;
        Ray::new(self.origin, Vec3::new(u, v, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0))
    }
}
