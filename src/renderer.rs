//! Frame Renderer and Framebuffer Ownership
//!
//! The renderer owns the packed-pixel framebuffer and fills it one pixel at
//! a time: map the pixel to a ray, intersect against the scene, shade the
//! nearest hit, clamp, pack, store. Resizing reallocates the buffer
//! wholesale; presentation layers only ever see read-only views.

use crate::camera::Camera;
use crate::color::Color;
use crate::math3d::Vec3;
use crate::ray::{hit_sphere, Ray};
use crate::scene::{Scene, Sphere};

/// Color written for rays that miss every sphere
const BACKGROUND: Color = Color::BLACK;

/// Software ray tracer rendering into an owned buffer of 0xAABBGGRR pixels
pub struct Renderer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    camera: Camera,
    cull_behind: bool,
}

impl Renderer {
    /// Create a renderer with an empty framebuffer; call `resize` before
    /// the first render
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            camera: Camera::default(),
            cull_behind: false,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the packed framebuffer, row-major with index
    /// x + y * width, length width * height
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Byte view of the framebuffer for streaming-texture upload
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: the slice covers exactly the pixel allocation, and u32
        // has no padding or alignment requirement stricter than u8.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr().cast::<u8>(), self.pixels.len() * 4)
        }
    }

    /// When enabled, intersections behind the camera (negative hit
    /// distance) count as misses. Off by default, matching the reference
    /// near-root behavior where a ray starting inside a sphere still
    /// reports the hit behind it.
    pub fn set_cull_behind(&mut self, cull: bool) {
        self.cull_behind = cull;
    }

    pub fn cull_behind(&self) -> bool {
        self.cull_behind
    }

    /// Ensure the framebuffer matches the requested dimensions.
    ///
    /// A no-op when they already match (the buffer keeps its identity and
    /// contents). Otherwise the old buffer is dropped and a fresh
    /// width * height allocation takes its place, contents unspecified
    /// until the next render. Zero is a valid dimension and yields an
    /// empty buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }

        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }

    /// Render one full frame of the scene into the framebuffer.
    ///
    /// Row-major, y-outer; every index is written exactly once. With a
    /// zero-sized framebuffer the pass is an empty iteration.
    pub fn render(&mut self, scene: &Scene) {
        let light_dir = scene.light_dir.normalize();

        for y in 0..self.height {
            for x in 0..self.width {
                let ray = self.camera.ray_for_pixel(x, y, self.width, self.height);

                let color = match self.nearest_hit(&ray, scene) {
                    Some((t, sphere)) => {
                        let normal = (ray.at(t) - sphere.center).normalize();
                        shade(&normal, &light_dir, sphere.albedo)
                    },
                    None => BACKGROUND,
                };

                // The clamp is the only safeguard before packing
                self.pixels[(x + y * self.width) as usize] = color.clamp().pack();
            }
        }
    }

    /// Smallest reported hit distance across all spheres
    fn nearest_hit<'a>(&self, ray: &Ray, scene: &'a Scene) -> Option<(f32, &'a Sphere)> {
        let mut closest: Option<(f32, &Sphere)> = None;

        for sphere in &scene.spheres {
            if let Some(t) = hit_sphere(ray, sphere) {
                if self.cull_behind && t < 0.0 {
                    continue;
                }
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, sphere));
                }
            }
        }

        closest
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lambertian shading from a single directional light: the surface
/// receives max(dot(-light_dir, normal), 0) of its albedo, nothing when
/// facing away. Alpha stays opaque; no ambient term, no attenuation.
fn shade(normal: &Vec3, light_dir: &Vec3, albedo: Color) -> Color {
    let intensity = (-*light_dir).dot(normal).max(0.0);
    Color::new(
        albedo.r * intensity,
        albedo.g * intensity,
        albedo.b * intensity,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPAQUE_BLACK: u32 = 0xFF000000;

    #[test]
    fn test_render_fills_exactly_width_times_height() {
        let mut renderer = Renderer::new();
        renderer.resize(4, 3);
        renderer.render(&Scene::default());

        assert_eq!(renderer.pixels().len(), 12);
        // Every index was written with an opaque pixel
        for &pixel in renderer.pixels() {
            assert_eq!(pixel >> 24, 0xFF);
        }
    }

    #[test]
    fn test_resize_same_dimensions_is_noop() {
        let mut renderer = Renderer::new();
        renderer.resize(4, 3);
        renderer.render(&Scene::default());

        let ptr = renderer.pixels().as_ptr();
        let snapshot: Vec<u32> = renderer.pixels().to_vec();

        renderer.resize(4, 3);
        assert_eq!(renderer.pixels().as_ptr(), ptr);
        assert_eq!(renderer.pixels(), snapshot.as_slice());
    }

    #[test]
    fn test_resize_replaces_buffer() {
        let mut renderer = Renderer::new();
        renderer.resize(4, 3);
        renderer.resize(2, 2);
        assert_eq!(renderer.pixels().len(), 4);
    }

    #[test]
    fn test_zero_size_render_is_noop() {
        let mut renderer = Renderer::new();
        renderer.resize(0, 0);
        renderer.render(&Scene::default());
        assert!(renderer.pixels().is_empty());
    }

    #[test]
    fn test_center_pixel_is_lit_magenta() {
        let mut renderer = Renderer::new();
        renderer.resize(64, 64);
        renderer.render(&Scene::default());

        // Pixel (32, 32) maps to viewport (0, 0) and looks straight at the
        // sphere; the albedo is magenta so red and blue light up, green not
        let pixel = renderer.pixels()[32 + 32 * 64];
        assert!((pixel & 0xFF) > 0, "red channel dark: {:#010x}", pixel);
        assert!(((pixel >> 16) & 0xFF) > 0, "blue channel dark: {:#010x}", pixel);
        assert_eq!((pixel >> 8) & 0xFF, 0, "green channel lit: {:#010x}", pixel);
    }

    #[test]
    fn test_corner_pixel_is_background() {
        let mut renderer = Renderer::new();
        renderer.resize(64, 64);
        renderer.render(&Scene::default());

        // Pixel (0, 0) casts direction (-1, -1, -1), far outside the
        // sphere silhouette
        assert_eq!(renderer.pixels()[0], OPAQUE_BLACK);
    }

    #[test]
    fn test_shade_facing_away_is_black_but_still_a_hit() {
        let light_dir = Vec3::new(-1.0, -1.0, -1.0).normalize();

        // Normal pointing along the light direction faces directly away
        let color = shade(&light_dir, &light_dir, Color::rgb(1.0, 0.0, 1.0));
        assert_eq!(color, Color::new(0.0, 0.0, 0.0, 1.0));

        // Distinct from a miss: the intersection itself still reports a hit
        let sphere = Sphere::new(Vec3::zero(), 0.5, Color::rgb(1.0, 0.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(hit_sphere(&ray, &sphere).is_some());
    }

    #[test]
    fn test_cull_behind_rejects_inside_origin_hits() {
        // Camera origin (0,0,1) sits inside a radius-2 sphere; the near
        // root is negative. Default policy shades it anyway, cull_behind
        // turns it into background.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::zero(), 2.0, Color::rgb(1.0, 0.0, 1.0)));

        let mut renderer = Renderer::new();
        renderer.resize(9, 9);
        renderer.render(&scene);
        let shaded = renderer.pixels()[4 + 4 * 9];
        assert_ne!(shaded, OPAQUE_BLACK);

        renderer.set_cull_behind(true);
        renderer.render(&scene);
        assert_eq!(renderer.pixels()[4 + 4 * 9], OPAQUE_BLACK);
    }

    #[test]
    fn test_nearest_sphere_wins() {
        // Two spheres stacked along the view axis; the closer one's
        // albedo shows at the center pixel
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, Color::rgb(0.0, 1.0, 0.0)));
        scene.add_sphere(Sphere::new(Vec3::zero(), 0.5, Color::rgb(1.0, 0.0, 1.0)));

        let mut renderer = Renderer::new();
        renderer.resize(9, 9);
        renderer.render(&scene);

        let pixel = renderer.pixels()[4 + 4 * 9];
        assert_eq!((pixel >> 8) & 0xFF, 0, "far green sphere leaked through");
        assert!((pixel & 0xFF) > 0);
    }

    #[test]
    fn test_as_bytes_matches_packed_layout() {
        let mut renderer = Renderer::new();
        renderer.resize(2, 1);
        renderer.render(&Scene::default());

        let bytes = renderer.as_bytes();
        assert_eq!(bytes.len(), 8);
        // Little-endian 0xAABBGGRR lays out as R, G, B, A in memory
        assert_eq!(bytes[3], 0xFF);
    }
}
