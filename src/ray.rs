//! Rays and analytic ray-sphere intersection.

use crate::math3d::Vec3;
use crate::scene::Sphere;

/// A half-line sampled against scene geometry. The direction is used as
/// handed in; callers are not required to normalize it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Analytic ray-sphere test. Solves a*t^2 + b*t + c = 0 for the ray
/// against the sphere surface and returns the near root, or None when
/// the discriminant is negative.
///
/// The near root is reported even when it is negative (hit point behind
/// the ray origin). `Renderer::set_cull_behind` opts into rejecting those.
pub fn hit_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * oc.dot(&ray.direction);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // Near root; a tangent ray collapses both roots onto this one
    Some((-b - discriminant.sqrt()) / (2.0 * a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn reference_sphere() -> Sphere {
        Sphere::new(Vec3::zero(), 0.5, Color::rgb(1.0, 0.0, 1.0))
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert!((ray.at(5.0).x - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_center_ray_hits() {
        // Pixel at the exact image center: origin (0,0,1) looking down -z
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit_sphere(&ray, &reference_sphere()).unwrap();
        assert!(t >= 0.5 && t <= 1.5, "hit distance out of range: {}", t);
    }

    #[test]
    fn test_far_corner_ray_misses() {
        // Normalized coordinate magnitude well past the sphere silhouette
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.5, 1.5, -1.0));
        assert!(hit_sphere(&ray, &reference_sphere()).is_none());
    }

    #[test]
    fn test_tangent_ray_single_hit() {
        // Grazes the sphere at x = 0.5: discriminant is exactly zero and
        // both roots collapse to t = 1
        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit_sphere(&ray, &reference_sphere()).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_origin_inside_reports_negative_root() {
        // The near root is behind the origin when the ray starts inside
        // the sphere; it is reported unclamped
        let big = Sphere::new(Vec3::zero(), 2.0, Color::rgb(1.0, 0.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit_sphere(&ray, &big).unwrap();
        assert!((t - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_offset_center_shifts_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, Color::rgb(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit_sphere(&ray, &sphere).unwrap();
        assert!((t - 2.5).abs() < 1e-6);
    }
}
