//! Sphere scene definitions and JSON persistence.

use crate::color::Color;
use crate::math3d::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An implicit sphere: center and radius tested analytically, no mesh data
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub albedo: Color,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32, albedo: Color) -> Self {
        Self {
            center,
            radius,
            albedo,
        }
    }
}

/// Everything the renderer needs for one frame: a list of spheres and a
/// single directional light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    /// Direction the light travels, toward the scene. Normalized at the
    /// point of use, so hand-edited scene files need not pre-normalize.
    pub light_dir: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            light_dir: Vec3::new(-1.0, -1.0, -1.0),
        }
    }

    /// The reference scene: one magenta sphere of radius 0.5 at the origin,
    /// lit from the upper-left-front
    pub fn reference() -> Self {
        let mut scene = Self::new();
        scene.add_sphere(Sphere::new(Vec3::zero(), 0.5, Color::rgb(1.0, 0.0, 1.0)));
        scene
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}
