//! glint: a tiny software ray tracer.
//!
//! One ray per pixel from a fixed camera, analytic sphere intersection,
//! single directional light, packed 0xAABBGGRR output. The core (camera,
//! ray, renderer, scene) has no windowing knowledge; the `display` module
//! and the binary own SDL2 presentation.

pub mod camera;
pub mod color;
pub mod display;
pub mod math3d;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod util;
