//! Vector math for simulation state.

mod vec3;

pub use vec3::Vec3;
