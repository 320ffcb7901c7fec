//! Particle data model and field simulation
//!
//! This module contains the animated state of a transform run:
//! - Individual particles with kinematic state and lifecycle phase
//! - The particle field seeded from a bitmap pair

/// Single particle state and lifecycle phase
pub mod particle;
/// Particle field seeding and per-tick advancement
pub mod simulation;

pub use particle::{Particle, Phase};
pub use simulation::ParticleField;
