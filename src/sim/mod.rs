//! Deterministic floating-emoji simulation
//!
//! All gameplay state lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies
//!
//! The host drives it from a single timeline: one `advance` call per display
//! frame, taps and refreshes from input callbacks on the same thread.

pub mod engine;
pub mod entity;

pub use engine::Simulation;
pub use entity::FloatingEntity;
