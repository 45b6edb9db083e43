//! Emoji Hiragana - a floating-emoji hiragana learning game
//!
//! Core modules:
//! - `catalog`: Static emoji/hiragana/category table and random sampling
//! - `sim`: Deterministic simulation (floating entities, wall bounces, selection)
//! - `speech`: Text-to-speech boundary (selection readout)
//! - `app`: Wiring between the simulation, taps, and speech
//! - `settings`: User preferences persisted as JSON
//!
//! Rendering and the platform voice service live outside this crate; the host
//! drives the simulation by calling `advance` once per display frame and reads
//! back entity snapshots.

pub mod app;
pub mod catalog;
pub mod settings;
pub mod sim;
pub mod speech;

pub use app::App;
pub use catalog::{Category, EmojiItem};
pub use settings::Settings;
pub use sim::{FloatingEntity, Simulation};

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz display cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// How many emoji float on screen per session
    pub const EMOJI_COUNT: usize = 10;

    /// Entity diameter range (screen units)
    pub const SIZE_MIN: f32 = 60.0;
    pub const SIZE_MAX: f32 = 90.0;

    /// Drift speed range (screen units per second)
    pub const SPEED_MIN: f32 = 30.0;
    pub const SPEED_MAX: f32 = 60.0;

    /// Spawn points stay this far clear of the screen edges,
    /// in addition to the entity radius
    pub const SPAWN_MARGIN: f32 = 20.0;
}

/// Unit vector pointing at `theta` radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
