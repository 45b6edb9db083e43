//! App wiring: taps, selection, and the hiragana readout
//!
//! Thin glue between the simulation and the host's screens. The simulation
//! stays pure; this layer owns the selection-to-speech transition and the home
//! screen's random emoji pick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::catalog::{self, EmojiItem};
use crate::settings::Settings;
use crate::sim::Simulation;
use crate::speech::SpeechSynthesizer;

/// One app session: simulation plus speech, driven by the host's frame and
/// input callbacks on a single timeline.
pub struct App<S: SpeechSynthesizer> {
    sim: Simulation,
    speech: S,
    rng: Pcg32,
    /// Emoji of the moment on the home screen
    home_item: EmojiItem,
}

impl<S: SpeechSynthesizer> App<S> {
    pub fn new(seed: u64, settings: &Settings, speech: S) -> Self {
        // Separate stream so home picks never perturb the simulation draw
        let mut rng = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
        let home_item = catalog::random_item(&mut rng);
        Self {
            sim: Simulation::with_entity_count(seed, settings.entity_count),
            speech,
            rng,
            home_item,
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Host layout callback
    pub fn layout(&mut self, size: Vec2) {
        self.sim.set_screen_size(size);
    }

    /// Host per-frame callback
    pub fn frame(&mut self, dt: f32) {
        self.sim.advance(dt);
    }

    /// Tap on the play screen. A hit selects the emoji and reads its hiragana
    /// name aloud; a miss does nothing.
    pub fn tap(&mut self, point: Vec2) -> Option<EmojiItem> {
        let item = self.sim.entity_at(point).map(|e| e.item)?;
        self.sim.select(item);
        self.speech.speak(item.label);
        Some(item)
    }

    /// Dismiss the detail view: silence the readout, drop the selection
    pub fn dismiss(&mut self) {
        self.speech.stop();
        self.sim.clear_selection();
    }

    /// Currently shown detail item, if any
    pub fn selected(&self) -> Option<&EmojiItem> {
        self.sim.selected()
    }

    /// Replace the floating emoji with a fresh batch
    pub fn refresh(&mut self) {
        self.sim.refresh();
    }

    /// Home screen emoji with its hiragana speech bubble
    pub fn home_item(&self) -> &EmojiItem {
        &self.home_item
    }

    /// Pick a new home screen emoji (on returning to the home screen)
    pub fn shuffle_home(&mut self) -> &EmojiItem {
        self.home_item = catalog::random_item(&mut self.rng);
        &self.home_item
    }
}
