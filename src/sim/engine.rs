//! Simulation engine: entity population, drift integration, wall bounces
//!
//! Two macro-states, determined solely by the recorded screen size:
//! - Uninitialized: screen size is zero, no entities exist
//! - Running: screen size is positive, entities populated
//!
//! The transition fires exactly once, on the first layout call with a positive
//! size. Selection is orthogonal to both states and to the entity lifecycle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::FloatingEntity;
use crate::catalog::{self, EmojiItem};
use crate::consts::*;
use crate::unit_from_angle;

/// The floating-emoji simulation.
///
/// Owns every entity and the screen bounds; observers read immutable
/// snapshots. All mutation happens on the host's frame/input timeline.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed this run was created with, for reproducibility
    seed: u64,
    rng: Pcg32,
    /// Zero until the first layout event
    screen: Vec2,
    entities: Vec<FloatingEntity>,
    selected: Option<EmojiItem>,
    /// Entities per population batch
    entity_count: usize,
    next_id: u32,
}

impl Simulation {
    /// Create an Uninitialized simulation with the default entity count
    pub fn new(seed: u64) -> Self {
        Self::with_entity_count(seed, EMOJI_COUNT)
    }

    /// Create an Uninitialized simulation with an explicit entity count
    pub fn with_entity_count(seed: u64, entity_count: usize) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen: Vec2::ZERO,
            entities: Vec::new(),
            selected: None,
            entity_count,
            next_id: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True once a positive screen size has been recorded
    pub fn is_running(&self) -> bool {
        self.screen.x > 0.0 && self.screen.y > 0.0
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Record new screen bounds.
    ///
    /// The first positive size populates the entities. Later calls only update
    /// the bound; existing entities are not repositioned, so after a shrink
    /// they drift back in range through normal wall resolution.
    pub fn set_screen_size(&mut self, size: Vec2) {
        let needs_init = !self.is_running();
        self.screen = size;
        if needs_init && self.is_running() {
            log::info!("first layout {}x{}", size.x, size.y);
            self.populate(self.entity_count);
        }
    }

    /// Discard all entities and spawn a fresh random batch.
    ///
    /// Safe in either macro-state; without a positive screen size the entity
    /// set just stays empty.
    pub fn refresh(&mut self) {
        self.populate(self.entity_count);
    }

    /// Replace the entire entity set with `count` fresh spawns
    fn populate(&mut self, count: usize) {
        if !self.is_running() || count == 0 {
            self.entities.clear();
            return;
        }
        let items = catalog::random_sample(count, &mut self.rng);
        let mut entities = Vec::with_capacity(items.len());
        for item in items {
            entities.push(self.spawn_entity(item));
        }
        log::info!("populated {} entities", entities.len());
        self.entities = entities;
    }

    fn spawn_entity(&mut self, item: EmojiItem) -> FloatingEntity {
        let size = self.rng.random_range(SIZE_MIN..=SIZE_MAX);
        // Spawn clear of the edges: entity radius plus a fixed margin
        let pad = size / 2.0 + SPAWN_MARGIN;
        let pos = Vec2::new(
            self.random_coord(self.screen.x, pad),
            self.random_coord(self.screen.y, pad),
        );
        let speed = self.rng.random_range(SPEED_MIN..=SPEED_MAX);
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);

        let id = self.next_id;
        self.next_id += 1;
        FloatingEntity {
            id,
            item,
            pos,
            vel: unit_from_angle(angle) * speed,
            size,
        }
    }

    /// Uniform coordinate in `[pad, dim - pad]`; centered when the screen is
    /// too small for the padded range
    fn random_coord(&mut self, dim: f32, pad: f32) -> f32 {
        if dim - pad > pad {
            self.rng.random_range(pad..=dim - pad)
        } else {
            dim / 2.0
        }
    }

    /// Advance every entity by explicit Euler integration, then resolve wall
    /// bounces. No-op while Uninitialized.
    ///
    /// No sub-stepping: a very large `dt` can tunnel an entity past a wall for
    /// one frame, which is acceptable at display-frame timesteps.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }
        for e in &mut self.entities {
            e.pos += e.vel * dt;
        }
        self.resolve_wall_collisions();
    }

    /// Axis-aligned bounding-circle clamp against the screen edges.
    ///
    /// Each axis is handled independently: clamp position to the bound and
    /// force the velocity component to point back inward, preserving its
    /// magnitude. Entities never collide with each other.
    fn resolve_wall_collisions(&mut self) {
        let bounds = self.screen;
        for e in &mut self.entities {
            let r = e.radius();

            if e.pos.x - r < 0.0 {
                e.pos.x = r;
                e.vel.x = e.vel.x.abs();
            } else if e.pos.x + r > bounds.x {
                e.pos.x = bounds.x - r;
                e.vel.x = -e.vel.x.abs();
            }

            if e.pos.y - r < 0.0 {
                e.pos.y = r;
                e.vel.y = e.vel.y.abs();
            } else if e.pos.y + r > bounds.y {
                e.pos.y = bounds.y - r;
                e.vel.y = -e.vel.y.abs();
            }
        }
    }

    /// Current entities in spawn order (render order: later on top)
    pub fn entities(&self) -> &[FloatingEntity] {
        &self.entities
    }

    /// Topmost entity whose tap target contains `point`
    pub fn entity_at(&self, point: Vec2) -> Option<&FloatingEntity> {
        self.entities.iter().rev().find(|e| e.contains(point))
    }

    /// Mark an item as selected. Never touches entity kinematics.
    pub fn select(&mut self, item: EmojiItem) {
        self.selected = Some(item);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&EmojiItem> {
        self.selected.as_ref()
    }
}
