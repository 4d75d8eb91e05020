//! Float field state
//!
//! The explicit simulation object: created once at startup from the measured
//! layout, then advanced frame by frame with [`step`](super::tick::step).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::badge::Badge;
use super::collision::Wall;
use super::layout::Layout;
use crate::settings::Settings;

/// Something that happened during the last step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldEvent {
    /// Badge touched a container edge and bounced
    WallBounce { id: usize, wall: Wall },
    /// Two badges overlapped; velocities were swapped and the pair separated
    Collision { a: usize, b: usize, overlap: f32 },
}

/// All floating badges plus the RNG that placed them
#[derive(Debug, Clone)]
pub struct FloatField {
    /// Seed used for spawning (for reproducing a layout)
    pub seed: u64,
    /// Badges in page order
    pub badges: Vec<Badge>,
    /// Steps taken so far
    pub frame: u64,
    /// Events from the most recent step
    pub events: Vec<FieldEvent>,
    rng: Pcg32,
}

impl FloatField {
    /// Empty field
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            badges: Vec::new(),
            frame: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Field over pre-placed badges (no randomness involved)
    pub fn from_badges(badges: Vec<Badge>) -> Self {
        let mut field = Self::new(0);
        field.badges = badges;
        field
    }

    /// Measure every badge and give it a random position and velocity
    pub fn spawn<L: Layout + ?Sized>(layout: &L, settings: &Settings, seed: u64) -> Self {
        let mut field = Self::new(seed);
        let container = layout.container_size();

        for id in 0..layout.badge_count() {
            let size = layout.badge_size(id);
            field.spawn_badge(id, size, container, settings);
        }

        log::info!(
            "Spawned {} floating badges in {}x{} container (seed {})",
            field.badges.len(),
            container.x,
            container.y,
            seed
        );
        field
    }

    /// Place one badge somewhere in the container, keeping `spawn_margin`
    /// free at the right and bottom edges
    fn spawn_badge(&mut self, id: usize, size: Vec2, container: Vec2, settings: &Settings) {
        let span = (container - size - Vec2::splat(settings.spawn_margin)).max(Vec2::ZERO);
        let x = self.rng.random::<f32>() * span.x;
        let y = self.rng.random::<f32>() * span.y;
        let vx = (self.rng.random::<f32>() - 0.5) * settings.float_speed;
        let vy = (self.rng.random::<f32>() - 0.5) * settings.float_speed;

        log::trace!("Badge {} at ({:.1}, {:.1}) moving ({:.2}, {:.2})", id, x, y, vx, vy);
        self.badges.push(Badge::new(id, Vec2::new(x, y), Vec2::new(vx, vy), size));
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Collisions reported by the last step
    pub fn collisions(&self) -> impl Iterator<Item = &FieldEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, FieldEvent::Collision { .. }))
    }
}
