//! Geometry provider
//!
//! The simulation never measures the page itself. The platform layer
//! implements `Layout` over real elements; tests and the native driver use
//! `FixedLayout`.

use glam::Vec2;

/// Size queries the simulation needs
pub trait Layout {
    /// Inner size of the bounding container (re-read every frame)
    fn container_size(&self) -> Vec2;

    /// Number of floating badges
    fn badge_count(&self) -> usize;

    /// Measured size of badge `index` (read once at spawn)
    fn badge_size(&self, index: usize) -> Vec2;
}

/// Layout with fixed, caller-provided sizes
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    pub container: Vec2,
    pub badges: Vec<Vec2>,
}

impl FixedLayout {
    pub fn new(container: Vec2, badges: Vec<Vec2>) -> Self {
        Self { container, badges }
    }

    /// `count` badges of the same size
    pub fn uniform(container: Vec2, badge: Vec2, count: usize) -> Self {
        Self::new(container, vec![badge; count])
    }

    /// Simulate a container resize
    pub fn resize(&mut self, container: Vec2) {
        self.container = container;
    }
}

impl Layout for FixedLayout {
    fn container_size(&self) -> Vec2 {
        self.container
    }

    fn badge_count(&self) -> usize {
        self.badges.len()
    }

    fn badge_size(&self, index: usize) -> Vec2 {
        self.badges.get(index).copied().unwrap_or(Vec2::ZERO)
    }
}
