//! A floating badge body

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One badge drifting inside the container.
///
/// `pos` is the top-left corner in container coordinates (CSS px), `vel` is
/// in px per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Index of the badge element in page order
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Measured width/height, fixed after spawn
    pub size: Vec2,
}

impl Badge {
    pub fn new(id: usize, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { id, pos, vel, size }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Collision radius (half the width; badges are treated as circles)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Largest top-left position that keeps the badge inside `bounds`
    #[inline]
    pub fn max_pos(&self, bounds: Vec2) -> Vec2 {
        (bounds - self.size).max(Vec2::ZERO)
    }

    /// Pull the badge back inside `bounds` without touching velocity
    pub fn clamp_into(&mut self, bounds: Vec2) {
        self.pos = self.pos.clamp(Vec2::ZERO, self.max_pos(bounds));
    }

    /// Whether the badge lies fully inside `bounds`
    pub fn is_inside(&self, bounds: Vec2) -> bool {
        let max = self.max_pos(bounds);
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && self.pos.x <= max.x && self.pos.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_radius() {
        let b = Badge::new(0, Vec2::new(10.0, 20.0), Vec2::ZERO, Vec2::new(60.0, 24.0));
        assert_eq!(b.center(), Vec2::new(40.0, 32.0));
        assert_eq!(b.radius(), 30.0);
    }

    #[test]
    fn test_clamp_into() {
        let bounds = Vec2::new(100.0, 50.0);
        let mut b = Badge::new(0, Vec2::new(-5.0, 45.0), Vec2::new(1.0, 1.0), Vec2::new(20.0, 10.0));
        assert!(!b.is_inside(bounds));
        b.clamp_into(bounds);
        assert_eq!(b.pos, Vec2::new(0.0, 40.0));
        assert_eq!(b.vel, Vec2::new(1.0, 1.0));
        assert!(b.is_inside(bounds));
    }

    #[test]
    fn test_badge_wider_than_container() {
        let mut b = Badge::new(0, Vec2::new(3.0, 3.0), Vec2::ZERO, Vec2::new(200.0, 10.0));
        b.clamp_into(Vec2::new(100.0, 100.0));
        assert_eq!(b.pos, Vec2::new(0.0, 3.0));
    }
}
