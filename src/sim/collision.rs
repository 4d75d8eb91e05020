//! Collision detection and response for floating badges
//!
//! Badges bounce off the four container walls and off each other. Pairs are
//! treated as circles whose combined radius is the average of the two widths.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::badge::Badge;

/// Container edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Walls touched by one badge in one step (at most one per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Wall> {
        self.x.into_iter().chain(self.y)
    }
}

/// Clamp a badge to the container and point its velocity back inside.
///
/// A badge at or past an edge is placed on it and the matching velocity
/// component is made to point away from that edge.
pub fn reflect_walls(badge: &mut Badge, bounds: Vec2) -> WallHits {
    let max = badge.max_pos(bounds);
    let mut hits = WallHits::default();

    if badge.pos.x <= 0.0 {
        badge.pos.x = 0.0;
        badge.vel.x = badge.vel.x.abs();
        hits.x = Some(Wall::Left);
    } else if badge.pos.x >= max.x {
        badge.pos.x = max.x;
        badge.vel.x = -badge.vel.x.abs();
        hits.x = Some(Wall::Right);
    }

    if badge.pos.y <= 0.0 {
        badge.pos.y = 0.0;
        badge.vel.y = badge.vel.y.abs();
        hits.y = Some(Wall::Top);
    } else if badge.pos.y >= max.y {
        badge.pos.y = max.y;
        badge.vel.y = -badge.vel.y.abs();
        hits.y = Some(Wall::Bottom);
    }

    hits
}

/// Overlap between two badges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from `b`'s center toward `a`'s center
    pub normal: Vec2,
    /// Center distance before the response
    pub distance: f32,
    /// Distance at which the pair stops overlapping
    pub min_distance: f32,
    /// `min_distance - distance`, always positive
    pub overlap: f32,
}

/// Check whether two badges overlap
pub fn badge_contact(a: &Badge, b: &Badge) -> Option<Contact> {
    let delta = a.center() - b.center();
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return None;
    }

    // Coincident centers: pick a fixed axis so the pair still separates
    let normal = if distance > f32::EPSILON {
        delta / distance
    } else {
        Vec2::X
    };

    Some(Contact {
        normal,
        distance,
        min_distance,
        overlap: min_distance - distance,
    })
}

/// Swap velocities and push the pair apart along the contact normal.
///
/// Each badge moves by half the overlap, so the centers end up exactly
/// `min_distance` apart.
pub fn resolve_contact(a: &mut Badge, b: &mut Badge, contact: &Contact) {
    std::mem::swap(&mut a.vel, &mut b.vel);

    let push = contact.normal * (contact.overlap / 2.0);
    a.pos += push;
    b.pos -= push;
}
