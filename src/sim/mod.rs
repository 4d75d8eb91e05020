//! Floating badge simulation
//!
//! All badge physics lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by badge index)
//! - Layout comes in through the `Layout` trait, never from the DOM

pub mod badge;
pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use badge::Badge;
pub use collision::{Contact, Wall, WallHits, badge_contact, reflect_walls, resolve_contact};
pub use layout::{FixedLayout, Layout};
pub use state::{FieldEvent, FloatField};
pub use tick::step;
