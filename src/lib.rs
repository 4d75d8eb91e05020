//! Folio Motion - decorative animation for a static portfolio page
//!
//! Core modules:
//! - `sim`: Deterministic floating-badge physics (no DOM)
//! - `reveal`: One-shot scroll reveal state machine
//! - `hover`: Hover highlight for static badges
//! - `style`: Inline style patches shared by the above
//! - `settings`: Tunables, loaded from LocalStorage on web
//! - `platform`: Browser glue (web-sys), wasm32 only

pub mod hover;
pub mod platform;
pub mod reveal;
pub mod settings;
pub mod sim;
pub mod style;

pub use hover::HoverPhase;
pub use reveal::{RevealDirection, RevealState, RevealTracker};
pub use settings::Settings;
pub use sim::{FloatField, Layout};
pub use style::StylePatch;

/// Page markup and animation constants
pub mod consts {
    /// Class selectors the page is expected to carry
    pub const CONTACT_CARD: &str = ".contact-card";
    pub const SKILL_BADGE: &str = ".skill-badge";
    pub const FADE_LEFT: &str = ".fade-left";
    pub const FADE_RIGHT: &str = ".fade-right";
    pub const FADE_UP: &str = ".fade-up";
    pub const SKILLS_CONTAINER: &str = ".skills-container";

    /// Class name (without the dot) used to tell badges apart
    pub const SKILL_BADGE_CLASS: &str = "skill-badge";

    /// Fraction of an element that must be visible before it reveals
    pub const REVEAL_THRESHOLD: f64 = 0.2;
    /// Reveal fade/slide duration in seconds
    pub const REVEAL_DURATION_SECS: f32 = 0.6;
    /// Horizontal slide distance for left/right reveals (px)
    pub const REVEAL_SLIDE_X: f32 = 30.0;
    /// Vertical slide distance for upward reveals (px)
    pub const REVEAL_SLIDE_Y: f32 = 20.0;

    /// Velocity components are drawn from [-FLOAT_SPEED/2, FLOAT_SPEED/2) px per frame
    pub const FLOAT_SPEED: f32 = 1.5;
    /// Space kept free at the right/bottom edge when spawning (px)
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Delay before the float loop starts (ms)
    pub const FLOAT_START_DELAY_MS: u32 = 100;

    /// Hover highlight
    pub const HOVER_SCALE: f32 = 1.1;
    pub const HOVER_DURATION_SECS: f32 = 0.3;
    pub const HOVER_BACKGROUND: &str = "#374151";
    pub const REST_BACKGROUND: &str = "#1f2937";
}

/// Format a CSS length in pixels
#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}
