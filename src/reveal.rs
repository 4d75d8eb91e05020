//! One-shot scroll reveals
//!
//! Each watched element starts `Hidden` (transparent, slid off by a few
//! pixels) and moves to `Revealed` the first time enough of it is visible.
//! The transition happens once; a revealed element leaves the watch set and
//! is never hidden again.

use std::collections::BTreeMap;

use crate::consts::{REVEAL_SLIDE_X, REVEAL_SLIDE_Y};
use crate::settings::Settings;
use crate::style::{StylePatch, transition};

/// Which way an element slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    /// Starts left of its resting place
    Left,
    /// Starts right of its resting place
    Right,
    /// Starts below its resting place
    Up,
}

impl RevealDirection {
    /// Direction for a marker class (`fade-left`, `fade-right`, `fade-up`)
    pub fn from_class(class: &str) -> Option<Self> {
        match class.trim_start_matches('.') {
            "fade-left" => Some(RevealDirection::Left),
            "fade-right" => Some(RevealDirection::Right),
            "fade-up" | "contact-card" => Some(RevealDirection::Up),
            _ => None,
        }
    }

    /// Transform applied while hidden
    pub fn hidden_transform(&self) -> String {
        match self {
            RevealDirection::Left => format!("translateX({}px)", -REVEAL_SLIDE_X),
            RevealDirection::Right => format!("translateX({}px)", REVEAL_SLIDE_X),
            RevealDirection::Up => format!("translateY({}px)", REVEAL_SLIDE_Y),
        }
    }
}

/// Reveal lifecycle of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Style for an element waiting to be revealed
pub fn hidden_style(direction: RevealDirection) -> StylePatch {
    StylePatch::new()
        .set("opacity", "0")
        .set("transform", direction.hidden_transform())
}

/// Style that animates an element to its resting place
pub fn revealed_style(settings: &Settings) -> StylePatch {
    StylePatch::new()
        .set(
            "transition",
            transition(
                &["opacity", "transform"],
                settings.reveal_duration_secs,
                "ease-out",
            ),
        )
        .set("opacity", "1")
        .set("transform", "translate(0,0)")
}

/// Whether an element takes part in scroll reveals.
///
/// Skill badges living in the floating container are animated by the
/// simulation instead and never fade.
pub fn fade_applies(is_skill_badge: bool, in_float_container: bool) -> bool {
    !(is_skill_badge && in_float_container)
}

/// Watch set for scroll reveals, keyed by element index
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    watching: BTreeMap<usize, RevealDirection>,
    revealed: Vec<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element.
    ///
    /// Returns the hidden style to apply, or `None` if the element is
    /// already watched or already revealed (first registration wins).
    pub fn watch(&mut self, id: usize, direction: RevealDirection) -> Option<StylePatch> {
        if self.watching.contains_key(&id) || self.revealed.contains(&id) {
            return None;
        }
        self.watching.insert(id, direction);
        Some(hidden_style(direction))
    }

    /// Report a visibility change.
    ///
    /// The observer decides when the threshold is crossed, so any
    /// intersecting entry reveals; `ratio` is only logged. Returns the
    /// direction on the `Hidden -> Revealed` transition and drops the element
    /// from the watch set. Any later call for the same element returns `None`.
    pub fn intersect(&mut self, id: usize, ratio: f64, is_intersecting: bool) -> Option<RevealDirection> {
        if !is_intersecting {
            return None;
        }
        let direction = self.watching.remove(&id)?;
        self.revealed.push(id);
        log::debug!("Revealed element {} ({:?}) at ratio {:.2}", id, direction, ratio);
        Some(direction)
    }

    /// Current state of an element, `None` if never watched
    pub fn state(&self, id: usize) -> Option<RevealState> {
        if self.watching.contains_key(&id) {
            Some(RevealState::Hidden)
        } else if self.revealed.contains(&id) {
            Some(RevealState::Revealed)
        } else {
            None
        }
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    pub fn is_done(&self) -> bool {
        self.watching.is_empty()
    }
}
