//! Hover highlight for static skill badges
//!
//! Stateless: each pointer event maps straight to a style patch.

use crate::settings::Settings;
use crate::style::{StylePatch, transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// Pointer entered the badge (`mouseenter`)
    Enter,
    /// Pointer left the badge (`mouseleave`)
    Leave,
}

impl HoverPhase {
    /// DOM event name that triggers this phase
    pub fn event_name(&self) -> &'static str {
        match self {
            HoverPhase::Enter => "mouseenter",
            HoverPhase::Leave => "mouseleave",
        }
    }

    /// Style applied when this phase fires
    pub fn style(&self, settings: &Settings) -> StylePatch {
        let (scale, background) = match self {
            HoverPhase::Enter => (settings.hover_scale, settings.hover_background.as_str()),
            HoverPhase::Leave => (1.0, settings.rest_background.as_str()),
        };

        StylePatch::new()
            .set("transition", transition(&["all"], settings.hover_duration_secs, "ease"))
            .set("transform", format!("scale({})", scale))
            .set("background-color", background)
    }
}

/// Both phases, in listener registration order
pub const HOVER_PHASES: [HoverPhase; 2] = [HoverPhase::Enter, HoverPhase::Leave];

/// Whether a badge gets hover listeners (floating badges don't)
pub fn hover_applies(in_float_container: bool) -> bool {
    !in_float_container
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_style() {
        let style = HoverPhase::Enter.style(&Settings::default());
        assert_eq!(style.get("transition"), Some("all 0.3s ease"));
        assert_eq!(style.get("transform"), Some("scale(1.1)"));
        assert_eq!(style.get("background-color"), Some("#374151"));
    }

    #[test]
    fn test_leave_style() {
        let style = HoverPhase::Leave.style(&Settings::default());
        assert_eq!(style.get("transition"), Some("all 0.3s ease"));
        assert_eq!(style.get("transform"), Some("scale(1)"));
        assert_eq!(style.get("background-color"), Some("#1f2937"));
    }

    #[test]
    fn test_phases_are_stateless() {
        let settings = Settings::default();
        let first = HoverPhase::Enter.style(&settings);
        let _ = HoverPhase::Leave.style(&settings);
        assert_eq!(HoverPhase::Enter.style(&settings), first);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(HOVER_PHASES.map(|p| p.event_name()), ["mouseenter", "mouseleave"]);
        assert!(hover_applies(false));
        assert!(!hover_applies(true));
    }
}
