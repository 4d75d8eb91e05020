//! Inline style patches
//!
//! Every visual change this crate makes is expressed as a `StylePatch`: an
//! ordered list of CSS property/value pairs. The pure modules build patches,
//! the platform layer writes them onto elements.

use std::fmt;

use glam::Vec2;

use crate::px;

/// Ordered set of inline style assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    entries: Vec<(&'static str, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace a property (replacement keeps the original slot)
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
        self
    }

    /// Look up a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for StylePatch {
    /// Renders as a `style` attribute body, e.g. `opacity: 1; transform: none;`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", p, v)?;
        }
        Ok(())
    }
}

/// Style that takes a floating badge out of flow and makes it visible
pub fn floating_setup() -> StylePatch {
    StylePatch::new()
        .set("opacity", "1")
        .set("position", "absolute")
        .set("transition", "none")
}

/// Position a floating badge inside its container
pub fn floating_position(pos: Vec2) -> StylePatch {
    StylePatch::new().set("left", px(pos.x)).set("top", px(pos.y))
}

/// `transition` value animating the given properties with one timing
pub fn transition(properties: &[&str], duration_secs: f32, easing: &str) -> String {
    properties
        .iter()
        .map(|p| format!("{} {}s {}", p, duration_secs, easing))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let patch = StylePatch::new()
            .set("opacity", "0")
            .set("transform", "none")
            .set("opacity", "1");
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get("opacity"), Some("1"));
        assert_eq!(patch.to_string(), "opacity: 1; transform: none;");
    }

    #[test]
    fn test_floating_position() {
        let patch = floating_position(Vec2::new(12.5, 40.0));
        assert_eq!(patch.get("left"), Some("12.5px"));
        assert_eq!(patch.get("top"), Some("40px"));
    }

    #[test]
    fn test_transition_list() {
        assert_eq!(
            transition(&["opacity", "transform"], 0.6, "ease-out"),
            "opacity 0.6s ease-out, transform 0.6s ease-out"
        );
        assert_eq!(transition(&["all"], 0.3, "ease"), "all 0.3s ease");
    }
}
