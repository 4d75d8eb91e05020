//! Floating skill badges driven by requestAnimationFrame

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::dom::{DomLayout, apply_style, contains, query_all, window};
use super::error::PlatformError;
use crate::consts::SKILL_BADGE;
use crate::settings::Settings;
use crate::sim::{FieldEvent, FloatField, step};
use crate::style::{floating_position, floating_setup};

/// Simulation plus the elements it moves
pub struct FloatingBadges {
    field: FloatField,
    layout: DomLayout,
    elements: Vec<HtmlElement>,
}

impl FloatingBadges {
    /// Advance one frame and write the new positions
    fn frame(&mut self) {
        step(&mut self.field, &self.layout);

        for event in &self.field.events {
            if let FieldEvent::Collision { a, b, overlap } = event {
                log::debug!("Badges {} and {} collided (overlap {:.1}px)", a, b, overlap);
            }
        }

        self.render();
    }

    fn render(&self) {
        for badge in &self.field.badges {
            if let Some(el) = self.elements.get(badge.id) {
                if let Err(e) = apply_style(el, &floating_position(badge.pos)) {
                    log::warn!("Failed to move badge {}: {}", badge.id, e);
                }
            }
        }
    }
}

/// Take the badges inside `container` out of flow and give them random
/// positions and velocities.
///
/// Returns `None` when there is nothing to float.
pub fn install_floating(
    document: &Document,
    settings: &Settings,
    container: Option<&HtmlElement>,
) -> Result<Option<Rc<RefCell<FloatingBadges>>>, PlatformError> {
    let Some(container) = container else {
        log::info!("No floating badge container");
        return Ok(None);
    };

    let elements: Vec<HtmlElement> = query_all(document, SKILL_BADGE)?
        .into_iter()
        .filter(|badge| contains(container, badge))
        .collect();
    if elements.is_empty() {
        log::info!("Badge container is empty");
        return Ok(None);
    }

    // Measure after switching to absolute positioning
    let setup = floating_setup();
    for el in &elements {
        apply_style(el, &setup)?;
    }
    let layout = DomLayout::measure(container.clone(), &elements);

    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let field = FloatField::spawn(&layout, settings, seed);

    let badges = FloatingBadges {
        field,
        layout,
        elements,
    };
    badges.render();

    Ok(Some(Rc::new(RefCell::new(badges))))
}

/// Schedule the next frame; the loop runs for the page's lifetime
pub fn request_animation_frame(badges: Rc<RefCell<FloatingBadges>>) {
    let Ok(window) = window() else {
        log::error!("Float loop stopped: no window");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        float_loop(badges);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("Float loop stopped: {}", PlatformError::from(e));
    }
    closure.forget();
}

fn float_loop(badges: Rc<RefCell<FloatingBadges>>) {
    badges.borrow_mut().frame();
    request_animation_frame(badges);
}
