//! Scroll reveals via IntersectionObserver

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{apply_style, contains, query_all};
use super::error::PlatformError;
use crate::consts::*;
use crate::reveal::{RevealDirection, RevealTracker, fade_applies, revealed_style};
use crate::settings::Settings;

/// Selector groups that fade in, in registration order
const REVEAL_GROUPS: [(&str, RevealDirection); 4] = [
    (CONTACT_CARD, RevealDirection::Up),
    (FADE_LEFT, RevealDirection::Left),
    (FADE_RIGHT, RevealDirection::Right),
    (FADE_UP, RevealDirection::Up),
];

/// Hide every reveal target and start observing it.
///
/// Returns the number of elements being watched.
pub fn install_reveals(
    document: &Document,
    settings: &Settings,
    float_container: Option<&HtmlElement>,
) -> Result<usize, PlatformError> {
    let mut tracker = RevealTracker::new();
    let mut elements: Vec<HtmlElement> = Vec::new();

    for (selector, direction) in REVEAL_GROUPS {
        for el in query_all(document, selector)? {
            let is_badge = el.class_list().contains(SKILL_BADGE_CLASS);
            let floating = float_container.is_some_and(|c| contains(c, &el));
            if !fade_applies(is_badge, floating) {
                continue;
            }

            let id = match elements.iter().position(|e| *e == el) {
                Some(id) => id,
                None => {
                    elements.push(el.clone());
                    elements.len() - 1
                }
            };
            if let Some(hidden) = tracker.watch(id, direction) {
                apply_style(&el, &hidden)?;
            }
        }
    }

    let watched = tracker.pending();
    if watched == 0 {
        log::info!("No reveal targets on this page");
        return Ok(0);
    }

    let threshold = settings.reveal_threshold;
    let reveal = revealed_style(settings);
    let targets = elements.clone();

    let closure = Closure::<dyn FnMut(_, _)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = elements.iter().position(|e| {
                    let el: &web_sys::Element = e;
                    *el == target
                }) else {
                    continue;
                };

                let revealed =
                    tracker.intersect(id, entry.intersection_ratio(), entry.is_intersecting());
                if revealed.is_some() {
                    if let Err(e) = apply_style(&elements[id], &reveal) {
                        log::warn!("Reveal style failed: {}", e);
                    }
                    observer.unobserve(&target);
                    if tracker.is_done() {
                        log::info!("All reveals done");
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    closure.forget();

    for el in &targets {
        observer.observe(el);
    }

    log::info!("Watching {} reveal targets", watched);
    Ok(watched)
}
