//! Hover listeners for static skill badges

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::dom::{apply_style, contains, query_all};
use super::error::PlatformError;
use crate::consts::SKILL_BADGE;
use crate::hover::{HOVER_PHASES, hover_applies};
use crate::settings::Settings;

/// Attach enter/leave listeners to every badge outside the float container.
///
/// Returns the number of badges wired up.
pub fn install_hover(
    document: &Document,
    settings: &Settings,
    float_container: Option<&HtmlElement>,
) -> Result<usize, PlatformError> {
    let mut wired = 0;

    for badge in query_all(document, SKILL_BADGE)? {
        let floating = float_container.is_some_and(|c| contains(c, &badge));
        if !hover_applies(floating) {
            continue;
        }

        for phase in HOVER_PHASES {
            let style = phase.style(settings);
            let target = badge.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Err(e) = apply_style(&target, &style) {
                    log::warn!("Hover style failed: {}", e);
                }
            });
            badge.add_event_listener_with_callback(
                phase.event_name(),
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }
        wired += 1;
    }

    log::info!("Hover highlight on {} badges", wired);
    Ok(wired)
}
