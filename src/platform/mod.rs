//! Browser platform layer
//!
//! Wires the pure modules to the page:
//! - Element queries and inline style writes
//! - IntersectionObserver for scroll reveals
//! - requestAnimationFrame loop for floating badges
//! - Hover listeners for static badges
//!
//! Everything except `error` is wasm32 only.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod floating;
#[cfg(target_arch = "wasm32")]
pub mod listeners;
#[cfg(target_arch = "wasm32")]
pub mod observer;

pub use error::PlatformError;

/// Install every page behavior.
///
/// Missing markup is not an error: each behavior simply has nothing to do.
/// The float loop starts after the configured delay and never returns
/// control of the badges.
#[cfg(target_arch = "wasm32")]
pub async fn start() -> Result<(), PlatformError> {
    use crate::consts::SKILLS_CONTAINER;
    use crate::settings::Settings;

    let window = dom::window()?;
    let document = dom::document()?;
    dom::dom_ready(&document).await?;

    let settings = Settings::load();
    let container = dom::query_one(&document, SKILLS_CONTAINER)?;

    observer::install_reveals(&document, &settings, container.as_ref())?;
    let floating = floating::install_floating(&document, &settings, container.as_ref())?;
    listeners::install_hover(&document, &settings, container.as_ref())?;

    if let Some(badges) = floating {
        dom::sleep(&window, settings.start_delay_ms).await?;
        floating::request_animation_frame(badges);
        log::info!("Float loop running");
    }

    Ok(())
}
