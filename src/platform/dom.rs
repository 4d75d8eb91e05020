//! Small web-sys helpers shared by the page behaviors

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node, Window};

use super::error::PlatformError;
use crate::sim::Layout;
use crate::style::StylePatch;

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

/// All elements matching `selector`, in document order.
///
/// Non-HTML matches (e.g. inline SVG) are skipped.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PlatformError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element matching `selector`, if any
pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, PlatformError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Whether `el` sits inside `container` (or is the container itself)
pub fn contains(container: &HtmlElement, el: &HtmlElement) -> bool {
    let node: &Node = el;
    container.contains(Some(node))
}

/// Write a style patch onto an element's inline style
pub fn apply_style(el: &HtmlElement, patch: &StylePatch) -> Result<(), PlatformError> {
    let style = el.style();
    for (property, value) in patch.iter() {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Promise settled by whatever callback `register` hands `resolve` to.
///
/// Fails instead of returning a promise that can never settle when the
/// registration itself throws.
pub fn pending_promise<T>(
    register: impl FnOnce(&js_sys::Function) -> Result<T, wasm_bindgen::JsValue>,
) -> Result<js_sys::Promise, PlatformError> {
    let mut register = Some(register);
    let mut registered = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(register) = register.take() {
            registered = register(&resolve).map(|_| ());
        }
    });
    registered?;
    Ok(promise)
}

/// Resolve once the document has finished parsing
pub async fn dom_ready(document: &Document) -> Result<(), PlatformError> {
    if document.ready_state() != "loading" {
        return Ok(());
    }

    let promise = pending_promise(|resolve| {
        document.add_event_listener_with_callback("DOMContentLoaded", resolve)
    })?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// Resolve after `ms` milliseconds
pub async fn sleep(window: &Window, ms: u32) -> Result<(), PlatformError> {
    let promise = pending_promise(|resolve| {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(resolve, ms as i32)
    })?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// `Layout` backed by real elements.
///
/// Badge sizes are measured once; the container is re-measured on every
/// query so the field follows resizes.
pub struct DomLayout {
    container: HtmlElement,
    sizes: Vec<Vec2>,
}

impl DomLayout {
    pub fn measure(container: HtmlElement, badges: &[HtmlElement]) -> Self {
        let sizes = badges
            .iter()
            .map(|badge| {
                let rect = badge.get_bounding_client_rect();
                Vec2::new(rect.width() as f32, rect.height() as f32)
            })
            .collect();
        Self { container, sizes }
    }
}

impl Layout for DomLayout {
    fn container_size(&self) -> Vec2 {
        Vec2::new(
            self.container.client_width() as f32,
            self.container.client_height() as f32,
        )
    }

    fn badge_count(&self) -> usize {
        self.sizes.len()
    }

    fn badge_size(&self, index: usize) -> Vec2 {
        self.sizes.get(index).copied().unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_failed_registration_is_an_error() {
        let result = pending_promise(|_resolve| Err::<(), _>(JsValue::from_str("listener rejected")));
        assert_eq!(
            result.err(),
            Some(PlatformError::Js("listener rejected".to_string()))
        );
    }

    #[wasm_bindgen_test]
    async fn test_registered_callback_settles() {
        let promise = pending_promise(|resolve| resolve.call0(&JsValue::NULL)).unwrap();
        assert!(wasm_bindgen_futures::JsFuture::from(promise).await.is_ok());
    }

    #[wasm_bindgen_test]
    async fn test_ready_document_returns_at_once() {
        let document = document().unwrap();
        assert!(dom_ready(&document).await.is_ok());
        assert!(sleep(&window().unwrap(), 1).await.is_ok());
    }
}
