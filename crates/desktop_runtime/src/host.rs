//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches `web_sys` lives behind this boundary and
//! degrades to fixed fallbacks off-wasm.

use desktop_app_contract::PanelId;
#[cfg(target_arch = "wasm32")]
use desktop_app_contract::panel_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{model::Viewport, reducer::RuntimeEffect};

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1024,
    height: 768,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser host bundle for desktop runtime side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Current browser viewport, or a 1024x768 fallback off-wasm.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT.height);
                return Viewport { width, height };
            }
        }

        FALLBACK_VIEWPORT
    }

    /// Executes one reducer-emitted effect.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(panel_id) => focus_window_input(&panel_id),
            RuntimeEffect::SyncDocumentTitle(title) => set_document_title(&title),
        }
    }
}

fn focus_window_input(panel_id: &PanelId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = panel_primary_input_dom_id(panel_id);
        // A freshly opened panel mounts after this effect runs; look it up on the next task.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = panel_id;
}

fn set_document_title(title: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = title;
}
