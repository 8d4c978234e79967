use std::collections::HashMap;

use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::views::registry;

/// View shown when the URL names nothing useful
pub const DEFAULT_VIEW: &str = "v101_chartjs_query";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_VIEW.to_string()),
        }
    }

    pub fn activate(&self, key: &str) {
        leptos::logging::log!("🔶 activate view: key='{}'", key);
        self.active.set(key.to_string());
    }

    /// Picks up `?active=` on startup, then mirrors the active view
    /// back into the URL so reloads land on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if registry::is_registered(active_key) {
                self.activate(active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}
