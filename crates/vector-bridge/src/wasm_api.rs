//! WASM entry points for the browser.
//!
//! This module is only compiled for the `wasm32` target. Each
//! [`VectorSession`] owns an independent session; JavaScript creates one per
//! page session and calls `free()` to tear it down.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::figure;
use crate::messages::{SessionToUi, UiToSession};
use crate::session_state::SessionState;
use vector_scene::SceneConfig;

/// One interactive vector session exposed to JavaScript.
#[wasm_bindgen]
pub struct VectorSession {
    state: SessionState,
}

#[wasm_bindgen]
impl VectorSession {
    /// Create a session with the default scene configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> VectorSession {
        console_error_panic_hook::set_once();
        VectorSession {
            state: SessionState::new(),
        }
    }

    /// Create a session with a JSON `SceneConfig` override.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a configuration.
    pub fn with_config(config_json: &str) -> Result<VectorSession, JsValue> {
        console_error_panic_hook::set_once();
        let config: SceneConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid scene config: {e}")))?;
        Ok(VectorSession {
            state: SessionState::with_config(config),
        })
    }

    /// Process a JSON `UiToSession` message and return a JSON `SessionToUi`.
    pub fn process_message(&mut self, json_input: &str) -> String {
        let response = match serde_json::from_str::<UiToSession>(json_input) {
            Ok(msg) => dispatch::dispatch(&mut self.state, msg),
            Err(e) => SessionToUi::Error {
                message: format!("Failed to parse message: {}", e),
            },
        };

        if let SessionToUi::Error { message } = &response {
            web_sys::console::warn_1(&JsValue::from_str(message));
        }

        dispatch::encode_response(&response)
    }

    /// The current scene as a Plotly figure JSON string.
    pub fn figure_json(&self) -> Result<String, JsValue> {
        figure::figure_json(&self.state.scene()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Segment endpoints `[x0, y0, z0, x1, y1, z1, ...]` for custom renderers.
    pub fn segment_positions(&self) -> js_sys::Float32Array {
        let positions = figure::segment_positions(&self.state.scene());
        js_sys::Float32Array::from(positions.as_slice())
    }

    /// Number of vectors in the session.
    pub fn vector_count(&self) -> usize {
        self.state.collection.len()
    }
}

impl Default for VectorSession {
    fn default() -> Self {
        Self::new()
    }
}
