//! WebAssembly bindings for the browser visualizer
//!
//! The page owns the timer: it calls [`PlaybackSession::tick`] every
//! [`default_delay_ms`] milliseconds and draws the returned snapshot.
//! Starting a new run replaces the session's trace, so a timer left over
//! from the previous run can only advance the new one.
//!
//! All structured results are returned as JSON strings.

use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::{logging::init_logging, parse_input, Algorithm};
use crate::playback::{PlaybackState, DEFAULT_DELAY};
use crate::recorder::record;
use crate::render::project;

/// Initialize WASM module
///
/// Sets up the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = init_logging(Some("info"), None);
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("{}", e)))
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}", error))
}

/// Default delay between animation steps in milliseconds
#[wasm_bindgen]
pub fn default_delay_ms() -> u32 {
    DEFAULT_DELAY.as_millis() as u32
}

/// List supported algorithms as JSON, one object per algorithm with
/// `name`, `display_name`, `complexity` and `description`
#[wasm_bindgen]
pub fn algorithms_json() -> String {
    let entries: Vec<serde_json::Value> = Algorithm::ALL
        .iter()
        .map(|algorithm| {
            serde_json::json!({
                "name": algorithm.to_string(),
                "display_name": algorithm.display_name(),
                "complexity": algorithm.complexity(),
                "description": algorithm.description(),
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Parse array text, sort it and return the full outcome as JSON
///
/// Throws a JavaScript error for an unknown algorithm or invalid input.
#[wasm_bindgen]
pub fn run_sort_json(algorithm: &str, text: &str) -> Result<String, JsValue> {
    let algorithm: Algorithm = algorithm.parse().map_err(js_error)?;
    let values = parse_input(text).map_err(js_error)?;
    let outcome = record(algorithm, &values).map_err(js_error)?;
    to_json(&outcome)
}

/// Browser-side playback of one trace at a time
#[wasm_bindgen]
pub struct PlaybackSession {
    state: PlaybackState,
}

#[wasm_bindgen]
impl PlaybackSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PlaybackSession {
        PlaybackSession {
            state: PlaybackState::new(),
        }
    }

    /// Record a new run and install it, replacing the current one
    ///
    /// Returns the initial snapshot as JSON. On invalid input the current
    /// run is left untouched and a JavaScript error is thrown.
    pub fn start(&mut self, algorithm: &str, text: &str) -> Result<String, JsValue> {
        let algorithm: Algorithm = algorithm.parse().map_err(js_error)?;
        let values = parse_input(text).map_err(js_error)?;
        let outcome = record(algorithm, &values).map_err(js_error)?;
        self.state.install(Arc::new(outcome.trace), values);
        to_json(&self.state.snapshot())
    }

    /// Advance one step; returns the snapshot JSON, or `undefined` once the
    /// run is finished or nothing is installed
    pub fn tick(&mut self) -> Option<String> {
        let snapshot = self.state.tick()?;
        serde_json::to_string(&snapshot).ok()
    }

    /// Drop the current run and return the idle snapshot JSON
    pub fn reset(&mut self) -> String {
        self.state.reset();
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// Current snapshot as JSON
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// Bar heights and highlights for the current snapshot as JSON
    pub fn bars(&self) -> String {
        serde_json::to_string(&project(&self.state.snapshot())).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}
