//! wasm-bindgen interface for ScrollMotion.
//!
//! The JS host owns the native `IntersectionObserver`s and the
//! `requestAnimationFrame` loop. Each frame it passes the frame timestamp
//! and the visibility samples collected since the last frame into
//! `update()`, then applies the returned changes to the DOM (text content,
//! fill width, marker class).

use js_sys::JSON;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use scrollmotion_core::{parse_page_manifest_json, Config, CounterSpec, Engine, Inputs, Outputs};

#[wasm_bindgen]
pub struct ScrollMotion {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// threshold/rootMargin pairs the host feeds to its native observers,
/// one per watch kind.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserverOptions {
    threshold: f32,
    root_margin: String,
}

#[derive(Serialize)]
struct AllObserverOptions {
    reveal: ObserverOptions,
    counter: ObserverOptions,
    progress: ObserverOptions,
}

#[wasm_bindgen]
impl ScrollMotion {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ScrollMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(ScrollMotion {
            core: Engine::new(cfg),
        })
    }

    /// Register everything a page manifest JS object describes (see
    /// scrollmotion-core's manifest module for the shape). Returns the
    /// allocated watch ids.
    #[wasm_bindgen(js_name = load_manifest)]
    pub fn load_manifest(&mut self, manifest: JsValue) -> Result<Vec<u32>, JsError> {
        if jsvalue_is_undefined_or_null(&manifest) {
            return Err(JsError::new("load_manifest: manifest is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&manifest)
            .map_err(|e| JsError::new(&format!("load_manifest stringify error: {e:?}")))?
            .as_string()
            .ok_or_else(|| JsError::new("load_manifest: stringify produced non-string"))?;
        let parsed = parse_page_manifest_json(&s)
            .map_err(|e| JsError::new(&format!("load_manifest parse error: {e}")))?;
        Ok(self
            .core
            .load_manifest(&parsed)
            .into_iter()
            .map(|id| id.0)
            .collect())
    }

    /// Watch an element for a one-shot reveal. Returns a watch id (u32).
    #[wasm_bindgen(js_name = observe_reveal)]
    pub fn observe_reveal(&mut self, target: String) -> u32 {
        self.core.observe_reveal(&target).0
    }

    /// Watch a counter element. `spec` is JSON matching CounterSpec
    /// (`{ target, duration_ms?, suffix? }`). Returns a watch id (u32).
    #[wasm_bindgen(js_name = observe_counter)]
    pub fn observe_counter(&mut self, target: String, spec: JsValue) -> Result<u32, JsError> {
        let spec_rs: CounterSpec =
            swb::from_value(spec).map_err(|e| JsError::new(&format!("counter spec error: {e}")))?;
        Ok(self.core.observe_counter(&target, spec_rs).0)
    }

    /// Watch a progress bar. `percent_attr` is the raw markup attribute
    /// (e.g. the element's data-width); absent or malformed fills to 0.
    /// Returns a watch id (u32).
    #[wasm_bindgen(js_name = observe_progress)]
    pub fn observe_progress(&mut self, target: String, percent_attr: Option<String>) -> u32 {
        self.core
            .observe_progress(&target, percent_attr.as_deref())
            .0
    }

    /// Drop a watch before it fires.
    #[wasm_bindgen]
    pub fn unobserve(&mut self, watch_id: u32) {
        self.core.unobserve(scrollmotion_core::WatchId(watch_id));
    }

    /// `{ reveal, counter, progress }` threshold/rootMargin options for the
    /// host's native IntersectionObservers, derived from core config.
    #[wasm_bindgen(js_name = observer_options)]
    pub fn observer_options(&self) -> Result<JsValue, JsError> {
        let cfg = self.core.config();
        let opts = AllObserverOptions {
            reveal: ObserverOptions {
                threshold: cfg.reveal_threshold,
                root_margin: cfg.reveal_root_margin.to_string(),
            },
            counter: ObserverOptions {
                threshold: cfg.counter_threshold,
                root_margin: "0px 0px 0px 0px".to_string(),
            },
            progress: ObserverOptions {
                threshold: cfg.progress_threshold,
                root_margin: "0px 0px 0px 0px".to_string(),
            },
        };
        swb::to_value(&opts).map_err(|e| JsError::new(&format!("options error: {e}")))
    }

    /// Run one frame at host timestamp `now_ms` (performance.now() domain)
    /// with inputs JSON (`{ samples: [{ target, visible_fraction }] }`).
    /// Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, now_ms: f64, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(now_ms, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Number of watches still waiting to fire.
    #[wasm_bindgen(js_name = watch_count)]
    pub fn watch_count(&self) -> usize {
        self.core.watch_count()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
