//! Interop with the Chart.js global loaded in `index.html`.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// One live Chart.js instance bound to a canvas.
///
/// Dropping the handle destroys the instance, which releases the canvas for
/// the next chart. Keep at most one handle per canvas and drop the old one
/// before constructing a replacement.
pub struct ChartJsHandle {
    instance: JsValue,
}

impl ChartJsHandle {
    /// Build a chart on `canvas` from a prepared configuration
    pub fn render(canvas: &HtmlCanvasElement, config: &serde_json::Value) -> Result<Self, String> {
        let window = web_sys::window().ok_or("Window not available")?;
        let ctor_value = Reflect::get(&window, &JsValue::from_str("Chart"))
            .map_err(|e| format!("Chart global not available: {:?}", e))?;
        if !ctor_value.is_function() {
            return Err("Chart global is not a constructor; is chart.js loaded?".to_string());
        }
        let ctor: Function = ctor_value
            .dyn_into()
            .map_err(|_| "Chart global is not callable".to_string())?;

        let config_value = config
            .serialize(&Serializer::json_compatible())
            .map_err(|e| format!("Failed to serialize chart config: {}", e))?;

        let args = Array::new();
        args.push(canvas.as_ref());
        args.push(&config_value);

        let instance = Reflect::construct(&ctor, &args)
            .map_err(|e| format!("Failed to construct chart: {:?}", e))?;
        Ok(Self { instance })
    }
}

impl Drop for ChartJsHandle {
    fn drop(&mut self) {
        let Ok(destroy_value) = Reflect::get(&self.instance, &JsValue::from_str("destroy")) else {
            return;
        };
        if let Ok(destroy) = destroy_value.dyn_into::<Function>() {
            if let Err(e) = destroy.call0(&self.instance) {
                log::error!("Failed to destroy chart instance: {:?}", e);
            }
        }
    }
}
