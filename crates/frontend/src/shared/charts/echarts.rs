//! Interop with the ECharts global loaded in `index.html`.

use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDivElement;

/// One live ECharts instance bound to a container element.
///
/// Dropping the handle disposes the instance. Keep at most one handle per
/// container and drop the old one before rendering a replacement.
pub struct EChartsHandle {
    instance: JsValue,
}

impl EChartsHandle {
    /// Initialize a chart in `container` and apply a prepared option
    pub fn render(container: &HtmlDivElement, option: &serde_json::Value) -> Result<Self, String> {
        let window = web_sys::window().ok_or("Window not available")?;
        let echarts = Reflect::get(&window, &JsValue::from_str("echarts"))
            .map_err(|e| format!("echarts global not available: {:?}", e))?;
        if echarts.is_undefined() || echarts.is_null() {
            return Err("echarts global not found; is echarts loaded?".to_string());
        }

        let init_value = Reflect::get(&echarts, &JsValue::from_str("init"))
            .map_err(|e| format!("echarts.init not available: {:?}", e))?;
        let init: Function = init_value
            .dyn_into()
            .map_err(|_| "echarts.init is not a function".to_string())?;
        let instance = init
            .call1(&echarts, container.as_ref())
            .map_err(|e| format!("echarts.init failed: {:?}", e))?;

        let option_value = option
            .serialize(&Serializer::json_compatible())
            .map_err(|e| format!("Failed to serialize chart option: {}", e))?;
        let set_option_value = Reflect::get(&instance, &JsValue::from_str("setOption"))
            .map_err(|e| format!("setOption not available: {:?}", e))?;
        let set_option: Function = set_option_value
            .dyn_into()
            .map_err(|_| "setOption is not a function".to_string())?;
        set_option
            .call1(&instance, &option_value)
            .map_err(|e| format!("setOption failed: {:?}", e))?;

        Ok(Self { instance })
    }
}

impl Drop for EChartsHandle {
    fn drop(&mut self) {
        let Ok(dispose_value) = Reflect::get(&self.instance, &JsValue::from_str("dispose")) else {
            return;
        };
        if let Ok(dispose) = dispose_value.dyn_into::<Function>() {
            if let Err(e) = dispose.call0(&self.instance) {
                log::error!("Failed to dispose chart instance: {:?}", e);
            }
        }
    }
}
