//! Bridge to the page's global `Plotly` object.
//!
//! The page loads `plotly.js` from a `<script>` tag (see `index.html`); this
//! module only calls `Plotly.newPlot` on a mounted element.

#[cfg(test)]
#[path = "plotly_test.rs"]
mod plotly_test;

use plotchat::PlotPayload;
use serde_json::{Value, json};

/// Config passed to `Plotly.newPlot`: the figure's own `config` (if it sent
/// one) with `responsive` forced on.
pub fn plot_config(plot: &PlotPayload) -> Value {
    let mut config = match plot.extra.get("config") {
        Some(Value::Object(config)) => config.clone(),
        _ => serde_json::Map::new(),
    };
    config.insert("responsive".to_owned(), json!(true));
    Value::Object(config)
}

#[cfg(feature = "csr")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
        pub fn new_plot(
            root: &web_sys::HtmlElement,
            data: &JsValue,
            layout: &JsValue,
            config: &JsValue,
        ) -> Result<js_sys::Promise, JsValue>;
    }
}

/// Render `plot` into `el`, replacing any previous figure.
///
/// A figure that `Plotly` rejects asynchronously is logged with `log::warn!`.
///
/// # Errors
///
/// Returns the JS exception if `Plotly` is missing or throws while starting
/// the render.
#[cfg(feature = "csr")]
pub fn draw(el: &web_sys::HtmlElement, plot: &PlotPayload) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::prelude::*;

    let data = js_sys::JSON::parse(&plot.data_value().to_string())?;
    let layout = js_sys::JSON::parse(&plot.layout_value().to_string())?;
    let config = js_sys::JSON::parse(&plot_config(plot).to_string())?;
    let rendering = ffi::new_plot(el, &data, &layout, &config)?;

    let on_reject: Closure<dyn FnMut(JsValue)> =
        Closure::once(|reason: JsValue| log::warn!("plot render rejected: {reason:?}"));
    let _ = rendering.catch(&on_reject);
    // Leaked: the promise may settle after this frame returns.
    on_reject.forget();
    Ok(())
}
