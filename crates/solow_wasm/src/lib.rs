//! WASM bridge exposing the Solow engine to an interactive front end.

mod model;
mod runner;

pub use model::{default_parameters, parameter_controls, simulate, steady_state};
pub use runner::WasmSolowRunner;

use wasm_bindgen::JsValue;

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{err:#}")).into()
}
