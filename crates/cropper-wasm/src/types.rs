//! Conversions between core types and JavaScript values.

use cropper_core::CropperError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Turn a core error into a JavaScript `Error`.
pub(crate) fn to_js_error(err: CropperError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Serialize a value into a plain JavaScript object.
pub(crate) fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| js_sys::Error::new(&format!("Serialization failed: {}", e)).into())
}

/// Deserialize a JavaScript object, labelling failures with `what`.
pub(crate) fn from_js_value<T: serde::de::DeserializeOwned>(
    value: JsValue,
    what: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_sys::Error::new(&format!("Invalid {}: {}", what, e)).into())
}
