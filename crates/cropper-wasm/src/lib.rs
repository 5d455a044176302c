//! Cropper WASM - WebAssembly bindings for the cropper engine
//!
//! This crate exposes `cropper-core` sessions to JavaScript/TypeScript. The
//! interaction layer turns pointer and gesture events into actions and
//! dispatches them; the presentation layer reads the exported transform once
//! per paint.
//!
//! # Module Structure
//!
//! - `cropper` - The `JsCropper` session wrapper
//! - `types` - Error conversion and serde helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropper } from '@image-cropper/wasm';
//!
//! await init();
//!
//! const cropper = new JsCropper(image.naturalWidth, image.naturalHeight);
//! cropper.dispatch({ type: 'ZOOM', scale: 2 });
//! cropper.rotate(15);
//! element.style.transform = cropper.cssTransform();
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod types;

pub use cropper::JsCropper;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
