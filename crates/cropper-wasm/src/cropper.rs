//! Cropper session WASM bindings.
//!
//! `JsCropper` wraps one `cropper_core::Cropper`. Actions can be sent either
//! as tagged objects through `dispatch` or through the typed helpers, which
//! avoid a serde round trip on hot paths like pointer moves.

use cropper_core::{Action, Cropper, CropperLimits, ResizeDirection, Size};
use wasm_bindgen::prelude::*;

use crate::types::{from_js_value, to_js_error, to_js_value};

/// JavaScript-accessible cropping session.
///
/// # Example (TypeScript)
/// ```typescript
/// const cropper = new JsCropper(4000, 3000);
///
/// // Pointer drag, already converted to image pixels
/// cropper.move(dragX, dragY);
/// cropper.moveEnd();
///
/// // Resize handle released
/// cropper.resizeWindow('topLeft', 40, 25);
///
/// // Paint
/// img.style.transform = cropper.cssTransform();
///
/// // Commit
/// const region = cropper.cropRegion(bitmap.width, bitmap.height);
/// cropper.free();
/// ```
#[wasm_bindgen]
pub struct JsCropper {
    inner: Cropper,
    debug: bool,
}

#[wasm_bindgen]
impl JsCropper {
    /// Start a session for an image of the given natural size.
    ///
    /// # Errors
    /// Throws if either dimension is zero, negative or not finite.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<JsCropper, JsValue> {
        let inner = Cropper::new(width, height).map_err(to_js_error)?;
        Ok(JsCropper {
            inner,
            debug: false,
        })
    }

    /// Start a session with custom limits.
    ///
    /// `limits` is a partial `{ minScale, maxScale, maxAngle, minWindowSize }`
    /// object; missing fields take their defaults.
    #[wasm_bindgen(js_name = withLimits)]
    pub fn with_limits(width: f64, height: f64, limits: JsValue) -> Result<JsCropper, JsValue> {
        let limits: CropperLimits = from_js_value(limits, "limits")?;
        let inner = Cropper::with_limits(width, height, limits).map_err(to_js_error)?;
        Ok(JsCropper {
            inner,
            debug: false,
        })
    }

    /// Apply a tagged action object, e.g. `{ type: 'ZOOM', scale: 2 }`.
    ///
    /// # Errors
    /// Throws on unknown action types, unknown resize directions, missing
    /// fields or non-finite numbers. The state is unchanged in that case.
    pub fn dispatch(&mut self, action: JsValue) -> Result<(), JsValue> {
        let action: Action = from_js_value(action, "action")?;
        self.apply(action)
    }

    pub fn zoom(&mut self, scale: f64) -> Result<(), JsValue> {
        self.apply(Action::Zoom { scale })
    }

    #[wasm_bindgen(js_name = zoomBy)]
    pub fn zoom_by(&mut self, delta_scale: f64) -> Result<(), JsValue> {
        self.apply(Action::ZoomBy { delta_scale })
    }

    pub fn flip(&mut self) -> Result<(), JsValue> {
        self.apply(Action::Flip)
    }

    pub fn rotate(&mut self, angle: f64) -> Result<(), JsValue> {
        self.apply(Action::Rotate { angle })
    }

    #[wasm_bindgen(js_name = rotateClockwise)]
    pub fn rotate_clockwise(&mut self, is_counter_clockwise: bool) -> Result<(), JsValue> {
        self.apply(Action::RotateClockwise {
            is_counter_clockwise,
        })
    }

    /// Move the image center; coordinates are in image pixels.
    #[wasm_bindgen(js_name = "move")]
    pub fn move_image(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.apply(Action::Move { x, y })
    }

    #[wasm_bindgen(js_name = moveEnd)]
    pub fn move_end(&mut self) -> Result<(), JsValue> {
        self.apply(Action::MoveEnd)
    }

    #[wasm_bindgen(js_name = resizeStart)]
    pub fn resize_start(&mut self) -> Result<(), JsValue> {
        self.apply(Action::ResizeStart)
    }

    /// Finish a resize gesture from the named edge or corner.
    ///
    /// `direction` is one of `top`, `topRight`, `right`, `bottomRight`,
    /// `bottom`, `bottomLeft`, `left`, `topLeft`; the deltas are the change
    /// in window size.
    #[wasm_bindgen(js_name = resizeWindow)]
    pub fn resize_window(&mut self, direction: &str, width: f64, height: f64) -> Result<(), JsValue> {
        let direction: ResizeDirection = direction.parse().map_err(to_js_error)?;
        self.apply(Action::ResizeWindow {
            direction,
            delta: Size::new(width, height),
        })
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.apply(Action::Reset)
    }

    /// Current state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js_value(self.inner.state())
    }

    /// Transform parameters for the presentation layer.
    #[wasm_bindgen(js_name = exportTransform)]
    pub fn export_transform(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.inner.export_transform())
    }

    /// CSS `transform` value for the image element.
    #[wasm_bindgen(js_name = cssTransform)]
    pub fn css_transform(&self) -> String {
        self.inner.export_transform().to_css()
    }

    /// Source rectangle to extract from a bitmap of the given natural size.
    #[wasm_bindgen(js_name = cropRegion)]
    pub fn crop_region(&self, natural_width: f64, natural_height: f64) -> Result<JsValue, JsValue> {
        let region = self
            .inner
            .extract_crop_region(natural_width, natural_height)
            .map_err(to_js_error)?;
        to_js_value(&region)
    }

    /// Lowest zoom reachable from the current position.
    #[wasm_bindgen(getter, js_name = minScale)]
    pub fn min_scale(&self) -> f64 {
        self.inner.min_scale()
    }

    #[wasm_bindgen(getter, js_name = maxScale)]
    pub fn max_scale(&self) -> f64 {
        self.inner.limits().max_scale
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.state().transform.scale
    }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        self.inner.state().transform.angle
    }

    #[wasm_bindgen(getter)]
    pub fn turns(&self) -> u8 {
        self.inner.state().transform.turns
    }

    #[wasm_bindgen(getter)]
    pub fn flipped(&self) -> bool {
        self.inner.state().transform.flipped
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.state().is_dragging
    }

    #[wasm_bindgen(getter, js_name = isResizing)]
    pub fn is_resizing(&self) -> bool {
        self.inner.state().is_resizing
    }

    /// Log every dispatched action to the browser console.
    #[wasm_bindgen(js_name = setDebug)]
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCropper {
    fn apply(&mut self, action: Action) -> Result<(), JsValue> {
        if self.debug {
            web_sys::console::log_1(&JsValue::from_str(&format!("[cropper] {:?}", action)));
        }
        self.inner.dispatch(action).map_err(to_js_error)
    }

    /// Borrow the core session.
    pub fn session(&self) -> &Cropper {
        &self.inner
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests pass action and limit objects as `JsValue` and can only run
/// on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestZoom {
        #[serde(rename = "type")]
        kind: &'static str,
        scale: f64,
    }

    #[derive(Serialize)]
    struct TestType {
        #[serde(rename = "type")]
        kind: &'static str,
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_zero_size() {
        assert!(JsCropper::new(0.0, 100.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_dispatch_tagged_action() {
        let mut c = JsCropper::new(400.0, 300.0).unwrap();
        let action = serde_wasm_bindgen::to_value(&TestZoom {
            kind: "ZOOM",
            scale: 3.0,
        })
        .unwrap();
        assert!(c.dispatch(action).is_ok());
        assert_eq!(c.scale(), 3.0);
    }

    #[wasm_bindgen_test]
    fn test_dispatch_unknown_type_fails() {
        let mut c = JsCropper::new(400.0, 300.0).unwrap();
        let action = serde_wasm_bindgen::to_value(&TestType { kind: "SPIN" }).unwrap();
        assert!(c.dispatch(action).is_err());
        assert_eq!(c.scale(), 1.0);
    }

    #[wasm_bindgen_test]
    fn test_resize_unknown_direction_fails() {
        let mut c = JsCropper::new(400.0, 300.0).unwrap();
        assert!(c.resize_window("north", 10.0, 10.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_non_finite_move_fails() {
        let mut c = JsCropper::new(400.0, 300.0).unwrap();
        assert!(c.move_image(f64::NAN, 0.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_with_partial_limits() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct PartialLimits {
            max_scale: f64,
        }
        let limits = serde_wasm_bindgen::to_value(&PartialLimits { max_scale: 4.0 }).unwrap();
        let mut c = JsCropper::with_limits(400.0, 300.0, limits).unwrap();
        c.zoom(9.0).unwrap();
        assert_eq!(c.scale(), 4.0);
    }

    #[wasm_bindgen_test]
    fn test_state_and_crop_region_objects() {
        let c = JsCropper::new(400.0, 300.0).unwrap();
        assert!(c.state().unwrap().is_object());
        assert!(c.export_transform().unwrap().is_object());
        assert!(c.crop_region(800.0, 600.0).unwrap().is_object());
        assert!(c.crop_region(800.0, 800.0).is_err());
    }
}
