//! Transform state for one cropping session.
//!
//! The state is a plain value: the reducer takes a reference and returns a
//! new one. Derived quantities (effective rotation, frame size, admissible
//! translation range, minimum zoom) are computed on demand from it.
//!
//! # Units
//!
//! - `image.center` is in unscaled image pixels along screen axes; the image
//!   is drawn `center * scale` away from the window center
//! - `cropper` is in screen pixels; `x`/`y` locate its top-left corner inside
//!   the frame (the image footprint at scale 1, see [`CropperState::frame_size`])

use serde::{Deserialize, Serialize};

use crate::error::CropperError;
use crate::geometry::{
    degrees_to_radians, furthest_vector, rotate_point, rotated_bounds, rotated_half_extents,
    Bounds, Point, Size,
};

/// The image's logical footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBox {
    /// Offset of the image center from the window center
    pub center: Point,
    /// Natural width, fixed for the session
    pub width: f64,
    /// Natural height, fixed for the session
    pub height: f64,
}

/// The viewport the user crops through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropWindow {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Rotation, zoom and mirroring applied to the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Free rotation in degrees, within `[-45, 45]`
    pub angle: f64,
    /// Clockwise quarter turns already applied, `0..=3`
    pub turns: u8,
    /// Uniform zoom factor
    pub scale: f64,
    /// Horizontal mirror
    pub flipped: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            angle: 0.0,
            turns: 0,
            scale: 1.0,
            flipped: false,
        }
    }
}

/// Complete snapshot of a cropping session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropperState {
    pub image: ImageBox,
    pub cropper: CropWindow,
    pub transform: Transform,
    pub is_resizing: bool,
    pub is_dragging: bool,
}

impl CropperState {
    /// Create the initial state for an image of the given natural size.
    ///
    /// The window starts out covering the whole image at scale 1.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for zero, negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self, CropperError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CropperError::InvalidDimensions { width, height });
        }
        Ok(Self::initial(width, height))
    }

    /// Initial state for dimensions that are already known to be valid.
    pub(crate) fn initial(width: f64, height: f64) -> Self {
        Self {
            image: ImageBox {
                center: Point::ORIGIN,
                width,
                height,
            },
            cropper: CropWindow {
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
            transform: Transform::default(),
            is_resizing: false,
            is_dragging: false,
        }
    }

    /// Free angle plus quarter turns, in degrees.
    pub fn effective_degrees(&self) -> f64 {
        self.transform.angle + f64::from(self.transform.turns) * 90.0
    }

    pub fn effective_radians(&self) -> f64 {
        degrees_to_radians(self.effective_degrees())
    }

    /// True when an odd number of quarter turns has swapped the screen axes.
    pub fn is_axis_swapped(&self) -> bool {
        self.transform.turns % 2 == 1
    }

    /// Image footprint at scale 1 ignoring the free angle, in screen axes.
    ///
    /// This is the area the crop window lives in and is letterboxed into.
    pub fn frame_size(&self) -> Size {
        let size = Size::new(self.image.width, self.image.height);
        if self.is_axis_swapped() {
            size.swapped()
        } else {
            size
        }
    }

    pub fn scaled_image_size(&self) -> Size {
        Size::new(self.image.width, self.image.height).scaled(self.transform.scale)
    }

    /// Screen-space offset of the image center from the window center.
    pub fn image_position(&self) -> Point {
        self.image.center.scaled(self.transform.scale)
    }

    /// How far the window pokes out of the image; zero when fully covered.
    pub fn furthest_vector(&self) -> Point {
        furthest_vector(
            self.cropper.width,
            self.cropper.height,
            self.effective_radians(),
            self.scaled_image_size(),
            self.image_position(),
        )
    }

    /// Admissible screen-space offsets of the image center, in the image frame.
    pub fn translation_bounds(&self) -> Bounds {
        let scaled = self.scaled_image_size();
        rotated_bounds(
            self.effective_radians(),
            scaled.width,
            scaled.height,
            self.cropper.width,
            self.cropper.height,
        )
    }

    /// Whether the image center currently lies inside its admissible range.
    pub fn is_center_admissible(&self, eps: f64) -> bool {
        let radians = self.effective_radians();
        let local = rotate_point(self.image_position(), Point::ORIGIN, -radians);
        self.translation_bounds().contains(local, eps)
    }

    /// Smallest zoom that keeps the window covered with the image where it is.
    ///
    /// Zooming keeps `image.center` fixed in image pixels, so the on-screen
    /// offset grows with the scale. Returns infinity when no zoom can cover
    /// the window from the current center.
    pub fn min_scale(&self) -> f64 {
        self.min_scale_for(self.effective_radians(), self.image.center)
    }

    /// Smallest zoom that covers the window with a centered image at the
    /// given rotation.
    pub fn min_centered_scale(&self, radians: f64) -> f64 {
        self.min_scale_for(radians, Point::ORIGIN)
    }

    fn min_scale_for(&self, radians: f64, center: Point) -> f64 {
        let extents = rotated_half_extents(self.cropper.width, self.cropper.height, radians);
        let local = rotate_point(center, Point::ORIGIN, -radians);
        let axis_x = required_scale(extents.width, self.image.width / 2.0, local.x);
        let axis_y = required_scale(extents.height, self.image.height / 2.0, local.y);
        axis_x.max(axis_y)
    }
}

/// Scale needed so that `extent + scale * |offset| <= scale * half`.
fn required_scale(extent: f64, half: f64, offset: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let room = half - offset.abs();
    if room <= 0.0 {
        f64::INFINITY
    } else {
        extent / room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(matches!(
            CropperState::new(0.0, 300.0),
            Err(CropperError::InvalidDimensions { .. })
        ));
        assert!(CropperState::new(400.0, -1.0).is_err());
        assert!(CropperState::new(f64::NAN, 300.0).is_err());
        assert!(CropperState::new(400.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_initial_state() {
        let state = CropperState::new(400.0, 300.0).unwrap();
        assert_eq!(state.image.center, Point::ORIGIN);
        assert_eq!(state.cropper.size(), Size::new(400.0, 300.0));
        assert_eq!(state.cropper.x, 0.0);
        assert_eq!(state.transform, Transform::default());
        assert!(!state.is_resizing);
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_initial_state_is_covered() {
        let state = CropperState::new(400.0, 300.0).unwrap();
        assert!(state.furthest_vector().is_zero(1e-9));
        assert!((state.min_scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_size_swaps_on_odd_turns() {
        let mut state = CropperState::new(400.0, 300.0).unwrap();
        assert_eq!(state.frame_size(), Size::new(400.0, 300.0));
        state.transform.turns = 1;
        assert_eq!(state.frame_size(), Size::new(300.0, 400.0));
        state.transform.turns = 2;
        assert_eq!(state.frame_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_effective_degrees() {
        let mut state = CropperState::new(400.0, 300.0).unwrap();
        state.transform.angle = -12.5;
        state.transform.turns = 3;
        assert_eq!(state.effective_degrees(), 257.5);
    }

    #[test]
    fn test_min_scale_grows_with_offset() {
        let mut state = CropperState::new(1000.0, 1000.0).unwrap();
        state.cropper.width = 500.0;
        state.cropper.height = 500.0;
        assert!((state.min_scale() - 0.5).abs() < 1e-12);

        state.image.center = Point::new(125.0, 0.0);
        // 250 <= s * (500 - 125)
        assert!((state.min_scale() - 250.0 / 375.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_scale_infinite_when_center_outside_image() {
        let mut state = CropperState::new(100.0, 100.0).unwrap();
        state.image.center = Point::new(60.0, 0.0);
        assert!(state.min_scale().is_infinite());
    }

    #[test]
    fn test_min_centered_scale_at_45_degrees() {
        let state = CropperState::new(100.0, 100.0).unwrap();
        let s = state.min_centered_scale(std::f64::consts::FRAC_PI_4);
        assert!((s - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_field_names() {
        let state = CropperState::new(400.0, 300.0).unwrap();
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["isResizing"], false);
        assert_eq!(json["isDragging"], false);
        assert_eq!(json["cropper"]["width"], 400.0);
        assert_eq!(json["transform"]["turns"], 0);
        assert_eq!(json["image"]["center"]["x"], 0.0);
    }
}
