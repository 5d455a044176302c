//! Read-only views of the state for painting and for final extraction.
//!
//! # Presentation
//!
//! The image element is centered on the crop window with its transform origin
//! at its own center, and transformed by
//!
//! ```text
//! translate(tx, ty) rotate(angle) scaleX(±1) rotate(turns * 90) scale(scale)
//! ```
//!
//! Placing the mirror between the free angle and the quarter turns makes a
//! FLIP an exact horizontal mirror of what is on screen.
//!
//! # Extraction
//!
//! [`CropRegion`] describes the source pixels under the window at natural
//! resolution. The output is `width x height` pixels; output pixel `(u, v)`
//! measured from the output center samples the source at
//! [`CropRegion::source_point`]. No pixels are copied here.

use serde::{Deserialize, Serialize};

use crate::error::CropperError;
use crate::geometry::{degrees_to_radians, rotate_point, rotate_quarters, Point};
use crate::state::CropperState;

/// Relative tolerance when checking the natural size against the image.
const ASPECT_TOLERANCE: f64 = 1e-3;

/// Transform parameters for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTransform {
    /// Screen offset of the image center from the window center
    pub translate_x: f64,
    pub translate_y: f64,
    /// Free rotation in degrees
    pub angle: f64,
    /// Quarter turns in degrees (0, 90, 180 or 270)
    pub quarter_turns: f64,
    pub scale: f64,
    pub flipped: bool,
}

impl ExportedTransform {
    pub fn from_state(state: &CropperState) -> Self {
        let position = state.image_position();
        Self {
            translate_x: position.x,
            translate_y: position.y,
            angle: state.transform.angle,
            quarter_turns: f64::from(state.transform.turns) * 90.0,
            scale: state.transform.scale,
            flipped: state.transform.flipped,
        }
    }

    /// Total rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.angle + self.quarter_turns
    }

    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        let mirror = if self.flipped { -1 } else { 1 };
        format!(
            "translate({}px, {}px) rotate({}deg) scaleX({}) rotate({}deg) scale({})",
            self.translate_x, self.translate_y, self.angle, mirror, self.quarter_turns, self.scale
        )
    }
}

/// Source rectangle to extract at natural resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRegion {
    /// Top-left of the output rectangle, before rotation about its center
    pub x: f64,
    pub y: f64,
    /// Output size in natural pixels
    pub width: f64,
    pub height: f64,
    /// Center of the region in source pixel coordinates
    pub center_x: f64,
    pub center_y: f64,
    /// Free rotation in degrees
    pub angle: f64,
    /// Quarter turns, `0..=3`
    pub turns: u8,
    pub flipped: bool,
}

impl CropRegion {
    /// Map the state onto a source bitmap of the given natural size.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for non-positive sizes and
    /// `AspectMismatch` when the bitmap's aspect ratio differs from the
    /// session image.
    pub fn from_state(
        state: &CropperState,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<Self, CropperError> {
        if !(natural_width.is_finite()
            && natural_height.is_finite()
            && natural_width > 0.0
            && natural_height > 0.0)
        {
            return Err(CropperError::InvalidDimensions {
                width: natural_width,
                height: natural_height,
            });
        }

        let ratio = natural_width / state.image.width;
        let expected_height = state.image.height * ratio;
        if (expected_height - natural_height).abs() > ASPECT_TOLERANCE * natural_height.max(1.0) {
            return Err(CropperError::AspectMismatch {
                natural_width,
                natural_height,
                width: state.image.width,
                height: state.image.height,
            });
        }

        let transform = state.transform;
        // Window center in the image's own frame, in image pixels.
        let local = to_image_frame(
            state.image.center.scaled(-1.0),
            transform.angle,
            transform.turns,
            transform.flipped,
        );
        let center_x = (state.image.width / 2.0 + local.x) * ratio;
        let center_y = (state.image.height / 2.0 + local.y) * ratio;

        let to_natural = ratio / transform.scale;
        let width = state.cropper.width * to_natural;
        let height = state.cropper.height * to_natural;

        Ok(Self {
            x: center_x - width / 2.0,
            y: center_y - height / 2.0,
            width,
            height,
            center_x,
            center_y,
            angle: transform.angle,
            turns: transform.turns,
            flipped: transform.flipped,
        })
    }

    /// Total rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.angle + f64::from(self.turns) * 90.0
    }

    /// Source coordinates sampled by output pixel `(u, v)`, where `(u, v)` is
    /// measured in pixels from the center of the output.
    pub fn source_point(&self, u: f64, v: f64) -> Point {
        let offset = to_image_frame(Point::new(u, v), self.angle, self.turns, self.flipped);
        Point::new(self.center_x + offset.x, self.center_y + offset.y)
    }
}

/// Undo the presentation rotation and mirror for a screen-axis vector.
fn to_image_frame(vector: Point, angle: f64, turns: u8, flipped: bool) -> Point {
    let unrotated = rotate_point(vector, Point::ORIGIN, -degrees_to_radians(angle));
    let unmirrored = if flipped {
        Point::new(-unrotated.x, unrotated.y)
    } else {
        unrotated
    };
    rotate_quarters(unmirrored, -i32::from(turns))
}
