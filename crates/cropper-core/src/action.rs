//! Action vocabulary accepted by the reducer.
//!
//! Actions arrive from the interaction adapter already normalized: offsets in
//! image pixels, scale factors and resize deltas. Gesture recognition never
//! reaches this layer.
//!
//! On the wire an action is an object tagged by `type`:
//!
//! ```text
//! { "type": "ZOOM", "scale": 2.5 }
//! { "type": "ROTATE_CLOCKWISE", "isCounterClockwise": true }
//! { "type": "RESIZE_WINDOW", "direction": "topRight", "delta": { "width": 12, "height": -4 } }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CropperError;
use crate::geometry::Size;

/// Edge or corner grabbed while resizing the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeDirection {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::Top,
        ResizeDirection::TopRight,
        ResizeDirection::Right,
        ResizeDirection::BottomRight,
        ResizeDirection::Bottom,
        ResizeDirection::BottomLeft,
        ResizeDirection::Left,
        ResizeDirection::TopLeft,
    ];

    /// Horizontal side being dragged: -1 left, 1 right, 0 neither.
    pub fn horizontal(self) -> f64 {
        match self {
            ResizeDirection::Left | ResizeDirection::TopLeft | ResizeDirection::BottomLeft => -1.0,
            ResizeDirection::Right | ResizeDirection::TopRight | ResizeDirection::BottomRight => {
                1.0
            }
            ResizeDirection::Top | ResizeDirection::Bottom => 0.0,
        }
    }

    /// Vertical side being dragged: -1 top, 1 bottom, 0 neither.
    pub fn vertical(self) -> f64 {
        match self {
            ResizeDirection::Top | ResizeDirection::TopLeft | ResizeDirection::TopRight => -1.0,
            ResizeDirection::Bottom | ResizeDirection::BottomLeft | ResizeDirection::BottomRight => {
                1.0
            }
            ResizeDirection::Left | ResizeDirection::Right => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::Top => "top",
            ResizeDirection::TopRight => "topRight",
            ResizeDirection::Right => "right",
            ResizeDirection::BottomRight => "bottomRight",
            ResizeDirection::Bottom => "bottom",
            ResizeDirection::BottomLeft => "bottomLeft",
            ResizeDirection::Left => "left",
            ResizeDirection::TopLeft => "topLeft",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = CropperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| CropperError::UnknownDirection(s.to_string()))
    }
}

/// One transition of the cropper state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Zoom to an absolute scale.
    Zoom { scale: f64 },
    /// Zoom by adding to the current scale.
    ZoomBy {
        #[serde(rename = "deltaScale")]
        delta_scale: f64,
    },
    /// Mirror horizontally.
    Flip,
    /// Set the free rotation angle in degrees.
    Rotate { angle: f64 },
    /// Apply a quarter turn, clockwise unless stated otherwise.
    RotateClockwise {
        #[serde(default, rename = "isCounterClockwise")]
        is_counter_clockwise: bool,
    },
    /// Move the image center, in image pixels.
    Move { x: f64, y: f64 },
    MoveEnd,
    ResizeStart,
    /// Finish a resize gesture; `delta` is the change in window size.
    ResizeWindow {
        direction: ResizeDirection,
        delta: Size,
    },
    /// Return to the initial state.
    Reset,
}

impl Action {
    /// Reject actions carrying NaN or infinite numbers.
    ///
    /// # Errors
    /// Returns `NonFinite` naming the offending field.
    pub fn validate(&self) -> Result<(), CropperError> {
        fn finite(field: &'static str, value: f64) -> Result<(), CropperError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(CropperError::NonFinite { field })
            }
        }

        match *self {
            Action::Zoom { scale } => finite("scale", scale),
            Action::ZoomBy { delta_scale } => finite("deltaScale", delta_scale),
            Action::Rotate { angle } => finite("angle", angle),
            Action::Move { x, y } => finite("x", x).and_then(|()| finite("y", y)),
            Action::ResizeWindow { delta, .. } => finite("delta.width", delta.width)
                .and_then(|()| finite("delta.height", delta.height)),
            Action::Flip
            | Action::RotateClockwise { .. }
            | Action::MoveEnd
            | Action::ResizeStart
            | Action::Reset => Ok(()),
        }
    }

    /// Wire tag of the action, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Zoom { .. } => "ZOOM",
            Action::ZoomBy { .. } => "ZOOM_BY",
            Action::Flip => "FLIP",
            Action::Rotate { .. } => "ROTATE",
            Action::RotateClockwise { .. } => "ROTATE_CLOCKWISE",
            Action::Move { .. } => "MOVE",
            Action::MoveEnd => "MOVE_END",
            Action::ResizeStart => "RESIZE_START",
            Action::ResizeWindow { .. } => "RESIZE_WINDOW",
            Action::Reset => "RESET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs() {
        assert_eq!(ResizeDirection::Left.horizontal(), -1.0);
        assert_eq!(ResizeDirection::Left.vertical(), 0.0);
        assert_eq!(ResizeDirection::TopRight.horizontal(), 1.0);
        assert_eq!(ResizeDirection::TopRight.vertical(), -1.0);
        assert_eq!(ResizeDirection::Bottom.horizontal(), 0.0);
        assert_eq!(ResizeDirection::Bottom.vertical(), 1.0);
    }

    #[test]
    fn test_direction_from_str() {
        for direction in ResizeDirection::ALL {
            assert_eq!(direction.as_str().parse::<ResizeDirection>(), Ok(direction));
        }
        assert_eq!(
            "north".parse::<ResizeDirection>(),
            Err(CropperError::UnknownDirection("north".to_string()))
        );
    }

    #[test]
    fn test_parse_tagged_actions() {
        let zoom: Action = serde_json::from_str(r#"{"type":"ZOOM","scale":2.5}"#).unwrap();
        assert_eq!(zoom, Action::Zoom { scale: 2.5 });

        let zoom_by: Action =
            serde_json::from_str(r#"{"type":"ZOOM_BY","deltaScale":-0.25}"#).unwrap();
        assert_eq!(zoom_by, Action::ZoomBy { delta_scale: -0.25 });

        let flip: Action = serde_json::from_str(r#"{"type":"FLIP"}"#).unwrap();
        assert_eq!(flip, Action::Flip);

        let turn: Action = serde_json::from_str(r#"{"type":"ROTATE_CLOCKWISE"}"#).unwrap();
        assert_eq!(
            turn,
            Action::RotateClockwise {
                is_counter_clockwise: false
            }
        );

        let resize: Action = serde_json::from_str(
            r#"{"type":"RESIZE_WINDOW","direction":"topRight","delta":{"width":12,"height":-4}}"#,
        )
        .unwrap();
        assert_eq!(
            resize,
            Action::ResizeWindow {
                direction: ResizeDirection::TopRight,
                delta: Size::new(12.0, -4.0),
            }
        );
    }

    #[test]
    fn test_unknown_tag_and_direction_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"type":"SPIN"}"#).is_err());
        assert!(serde_json::from_str::<Action>(
            r#"{"type":"RESIZE_WINDOW","direction":"north","delta":{"width":1,"height":1}}"#
        )
        .is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        assert!(Action::Zoom { scale: 3.0 }.validate().is_ok());
        assert_eq!(
            Action::Move {
                x: 1.0,
                y: f64::NAN
            }
            .validate(),
            Err(CropperError::NonFinite { field: "y" })
        );
        assert_eq!(
            Action::ResizeWindow {
                direction: ResizeDirection::Left,
                delta: Size::new(f64::INFINITY, 0.0),
            }
            .validate(),
            Err(CropperError::NonFinite {
                field: "delta.width"
            })
        );
        assert!(Action::Reset.validate().is_ok());
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let action = Action::RotateClockwise {
            is_counter_clockwise: true,
        };
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json["type"], action.kind());
        assert_eq!(json["isCounterClockwise"], true);
    }
}
