//! Tunable limits for a cropping session.

use serde::{Deserialize, Serialize};

use crate::error::CropperError;

/// Numeric limits applied by the reducer.
///
/// Every field has a default, so a partial object from the JavaScript side
/// deserializes into a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperLimits {
    /// Smallest zoom factor (1.0 = image fills the window unrotated)
    pub min_scale: f64,
    /// Largest zoom factor
    pub max_scale: f64,
    /// Largest free rotation in degrees, applied symmetrically
    pub max_angle: f64,
    /// Smallest window edge in screen pixels while resizing
    pub min_window_size: f64,
}

impl Default for CropperLimits {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 10.0,
            max_angle: 45.0,
            min_window_size: 1.0,
        }
    }
}

impl CropperLimits {
    /// Check that the limits describe a usable configuration.
    pub fn validate(&self) -> Result<(), CropperError> {
        let values = [
            self.min_scale,
            self.max_scale,
            self.max_angle,
            self.min_window_size,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CropperError::InvalidLimits(
                "all limits must be finite".to_string(),
            ));
        }
        if self.min_scale <= 0.0 || self.max_scale < self.min_scale {
            return Err(CropperError::InvalidLimits(format!(
                "scale range [{}, {}] is empty or non-positive",
                self.min_scale, self.max_scale
            )));
        }
        if self.max_angle <= 0.0 || self.max_angle > 45.0 {
            return Err(CropperError::InvalidLimits(format!(
                "max angle {} must be in (0, 45]",
                self.max_angle
            )));
        }
        if self.min_window_size <= 0.0 {
            return Err(CropperError::InvalidLimits(format!(
                "min window size {} must be positive",
                self.min_window_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let limits = CropperLimits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.min_scale, 1.0);
        assert_eq!(limits.max_scale, 10.0);
        assert_eq!(limits.max_angle, 45.0);
    }

    #[test]
    fn test_rejects_inverted_scale_range() {
        let limits = CropperLimits {
            min_scale: 4.0,
            max_scale: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(CropperError::InvalidLimits(_))
        ));
    }

    #[test]
    fn test_rejects_angle_past_quarter_turn_midpoint() {
        let mut limits = CropperLimits::default();
        limits.max_angle = 60.0;
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let mut limits = CropperLimits::default();
        limits.min_window_size = f64::NAN;
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let limits: CropperLimits = serde_json::from_str(r#"{"maxScale": 4}"#).unwrap();
        assert_eq!(limits.max_scale, 4.0);
        assert_eq!(limits.min_scale, 1.0);
        assert_eq!(limits.max_angle, 45.0);
    }
}
