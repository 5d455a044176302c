//! Stateful wrapper around the reducer.
//!
//! A [`Cropper`] owns one session's state and limits. It is the only place
//! where external input is validated; once an action passes
//! [`Action::validate`] the reducer applies it unconditionally. Sessions do
//! not share anything, so several images can be cropped side by side.

use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::error::CropperError;
use crate::export::{CropRegion, ExportedTransform};
use crate::geometry::{Bounds, Point};
use crate::limits::CropperLimits;
use crate::reducer::reduce_with;
use crate::state::CropperState;

/// One cropping session.
#[derive(Debug, Clone)]
pub struct Cropper {
    state: CropperState,
    limits: CropperLimits,
}

impl Cropper {
    /// Start a session for an image of the given natural size.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for zero, negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self, CropperError> {
        Self::with_limits(width, height, CropperLimits::default())
    }

    /// Start a session with custom limits.
    ///
    /// # Errors
    /// Returns `InvalidLimits` or `InvalidDimensions`.
    pub fn with_limits(
        width: f64,
        height: f64,
        limits: CropperLimits,
    ) -> Result<Self, CropperError> {
        limits.validate()?;
        let state = CropperState::new(width, height)?;
        debug!(width, height, "cropper session created");
        Ok(Self { state, limits })
    }

    /// Apply one action.
    ///
    /// # Errors
    /// Returns `NonFinite` if the action carries NaN or infinity; the state
    /// is left untouched in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<(), CropperError> {
        if let Err(err) = action.validate() {
            warn!(kind = action.kind(), %err, "rejected cropper action");
            return Err(err);
        }

        trace!(kind = action.kind(), ?action, "dispatch");
        if matches!(action, Action::Reset) {
            debug!("cropper reset");
        }
        self.state = reduce_with(&self.limits, &self.state, &action);
        Ok(())
    }

    /// Current snapshot.
    pub fn state(&self) -> &CropperState {
        &self.state
    }

    pub fn limits(&self) -> &CropperLimits {
        &self.limits
    }

    pub fn export_transform(&self) -> ExportedTransform {
        ExportedTransform::from_state(&self.state)
    }

    /// Source rectangle under the window for a bitmap of the given size.
    ///
    /// # Errors
    /// See [`CropRegion::from_state`].
    pub fn extract_crop_region(
        &self,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<CropRegion, CropperError> {
        CropRegion::from_state(&self.state, natural_width, natural_height)
    }

    /// Lowest zoom the user can reach from here, for slider ranges.
    pub fn min_scale(&self) -> f64 {
        let geometric = self.state.min_scale();
        if geometric.is_finite() {
            geometric.max(self.limits.min_scale)
        } else {
            self.state.transform.scale
        }
    }

    pub fn translation_bounds(&self) -> Bounds {
        self.state.translation_bounds()
    }

    pub fn furthest_vector(&self) -> Point {
        self.state.furthest_vector()
    }
}
