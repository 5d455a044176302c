//! Cropper Core - geometry engine for an interactive image cropper
//!
//! This crate tracks an image's position, zoom, rotation and mirroring
//! relative to a movable, resizable crop window, and keeps the window fully
//! covered by the image under every transition.
//!
//! # Module Structure
//!
//! - `geometry` - Point rotation and window/image containment math
//! - `state` - The session snapshot and its derived quantities
//! - `action` - The action vocabulary delivered by the interaction layer
//! - `reducer` - Pure `(state, action) -> state` transitions
//! - `session` - Stateful wrapper with boundary validation
//! - `export` - CSS transform and source-pixel crop region
//!
//! # Example
//!
//! ```ignore
//! use cropper_core::{Action, Cropper};
//!
//! let mut cropper = Cropper::new(4000.0, 3000.0)?;
//! cropper.dispatch(Action::Rotate { angle: 12.0 })?;
//! cropper.dispatch(Action::Move { x: 150.0, y: -40.0 })?;
//! let region = cropper.extract_crop_region(4000.0, 3000.0)?;
//! ```

pub mod action;
pub mod error;
pub mod export;
pub mod geometry;
pub mod limits;
pub mod reducer;
pub mod session;
pub mod state;

pub use action::{Action, ResizeDirection};
pub use error::CropperError;
pub use export::{CropRegion, ExportedTransform};
pub use geometry::{Bounds, Point, Size};
pub use limits::CropperLimits;
pub use reducer::{reduce, reduce_with};
pub use session::Cropper;
pub use state::{CropWindow, CropperState, ImageBox, Transform};
