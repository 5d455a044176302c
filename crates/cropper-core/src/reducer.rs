//! Transition engine: `(state, action) -> state`.
//!
//! The reducer is total. Every action applied to a valid state yields a valid
//! state, where valid means:
//!
//! 1. `scale` lies within the configured zoom range (the no-gap rule below
//!    wins if the two ever conflict)
//! 2. no corner of the crop window falls outside the rotated, scaled image
//! 3. `turns` is in `0..=3`, and the window's axes follow the quarter turns
//! 4. the image center lies inside the admissible translation rectangle
//!
//! Zoom keeps the image center fixed in image pixels. Rotation and resizing
//! first raise the zoom to cover the window with a centered image, then pull
//! the center back into range if the new geometry demands it.
//!
//! Inputs are assumed finite; [`Action::validate`] is the boundary check.

use crate::action::{Action, ResizeDirection};
use crate::geometry::{rotate_point, rotate_quarters, Point, Size};
use crate::limits::CropperLimits;
use crate::state::CropperState;

/// Apply `action` to `state` using the default limits.
pub fn reduce(state: &CropperState, action: &Action) -> CropperState {
    reduce_with(&CropperLimits::default(), state, action)
}

/// Apply `action` to `state` under explicit limits.
pub fn reduce_with(limits: &CropperLimits, state: &CropperState, action: &Action) -> CropperState {
    debug_assert!(action.validate().is_ok(), "unvalidated action {:?}", action);

    match *action {
        Action::Zoom { scale } => zoom(limits, state, scale),
        Action::ZoomBy { delta_scale } => zoom(limits, state, state.transform.scale + delta_scale),
        Action::Flip => flip(state),
        Action::Rotate { angle } => rotate(limits, state, angle),
        Action::RotateClockwise {
            is_counter_clockwise,
        } => rotate_quarter(state, is_counter_clockwise),
        Action::Move { x, y } => move_to(state, Point::new(x, y)),
        Action::MoveEnd => CropperState {
            is_dragging: false,
            ..*state
        },
        Action::ResizeStart => CropperState {
            is_resizing: true,
            ..*state
        },
        Action::ResizeWindow { direction, delta } => resize_window(limits, state, direction, delta),
        Action::Reset => CropperState::initial(state.image.width, state.image.height),
    }
}

fn zoom(limits: &CropperLimits, state: &CropperState, requested: f64) -> CropperState {
    let current = state.transform.scale;
    // Infinite means the center is already out of range; refuse to zoom out.
    let geometric = state.min_scale();
    let floor = if geometric.is_finite() {
        geometric.max(limits.min_scale)
    } else {
        current.max(limits.min_scale)
    };

    let mut next = *state;
    next.transform.scale = requested.min(limits.max_scale).max(floor);
    settle(limits, next)
}

fn flip(state: &CropperState) -> CropperState {
    let mut next = *state;
    next.image.center.x = -state.image.center.x;
    next.transform.angle = -state.transform.angle;
    next.transform.flipped = !state.transform.flipped;
    next
}

fn rotate(limits: &CropperLimits, state: &CropperState, angle: f64) -> CropperState {
    let mut next = *state;
    next.transform.angle = angle.clamp(-limits.max_angle, limits.max_angle);
    settle(limits, next)
}

fn rotate_quarter(state: &CropperState, is_counter_clockwise: bool) -> CropperState {
    let step: i32 = if is_counter_clockwise { -1 } else { 1 };

    let mut next = *state;
    next.transform.turns = (i32::from(state.transform.turns) + step).rem_euclid(4) as u8;
    next.image.center = rotate_quarters(state.image.center, step);
    next.cropper.width = state.cropper.height;
    next.cropper.height = state.cropper.width;
    next.cropper.x = state.cropper.y;
    next.cropper.y = state.cropper.x;
    next
}

fn move_to(state: &CropperState, target: Point) -> CropperState {
    let radians = state.effective_radians();
    let scale = state.transform.scale;
    let bounds = state.translation_bounds();

    // Clamp in the image frame, where the admissible region is a rectangle.
    let local = rotate_point(target.scaled(scale), Point::ORIGIN, -radians);
    let clamped = rotate_point(bounds.clamp(local), Point::ORIGIN, radians);

    let mut next = *state;
    next.image.center = clamped.scaled(1.0 / scale);
    next.is_dragging = true;
    next
}

/// Resize the window from one edge or corner, then zoom the selection back
/// up to fill the frame.
///
/// The window is first grown or shrunk on the dragged sides only, limited by
/// the frame edges and the minimum window size. The selected region is then
/// magnified by the largest uniform factor that fits it in the frame (capped
/// by the maximum zoom), and the window is letterboxed in the center of the
/// frame. All of this happens in screen axes, so quarter turns need no
/// special casing beyond using the swapped frame.
fn resize_window(
    limits: &CropperLimits,
    state: &CropperState,
    direction: ResizeDirection,
    delta: Size,
) -> CropperState {
    let frame = state.frame_size();
    let window = state.cropper;
    let scale = state.transform.scale;

    let grow_x = side_growth(
        direction.horizontal(),
        delta.width,
        window.x,
        window.width,
        frame.width,
        limits.min_window_size,
    );
    let grow_y = side_growth(
        direction.vertical(),
        delta.height,
        window.y,
        window.height,
        frame.height,
        limits.min_window_size,
    );

    let width = window.width + grow_x;
    let height = window.height + grow_y;

    // Movement of the window center in screen pixels.
    let shift = Point::new(
        direction.horizontal() * grow_x / 2.0,
        direction.vertical() * grow_y / 2.0,
    );

    let fit = (frame.width / width).min(frame.height / height);
    let window_scale = fit.min(limits.max_scale / scale);

    let mut next = *state;
    next.transform.scale = scale * window_scale;
    next.image.center = Point::new(
        state.image.center.x - shift.x / scale,
        state.image.center.y - shift.y / scale,
    );
    next.cropper.width = width * window_scale;
    next.cropper.height = height * window_scale;
    next.cropper.x = (frame.width - next.cropper.width) / 2.0;
    next.cropper.y = (frame.height - next.cropper.height) / 2.0;
    next.is_resizing = false;
    settle(limits, next)
}

/// Size change along one axis for the dragged side.
///
/// `side` is -1 for the leading edge (left/top), 1 for the trailing edge and
/// 0 when the axis is not being dragged. Growth stops at the frame edge on
/// the dragged side; shrinking stops at `min_size`.
fn side_growth(side: f64, requested: f64, offset: f64, length: f64, frame: f64, min_size: f64) -> f64 {
    if side == 0.0 {
        return 0.0;
    }
    let room = if side < 0.0 {
        offset
    } else {
        frame - offset - length
    };
    let shrink_limit = min_size.min(length) - length;
    requested.min(room.max(0.0)).max(shrink_limit)
}

/// Restore the no-gap and containment invariants after a geometry change.
///
/// Raises the zoom to the centered minimum for the current rotation and
/// window, then clamps the center into the admissible rectangle. A state
/// that already satisfies both is returned untouched.
fn settle(limits: &CropperLimits, mut state: CropperState) -> CropperState {
    let radians = state.effective_radians();
    let floor = state.min_centered_scale(radians).max(limits.min_scale);
    if state.transform.scale < floor {
        state.transform.scale = floor;
    }

    let scale = state.transform.scale;
    let bounds = state.translation_bounds();
    let local = rotate_point(state.image_position(), Point::ORIGIN, -radians);
    if !bounds.contains(local, 0.0) {
        let clamped = rotate_point(bounds.clamp(local), Point::ORIGIN, radians);
        state.image.center = clamped.scaled(1.0 / scale);
    }
    state
}


// ============================================================================
// Property-Based Tests
// ============================================================================
