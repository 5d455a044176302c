//! Containment math between the crop window and the rotated image.
//!
//! Both calculators work in the image's own (unrotated) frame: the window's
//! corners are rotated by the inverse of the image rotation, after which the
//! image is an axis-aligned box centered on its position and the test
//! reduces to per-axis interval checks.
//!
//! For a `w x h` window rotated by θ the corners project onto the image axes
//! with half-extents:
//! ```text
//! ext_x = (w * |cos θ| + h * |sin θ|) / 2
//! ext_y = (w * |sin θ| + h * |cos θ|) / 2
//! ```

use std::cell::Cell;

use super::{rotate_point, sin_cos, Bounds, Point, Size};

type FurthestKey = [u64; 7];

thread_local! {
    // Callers ask for the same vector several times per frame.
    static LAST_FURTHEST: Cell<Option<(FurthestKey, Point)>> = const { Cell::new(None) };
}

/// Half-extents of a `width x height` window once projected onto the axes
/// of a frame rotated by `radians`.
pub fn rotated_half_extents(width: f64, height: f64, radians: f64) -> Size {
    let (sin, cos) = sin_cos(radians);
    let (sin, cos) = (sin.abs(), cos.abs());
    Size {
        width: (width * cos + height * sin) / 2.0,
        height: (width * sin + height * cos) / 2.0,
    }
}

/// Signed amount by which the crop window pokes out of the image.
///
/// The window is centered on the screen origin; the image is `image_size`
/// (already scaled) centered at `image_position` and rotated by `radians`.
/// Each window corner is rotated into the image frame and compared against
/// the image's half-size. The result holds, per image axis, the largest
/// excess found, signed by the side it occurs on. `{0, 0}` means the window
/// is fully covered.
///
/// The most recent call is memoized per thread.
pub fn furthest_vector(
    window_width: f64,
    window_height: f64,
    radians: f64,
    image_size: Size,
    image_position: Point,
) -> Point {
    let key = [
        window_width.to_bits(),
        window_height.to_bits(),
        radians.to_bits(),
        image_size.width.to_bits(),
        image_size.height.to_bits(),
        image_position.x.to_bits(),
        image_position.y.to_bits(),
    ];

    if let Some((last_key, last)) = LAST_FURTHEST.with(Cell::get) {
        if last_key == key {
            return last;
        }
    }

    let vector = compute_furthest_vector(
        window_width,
        window_height,
        radians,
        image_size,
        image_position,
    );
    LAST_FURTHEST.with(|cell| cell.set(Some((key, vector))));
    vector
}

fn compute_furthest_vector(
    window_width: f64,
    window_height: f64,
    radians: f64,
    image_size: Size,
    image_position: Point,
) -> Point {
    let half_w = window_width / 2.0;
    let half_h = window_height / 2.0;
    let half_image_w = image_size.width / 2.0;
    let half_image_h = image_size.height / 2.0;

    let corners = [
        Point::new(-half_w, -half_h),
        Point::new(half_w, -half_h),
        Point::new(half_w, half_h),
        Point::new(-half_w, half_h),
    ];

    let mut furthest = Point::ORIGIN;
    for corner in corners {
        let rotated = rotate_point(corner, image_position, -radians);
        let local_x = rotated.x - image_position.x;
        let local_y = rotated.y - image_position.y;

        let excess_x = local_x.abs() - half_image_w;
        if excess_x > furthest.x.abs() {
            furthest.x = excess_x.copysign(local_x);
        }
        let excess_y = local_y.abs() - half_image_h;
        if excess_y > furthest.y.abs() {
            furthest.y = excess_y.copysign(local_y);
        }
    }
    furthest
}

/// Admissible positions of the image center, expressed in the image frame.
///
/// Callers rotate a candidate screen-space position by `-radians`, clamp it
/// into the returned rectangle and rotate it back. When the window is larger
/// than the scaled image on an axis the range collapses to zero on that axis.
pub fn rotated_bounds(
    radians: f64,
    scaled_image_width: f64,
    scaled_image_height: f64,
    window_width: f64,
    window_height: f64,
) -> Bounds {
    let extents = rotated_half_extents(window_width, window_height, radians);
    let range_x = (scaled_image_width / 2.0 - extents.width).max(0.0);
    let range_y = (scaled_image_height / 2.0 - extents.height).max(0.0);
    Bounds {
        min_x: -range_x,
        max_x: range_x,
        min_y: -range_y,
        max_y: range_y,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: an image centered anywhere inside the rotated bounds
        /// covers every window corner.
        #[test]
        fn prop_bounds_imply_coverage(
            (window_w, window_h) in (1.0f64..500.0, 1.0f64..500.0),
            radians in -1.6f64..1.6,
            scale in 1.0f64..4.0,
            (fx, fy) in (-1.0f64..=1.0, -1.0f64..=1.0),
        ) {
            let side = window_w.max(window_h) * 3.0 * scale;
            let image = Size::new(side, side);
            let bounds = rotated_bounds(radians, image.width, image.height, window_w, window_h);
            let local = Point::new(bounds.max_x * fx, bounds.max_y * fy);
            let position = rotate_point(local, Point::ORIGIN, radians);

            let v = furthest_vector(window_w, window_h, radians, image, position);
            prop_assert!(v.is_zero(1e-6), "uncovered corner {:?}", v);
        }

        /// Property: positions outside the bounds leave a corner uncovered.
        #[test]
        fn prop_outside_bounds_reveals_gap(
            (window_w, window_h) in (1.0f64..500.0, 1.0f64..500.0),
            radians in -0.8f64..0.8,
            overshoot in 1.0f64..100.0,
        ) {
            let side = window_w.max(window_h) * 3.0;
            let image = Size::new(side, side);
            let bounds = rotated_bounds(radians, image.width, image.height, window_w, window_h);
            let local = Point::new(bounds.max_x + overshoot, 0.0);
            let position = rotate_point(local, Point::ORIGIN, radians);

            let v = furthest_vector(window_w, window_h, radians, image, position);
            prop_assert!((v.x.abs() - overshoot).abs() < 1e-6);
        }
    }
}
