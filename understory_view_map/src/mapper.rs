// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free functions mapping points and lengths between world and viewport space.
//!
//! Each call resolves the scale from scratch. When mapping many values with
//! the same camera, build a [`crate::ViewMapping`] once instead.

use kurbo::Point;

use crate::params::ViewportParams;
use crate::scale::resolve_scale;

/// Converts a world-space point into viewport pixel coordinates.
///
/// `camera` is the world-space point shown at the viewport center and `vw`
/// the view scale. World Y points up while viewport Y points down, so the Y
/// result is flipped.
#[must_use]
pub fn world_to_viewport(world: Point, camera: Point, vw: f64, params: &ViewportParams) -> Point {
    let scale = resolve_scale(vw, params);
    // Camera-relative, then [-s .. +s] -> [-1 .. +1] -> [0 .. 1] -> [0 .. size].
    let x = ((world.x - camera.x) / scale.sx + 1.0) / 2.0 * params.width;
    let y = ((world.y - camera.y) / scale.sy + 1.0) / 2.0 * params.height;
    Point::new(x, params.height - y)
}

/// Converts a viewport pixel position into world-space coordinates.
///
/// This is the inverse of [`world_to_viewport`] for the same camera, view
/// scale and parameters.
#[must_use]
pub fn viewport_to_world(view: Point, camera: Point, vw: f64, params: &ViewportParams) -> Point {
    let scale = resolve_scale(vw, params);
    let y = params.height - view.y;
    // [0 .. size] -> [0 .. 1] -> [-1 .. +1] -> [-s .. +s], then camera offset.
    let x = (view.x / params.width * 2.0 - 1.0) * scale.sx + camera.x;
    let y = (y / params.height * 2.0 - 1.0) * scale.sy + camera.y;
    Point::new(x, y)
}

/// Converts a world-space length into a length in pixels.
///
/// The axis is chosen by [`ViewportParams::vert`]. Lengths carry no offset
/// or flip.
#[must_use]
pub fn world_to_viewport_length(length: f64, vw: f64, params: &ViewportParams) -> f64 {
    let scale = resolve_scale(vw, params);
    let pixels_per_half_extent = if params.vert {
        params.height / scale.sy
    } else {
        params.width / scale.sx
    };
    length / 2.0 * pixels_per_half_extent
}

/// Converts a length in pixels into a world-space length.
///
/// This is the inverse of [`world_to_viewport_length`].
#[must_use]
pub fn viewport_to_world_length(length: f64, vw: f64, params: &ViewportParams) -> f64 {
    let scale = resolve_scale(vw, params);
    let half_extent_per_pixel = if params.vert {
        scale.sy / params.height
    } else {
        scale.sx / params.width
    };
    length * 2.0 * half_extent_per_pixel
}
