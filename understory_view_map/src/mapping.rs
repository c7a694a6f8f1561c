// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::params::ViewportParams;
use crate::scale::{ScalePair, resolve_scale};

/// A resolved world ↔ viewport mapping for one camera and viewport.
///
/// `ViewMapping` resolves the per-axis scale once and caches the affine
/// transforms in both directions. It produces the same results as the free
/// functions in this crate (up to floating-point rounding) and adds:
/// - Rectangle conversion in both directions.
/// - The visible world rectangle, for culling.
/// - Per-axis world-units-per-pixel ratios.
///
/// The mapping is a plain value; build a new one when the camera, view scale
/// or viewport changes.
#[derive(Clone, Copy, Debug)]
pub struct ViewMapping {
    camera: Point,
    vw: f64,
    params: ViewportParams,
    scale: ScalePair,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl ViewMapping {
    /// Resolves the mapping for `camera` (shown at the viewport center), view
    /// scale `vw` and the given viewport.
    #[must_use]
    pub fn new(camera: Point, vw: f64, params: ViewportParams) -> Self {
        let scale = resolve_scale(vw, &params);
        // Pixels per world unit along each axis.
        let kx = params.width / (2.0 * scale.sx);
        let ky = params.height / (2.0 * scale.sy);
        let center = params.center();
        // World → view: scale about the camera, flip Y, then move the camera
        // to the viewport center.
        let world_to_view = Affine::new([
            kx,
            0.0,
            0.0,
            -ky,
            center.x - kx * camera.x,
            center.y + ky * camera.y,
        ]);
        Self {
            camera,
            vw,
            params,
            scale,
            world_to_view,
            view_to_world: world_to_view.inverse(),
        }
    }

    /// Returns the world-space point shown at the viewport center.
    #[must_use]
    pub fn camera(&self) -> Point {
        self.camera
    }

    /// Returns the view scale this mapping was built with.
    #[must_use]
    pub fn view_scale(&self) -> f64 {
        self.vw
    }

    /// Returns the viewport parameters this mapping was built with.
    #[must_use]
    pub fn params(&self) -> &ViewportParams {
        &self.params
    }

    /// Returns the resolved per-axis scale.
    #[must_use]
    pub fn scale(&self) -> ScalePair {
        self.scale
    }

    /// Returns the world → viewport transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Returns the viewport → world transform.
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.view_to_world
    }

    /// Converts a world-space point into viewport pixel coordinates.
    #[must_use]
    pub fn world_to_viewport_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a viewport pixel position into world coordinates.
    #[must_use]
    pub fn viewport_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world-space rectangle into viewport coordinates.
    ///
    /// The Y flip swaps the top and bottom edges; the result is the
    /// normalized bounding box of the transformed corners.
    #[must_use]
    pub fn world_to_viewport_rect(&self, rect: Rect) -> Rect {
        self.world_to_view.transform_rect_bbox(rect)
    }

    /// Converts a viewport rectangle into world coordinates.
    #[must_use]
    pub fn viewport_to_world_rect(&self, rect: Rect) -> Rect {
        self.view_to_world.transform_rect_bbox(rect)
    }

    /// Converts a world-space length into pixels along the axis selected by
    /// [`ViewportParams::vert`].
    #[must_use]
    pub fn world_to_viewport_length(&self, length: f64) -> f64 {
        if self.params.vert {
            length / self.world_units_per_pixel_y()
        } else {
            length / self.world_units_per_pixel_x()
        }
    }

    /// Converts a pixel length into world units along the axis selected by
    /// [`ViewportParams::vert`].
    #[must_use]
    pub fn viewport_to_world_length(&self, length: f64) -> f64 {
        if self.params.vert {
            length * self.world_units_per_pixel_y()
        } else {
            length * self.world_units_per_pixel_x()
        }
    }

    /// Returns the world-space rectangle visible through the viewport.
    ///
    /// This spans `camera ± (sx, sy)`.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.viewport_to_world_rect(self.params.rect())
    }

    /// Returns how many world units one pixel covers along X.
    #[must_use]
    pub fn world_units_per_pixel_x(&self) -> f64 {
        2.0 * self.scale.sx / self.params.width
    }

    /// Returns how many world units one pixel covers along Y.
    ///
    /// Equal to [`ViewMapping::world_units_per_pixel_x`] unless the sizing
    /// mode is [`crate::Sizing::Stretch`].
    #[must_use]
    pub fn world_units_per_pixel_y(&self) -> f64 {
        2.0 * self.scale.sy / self.params.height
    }

    /// Snapshot of the mapping for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewMappingDebugInfo {
        ViewMappingDebugInfo {
            camera: self.camera,
            vw: self.vw,
            params: self.params,
            scale: self.scale,
            visible_world_rect: self.visible_world_rect(),
            world_units_per_pixel_x: self.world_units_per_pixel_x(),
            world_units_per_pixel_y: self.world_units_per_pixel_y(),
        }
    }
}

/// Debug snapshot of a [`ViewMapping`].
#[derive(Clone, Copy, Debug)]
pub struct ViewMappingDebugInfo {
    /// World-space point at the viewport center.
    pub camera: Point,
    /// View scale.
    pub vw: f64,
    /// Viewport parameters.
    pub params: ViewportParams,
    /// Resolved per-axis scale.
    pub scale: ScalePair,
    /// World-space rectangle currently visible through the viewport.
    pub visible_world_rect: Rect,
    /// World units per pixel along X.
    pub world_units_per_pixel_x: f64,
    /// World units per pixel along Y.
    pub world_units_per_pixel_y: f64,
}
