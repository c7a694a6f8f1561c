// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::sizing::Sizing;

/// Viewport shape and mapping options.
///
/// Built by the caller for each call and never retained by this crate.
/// `width` and `height` are in pixels and are expected to be strictly
/// positive; they are not validated (see the crate docs on degenerate input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportParams {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// How the view scale is distributed across the axes.
    pub sizing: Sizing,
    /// Selects the axis used by the length conversions.
    ///
    /// `false` measures along X, `true` along Y. Only [`Sizing::Stretch`]
    /// produces different results for the two axes.
    pub vert: bool,
}

impl ViewportParams {
    /// Creates parameters for a `width` x `height` viewport.
    ///
    /// Sizing defaults to [`Sizing::Cover`] and `vert` to `false`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            sizing: Sizing::default(),
            vert: false,
        }
    }

    /// Creates parameters from a viewport [`Size`].
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Returns these parameters with the given sizing mode.
    #[must_use]
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Returns these parameters with the given length axis.
    #[must_use]
    pub fn with_vert(mut self, vert: bool) -> Self {
        self.vert = vert;
        self
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the viewport rectangle, with its origin at the top-left corner.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.size().to_rect()
    }

    /// Returns the viewport center in pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns the aspect ratio, `width / height`.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Returns `true` if the viewport is strictly wider than it is tall.
    ///
    /// A square viewport is not landscape.
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl From<Size> for ViewportParams {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}
