// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view_map --heading-base-level=0

//! Understory View Map: world ↔ viewport coordinate mapping with sizing modes.
//!
//! This crate converts points and lengths between a world space, centered on
//! a camera point and scaled by a view scale `vw`, and a viewport's pixel
//! space (origin top‑left, Y pointing down). It focuses on:
//! - Choosing how `vw` is split across the two axes for a given viewport
//!   aspect ratio ([`Sizing`], [`resolve_scale`]).
//! - Mapping points and lengths in both directions ([`world_to_viewport`],
//!   [`viewport_to_world`], [`world_to_viewport_length`],
//!   [`viewport_to_world_length`]).
//! - A precomputed [`ViewMapping`] for mapping many values with the same
//!   camera, including rectangles and the visible world region.
//!
//! `vw` is the world half‑extent visible from the camera along the axis the
//! sizing mode binds it to. World Y points up, so world points above the
//! camera land in the top half of the viewport.
//!
//! It does **not** own a camera, a canvas, or any input handling. Everything
//! here is a pure function of its arguments; callers keep camera position and
//! zoom in their own state and pass plain numbers in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_view_map::{ViewportParams, resolve_scale, world_to_viewport};
//!
//! // 800x600 viewport, default `Cover` sizing, 10 world units across half the width.
//! let params = ViewportParams::new(800.0, 600.0);
//! let scale = resolve_scale(10.0, &params);
//! assert_eq!(scale.sx, 10.0);
//! assert!((scale.sy - 7.5).abs() < 1e-12);
//!
//! let camera = Point::ORIGIN;
//! assert_eq!(world_to_viewport(camera, camera, 10.0, &params), Point::new(400.0, 300.0));
//! assert_eq!(
//!     world_to_viewport(Point::new(10.0, 0.0), camera, 10.0, &params),
//!     Point::new(800.0, 300.0),
//! );
//! ```
//!
//! ## Sizing modes from text
//!
//! Sizing modes are a closed enum. When they come from configuration, parse
//! the tag; unknown tags are reported as [`InvalidSizing`].
//!
//! ```rust
//! use understory_view_map::{InvalidSizing, Sizing};
//!
//! assert_eq!("contain".parse::<Sizing>(), Ok(Sizing::Contain));
//! assert_eq!("diagonal".parse::<Sizing>(), Err(InvalidSizing));
//! ```
//!
//! ## Culling example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_view_map::{Sizing, ViewMapping, ViewportParams};
//!
//! let params = ViewportParams::new(1920.0, 1080.0).with_sizing(Sizing::Contain);
//! let mapping = ViewMapping::new(Point::new(50.0, 50.0), 20.0, params);
//!
//! let visible = mapping.visible_world_rect();
//! let items = [
//!     Rect::new(45.0, 45.0, 55.0, 55.0),
//!     Rect::new(500.0, 500.0, 510.0, 510.0),
//! ];
//! let on_screen = items
//!     .iter()
//!     .filter(|r| r.intersect(visible).area() > 0.0)
//!     .count();
//! assert_eq!(on_screen, 1);
//! ```
//!
//! ## Degenerate input
//!
//! Viewport sizes and `vw` are expected to be positive but are not checked.
//! Zero or negative values produce zero, infinite or NaN results rather than
//! errors or panics; validate at the call site if needed.
//!
//! This crate is `no_std`.

#![no_std]

mod mapper;
mod mapping;
mod params;
mod scale;
mod sizing;

pub use mapper::{
    viewport_to_world, viewport_to_world_length, world_to_viewport, world_to_viewport_length,
};
pub use mapping::{ViewMapping, ViewMappingDebugInfo};
pub use params::ViewportParams;
pub use scale::{ScalePair, resolve_scale, try_resolve_scale};
pub use sizing::{InvalidSizing, Sizing};
