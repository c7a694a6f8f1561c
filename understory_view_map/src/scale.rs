// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale resolution: how `vw` is split between the two axes.

use kurbo::Vec2;

use crate::params::ViewportParams;
use crate::sizing::{InvalidSizing, Sizing};

/// Per-axis world half-extents visible from the viewport center.
///
/// `sx` is the world distance from the center to the left/right edges and
/// `sy` the distance to the top/bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScalePair {
    /// Half-extent along X, in world units.
    pub sx: f64,
    /// Half-extent along Y, in world units.
    pub sy: f64,
}

impl ScalePair {
    /// Creates a scale pair.
    #[must_use]
    pub const fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    /// Creates a scale pair with the same half-extent on both axes.
    #[must_use]
    pub const fn uniform(s: f64) -> Self {
        Self { sx: s, sy: s }
    }

    /// Returns the pair with its axes exchanged.
    #[must_use]
    pub const fn swap(self) -> Self {
        Self {
            sx: self.sy,
            sy: self.sx,
        }
    }

    /// Returns the pair as a vector `(sx, sy)`.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.sx, self.sy)
    }
}

impl From<ScalePair> for Vec2 {
    fn from(scale: ScalePair) -> Self {
        scale.to_vec2()
    }
}

impl From<(f64, f64)> for ScalePair {
    fn from((sx, sy): (f64, f64)) -> Self {
        Self::new(sx, sy)
    }
}

/// Resolves the per-axis scale for view scale `vw` and the given viewport.
///
/// | sizing       | landscape (`w > h`)  | portrait or square   |
/// |--------------|----------------------|----------------------|
/// | `Cover`      | `(vw, vw / aspect)`  | `(vw * aspect, vw)`  |
/// | `Contain`    | `(vw * aspect, vw)`  | `(vw, vw / aspect)`  |
/// | `Horizontal` | `(vw, vw / aspect)`  | `(vw, vw / aspect)`  |
/// | `Vertical`   | `(vw * aspect, vw)`  | `(vw * aspect, vw)`  |
/// | `Stretch`    | `(vw, vw)`           | `(vw, vw)`           |
///
/// where `aspect = width / height`. Non-positive sizes or `vw` are not
/// rejected and produce degenerate (zero, infinite or NaN) scales.
#[must_use]
pub fn resolve_scale(vw: f64, params: &ViewportParams) -> ScalePair {
    let aspect = params.aspect();
    let x_bound = ScalePair::new(vw, vw / aspect);
    let y_bound = ScalePair::new(vw * aspect, vw);
    match params.sizing {
        Sizing::Cover => {
            if params.is_landscape() {
                x_bound
            } else {
                y_bound
            }
        }
        Sizing::Contain => {
            if params.is_landscape() {
                y_bound
            } else {
                x_bound
            }
        }
        Sizing::Horizontal => x_bound,
        Sizing::Vertical => y_bound,
        Sizing::Stretch => ScalePair::uniform(vw),
    }
}

/// Resolves the scale for a sizing mode given as a tag such as `"cover"`.
///
/// This is the entry point for sizing modes that arrive as text (for example
/// from a settings file). Returns [`InvalidSizing`] if `sizing` is not one of
/// `cover`, `contain`, `horizontal`, `vertical` or `stretch`.
pub fn try_resolve_scale(
    vw: f64,
    width: f64,
    height: f64,
    sizing: &str,
) -> Result<ScalePair, InvalidSizing> {
    let params = ViewportParams::new(width, height).with_sizing(sizing.parse()?);
    Ok(resolve_scale(vw, &params))
}

#[cfg(test)]
mod tests {
    use super::{ScalePair, resolve_scale, try_resolve_scale};
    use crate::{InvalidSizing, Sizing, ViewportParams};

    fn assert_scale_eq(actual: ScalePair, expected: ScalePair) {
        assert!(
            (actual.sx - expected.sx).abs() < 1e-9 && (actual.sy - expected.sy).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn cover_landscape_800x600() {
        let params = ViewportParams::new(800.0, 600.0);
        assert_scale_eq(resolve_scale(10.0, &params), ScalePair::new(10.0, 7.5));
    }

    #[test]
    fn cover_and_contain_on_full_hd() {
        let vw = 3.0;
        let aspect = 1920.0 / 1080.0;
        let params = ViewportParams::new(1920.0, 1080.0);

        let cover = resolve_scale(vw, &params.with_sizing(Sizing::Cover));
        assert_scale_eq(cover, ScalePair::new(vw, vw / aspect));

        let contain = resolve_scale(vw, &params.with_sizing(Sizing::Contain));
        assert_scale_eq(contain, ScalePair::new(vw * aspect, vw));
    }

    #[test]
    fn cover_and_contain_swap_roles_when_orientation_flips() {
        let vw = 4.0;
        let landscape = ViewportParams::new(1920.0, 1080.0);
        let portrait = ViewportParams::new(1080.0, 1920.0);

        for sizing in [Sizing::Cover, Sizing::Contain] {
            let l = resolve_scale(vw, &landscape.with_sizing(sizing));
            let p = resolve_scale(vw, &portrait.with_sizing(sizing));
            assert_scale_eq(p, l.swap());
        }
    }

    #[test]
    fn square_viewport_takes_portrait_branch() {
        let params = ViewportParams::new(500.0, 500.0);
        // With aspect 1 both branches agree numerically, so check a
        // near-square portrait for the branch and the exact square for values.
        assert_scale_eq(
            resolve_scale(2.0, &params.with_sizing(Sizing::Cover)),
            ScalePair::uniform(2.0),
        );
        let tall = ViewportParams::new(499.0, 500.0);
        let cover = resolve_scale(2.0, &tall.with_sizing(Sizing::Cover));
        assert_eq!(cover.sy, 2.0);
        let contain = resolve_scale(2.0, &tall.with_sizing(Sizing::Contain));
        assert_eq!(contain.sx, 2.0);
    }

    #[test]
    fn horizontal_and_vertical_ignore_orientation() {
        for (w, h) in [(800.0, 600.0), (600.0, 800.0), (700.0, 700.0)] {
            let params = ViewportParams::new(w, h);
            let aspect = w / h;
            assert_scale_eq(
                resolve_scale(5.0, &params.with_sizing(Sizing::Horizontal)),
                ScalePair::new(5.0, 5.0 / aspect),
            );
            assert_scale_eq(
                resolve_scale(5.0, &params.with_sizing(Sizing::Vertical)),
                ScalePair::new(5.0 * aspect, 5.0),
            );
        }
    }

    #[test]
    fn stretch_is_uniform_for_any_shape() {
        for (w, h) in [(1920.0, 1080.0), (1.0, 1000.0), (64.0, 64.0)] {
            let params = ViewportParams::new(w, h).with_sizing(Sizing::Stretch);
            assert_eq!(resolve_scale(7.0, &params), ScalePair::uniform(7.0));
        }
    }

    #[test]
    fn tagged_sizing_resolves_or_fails() {
        assert_scale_eq(
            try_resolve_scale(10.0, 800.0, 600.0, "cover").unwrap(),
            ScalePair::new(10.0, 7.5),
        );
        assert_eq!(
            try_resolve_scale(5.0, 100.0, 100.0, "diagonal"),
            Err(InvalidSizing)
        );
    }

    #[test]
    fn degenerate_viewport_does_not_panic() {
        let params = ViewportParams::new(800.0, 0.0);
        let scale = resolve_scale(10.0, &params);
        assert!(!scale.sx.is_finite() || !scale.sy.is_finite() || scale.sy == 0.0);
    }
}
