// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// How the view scale `vw` is distributed across the two viewport axes.
///
/// The names follow CSS `background-size` semantics. See
/// [`crate::resolve_scale`] for the exact per-axis scales each mode yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sizing {
    /// Never show anything out of bounds of `vw` along the longer viewport side.
    ///
    /// The longer side spans exactly `vw` from the center; the shorter side
    /// spans less.
    #[default]
    Cover,
    /// Always show at least `vw` from the center along both axes.
    Contain,
    /// Bind `vw` to the X axis regardless of orientation.
    Horizontal,
    /// Bind `vw` to the Y axis regardless of orientation.
    Vertical,
    /// Use `vw` on both axes without aspect correction.
    Stretch,
}

impl Sizing {
    /// All sizing modes, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Cover,
        Self::Contain,
        Self::Horizontal,
        Self::Vertical,
        Self::Stretch,
    ];

    /// Returns the lowercase tag for this mode (`"cover"`, `"contain"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Stretch => "stretch",
        }
    }

    /// Returns `true` if this mode keeps world units square on screen.
    ///
    /// Every mode except [`Sizing::Stretch`] derives one axis from the other
    /// through the aspect ratio, so a world length covers the same number of
    /// pixels along X and Y.
    #[must_use]
    pub const fn preserves_aspect(self) -> bool {
        !matches!(self, Self::Stretch)
    }
}

impl fmt::Display for Sizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sizing {
    type Err = InvalidSizing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(InvalidSizing)
    }
}

impl TryFrom<&str> for Sizing {
    type Error = InvalidSizing;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when a sizing tag does not name one of the [`Sizing`] modes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSizing;

impl fmt::Debug for InvalidSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSizing")
    }
}

impl fmt::Display for InvalidSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "invalid sizing: expected one of `cover`, `contain`, `horizontal`, `vertical`, `stretch`",
        )
    }
}

impl core::error::Error for InvalidSizing {}

#[cfg(test)]
mod tests {
    use super::{InvalidSizing, Sizing};

    #[test]
    fn default_is_cover() {
        assert_eq!(Sizing::default(), Sizing::Cover);
    }

    #[test]
    fn tags_parse_back_to_their_mode() {
        for mode in Sizing::ALL {
            assert_eq!(mode.as_str().parse::<Sizing>(), Ok(mode));
        }
        assert_eq!(Sizing::try_from("stretch"), Ok(Sizing::Stretch));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!("diagonal".parse::<Sizing>(), Err(InvalidSizing));
        // Tags are case sensitive.
        assert_eq!("Cover".parse::<Sizing>(), Err(InvalidSizing));
        assert_eq!("".parse::<Sizing>(), Err(InvalidSizing));
    }

    #[test]
    fn only_stretch_breaks_aspect() {
        assert!(Sizing::Cover.preserves_aspect());
        assert!(Sizing::Contain.preserves_aspect());
        assert!(Sizing::Horizontal.preserves_aspect());
        assert!(Sizing::Vertical.preserves_aspect());
        assert!(!Sizing::Stretch.preserves_aspect());
    }
}
