use core::fmt;
use core::str::FromStr;

use crate::UnknownEasing;

/// A named easing curve mapping normalized time `t ∈ [0, 1]` to normalized progress.
///
/// The set is closed: callers select a curve by variant, or by its registry key through
/// [`Easing::from_name`] at the boundary where names arrive as strings (props, config files).
///
/// With `feature = "serde"`, variants (de)serialize as their registry key (`"easeInOutQuad"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    #[default]
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl Easing {
    /// Every registered curve, in registry order.
    pub const ALL: [Easing; 13] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
    ];

    /// Evaluates the curve. `t` is clamped to `[0, 1]` first; NaN is treated as `0`.
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    (t - 1.0) * u * u + 1.0
                }
            }
            Self::EaseInQuart => t * t * t * t,
            Self::EaseOutQuart => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 - 8.0 * u * u * u * u
                }
            }
            Self::EaseInQuint => t * t * t * t * t,
            Self::EaseOutQuint => {
                let u = t - 1.0;
                1.0 + u * u * u * u * u
            }
            Self::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 + 16.0 * u * u * u * u * u
                }
            }
        }
    }

    /// The registry key for this curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
        }
    }

    /// Looks up a curve by registry key (exact, case-sensitive match).
    pub fn from_name(name: &str) -> Result<Self, UnknownEasing> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| UnknownEasing::new(name))
    }

    /// Looks up a curve by registry key, falling back to [`Easing::default`].
    ///
    /// An unknown key is a caller bug. Debug builds panic; release builds log a warning and
    /// return the default curve.
    pub fn from_name_or_default(name: &str) -> Self {
        match Self::from_name(name) {
            Ok(easing) => easing,
            Err(_err) => {
                swarn!(easing = name, "unknown easing, falling back to easeInOutQuad");
                debug_assert!(false, "{_err}");
                Self::default()
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
