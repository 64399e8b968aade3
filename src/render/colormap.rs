use crate::foundation::core::Limits;
use crate::foundation::error::AnimatorError;
use crate::foundation::math::unit_to_u8;
use std::f64::consts::PI;

/// Fraction of the color span reserved above the top value on the colorbar.
pub const COLORBAR_HEADROOM: f64 = 0.02;

/// Continuous colormaps available for the weight channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Violet through red, built from the gnuplot `33,13,10` formulae.
    #[default]
    Rainbow,
    /// Plain black-to-white ramp.
    Gray,
}

impl Colormap {
    /// Straight-alpha opaque RGBA for `x` in `[0, 1]` (clamped).
    pub fn sample(self, x: f64) -> [u8; 4] {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        let (r, g, b) = match self {
            Self::Rainbow => (
                (2.0 * x - 0.5).abs(),
                (PI * x).sin(),
                (PI * x / 2.0).cos(),
            ),
            Self::Gray => (x, x, x),
        };
        [unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), 255]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Gray => "gray",
        }
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Colormap {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rainbow" => Ok(Self::Rainbow),
            "gray" | "grey" => Ok(Self::Gray),
            other => Err(AnimatorError::validation(format!(
                "unknown colormap '{other}' (expected rainbow or gray)"
            ))),
        }
    }
}

/// Fixed mapping from weight to color, shared by every frame of a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    limits: Limits,
    cmap: Colormap,
}

impl ColorScale {
    /// Map `limits.min..=limits.max` across `cmap`.
    pub fn new(limits: Limits, cmap: Colormap) -> Self {
        Self { limits, cmap }
    }

    /// Weight range mapped onto the colormap.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Color for weight `w`. Values outside the limits clamp to the end colors.
    pub fn color(&self, w: f64) -> [u8; 4] {
        self.cmap.sample(self.limits.normalize(w))
    }

    /// Range shown on the colorbar: the color limits plus a small headroom above the top value.
    pub fn bar_limits(&self) -> Limits {
        let span = self.limits.span();
        Limits {
            min: self.limits.min,
            max: self.limits.max + span * COLORBAR_HEADROOM,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/colormap.rs"]
mod tests;
