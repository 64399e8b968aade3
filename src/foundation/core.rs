use crate::foundation::error::{AnimatorError, AnimatorResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Closed `[min, max]` interval along one data axis.
///
/// Serialized as a two-element array so option files can write `"xlim": [320, 340]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Limits {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Limits {
    /// Create validated limits with finite bounds and `min <= max`.
    pub fn new(min: f64, max: f64) -> AnimatorResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(AnimatorError::validation("limits must be finite"));
        }
        if min > max {
            return Err(AnimatorError::validation(format!(
                "limits min must be <= max (got [{min}, {max}])"
            )));
        }
        Ok(Self { min, max })
    }

    /// Observed min/max of `values`, or `None` when there are no finite values.
    pub fn observed(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut out: Option<Self> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            out = Some(match out {
                None => Self { min: v, max: v },
                Some(l) => Self {
                    min: l.min.min(v),
                    max: l.max.max(v),
                },
            });
        }
        out
    }

    /// Width of the interval.
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Zero-width intervals are widened by 0.5 on both sides; others are returned unchanged.
    pub fn widened(self) -> Self {
        if self.span() > 0.0 {
            return self;
        }
        Self {
            min: self.min - 0.5,
            max: self.max + 0.5,
        }
    }

    /// Map `v` to `[0, 1]` over the interval (unclamped). Zero-width intervals map to 0.5.
    pub fn normalize(self, v: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.5;
        }
        (v - self.min) / span
    }

    /// Return `true` when `min <= v <= max`.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

impl TryFrom<[f64; 2]> for Limits {
    type Error = AnimatorError;

    fn try_from(v: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(v[0], v[1])
    }
}

impl From<Limits> for [f64; 2] {
    fn from(l: Limits) -> Self {
        [l.min, l.max]
    }
}

/// 1-based sequential frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameNumber(pub u32);

impl FrameNumber {
    /// Minimum zero-padding width for frame file names.
    pub const MIN_PAD: usize = 3;

    /// Padding width that keeps lexical order equal to numeric order for `n_frames` frames.
    pub fn pad_width(n_frames: u32) -> usize {
        n_frames.to_string().len().max(Self::MIN_PAD)
    }

    /// Zero-padded file stem, e.g. `007`.
    pub fn stem(self, pad: usize) -> String {
        format!("{:0pad$}", self.0)
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl Canvas {
    /// Reject empty canvases and sizes the CPU rasterizer cannot address.
    pub fn validate(self) -> AnimatorResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AnimatorError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(AnimatorError::validation(format!(
                "canvas {}x{} exceeds the {}px raster limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Full-canvas rectangle in pixel space.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
