use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::AnimatorError;
use kurbo::Shape;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};
use std::str::FromStr;

/// Pixels per typographic point at the fixed 100 dpi raster resolution.
pub const PX_PER_PT: f64 = 100.0 / 72.0;

/// Marker glyphs, named by their single-character plot codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `,` one pixel, ignores size.
    #[default]
    Pixel,
    /// `.` small dot.
    Point,
    /// `o`
    Circle,
    /// `s`
    Square,
    /// `^`
    TriangleUp,
    /// `v`
    TriangleDown,
    /// `D`
    Diamond,
    /// `+`
    Plus,
    /// `x`
    Cross,
    /// `*`
    Star,
}

impl Marker {
    /// Plot code for this marker.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pixel => ",",
            Self::Point => ".",
            Self::Circle => "o",
            Self::Square => "s",
            Self::TriangleUp => "^",
            Self::TriangleDown => "v",
            Self::Diamond => "D",
            Self::Plus => "+",
            Self::Cross => "x",
            Self::Star => "*",
        }
    }

    /// Radius in pixels for a marker of `size` (area in pt^2).
    pub fn radius_px(self, size: f64) -> f64 {
        let r = size.max(0.0).sqrt() / 2.0 * PX_PER_PT;
        match self {
            Self::Pixel => 0.5,
            Self::Point => (r * 0.5).max(0.5),
            _ => r,
        }
    }

    /// Fillable outline of the marker centred on `c` with radius `r` pixels.
    pub fn path(self, c: Point, r: f64) -> BezPath {
        match self {
            Self::Pixel => {
                let x = c.x.floor();
                let y = c.y.floor();
                Rect::new(x, y, x + 1.0, y + 1.0).to_path(0.1)
            }
            Self::Point | Self::Circle => kurbo::Circle::new(c, r).to_path(0.1),
            Self::Square => {
                let h = r * 0.886;
                Rect::new(c.x - h, c.y - h, c.x + h, c.y + h).to_path(0.1)
            }
            Self::TriangleUp => {
                polygon(&[(0.0, -r), (r * 0.866, r * 0.5), (-r * 0.866, r * 0.5)], c)
            }
            Self::TriangleDown => {
                polygon(&[(0.0, r), (-r * 0.866, -r * 0.5), (r * 0.866, -r * 0.5)], c)
            }
            Self::Diamond => polygon(&[(0.0, -r), (r * 0.7, 0.0), (0.0, r), (-r * 0.7, 0.0)], c),
            Self::Plus => {
                let t = (r * 0.2).max(0.5);
                let mut p = Rect::new(c.x - r, c.y - t, c.x + r, c.y + t).to_path(0.1);
                p.extend(Rect::new(c.x - t, c.y - r, c.x + t, c.y + r).path_elements(0.1));
                p
            }
            Self::Cross => {
                let t = (r * 0.2).max(0.5);
                let d = r * FRAC_1_SQRT_2;
                let mut p = bar(Point::new(c.x - d, c.y - d), Point::new(c.x + d, c.y + d), t);
                let back = bar(Point::new(c.x - d, c.y + d), Point::new(c.x + d, c.y - d), t);
                p.extend(back.elements().iter().copied());
                p
            }
            Self::Star => {
                let inner = r * 0.4;
                let pts: Vec<(f64, f64)> = (0..10)
                    .map(|i| {
                        let a = -FRAC_PI_2 + f64::from(i) * PI / 5.0;
                        let rr = if i % 2 == 0 { r } else { inner };
                        (rr * a.cos(), rr * a.sin())
                    })
                    .collect();
                polygon(&pts, c)
            }
        }
    }
}

impl FromStr for Marker {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "," => Self::Pixel,
            "." => Self::Point,
            "o" => Self::Circle,
            "s" => Self::Square,
            "^" => Self::TriangleUp,
            "v" => Self::TriangleDown,
            "D" => Self::Diamond,
            "+" => Self::Plus,
            "x" => Self::Cross,
            "*" => Self::Star,
            other => {
                return Err(AnimatorError::validation(format!(
                    "unknown marker '{other}' (expected one of , . o s ^ v D + x *)"
                )));
            }
        })
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl serde::Serialize for Marker {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Marker {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Marker area for a point of weight `w`.
///
/// With `scalesize` the area is `msize * w / maxw`; otherwise every point uses `msize`.
pub fn marker_size(w: f64, maxw: f64, msize: f64, scalesize: bool) -> f64 {
    if scalesize {
        msize * (w / maxw)
    } else {
        msize
    }
}

fn polygon(offsets: &[(f64, f64)], c: Point) -> BezPath {
    let mut p = BezPath::new();
    for (i, &(dx, dy)) in offsets.iter().enumerate() {
        let pt = Point::new(c.x + dx, c.y + dy);
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

/// Filled quad of half-thickness `t` around the segment `a..b`.
pub(crate) fn bar(a: Point, b: Point, t: f64) -> BezPath {
    let d = b - a;
    let len = d.hypot();
    if len <= f64::EPSILON {
        return Rect::new(a.x - t, a.y - t, a.x + t, a.y + t).to_path(0.1);
    }
    let n = kurbo::Vec2::new(-d.y / len * t, d.x / len * t);
    let mut p = BezPath::new();
    p.move_to(a + n);
    p.line_to(b + n);
    p.line_to(b - n);
    p.line_to(a - n);
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/marker.rs"]
mod tests;
