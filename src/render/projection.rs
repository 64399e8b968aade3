use crate::foundation::core::{Limits, Point, Rect};

/// Relative extents of the plot box along x, y and z.
pub const BOX_ASPECT: [f64; 3] = [1.0, 1.0, 0.75];

/// Camera orientation, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    /// Elevation above the xy plane.
    pub elev_deg: f64,
    /// Azimuth around the z axis.
    pub azim_deg: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            elev_deg: 30.0,
            azim_deg: -60.0,
        }
    }
}

/// Orthographic projection of the data box into a pixel viewport.
///
/// The box spanned by the three axis limits is scaled to [`BOX_ASPECT`], rotated by the view and
/// fitted into the viewport. Pixel y grows downwards.
#[derive(Clone, Debug)]
pub struct Projector {
    axes: [Limits; 3],
    sin_el: f64,
    cos_el: f64,
    sin_az: f64,
    cos_az: f64,
    scale: f64,
    origin: Point,
    box_center: (f64, f64),
    depth: Limits,
}

impl Projector {
    /// Fit the box spanned by `axes` into `viewport`.
    pub fn new(axes: [Limits; 3], view: View, viewport: Rect) -> Self {
        let (sin_el, cos_el) = view.elev_deg.to_radians().sin_cos();
        let (sin_az, cos_az) = view.azim_deg.to_radians().sin_cos();
        let mut p = Self {
            axes,
            sin_el,
            cos_el,
            sin_az,
            cos_az,
            scale: 1.0,
            origin: viewport.center(),
            box_center: (0.0, 0.0),
            depth: Limits { min: 0.0, max: 0.0 },
        };

        let rotated: Vec<(f64, f64, f64)> = p
            .corners()
            .iter()
            .map(|&c| p.rotate(p.to_box(c)))
            .collect();
        let fold = |f: fn(&(f64, f64, f64)) -> f64| {
            Limits::observed(rotated.iter().map(f)).unwrap_or(Limits { min: 0.0, max: 0.0 })
        };
        let sx = fold(|r| r.0);
        let sy = fold(|r| r.1);
        p.depth = fold(|r| r.2);
        p.box_center = ((sx.min + sx.max) / 2.0, (sy.min + sy.max) / 2.0);
        p.scale = (viewport.width() / sx.span().max(1e-9))
            .min(viewport.height() / sy.span().max(1e-9));
        p
    }

    /// Axis limits the projector was built for.
    pub fn axes(&self) -> [Limits; 3] {
        self.axes
    }

    /// The eight corners of the data box, indexed by bit `i` of the index selecting max on axis `i`.
    pub fn corners(&self) -> [[f64; 3]; 8] {
        std::array::from_fn(|i| self.corner([i & 1 != 0, i & 2 != 0, i & 4 != 0]))
    }

    /// Corner selecting `max` on each axis where `hi[axis]` is set.
    pub fn corner(&self, hi: [bool; 3]) -> [f64; 3] {
        std::array::from_fn(|a| {
            if hi[a] {
                self.axes[a].max
            } else {
                self.axes[a].min
            }
        })
    }

    /// Return `true` when `p` lies inside the data box (inclusive).
    pub fn in_bounds(&self, p: [f64; 3]) -> bool {
        (0..3).all(|a| self.axes[a].contains(p[a]))
    }

    fn to_box(&self, p: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|a| (self.axes[a].normalize(p[a]) - 0.5) * BOX_ASPECT[a])
    }

    fn rotate(&self, [u, v, w]: [f64; 3]) -> (f64, f64, f64) {
        let sx = -self.sin_az * u + self.cos_az * v;
        let sy = -self.sin_el * self.cos_az * u - self.sin_el * self.sin_az * v + self.cos_el * w;
        let toward_camera =
            self.cos_el * self.cos_az * u + self.cos_el * self.sin_az * v + self.sin_el * w;
        (sx, sy, toward_camera)
    }

    /// Pixel position of a data-space point.
    pub fn project(&self, p: [f64; 3]) -> Point {
        let (sx, sy, _) = self.rotate(self.to_box(p));
        Point::new(
            self.origin.x + self.scale * (sx - self.box_center.0),
            self.origin.y - self.scale * (sy - self.box_center.1),
        )
    }

    /// Normalized distance from the viewer: 0 at the nearest box corner, 1 at the farthest.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (_, _, toward) = self.rotate(self.to_box(p));
        1.0 - self.depth.normalize(toward)
    }

    /// Pixel position of the box center.
    pub fn screen_center(&self) -> Point {
        self.origin
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/projection.rs"]
mod tests;
