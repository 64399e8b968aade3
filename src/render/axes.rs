use crate::foundation::core::{BezPath, Canvas, Limits, Point, Rect};
use crate::render::colormap::ColorScale;
use crate::render::marker::bar;
use crate::render::paint::{fill, fill_rect};
use crate::render::projection::Projector;
use crate::render::text::{Anchor, TextItem};
use crate::scene::opts::AnimateOpts;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const PANE: [u8; 4] = [240, 240, 240, 255];
const GRID: [u8; 4] = [210, 210, 210, 255];
const EDGE: [u8; 4] = [150, 150, 150, 255];
const INK: [u8; 4] = [40, 40, 40, 255];

const TICK_TARGET: usize = 5;
const LABEL_PX: f32 = 12.0;
const TICK_PX: f32 = 10.0;
const TITLE_PX: f32 = 16.0;

/// Placement of the plot box and colorbar on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Canvas the layout was computed for.
    pub canvas: Canvas,
    /// Viewport the projected data box is fitted into.
    pub plot: Rect,
    /// Colorbar gradient rectangle.
    pub colorbar: Rect,
}

impl PlotLayout {
    /// Layout proportional to the canvas size.
    pub fn for_canvas(canvas: Canvas) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Self {
            canvas,
            plot: Rect::new(0.10 * w, 0.16 * h, 0.74 * w, 0.88 * h),
            colorbar: Rect::new(0.83 * w, 0.22 * h, 0.86 * w, 0.82 * h),
        }
    }

    /// Anchor of the elapsed-time annotation (upper left of the plot).
    pub fn annotation_anchor(&self) -> Point {
        Point::new(
            self.plot.x0 + 0.02 * self.plot.width(),
            self.plot.y0 + 0.02 * self.plot.height(),
        )
    }
}

/// Evenly spaced "nice" tick values (steps of 1, 2, 2.5 or 5 times a power of ten) within `l`.
pub fn nice_ticks(l: Limits, target: usize) -> Vec<f64> {
    let step = nice_step(l.span(), target);
    if step <= 0.0 || !step.is_finite() {
        return vec![l.min];
    }
    let first = (l.min / step - 1e-9).ceil();
    let mut out = Vec::new();
    let mut k = first;
    while k * step <= l.max + step * 1e-9 {
        out.push(k * step);
        k += 1.0;
    }
    out
}

fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 {
        return 0.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick label with just enough decimals for `ticks`' spacing.
pub fn format_tick(v: f64, ticks: &[f64]) -> String {
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => v.abs(),
    };
    let decimals = if step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize + usize::from(is_quarter(step))
    } else {
        0
    };
    let s = format!("{v:.decimals$}");
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

fn is_quarter(step: f64) -> bool {
    let mag = 10f64.powf(step.log10().floor());
    ((step / mag) - 2.5).abs() < 1e-9
}

/// Planes drawn behind the data for the default view: `x = min`, `y = max`, `z = min`.
///
/// Each entry is `(fixed axis, fixed at max?)`.
pub const BACK_PLANES: [(usize, bool); 3] = [(0, false), (1, true), (2, false)];

fn plane_corners(p: &Projector, axis: usize, hi: bool) -> [Point; 4] {
    let (a, b) = other_axes(axis);
    let loop_ = [(false, false), (true, false), (true, true), (false, true)];
    loop_.map(|(ha, hb)| {
        let mut sel = [false; 3];
        sel[axis] = hi;
        sel[a] = ha;
        sel[b] = hb;
        p.project(p.corner(sel))
    })
}

fn other_axes(axis: usize) -> (usize, usize) {
    match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

fn quad(pts: [Point; 4]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(pts[0]);
    for p in &pts[1..] {
        path.line_to(*p);
    }
    path.close_path();
    path
}

fn with_axis(mut v: [f64; 3], axis: usize, value: f64) -> [f64; 3] {
    v[axis] = value;
    v
}

/// Draw background, back panes, grid lines and the colorbar gradient.
pub(crate) fn draw_static_geometry(
    ctx: &mut vello_cpu::RenderContext,
    p: &Projector,
    layout: &PlotLayout,
    scale: &ColorScale,
) {
    fill_rect(ctx, layout.canvas.rect(), BACKGROUND);

    let axes = p.axes();
    let ticks = axes.map(|l| nice_ticks(l, TICK_TARGET));
    for (axis, hi) in BACK_PLANES {
        let corners = plane_corners(p, axis, hi);
        fill(ctx, &quad(corners), PANE);

        let fixed = if hi { axes[axis].max } else { axes[axis].min };
        let (a, b) = other_axes(axis);
        for (along, across) in [(a, b), (b, a)] {
            for &t in &ticks[along] {
                let base = with_axis(with_axis([0.0; 3], axis, fixed), along, t);
                let from = p.project(with_axis(base, across, axes[across].min));
                let to = p.project(with_axis(base, across, axes[across].max));
                fill(ctx, &bar(from, to, 0.4), GRID);
            }
        }
        for i in 0..4 {
            fill(ctx, &bar(corners[i], corners[(i + 1) % 4], 0.5), EDGE);
        }
    }

    let bar_limits = scale.bar_limits();
    let r = layout.colorbar;
    let rows = r.height().round().max(1.0) as usize;
    for row in 0..rows {
        let y0 = r.y0 + row as f64;
        let frac = 1.0 - (row as f64 + 0.5) / rows as f64;
        let value = bar_limits.min + frac * bar_limits.span();
        fill_rect(ctx, Rect::new(r.x0, y0, r.x1, y0 + 1.0), scale.color(value));
    }
    for (from, to) in [
        (Point::new(r.x0, r.y0), Point::new(r.x1, r.y0)),
        (Point::new(r.x1, r.y0), Point::new(r.x1, r.y1)),
        (Point::new(r.x1, r.y1), Point::new(r.x0, r.y1)),
        (Point::new(r.x0, r.y1), Point::new(r.x0, r.y0)),
    ] {
        fill(ctx, &bar(from, to, 0.5), INK);
    }
    for t in nice_ticks(bar_limits, TICK_TARGET) {
        let y = colorbar_y(layout, bar_limits, t);
        fill(ctx, &bar(Point::new(r.x1, y), Point::new(r.x1 + 4.0, y), 0.5), INK);
    }
}

fn colorbar_y(layout: &PlotLayout, bar_limits: Limits, v: f64) -> f64 {
    let r = layout.colorbar;
    r.y1 - bar_limits.normalize(v) * r.height()
}

/// Edge carrying tick labels for each axis: `(axis, [fixed selections for the other two])`.
fn label_edge(axis: usize) -> [Option<bool>; 3] {
    match axis {
        // x ticks along y = min, z = min
        0 => [None, Some(false), Some(false)],
        // y ticks along x = max, z = min
        1 => [Some(true), None, Some(false)],
        // z ticks along x = min, y = min
        _ => [Some(false), Some(false), None],
    }
}

fn anchor_for(dx: f64) -> Anchor {
    if dx < -0.3 {
        Anchor::End
    } else if dx > 0.3 {
        Anchor::Start
    } else {
        Anchor::Middle
    }
}

/// Title, tick labels, axis labels and colorbar labels.
pub(crate) fn static_labels(
    p: &Projector,
    layout: &PlotLayout,
    opts: &AnimateOpts,
    scale: &ColorScale,
) -> Vec<TextItem> {
    let mut items = Vec::new();
    let axes = p.axes();
    let center = p.screen_center();
    let labels = [&opts.xlabel, &opts.ylabel, &opts.zlabel];

    for (axis, label) in labels.into_iter().enumerate() {
        let edge = label_edge(axis);
        let at = |v: f64| {
            p.project(std::array::from_fn(|a| match edge[a] {
                None => v,
                Some(true) => axes[a].max,
                Some(false) => axes[a].min,
            }))
        };
        let mid = at((axes[axis].min + axes[axis].max) / 2.0);
        let dir = (mid - center).normalize();
        let dir = if dir.is_finite() {
            dir
        } else {
            kurbo::Vec2::new(0.0, 1.0)
        };
        let anchor = anchor_for(dir.x);

        let ticks = nice_ticks(axes[axis], TICK_TARGET);
        for &t in &ticks {
            let pos = at(t) + dir * 12.0 + kurbo::Vec2::new(0.0, f64::from(TICK_PX) / 3.0);
            items.push(TextItem::new(format_tick(t, &ticks), pos, TICK_PX, anchor));
        }
        let pos = mid + dir * 36.0 + kurbo::Vec2::new(0.0, f64::from(LABEL_PX) / 3.0);
        items.push(TextItem::new(label.as_str(), pos, LABEL_PX, anchor));
    }

    let bar_limits = scale.bar_limits();
    let r = layout.colorbar;
    let bar_ticks = nice_ticks(bar_limits, TICK_TARGET);
    for &t in &bar_ticks {
        let y = colorbar_y(layout, bar_limits, t) + f64::from(TICK_PX) / 3.0;
        items.push(TextItem::new(
            format_tick(t, &bar_ticks),
            Point::new(r.x1 + 7.0, y),
            TICK_PX,
            Anchor::Start,
        ));
    }
    items.push(
        TextItem::new(
            opts.wlabel.as_str(),
            Point::new(r.x1 + 0.09 * f64::from(layout.canvas.width), r.center().y),
            LABEL_PX,
            Anchor::Middle,
        )
        .rotated(-90.0),
    );

    items.push(TextItem::new(
        opts.title.as_str(),
        Point::new(
            layout.plot.x0 + 0.3 * layout.plot.width(),
            0.08 * f64::from(layout.canvas.height),
        ),
        TITLE_PX,
        Anchor::Start,
    ));
    items
}

#[cfg(test)]
#[path = "../../tests/unit/render/axes.rs"]
mod tests;
