use crate::data::dataset::{Dataset, PointRecord};
use crate::foundation::core::Limits;
use crate::foundation::error::{AnimatorError, AnimatorResult};
use crate::render::colormap::ColorScale;
use crate::render::marker::marker_size;
use crate::scene::opts::AnimateOpts;
use crate::timeline::window::Timeline;

/// Number of frames targeted when no explicit time step is given.
pub const DEFAULT_FRAME_TARGET: f64 = 50.0;

/// Observed extents of the resolved dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    /// Observed x range.
    pub x: Limits,
    /// Observed y range.
    pub y: Limits,
    /// Observed z range.
    pub z: Limits,
    /// Observed time range.
    pub t: Limits,
    /// Observed weight range.
    pub w: Limits,
}

/// Everything derived once from the dataset and options before the frame loop starts.
///
/// Nothing here changes while frames are rendered.
#[derive(Clone, Debug)]
pub struct SceneSetup {
    /// Points sorted by time, ascending.
    pub points: Vec<PointRecord>,
    /// Observed extents.
    pub bounds: DataBounds,
    /// Maximum weight; divisor for marker size normalization.
    pub maxw: f64,
    /// Resolved x, y, z axis limits.
    pub axes: [Limits; 3],
    /// Resolved time interval.
    pub tlim: Limits,
    /// Resolved time step.
    pub tstep: f64,
    /// Global weight to color mapping.
    pub color_scale: ColorScale,
    /// Windows the interval is split into.
    pub timeline: Timeline,
}

impl SceneSetup {
    /// Resolve fields, sort by time and derive limits, step and color scale.
    #[tracing::instrument(skip_all, fields(rows = dataset.len()))]
    pub fn resolve(dataset: &Dataset, opts: &AnimateOpts) -> AnimatorResult<Self> {
        opts.validate()?;
        let mut points = dataset.resolve(&opts.field_map())?;
        if points.is_empty() {
            return Err(AnimatorError::degenerate("dataset is empty"));
        }
        if points.iter().any(|p| p.t.is_nan()) {
            return Err(AnimatorError::degenerate("time column contains NaN"));
        }
        points.sort_by(|a, b| a.t.total_cmp(&b.t));

        let observed = |name: &str, get: fn(&PointRecord) -> f64| {
            Limits::observed(points.iter().map(get)).ok_or_else(|| {
                AnimatorError::degenerate(format!("column '{name}' has no finite values"))
            })
        };
        let bounds = DataBounds {
            x: observed(&opts.xname, |p| p.x)?,
            y: observed(&opts.yname, |p| p.y)?,
            z: observed(&opts.zname, |p| p.z)?,
            t: observed(&opts.tname, |p| p.t)?,
            w: observed(&opts.wname, |p| p.w)?,
        };

        let maxw = bounds.w.max;
        if maxw <= 0.0 {
            return Err(AnimatorError::degenerate(format!(
                "maximum weight must be > 0 to normalize marker sizes (got {maxw})"
            )));
        }

        let axes = [
            opts.xlim.unwrap_or(bounds.x).widened(),
            opts.ylim.unwrap_or(bounds.y).widened(),
            opts.zlim.unwrap_or(bounds.z).widened(),
        ];

        let tlim = opts.tlim.unwrap_or(bounds.t);
        if tlim.span() <= 0.0 {
            return Err(AnimatorError::degenerate(format!(
                "time interval [{}, {}] is empty",
                tlim.min, tlim.max
            )));
        }
        let tstep = opts
            .tstep
            .unwrap_or_else(|| tlim.span() / DEFAULT_FRAME_TARGET);
        let timeline = Timeline::new(tlim, tstep)?;

        let wlim = match opts.wlim {
            Some(l) => l.widened(),
            None => Limits::new(0.0, maxw)?,
        };
        let color_scale = ColorScale::new(wlim, opts.colormap);

        tracing::debug!(
            points = points.len(),
            maxw,
            t0 = tlim.min,
            t1 = tlim.max,
            tstep,
            frames = timeline.len(),
            "scene resolved"
        );

        Ok(Self {
            points,
            bounds,
            maxw,
            axes,
            tlim,
            tstep,
            color_scale,
            timeline,
        })
    }

    /// Marker size for a point of weight `w` under the given options.
    pub fn marker_size(&self, w: f64, opts: &AnimateOpts) -> f64 {
        marker_size(w, self.maxw, opts.msize, opts.scalesize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/setup.rs"]
mod tests;
