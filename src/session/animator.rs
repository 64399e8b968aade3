use crate::data::dataset::{Dataset, PointRecord};
use crate::encode::encoder::{FrameEncoder, collect_frames};
use crate::foundation::core::FrameNumber;
use crate::foundation::error::{AnimatorError, AnimatorResult};
use crate::render::backend::FrameRGBA;
use crate::render::frame::{FrameContext, ScatterPoint, ScatterStyle, shadow_rgba};
use crate::render::text::TextRasterizer;
use crate::scene::opts::AnimateOpts;
use crate::scene::setup::SceneSetup;
use crate::session::cancel::CancelToken;
use crate::timeline::window::{TimeWindow, Timeline};
use anyhow::Context as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Subdirectory of the output path holding frame images.
pub const FRAMES_DIR: &str = "frames";
/// File name of the encoded animation inside the output path.
pub const ANIMATION_FILE: &str = "animation.gif";
/// Extension of frame images.
pub const FRAME_EXT: &str = "png";

/// One frame written by [`Animator::render`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    /// 1-based frame number.
    pub number: FrameNumber,
    /// Time window the frame shows.
    pub window: TimeWindow,
    /// Points drawn in the frame.
    pub points: usize,
    /// Location of the frame image. Gone when the frames were deleted.
    pub path: PathBuf,
}

/// Outcome of a completed render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    /// Every frame, in order.
    pub frames: Vec<RenderedFrame>,
    /// Directory the frames were written to.
    pub frames_dir: PathBuf,
    /// Encoded animation, when an encoder ran.
    pub animation: Option<PathBuf>,
    /// Whether the frames directory was removed after encoding.
    pub frames_deleted: bool,
}

/// Renders a dataset into numbered frames and hands them to an encoder.
///
/// ```no_run
/// use animator5d::{AnimateOpts, Animator, Dataset};
///
/// let data = Dataset::from_path("shower.json")?;
/// let report = Animator::new(AnimateOpts::default()).render(&data)?;
/// println!("{:?}", report.animation);
/// # Ok::<(), animator5d::AnimatorError>(())
/// ```
pub struct Animator {
    opts: AnimateOpts,
    encoder: Option<Box<dyn FrameEncoder>>,
    cancel: CancelToken,
    fontdb: Option<Arc<usvg::fontdb::Database>>,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("opts", &self.opts)
            .field("encoder", &self.encoder.as_ref().map(|e| e.name().to_string()))
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl Animator {
    /// Animator using the encoder named in `opts`.
    pub fn new(opts: AnimateOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cancel: CancelToken::new(),
            fontdb: None,
        }
    }

    /// Replace the encoder selected by `opts.encoder`.
    pub fn with_encoder(mut self, encoder: impl FrameEncoder + 'static) -> Self {
        self.encoder = Some(Box::new(encoder));
        self
    }

    /// Check `token` before every frame.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Use an already loaded font database instead of loading system fonts.
    pub fn with_fontdb(mut self, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        self.fontdb = Some(fontdb);
        self
    }

    /// Options this animator renders with.
    pub fn opts(&self) -> &AnimateOpts {
        &self.opts
    }

    /// Render every window to `<path>/frames`, then encode `<path>/animation.gif`.
    ///
    /// The output path is wiped first. Frames stay on disk when encoding fails or the render is
    /// cancelled; they are removed only when `delete` is set and encoding succeeded.
    #[tracing::instrument(skip_all, fields(path = %self.opts.path.display(), rows = dataset.len()))]
    pub fn render(&mut self, dataset: &Dataset) -> AnimatorResult<RenderReport> {
        let setup = SceneSetup::resolve(dataset, &self.opts)?;
        let frames_dir = prepare_output_dir(&self.opts.path)?;
        let mut fc = self.frame_context(&setup)?;

        let total = setup.timeline.len();
        let pad = FrameNumber::pad_width(total);
        let mut frames = Vec::with_capacity(total.min(1024) as usize);
        for (number, window) in setup.timeline.windows() {
            if self.cancel.is_cancelled() {
                tracing::warn!(frames_written = frames.len(), "render cancelled");
                return Err(AnimatorError::Cancelled {
                    frames_written: frames.len() as u32,
                });
            }
            self.progress(format_args!("Rendering {} of {total} frames...", number.0));

            let points = Timeline::select(&setup.points, window);
            let frame = draw_window(&mut fc, &setup, &self.opts, window, points)?;
            let path = frames_dir.join(format!("{}.{FRAME_EXT}", number.stem(pad)));
            frame.save_png(&path)?;
            fc.clear_transient();

            tracing::debug!(
                frame = number.0,
                start = window.start,
                end = window.end,
                points = points.len(),
                "frame written"
            );
            frames.push(RenderedFrame {
                number,
                window,
                points: points.len(),
                path,
            });
        }

        let mut report = RenderReport {
            frames,
            frames_dir,
            animation: None,
            frames_deleted: false,
        };
        if self.opts.renderframes {
            self.finalize(&mut report)?;
        }
        Ok(report)
    }

    /// Render a single window in memory, without touching the output path.
    pub fn render_window(
        &self,
        dataset: &Dataset,
        number: FrameNumber,
    ) -> AnimatorResult<FrameRGBA> {
        let setup = SceneSetup::resolve(dataset, &self.opts)?;
        let window = setup.timeline.window(number).ok_or_else(|| {
            AnimatorError::validation(format!(
                "frame {} is out of range (1..={})",
                number.0,
                setup.timeline.len()
            ))
        })?;
        let mut fc = self.frame_context(&setup)?;
        let points = Timeline::select(&setup.points, window);
        draw_window(&mut fc, &setup, &self.opts, window, points)
    }

    fn finalize(&mut self, report: &mut RenderReport) -> AnimatorResult<()> {
        self.progress(format_args!("Combining frames; may take a minute..."));
        let files = collect_frames(&report.frames_dir, FRAME_EXT)?;
        let out = self.opts.path.join(ANIMATION_FILE);
        let opts = &self.opts;
        let encoder = self
            .encoder
            .get_or_insert_with(|| opts.encoder.build(opts.delay_cs));
        tracing::debug!(encoder = encoder.name(), frames = files.len(), "encoding");
        let produced = encoder.encode(&files, &out)?;
        self.progress(format_args!("Successfully saved as {}", produced.display()));
        report.animation = Some(produced);

        if self.opts.delete {
            std::fs::remove_dir_all(&report.frames_dir).with_context(|| {
                format!("remove frames directory '{}'", report.frames_dir.display())
            })?;
            report.frames_deleted = true;
            self.progress(format_args!("Successfully deleted frames."));
        }
        Ok(())
    }

    fn frame_context(&self, setup: &SceneSetup) -> AnimatorResult<FrameContext> {
        let text = match &self.fontdb {
            Some(db) => TextRasterizer::with_fontdb(self.opts.canvas, Arc::clone(db)),
            None => TextRasterizer::new(self.opts.canvas),
        };
        FrameContext::with_text(setup, &self.opts, text)
    }

    fn progress(&self, line: std::fmt::Arguments<'_>) {
        if !self.opts.quiet {
            println!("{line}");
        }
    }
}

/// Render `dataset` with `opts` and the encoder they name.
pub fn animate(dataset: &Dataset, opts: &AnimateOpts) -> AnimatorResult<RenderReport> {
    Animator::new(opts.clone()).render(dataset)
}

/// Remove `path` if present and create `path/frames`. Returns the frames directory.
pub fn prepare_output_dir(path: &Path) -> AnimatorResult<PathBuf> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("remove previous output '{}'", path.display()))?;
    } else if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("remove previous output '{}'", path.display()))?;
    }
    let frames_dir = path.join(FRAMES_DIR);
    std::fs::create_dir_all(&frames_dir)
        .with_context(|| format!("create frames directory '{}'", frames_dir.display()))?;
    Ok(frames_dir)
}

/// Draw one window. Back-plane shadows go down first so primary markers sit on top of them.
fn draw_window(
    fc: &mut FrameContext,
    setup: &SceneSetup,
    opts: &AnimateOpts,
    window: TimeWindow,
    points: &[PointRecord],
) -> AnimatorResult<FrameRGBA> {
    fc.begin_frame();
    let label = fc.time_annotation(window.start, &opts.tlabel);
    fc.annotate(label);

    if opts.projections {
        let [xl, yl, zl] = setup.axes;
        let shade = shadow_rgba();
        let planes: [fn(&PointRecord, f64) -> [f64; 3]; 3] = [
            |p, v| [p.x, p.y, v],
            |p, v| [p.x, v, p.z],
            |p, v| [v, p.y, p.z],
        ];
        for (flatten, fixed) in planes.into_iter().zip([zl.min, yl.max, xl.min]) {
            let shadows: Vec<ScatterPoint> = points
                .iter()
                .map(|p| ScatterPoint {
                    pos: flatten(p, fixed),
                    rgba: shade,
                    size: setup.marker_size(p.w, opts),
                })
                .collect();
            fc.draw_scatter(&shadows, ScatterStyle::shadow(opts.marker));
        }
    }

    let primary: Vec<ScatterPoint> = points
        .iter()
        .map(|p| ScatterPoint {
            pos: p.xyz(),
            rgba: setup.color_scale.color(p.w),
            size: setup.marker_size(p.w, opts),
        })
        .collect();
    fc.draw_scatter(
        &primary,
        ScatterStyle {
            marker: opts.marker,
            outline: true,
            depth_shade: opts.transparency,
        },
    );
    fc.finish_frame()
}

#[cfg(test)]
#[path = "../../tests/unit/session/animator.rs"]
mod tests;
