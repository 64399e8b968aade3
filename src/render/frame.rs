use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use crate::render::axes::{self, PlotLayout};
use crate::render::backend::FrameRGBA;
use crate::render::composite::over_in_place;
use crate::render::marker::Marker;
use crate::render::paint::{fill, render_layer};
use crate::render::projection::{Projector, View};
use crate::render::text::{Anchor, TextItem, TextRasterizer};
use crate::scene::opts::AnimateOpts;
use crate::scene::setup::SceneSetup;

/// Color of points flattened onto the back planes.
pub const SHADOW_RGB: [u8; 3] = [0x44, 0x44, 0x44];
/// Opacity of flattened points.
pub const SHADOW_ALPHA: f64 = 0.3;
/// Lowest opacity reached by depth shading, at the far corner of the box.
pub const MIN_DEPTH_ALPHA: f64 = 0.3;

const ANNOTATION_PX: f32 = 13.0;

/// One point handed to [`FrameContext::draw_scatter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    /// Data-space position.
    pub pos: [f64; 3],
    /// Straight RGBA8 face color.
    pub rgba: [u8; 4],
    /// Marker area in pt².
    pub size: f64,
}

/// How a batch of points is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterStyle {
    /// Glyph.
    pub marker: Marker,
    /// Draw a thin outline in the face color.
    pub outline: bool,
    /// Fade points with distance from the viewer.
    pub depth_shade: bool,
}

impl ScatterStyle {
    /// Style of the flattened back-plane copies.
    pub fn shadow(marker: Marker) -> Self {
        Self {
            marker,
            outline: false,
            depth_shade: false,
        }
    }
}

/// The drawing surface for one render.
///
/// The static layer (background, panes, grid, labels, colorbar, title) is rasterized once in
/// [`FrameContext::new`]. Each frame draws scatter points and transient annotations on top of it;
/// [`FrameContext::clear_transient`] drops the annotations again so the next frame starts from the
/// static layer.
pub struct FrameContext {
    canvas: Canvas,
    width: u16,
    height: u16,
    layout: PlotLayout,
    projector: Projector,
    base: Vec<u8>,
    ctx: vello_cpu::RenderContext,
    text: TextRasterizer,
    transient: Vec<TextItem>,
}

impl std::fmt::Debug for FrameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameContext")
            .field("canvas", &self.canvas)
            .field("transient", &self.transient)
            .finish_non_exhaustive()
    }
}

impl FrameContext {
    /// Build the surface and its static layer, loading system fonts for text.
    pub fn new(setup: &SceneSetup, opts: &AnimateOpts) -> AnimatorResult<Self> {
        Self::with_text(setup, opts, TextRasterizer::new(opts.canvas))
    }

    /// Like [`FrameContext::new`] with a caller-provided text rasterizer.
    #[tracing::instrument(skip_all, fields(width = opts.canvas.width, height = opts.canvas.height))]
    pub fn with_text(
        setup: &SceneSetup,
        opts: &AnimateOpts,
        text: TextRasterizer,
    ) -> AnimatorResult<Self> {
        opts.canvas.validate()?;
        let width: u16 = opts
            .canvas
            .width
            .try_into()
            .map_err(|_| AnimatorError::validation("canvas width exceeds u16"))?;
        let height: u16 = opts
            .canvas
            .height
            .try_into()
            .map_err(|_| AnimatorError::validation("canvas height exceeds u16"))?;

        let layout = PlotLayout::for_canvas(opts.canvas);
        let projector = Projector::new(setup.axes, View::default(), layout.plot);

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        axes::draw_static_geometry(&mut ctx, &projector, &layout, &setup.color_scale);
        let mut base = render_layer(&mut ctx, width, height);
        let labels = axes::static_labels(&projector, &layout, opts, &setup.color_scale);
        over_in_place(&mut base, &text.rasterize(&labels)?)?;
        ctx.reset();

        Ok(Self {
            canvas: opts.canvas,
            width,
            height,
            layout,
            projector,
            base,
            ctx,
            text,
            transient: Vec::new(),
        })
    }

    /// Canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Projection used for the data box.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Plot and colorbar placement.
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Start a new frame: discards any scatter drawn since the last [`FrameContext::finish_frame`].
    pub fn begin_frame(&mut self) {
        self.ctx.reset();
    }

    /// Add a transient text item, shown until [`FrameContext::clear_transient`].
    pub fn annotate(&mut self, item: TextItem) {
        self.transient.push(item);
    }

    /// Elapsed-time annotation for a window starting at `start`.
    pub fn time_annotation(&self, start: f64, unit: &str) -> TextItem {
        let at = self.layout.annotation_anchor();
        TextItem::new(
            format!("t={start:.3}{unit}"),
            Point::new(at.x, at.y + f64::from(ANNOTATION_PX)),
            ANNOTATION_PX,
            Anchor::Start,
        )
    }

    /// Transient items currently attached.
    pub fn transient(&self) -> &[TextItem] {
        &self.transient
    }

    /// Drop all transient items.
    pub fn clear_transient(&mut self) {
        self.transient.clear();
    }

    /// Draw `points` back to front. Points outside the axis limits are skipped.
    pub fn draw_scatter(&mut self, points: &[ScatterPoint], style: ScatterStyle) {
        let mut visible: Vec<(f64, Point, [u8; 4], f64)> = points
            .iter()
            .filter(|p| self.projector.in_bounds(p.pos))
            .map(|p| {
                (
                    self.projector.depth(p.pos),
                    self.projector.project(p.pos),
                    p.rgba,
                    p.size,
                )
            })
            .collect();
        visible.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (depth, at, mut rgba, size) in visible {
            if style.depth_shade {
                rgba[3] = shade_alpha(rgba[3], depth);
            }
            let mut r = style.marker.radius_px(size);
            if style.outline && style.marker != Marker::Pixel {
                r += 0.5;
            }
            if r <= 0.0 || rgba[3] == 0 {
                continue;
            }
            fill(&mut self.ctx, &style.marker.path(at, r), rgba);
        }
    }

    /// Composite scatter and transient text over the static layer.
    pub fn finish_frame(&mut self) -> AnimatorResult<FrameRGBA> {
        let mut data = self.base.clone();
        let scatter = render_layer(&mut self.ctx, self.width, self.height);
        over_in_place(&mut data, &scatter)?;
        if !self.transient.is_empty() {
            over_in_place(&mut data, &self.text.rasterize(&self.transient)?)?;
        }
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }
}

/// Opacity after depth shading: `1` at the nearest corner, [`MIN_DEPTH_ALPHA`] at the farthest.
pub fn shade_alpha(alpha: u8, depth: f64) -> u8 {
    let k = 1.0 - (1.0 - MIN_DEPTH_ALPHA) * depth.clamp(0.0, 1.0);
    (f64::from(alpha) * k).round() as u8
}

/// Straight RGBA8 for the flattened back-plane copies.
pub fn shadow_rgba() -> [u8; 4] {
    [
        SHADOW_RGB[0],
        SHADOW_RGB[1],
        SHADOW_RGB[2],
        (SHADOW_ALPHA * 255.0).round() as u8,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
