//! animator5d renders 5-dimensional point clouds as looping animated 3D scatter plots.
//!
//! Each point carries a position (x, y, z), a time and a scalar weight. The time interval is cut
//! into fixed windows; every window becomes one frame showing that window's points, colored and
//! sized by weight on a scale shared by the whole animation. Frames are written as numbered PNGs
//! and combined into `animation.gif` by a [`FrameEncoder`].
//!
//! - Load a [`Dataset`] from JSON (record or column form)
//! - Configure an [`AnimateOpts`] (every field has a default)
//! - Run [`animate`], or build an [`Animator`] to inject an encoder or a [`CancelToken`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Dataset model and loading.
pub mod data;
/// Frame encoders.
pub mod encode;
/// Drawing surface.
pub mod render;
/// Options and per-render setup.
pub mod scene;
/// Render loop.
pub mod session;
/// Time windows.
pub mod timeline;

pub use crate::foundation::core::{BezPath, Canvas, FrameNumber, Limits, Point, Rect, Vec2};
pub use crate::foundation::error::{AnimatorError, AnimatorResult};

pub use crate::data::dataset::{Dataset, FieldMap, PointRecord};
pub use crate::encode::encoder::{EncoderKind, FrameEncoder, collect_frames};
pub use crate::encode::ffmpeg::FfmpegEncoder;
pub use crate::encode::gif::GifEncoder;
pub use crate::encode::magick::MagickEncoder;
pub use crate::render::backend::FrameRGBA;
pub use crate::render::colormap::{ColorScale, Colormap};
pub use crate::render::frame::{FrameContext, ScatterPoint, ScatterStyle};
pub use crate::render::marker::Marker;
pub use crate::scene::opts::AnimateOpts;
pub use crate::scene::setup::SceneSetup;
pub use crate::session::animator::{
    ANIMATION_FILE, Animator, FRAMES_DIR, RenderReport, RenderedFrame, animate,
};
pub use crate::session::cancel::CancelToken;
pub use crate::timeline::window::{TimeWindow, Timeline};
