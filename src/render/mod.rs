//! Drawing surface for scatter frames.
//!
//! Geometry is rasterized on the CPU with `vello_cpu`; text is laid out as SVG and rasterized with
//! `resvg`. Layers are premultiplied RGBA8 and composited in software.

/// Static axes layer: panes, grid, ticks, colorbar and labels.
pub mod axes;
/// Rendered frame buffers and PNG output.
pub mod backend;
/// Weight to color mapping.
pub mod colormap;
/// Premultiplied RGBA8 blending.
pub mod composite;
/// Per-render drawing surface.
pub mod frame;
/// Scatter glyphs.
pub mod marker;
pub(crate) mod paint;
/// Orthographic 3D projection.
pub mod projection;
/// Text overlays.
pub mod text;
