use crate::foundation::core::{BezPath, Rect};

/// Fill `path` with a straight-alpha RGBA8 color.
pub(crate) fn fill(ctx: &mut vello_cpu::RenderContext, path: &BezPath, rgba: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
    ctx.fill_path(&bezpath_to_cpu(path));
}

pub(crate) fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, rgba: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        rect.x0, rect.y0, rect.x1, rect.y1,
    ));
}

/// Flush pending draws into a fresh transparent pixmap and return its premultiplied bytes.
pub(crate) fn render_layer(ctx: &mut vello_cpu::RenderContext, width: u16, height: u16) -> Vec<u8> {
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    pixmap.data_as_u8_slice().to_vec()
}

// vello_cpu pins its own kurbo; convert element by element.
fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
