use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{AnimatorError, AnimatorResult};
use std::fmt::Write as _;
use std::sync::Arc;

/// Horizontal anchoring of a text item relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text starts at the position.
    Start,
    /// Text is centred on the position.
    Middle,
    /// Text ends at the position.
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// One line of text placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// Text content.
    pub text: String,
    /// Baseline anchor position in pixels.
    pub at: Point,
    /// Font size in pixels.
    pub size_px: f32,
    /// Horizontal anchoring.
    pub anchor: Anchor,
    /// Rotation around `at`, in degrees (clockwise).
    pub rotate_deg: f64,
    /// Straight RGB color.
    pub rgb: [u8; 3],
}

impl TextItem {
    /// Unrotated dark text.
    pub fn new(text: impl Into<String>, at: Point, size_px: f32, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            at,
            size_px,
            anchor,
            rotate_deg: 0.0,
            rgb: [34, 34, 34],
        }
    }

    /// Same item rotated by `deg`.
    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }
}

/// Rasterizes text items into canvas-sized premultiplied RGBA8 layers.
///
/// Text is laid out as an SVG document and rendered with `resvg` against the system font
/// database, which is loaded once per rasterizer.
pub struct TextRasterizer {
    canvas: Canvas,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextRasterizer {
    /// Create a rasterizer backed by the system fonts.
    pub fn new(canvas: Canvas) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if db.is_empty() {
            tracing::warn!("no system fonts found; titles and labels will not be drawn");
        }
        Self::with_fontdb(canvas, Arc::new(db))
    }

    /// Create a rasterizer using an existing font database.
    pub fn with_fontdb(canvas: Canvas, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { canvas, fontdb }
    }

    /// SVG document drawing `items` on a transparent canvas.
    pub fn svg_document(&self, items: &[TextItem]) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.canvas.width,
            h = self.canvas.height
        );
        for it in items {
            let [r, g, b] = it.rgb;
            let _ = write!(
                svg,
                r##"<text x="{x:.2}" y="{y:.2}" font-family="DejaVu Sans, Arial, Helvetica, sans-serif" font-size="{size}" text-anchor="{anchor}" fill="#{r:02x}{g:02x}{b:02x}""##,
                x = it.at.x,
                y = it.at.y,
                size = it.size_px,
                anchor = it.anchor.as_svg(),
            );
            if it.rotate_deg != 0.0 {
                let _ = write!(
                    svg,
                    r#" transform="rotate({:.2} {:.2} {:.2})""#,
                    it.rotate_deg, it.at.x, it.at.y
                );
            }
            let _ = write!(svg, ">{}</text>", escape_xml(&it.text));
        }
        svg.push_str("</svg>");
        svg
    }

    /// Render `items` into a premultiplied RGBA8 layer of the canvas size.
    pub fn rasterize(&self, items: &[TextItem]) -> AnimatorResult<Vec<u8>> {
        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.canvas.width, self.canvas.height)
            .ok_or_else(|| AnimatorError::validation("failed to allocate text layer"))?;
        if items.is_empty() {
            return Ok(pixmap.data().to_vec());
        }

        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&self.svg_document(items), &opts)
            .map_err(|e| AnimatorError::validation(format!("build text layer: {e}")))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.data().to_vec())
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
