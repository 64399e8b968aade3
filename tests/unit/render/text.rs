use super::*;

fn empty_db_rasterizer(w: u32, h: u32) -> TextRasterizer {
    TextRasterizer::with_fontdb(
        Canvas {
            width: w,
            height: h,
        },
        Arc::new(usvg::fontdb::Database::new()),
    )
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(escape_xml("E < 5 & \"x\""), "E &lt; 5 &amp; &quot;x&quot;");
}

#[test]
fn svg_document_carries_anchor_rotation_and_color() {
    let r = empty_db_rasterizer(100, 50);
    let mut item = TextItem::new("Energy (keV)", Point::new(10.0, 20.0), 12.0, Anchor::Middle)
        .rotated(-90.0);
    item.rgb = [255, 0, 16];
    let svg = r.svg_document(&[item]);
    assert!(svg.contains(r#"width="100" height="50""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains("rotate(-90.00 10.00 20.00)"));
    assert!(svg.contains("#ff0010"));
    assert!(svg.contains(">Energy (keV)</text>"));
}

#[test]
fn rasterize_returns_canvas_sized_layer_without_fonts() {
    let r = empty_db_rasterizer(32, 16);
    let layer = r
        .rasterize(&[TextItem::new("t=0.000 ns", Point::new(2.0, 12.0), 10.0, Anchor::Start)])
        .unwrap();
    assert_eq!(layer.len(), 32 * 16 * 4);
    let blank = r.rasterize(&[]).unwrap();
    assert!(blank.iter().all(|&b| b == 0));
}
