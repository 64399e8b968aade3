use super::*;

#[test]
fn bezpath_conversion_keeps_elements() {
    let rect = kurbo::Rect::new(1.0, 2.0, 3.0, 4.0);
    let path = kurbo::Shape::to_path(&rect, 0.1);
    let cpu = bezpath_to_cpu(&path);
    assert_eq!(cpu.elements().len(), path.elements().len());
}

#[test]
fn filled_rect_is_opaque_inside_and_clear_outside() {
    let mut ctx = vello_cpu::RenderContext::new(8, 8);
    fill_rect(&mut ctx, Rect::new(0.0, 0.0, 4.0, 8.0), [255, 0, 0, 255]);
    let px = render_layer(&mut ctx, 8, 8);
    assert_eq!(&px[0..4], &[255, 0, 0, 255]);
    let right = 6 * 4;
    assert_eq!(px[right + 3], 0);
}
