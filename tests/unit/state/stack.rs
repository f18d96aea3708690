use super::*;
use crate::foundation::core::Color;

#[test]
fn push_then_pop_is_identity() {
    let mut s = StateStack::new(GraphicsContext::default());
    s.ctx_mut().fill = Some(Color::rgb(10, 20, 30));
    s.apply(Affine::translate((5.0, 6.0)));
    let before = s.current().clone();

    s.push();
    s.ctx_mut().fill = None;
    s.ctx_mut().stroke.width = 9.0;
    s.ctx_mut().curve_tension = 0.5;
    s.apply(Affine::rotate(1.0));
    s.push();
    s.ctx_mut().background = Color::BLACK;
    s.pop();
    s.pop();

    assert_eq!(s.current(), &before);
    assert_eq!(s.depth(), 0);
}

#[test]
fn push_copies_the_current_top() {
    let mut s = StateStack::new(GraphicsContext::default());
    s.ctx_mut().text.size = 20.0;
    s.apply(Affine::scale(2.0));
    s.push();
    assert_eq!(s.ctx().text.size, 20.0);
    assert_eq!(s.transform(), Affine::scale(2.0));
    assert_eq!(s.depth(), 1);
}

#[test]
#[should_panic(expected = "pop without matching push")]
fn popping_the_root_panics() {
    let mut s = StateStack::new(GraphicsContext::default());
    s.pop();
}

#[test]
fn transforms_post_multiply() {
    let mut s = StateStack::new(GraphicsContext::default());
    s.apply(Affine::translate((10.0, 0.0)));
    s.apply(Affine::scale(2.0));
    let p = s.transform() * kurbo::Point::new(1.0, 1.0);
    assert_eq!((p.x, p.y), (12.0, 2.0));
}

#[test]
fn reset_drops_pushed_frames() {
    let mut s = StateStack::new(GraphicsContext::default());
    s.push();
    s.push();
    s.reset(GraphicsContext::default());
    assert_eq!(s.depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);
}
