use super::*;
use crate::foundation::core::Color;
use crate::render::plan::DrawOp;
use kurbo::{PathEl, Shape};

fn framed() -> Proc {
    let mut p = Proc::new();
    p.begin_frame();
    p
}

fn fill_outline(p: &Proc, i: usize) -> &kurbo::BezPath {
    match &p.plan().ops[i] {
        DrawOp::Fill { outline, .. } => outline,
        other => panic!("expected fill, got {other:?}"),
    }
}

fn stroke_outline(p: &Proc, i: usize) -> &kurbo::BezPath {
    match &p.plan().ops[i] {
        DrawOp::Stroke { outline, .. } => outline,
        other => panic!("expected stroke, got {other:?}"),
    }
}

fn subpaths(path: &kurbo::BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}

#[test]
fn repeated_endpoint_closes_instead_of_drawing_the_last_edge() {
    let mut p = framed();
    p.triangle(100.0, 100.0, 120.0, 120.0, 80.0, 120.0);
    let fill = fill_outline(&p, 1);
    assert_eq!(
        fill.elements(),
        &[
            PathEl::MoveTo(Point::new(100.0, 100.0)),
            PathEl::LineTo(Point::new(120.0, 120.0)),
            PathEl::LineTo(Point::new(80.0, 120.0)),
            PathEl::ClosePath,
        ]
    );
    // Closed stroke: outer and inner contours, no end caps.
    assert_eq!(subpaths(stroke_outline(&p, 2)), 2);
}

#[test]
fn distinct_endpoints_stay_open() {
    let mut p = framed();
    p.polygon(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    // The fill outline still closes for filling purposes.
    assert_eq!(fill_outline(&p, 1).elements().len(), 4);
    assert_eq!(subpaths(stroke_outline(&p, 2)), 1);
}

#[test]
fn rect_and_square_are_closed_quads() {
    let mut p = framed();
    p.no_stroke();
    p.rect(10.0, 20.0, 30.0, 40.0);
    p.square(0.0, 0.0, 5.0);
    let r = fill_outline(&p, 1);
    assert_eq!(r.elements().len(), 5);
    assert_eq!(r.bounding_box(), kurbo::Rect::new(10.0, 20.0, 40.0, 60.0));
    assert_eq!(fill_outline(&p, 2).bounding_box(), kurbo::Rect::new(0.0, 0.0, 5.0, 5.0));
}

#[test]
fn ellipse_bounds_match_its_size() {
    let mut p = framed();
    p.no_stroke();
    p.ellipse(50.0, 50.0, 80.0, 40.0);
    let bb = fill_outline(&p, 1).bounding_box();
    assert!((bb.x0 - 10.0).abs() < 0.5 && (bb.x1 - 90.0).abs() < 0.5);
    assert!((bb.y0 - 30.0).abs() < 0.5 && (bb.y1 - 70.0).abs() < 0.5);
}

#[test]
fn tall_ellipse_uses_vertical_foci() {
    let (f1, f2) = ellipse_foci(Point::new(0.0, 0.0), 3.0, 5.0);
    assert_eq!(f1, Point::new(0.0, 4.0));
    assert_eq!(f2, Point::new(0.0, -4.0));
    let (f1, _) = ellipse_foci(Point::new(0.0, 0.0), 5.0, 3.0);
    assert_eq!(f1, Point::new(4.0, 0.0));
}

#[test]
fn circle_is_an_ellipse_with_equal_axes() {
    let mut a = framed();
    a.circle(50.0, 60.0, 20.0);
    let mut b = framed();
    b.ellipse(50.0, 60.0, 20.0, 20.0);
    assert_eq!(fill_outline(&a, 1), fill_outline(&b, 1));
}

#[test]
fn physical_canvas_scales_sizes_per_axis() {
    let mut p = Proc::new();
    p.physical_canvas(400, 200, -20.0, 20.0, -10.0, 10.0).unwrap();
    p.begin_frame();
    p.no_stroke();
    p.ellipse(0.0, 0.0, 4.0, 4.0);
    let bb = fill_outline(&p, 1).bounding_box();
    assert!((bb.width() - 40.0).abs() < 0.5);
    assert!((bb.height() - 40.0).abs() < 0.5);
    assert!((bb.center().x - 200.0).abs() < 1e-6);
}

#[test]
fn positive_arc_runs_counter_clockwise_on_screen() {
    let mut p = framed();
    p.stroke_width(1.0);
    p.arc(100.0, 100.0, 40.0, 40.0, 0.0, std::f64::consts::FRAC_PI_2);
    let bb = stroke_outline(&p, 1).bounding_box();
    // Quarter from 3 o'clock up to 12 o'clock: above and right of the center.
    assert!(bb.y1 <= 100.0 + 1.0);
    assert!(bb.x0 >= 100.0 - 1.0);
    assert!(bb.y0 < 82.0);
    assert!(bb.x1 > 118.0);
}

#[test]
fn stroke_only_shapes_ignore_fill() {
    let mut p = framed();
    p.fill(Color::rgb(255, 0, 0));
    p.line(0.0, 0.0, 10.0, 10.0);
    p.bezier(0.0, 0.0, 1.0, 5.0, 5.0, 1.0, 10.0, 10.0);
    p.arc(5.0, 5.0, 4.0, 4.0, 0.0, 1.0);
    assert!(p.plan().fill_colors().is_empty());
    assert_eq!(p.plan().stroke_colors().len(), 3);

    p.no_stroke();
    p.line(0.0, 0.0, 10.0, 10.0);
    p.bezier(0.0, 0.0, 1.0, 5.0, 5.0, 1.0, 10.0, 10.0);
    p.arc(5.0, 5.0, 4.0, 4.0, 0.0, 1.0);
    assert_eq!(p.plan().len(), 4);
}

#[test]
fn shapes_are_noops_without_fill_and_stroke() {
    let mut p = framed();
    p.no_fill();
    p.no_stroke();
    p.ellipse(1.0, 1.0, 2.0, 2.0);
    p.rect(0.0, 0.0, 1.0, 1.0);
    p.triangle(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);
    p.polygon(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(p.plan().len(), 1);
}

#[test]
fn quad_records_the_current_transform() {
    let mut p = framed();
    p.translate(10.0, 0.0);
    p.quad(0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0);
    let DrawOp::Fill { transform, .. } = &p.plan().ops[1] else {
        panic!("expected fill");
    };
    assert_eq!(*transform, kurbo::Affine::translate((10.0, 0.0)));
}
