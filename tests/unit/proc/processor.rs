use super::*;

#[test]
fn default_seed_matches_explicit_seed() {
    let mut implicit = Proc::new();
    let mut explicit = Proc::new();
    explicit.random_seed(DEFAULT_SEED);
    for _ in 0..10 {
        assert_eq!(implicit.random(0.0, 100.0), explicit.random(0.0, 100.0));
        assert_eq!(
            implicit.random_gaussian(0.0, 1.0),
            explicit.random_gaussian(0.0, 1.0)
        );
    }
}

#[test]
fn other_seeds_diverge_quickly() {
    let mut a = Proc::new();
    let mut b = Proc::new();
    b.random_seed(42);
    let xs: Vec<f64> = (0..5).map(|_| a.random(0.0, 1.0)).collect();
    let ys: Vec<f64> = (0..5).map(|_| b.random(0.0, 1.0)).collect();
    assert_ne!(xs, ys);
}

#[test]
fn random_stays_in_range_and_degenerates_to_min() {
    let mut p = Proc::new();
    for _ in 0..1000 {
        let v = p.random(-3.0, 5.0);
        assert!((-3.0..5.0).contains(&v));
    }
    assert_eq!(p.random(7.5, 7.5), 7.5);
}

#[test]
fn gaussian_uses_mean_and_spread() {
    let mut p = Proc::new();
    assert_eq!(p.random_gaussian(3.0, 0.0), 3.0);
    let n = 10_000;
    let mean = (0..n).map(|_| p.random_gaussian(10.0, 2.0)).sum::<f64>() / n as f64;
    assert!((mean - 10.0).abs() < 0.1, "mean={mean}");
}

#[test]
fn frame_count_counts_completed_frames() {
    let mut p = Proc::new();
    assert_eq!(p.frame_count(), 0);
    p.draw_frame(|_| {}).unwrap();
    p.draw_frame(|_| {}).unwrap();
    assert_eq!(p.frame_count(), 2);
}

struct FailingBackend;

impl RenderBackend for FailingBackend {
    fn render_plan(&mut self, _plan: &FramePlan) -> ProcResult<FrameRGBA> {
        Err(crate::foundation::error::ProcError::render("backend offline"))
    }
}

#[test]
fn failed_render_is_not_counted() {
    let mut p = Proc::new();
    p.draw_frame(|_| {}).unwrap();
    let before = p.last_frame().cloned();
    let mut p = p.with_backend(Box::new(FailingBackend));
    assert!(p.draw_frame(|_| {}).is_err());
    assert_eq!(p.frame_count(), 1);
    assert_eq!(p.last_frame().cloned(), before);
}

#[test]
fn frame_starts_with_a_background_clear() {
    let mut p = Proc::new();
    p.background(Color::gray(200));
    p.begin_frame();
    assert!(matches!(
        p.plan().ops[0],
        DrawOp::Clear { color } if color == Color::gray(200)
    ));
}

#[test]
fn background_inside_a_frame_paints_over_everything() {
    let mut p = Proc::new();
    let frame = p
        .draw_frame(|p| {
            p.fill(Color::rgb(255, 0, 0));
            p.rect(0.0, 0.0, 400.0, 400.0);
            p.background(Color::rgb(0, 0, 255));
        })
        .unwrap();
    assert_eq!(frame.pixel(200, 200), Some([0, 0, 255, 255]));
}

#[test]
#[should_panic(expected = "unbalanced push/pop")]
fn unbalanced_push_fails_at_end_of_frame() {
    let mut p = Proc::new();
    let _ = p.draw_frame(|p| p.push());
}

#[test]
#[should_panic(expected = "pop without matching push")]
fn pop_without_push_panics() {
    let mut p = Proc::new();
    p.pop();
}

#[test]
fn transforms_reset_between_frames() {
    let mut p = Proc::new();
    p.draw_frame(|p| p.translate(5.0, 5.0)).unwrap();
    p.begin_frame();
    assert_eq!(p.transform(), Affine::IDENTITY);
}

#[test]
fn canvas_resets_attributes_and_validates() {
    let mut p = Proc::new();
    p.fill(Color::BLACK);
    p.canvas(200, 100).unwrap();
    assert_eq!(p.context().fill, Some(Color::WHITE));
    assert_eq!((p.width(), p.height()), (200, 100));
    assert!(p.canvas(0, 10).is_err());
    assert!(p.physical_canvas(10, 10, 0.0, 0.0, 0.0, 1.0).is_err());
    assert_eq!((p.width(), p.height()), (200, 100));
}

#[test]
fn resize_keeps_logical_range() {
    let mut p = Proc::new();
    p.physical_canvas(100, 100, 0.0, 1.0, 0.0, 1.0).unwrap();
    p.fill(Color::BLACK);
    p.resize(200, 50).unwrap();
    assert_eq!(p.context().fill, Some(Color::BLACK));
    assert_eq!(p.pt(1.0, 1.0), Point::new(200.0, 50.0));
}

#[test]
fn mouse_position_is_reported_in_logical_units() {
    let mut p = Proc::new();
    p.physical_canvas(400, 200, -20.0, 20.0, -10.0, 10.0).unwrap();
    p.events_mut().apply_pointer(&crate::event::input::PointerEvent {
        kind: crate::event::input::PointerKind::Move,
        position: Point::new(200.0, 150.0),
        buttons: Buttons::NONE,
    });
    assert_eq!(p.mouse_position(), (0.0, 5.0));
    assert_eq!(p.prev_mouse_position(), (-20.0, -10.0));
}

#[test]
fn text_without_a_font_is_skipped() {
    let mut p = Proc::new();
    p.begin_frame();
    p.text("hello", 10.0, 10.0);
    assert_eq!(p.plan().len(), 1);
}

#[test]
fn text_records_a_baseline_anchor() {
    let Ok(bytes) = std::fs::read("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf") else {
        return;
    };
    let mut p = Proc::new();
    let id = p.load_font(bytes).unwrap();
    p.text_font(id);
    p.text_size(24.0);
    p.text_align(TextAlign::Center);
    p.begin_frame();
    p.text("hi", 100.0, 50.0);
    let DrawOp::Text {
        anchor, size, align, ..
    } = &p.plan().ops[1]
    else {
        panic!("expected text");
    };
    assert_eq!(*anchor, Point::new(100.0, 50.0));
    assert_eq!(*size, 24.0);
    assert_eq!(*align, TextAlign::Center);
    let frame = p.end_frame().unwrap();
    assert!(frame.data.chunks_exact(4).any(|px| px[3] > 0));
}

#[test]
fn loop_flags_are_shared_with_control() {
    let mut p = Proc::new();
    let control = p.control();
    p.no_loop();
    assert!(!control.is_looping());
    p.start_loop();
    assert!(control.is_looping());
}

#[test]
fn screenshot_writes_the_last_frame() {
    let dir = std::env::temp_dir().join(format!("proc2d-proc-{}", std::process::id()));
    let path = dir.join("shot.png");
    let mut p = Proc::new();
    p.canvas(8, 8).unwrap();
    p.background(Color::rgb(10, 20, 30));
    p.draw_frame(|_| {}).unwrap();
    p.screenshot(&path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(3, 3).0, [10, 20, 30, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn draw_image_places_the_top_left_corner() {
    let img = PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![0, 0, 0, 255]),
    };
    let mut p = Proc::new();
    p.begin_frame();
    p.draw_image(&img, 3.0, 4.0);
    assert!(matches!(
        &p.plan().ops[1],
        DrawOp::Image { origin, .. } if *origin == Point::new(3.0, 4.0)
    ));
}

#[test]
fn unknown_font_handles_are_ignored() {
    let mut p = Proc::new();
    p.text_font(FontId(5));
    assert_eq!(p.context().text.font, None);
}
