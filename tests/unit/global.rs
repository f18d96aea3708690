use std::cell::Cell;

use super::*;
use crate::driver::host::ScriptedHost;
use crate::render::plan::DrawOp;

#[test]
fn free_functions_share_one_processor() {
    replace(Proc::new());
    canvas(100, 50).unwrap();
    fill(Color::rgb(1, 2, 3));
    push();
    translate(5.0, 0.0);
    assert_eq!(with(|p| p.stack_depth()), 1);
    pop();
    assert_eq!((width(), height()), (100, 50));
    assert_eq!(with(|p| p.context().fill), Some(Color::rgb(1, 2, 3)));
}

#[test]
fn run_lends_the_processor_to_callbacks() {
    replace(Proc::new());
    let draws = Cell::new(0);
    let mut host = ScriptedHost::ticks(2);
    run(
        || canvas(20, 20).unwrap(),
        || {
            background(Color::gray(128));
            fill(Color::rgb(255, 0, 0));
            rect(0.0, 0.0, 10.0, 10.0);
            with_path(|path| {
                path.vertex(0.0, 0.0).vertex(5.0, 5.0).vertex(0.0, 5.0);
            });
            draws.set(draws.get() + 1);
        },
        &mut host,
    )
    .unwrap();
    assert_eq!(draws.get(), 2);
    assert_eq!(frame_count(), 2);
    assert_eq!(width(), 20);
    assert_eq!(host.frames().len(), 2);
    assert_eq!(host.frames()[1].pixel(2, 8), Some([255, 0, 0, 255]));
    let fills = with(|p| {
        p.plan()
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill { .. }))
            .count()
    });
    // background, rect, path
    assert_eq!(fills, 3);
}

#[test]
fn randomness_is_per_thread_and_seedable() {
    replace(Proc::new());
    random_seed(5);
    let a = random(0.0, 1.0);
    random_seed(5);
    assert_eq!(random(0.0, 1.0), a);
    let other = std::thread::spawn(|| {
        random_seed(5);
        random(0.0, 1.0)
    })
    .join()
    .unwrap();
    assert_eq!(other, a);
}
