use std::sync::Arc;

use super::*;

#[test]
fn defaults_to_stopped_and_looping() {
    let c = Control::new();
    assert!(!c.is_running());
    assert!(c.is_looping());
}

#[test]
fn flags_are_shared_across_threads() {
    let c = Arc::new(Control::new());
    let c2 = Arc::clone(&c);
    std::thread::spawn(move || {
        c2.set_running(true);
        c2.set_looping(false);
    })
    .join()
    .unwrap();
    assert!(c.is_running());
    assert!(!c.is_looping());
}
