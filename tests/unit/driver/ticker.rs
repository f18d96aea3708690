use std::sync::mpsc::channel;

use super::*;

fn idle() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}

#[test]
fn ticks_while_running_and_stops_on_request() {
    let control = Arc::new(Control::new());
    control.set_running(true);
    let (tx, rx) = channel();
    let mut t = Ticker::spawn(Duration::from_millis(1), Arc::clone(&control), tx, idle());
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        Event::FrameTick
    );
    t.stop();
    assert!(!t.is_active());
}

#[test]
fn exits_when_control_stops_running() {
    let control = Arc::new(Control::new());
    control.set_running(true);
    let (tx, rx) = channel();
    let _t = Ticker::spawn(Duration::from_millis(1), Arc::clone(&control), tx, idle());
    rx.recv_timeout(Duration::from_secs(5)).unwrap();
    control.set_running(false);
    // The thread drops its sender on exit, which disconnects the channel.
    while rx.recv_timeout(Duration::from_secs(5)).is_ok() {}
    assert!(matches!(
        rx.try_recv(),
        Err(std::sync::mpsc::TryRecvError::Disconnected)
    ));
}

#[test]
fn never_ticks_before_running() {
    let control = Arc::new(Control::new());
    let (tx, rx) = channel();
    let _t = Ticker::spawn(Duration::from_millis(1), control, tx, idle());
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
}

#[test]
fn holds_back_ticks_until_the_pending_one_is_taken() {
    let control = Arc::new(Control::new());
    control.set_running(true);
    let pending = idle();
    let (tx, rx) = channel();
    let mut t = Ticker::spawn(
        Duration::from_millis(1),
        Arc::clone(&control),
        tx,
        Arc::clone(&pending),
    );
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(rx.try_iter().count(), 1);
    assert!(pending.load(Ordering::Acquire));

    pending.store(false, Ordering::Release);
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        Event::FrameTick
    );
    t.stop();
}
