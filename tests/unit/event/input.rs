use super::*;

fn pointer(kind: PointerKind, x: f64, y: f64, buttons: Buttons) -> PointerEvent {
    PointerEvent {
        kind,
        position: Point::new(x, y),
        buttons,
    }
}

#[test]
fn moves_track_previous_position() {
    let mut s = EventSnapshot::default();
    s.apply_pointer(&pointer(PointerKind::Move, 10.0, 20.0, Buttons::NONE));
    s.apply_pointer(&pointer(PointerKind::Move, 30.0, 40.0, Buttons::NONE));
    assert_eq!(s.mouse.prev_position, Point::new(10.0, 20.0));
    assert_eq!(s.mouse.position, Point::new(30.0, 40.0));
}

#[test]
fn press_and_release_do_not_move_the_pointer() {
    let mut s = EventSnapshot::default();
    s.apply_pointer(&pointer(PointerKind::Move, 5.0, 5.0, Buttons::NONE));
    s.apply_pointer(&pointer(PointerKind::Press, 99.0, 99.0, Buttons::LEFT | Buttons::MIDDLE));
    assert!(s.mouse.pressed);
    assert!(s.mouse.buttons.contains(Buttons::LEFT));
    assert!(s.mouse.buttons.contains(Buttons::MIDDLE));
    assert!(!s.mouse.buttons.contains(Buttons::RIGHT));
    assert_eq!(s.mouse.position, Point::new(5.0, 5.0));
    s.apply_pointer(&pointer(PointerKind::Release, 5.0, 5.0, Buttons::NONE));
    assert!(!s.mouse.pressed);
    assert!(s.mouse.buttons.is_empty());
}

#[test]
fn key_state_tracks_down_set_and_history() {
    let mut s = EventSnapshot::default();
    s.apply_key(&KeyEvent::press("A"));
    s.apply_key(&KeyEvent::press("B"));
    assert!(s.key_is_down("A"));
    assert!(s.key_is_down("B"));
    assert!(s.key.is_pressed());
    s.apply_key(&KeyEvent::release("A"));
    assert!(!s.key_is_down("A"));
    assert_eq!(s.key.current, Some(KeyEvent::release("A")));
    assert_eq!(s.key.previous, Some(KeyEvent::press("B")));
    s.apply_key(&KeyEvent::release("B"));
    assert!(!s.key.is_pressed());
}
