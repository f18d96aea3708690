use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![1, 2, 3, 255],
        premultiplied: true,
    }
}

#[test]
fn scripted_host_replays_then_runs_dry() {
    let mut h = ScriptedHost::new([Event::FrameTick, Event::Destroy]);
    assert_eq!(h.next_event(), Some(Event::FrameTick));
    assert_eq!(h.next_event(), Some(Event::Destroy));
    assert_eq!(h.next_event(), None);
}

#[test]
fn scripted_close_drops_pending_events() {
    let mut h = ScriptedHost::ticks(3);
    h.close();
    assert!(h.is_closed());
    assert_eq!(h.next_event(), Some(Event::Destroy));
    assert_eq!(h.next_event(), None);
}

#[test]
fn scripted_host_keeps_frames() {
    let mut h = ScriptedHost::default();
    h.present(&frame()).unwrap();
    h.present(&frame()).unwrap();
    assert_eq!(h.frames().len(), 2);
    assert_eq!(h.into_frames()[1], frame());
}

#[test]
fn channel_host_delivers_in_order() {
    let mut h = ChannelHost::new();
    let tx = h.sender();
    std::thread::spawn(move || {
        tx.send(Event::Resize {
            width: 10,
            height: 20,
        })
        .unwrap();
        tx.send(Event::FrameTick).unwrap();
    })
    .join()
    .unwrap();
    assert_eq!(
        h.next_event(),
        Some(Event::Resize {
            width: 10,
            height: 20
        })
    );
    assert_eq!(h.next_event(), Some(Event::FrameTick));
}

#[test]
fn channel_close_queues_destroy() {
    let mut h = ChannelHost::new();
    h.close();
    assert_eq!(h.next_event(), Some(Event::Destroy));
}

#[test]
fn channel_presenter_sees_frames() {
    let seen = Arc::new(std::sync::Mutex::new(0));
    let count = Arc::clone(&seen);
    let mut h = ChannelHost::new().with_presenter(move |f| {
        assert_eq!(f.width, 1);
        *count.lock().unwrap() += 1;
        Ok(())
    });
    h.present(&frame()).unwrap();
    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(h.presented(), 1);
    assert_eq!(h.latest(), Some(&frame()));
}

#[test]
fn channel_start_spawns_ticks() {
    let mut h = ChannelHost::new();
    let control = Arc::new(Control::new());
    control.set_running(true);
    h.start(Duration::from_millis(1), Arc::clone(&control));
    assert_eq!(h.next_event(), Some(Event::FrameTick));
    control.set_running(false);
    h.close();
}

#[test]
fn slow_consumer_sees_one_coalesced_tick() {
    let mut h = ChannelHost::new();
    let control = Arc::new(Control::new());
    control.set_running(true);
    h.spawn_ticker(Duration::from_millis(1), Arc::clone(&control));

    // One draw far slower than the tick period.
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(h.next_event(), Some(Event::FrameTick));

    // Taking the tick re-arms the ticker, and another slow draw still leaves one.
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(h.rx.try_iter().count(), 1);
    control.set_running(false);
    h.close();
}

#[test]
fn close_is_not_stuck_behind_ticks() {
    let mut h = ChannelHost::new();
    let control = Arc::new(Control::new());
    control.set_running(true);
    h.spawn_ticker(Duration::from_millis(1), Arc::clone(&control));
    std::thread::sleep(Duration::from_millis(100));
    h.close();
    let drained: Vec<_> = std::iter::from_fn(|| h.next_event())
        .take_while(|e| *e != Event::Destroy)
        .collect();
    assert!(drained.len() <= 1);
}
