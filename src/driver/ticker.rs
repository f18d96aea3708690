use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::driver::control::Control;
use crate::event::input::Event;

/// Background thread that requests a frame every `period`.
///
/// Only ever sends [`Event::FrameTick`]; drawing state is never touched. At most one
/// tick is in flight: the thread sets the shared pending flag when it sends and skips
/// while the flag is still set, so a slow consumer sees one coalesced request.
/// Exits when the shared [`Control`] stops running, the receiver goes away, or on
/// [`Ticker::stop`].
#[derive(Debug)]
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub(crate) fn spawn(
        period: Duration,
        control: Arc<Control>,
        tx: Sender<Event>,
        pending: Arc<AtomicBool>,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            tracing::debug!(period_ms = period.as_millis() as u64, "ticker started");
            loop {
                std::thread::sleep(period);
                if flag.load(Ordering::Relaxed) || !control.is_running() {
                    break;
                }
                if pending.swap(true, Ordering::AcqRel) {
                    continue;
                }
                if tx.send(Event::FrameTick).is_err() {
                    break;
                }
            }
            tracing::debug!("ticker stopped");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Ask the thread to exit and wait for it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take()
            && h.join().is_err()
        {
            tracing::warn!("ticker thread panicked");
        }
    }

    /// Whether the thread is still alive.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/ticker.rs"]
mod tests;
