use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use crate::driver::control::Control;
use crate::driver::ticker::Ticker;
use crate::event::input::Event;
use crate::foundation::error::ProcResult;
use crate::render::backend::FrameRGBA;

/// The windowing side of the frame loop: produces events, shows frames.
pub trait Host {
    /// Block for the next event; `None` means the host is gone.
    fn next_event(&mut self) -> Option<Event>;

    /// Show a rendered frame.
    fn present(&mut self, frame: &FrameRGBA) -> ProcResult<()>;

    /// Request shutdown; the host answers with [`Event::Destroy`] or by running dry.
    fn close(&mut self);

    /// Called once when the loop starts running. Hosts with their own clock ignore it.
    fn start(&mut self, _period: Duration, _control: Arc<Control>) {}
}

type Presenter = Box<dyn FnMut(&FrameRGBA) -> ProcResult<()> + Send>;

/// A host fed through a single-consumer channel.
///
/// Window integrations push events through [`ChannelHost::sender`] clones; a
/// [`Ticker`] supplies frame ticks once the loop starts.
pub struct ChannelHost {
    tx: Sender<Event>,
    rx: Receiver<Event>,
    ticker: Option<Ticker>,
    tick_pending: Arc<AtomicBool>,
    presenter: Option<Presenter>,
    latest: Option<FrameRGBA>,
    presented: u64,
}

impl Default for ChannelHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChannelHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelHost")
            .field("ticker", &self.ticker)
            .field("presented", &self.presented)
            .finish_non_exhaustive()
    }
}

impl ChannelHost {
    /// An empty queue with no presenter.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            ticker: None,
            tick_pending: Arc::new(AtomicBool::new(false)),
            presenter: None,
            latest: None,
            presented: 0,
        }
    }

    /// Hand each presented frame to `f`.
    pub fn with_presenter(
        mut self,
        f: impl FnMut(&FrameRGBA) -> ProcResult<()> + Send + 'static,
    ) -> Self {
        self.presenter = Some(Box::new(f));
        self
    }

    /// A producer handle for the event queue.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Start a tick thread sending [`Event::FrameTick`] every `period` while `control`
    /// reports running. Replaces any previous ticker.
    ///
    /// Ticks do not pile up: a new one is queued only after the previous one was
    /// taken by [`Host::next_event`].
    pub fn spawn_ticker(&mut self, period: Duration, control: Arc<Control>) {
        if let Some(mut old) = self.ticker.take() {
            old.stop();
        }
        self.tick_pending.store(false, Ordering::Release);
        self.ticker = Some(Ticker::spawn(
            period,
            control,
            self.tx.clone(),
            Arc::clone(&self.tick_pending),
        ));
    }

    /// Most recently presented frame.
    pub fn latest(&self) -> Option<&FrameRGBA> {
        self.latest.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Host for ChannelHost {
    fn next_event(&mut self) -> Option<Event> {
        let event = self.rx.recv().ok()?;
        if matches!(event, Event::FrameTick) {
            self.tick_pending.store(false, Ordering::Release);
        }
        Some(event)
    }

    fn present(&mut self, frame: &FrameRGBA) -> ProcResult<()> {
        self.presented += 1;
        if let Some(p) = self.presenter.as_mut() {
            p(frame)?;
        }
        self.latest = Some(frame.clone());
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut t) = self.ticker.take() {
            t.stop();
        }
        // The receiver lives in `self`, so this cannot fail.
        let _ = self.tx.send(Event::Destroy);
    }

    fn start(&mut self, period: Duration, control: Arc<Control>) {
        self.spawn_ticker(period, control);
    }
}

/// A host that replays a fixed event list and keeps every presented frame.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    events: VecDeque<Event>,
    frames: Vec<FrameRGBA>,
    closed: bool,
}

impl ScriptedHost {
    /// Replay `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            frames: Vec::new(),
            closed: false,
        }
    }

    /// `n` frame ticks.
    pub fn ticks(n: usize) -> Self {
        Self::new(std::iter::repeat_n(Event::FrameTick, n))
    }

    /// Frames presented so far.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Take ownership of the presented frames.
    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames
    }

    /// Whether [`Host::close`] was called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Host for ScriptedHost {
    fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn present(&mut self, frame: &FrameRGBA) -> ProcResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.events.clear();
        self.events.push_back(Event::Destroy);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/host.rs"]
mod tests;
