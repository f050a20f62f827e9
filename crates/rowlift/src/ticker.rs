//! The scroll ticker: a cancellable periodic callback the platform drives
//! once per display refresh while a drag is in flight.

use std::rc::Rc;

/// Platform hook for the frame-synced scroll tick. `start` asks the
/// platform to begin invoking the controller's `on_frame` every refresh;
/// `stop` cancels that. Implement with whatever the platform offers: a
/// display-linked timer, an animation-frame callback, a cooperative task.
pub trait FrameScheduler {
    fn start(&self);
    fn stop(&self);
}

/// For hosts that already tick every frame unconditionally.
pub struct NoopScheduler;

impl FrameScheduler for NoopScheduler {
    fn start(&self) {}
    fn stop(&self) {}
}

/// RAII pairing of `start` and `stop`: the guard is created when a drag
/// session enters its dragging phase and dropped when that phase ends, so a
/// running ticker cannot outlive the session that started it.
pub struct TickerGuard {
    scheduler: Rc<dyn FrameScheduler>,
}

impl TickerGuard {
    pub(crate) fn start(scheduler: Rc<dyn FrameScheduler>) -> Self {
        scheduler.start();
        Self { scheduler }
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.scheduler.stop();
    }
}
