use crate::session::ReorderController;
use crate::table::TableHost;
use log::trace;
use rowlift_core::{PointerEvent, PointerEventKind, Vec2};
use web_time::{Duration, Instant};

/// Hold duration before a press counts as a long press.
pub const LONG_PRESS_DELAY: Duration = Duration::from_millis(500);
/// Movement allowed before recognition without abandoning the press.
pub const TOUCH_SLOP: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LongPressPhase {
    Began(Vec2),
    Changed(Vec2),
    Ended(Vec2),
    Cancelled,
}

/// Long-press recognizer over raw pointer samples.
///
/// Recognition is driven entirely by event timestamps: a press that stays
/// within `TOUCH_SLOP` recognizes on the first sample arriving
/// `LONG_PRESS_DELAY` or later after the down. After recognition every
/// move reports `Changed` and the up reports `Ended`. Disabling the
/// recognizer mid-gesture (the force-reset path) reports `Cancelled` and
/// drops all tracking.
pub struct LongPress {
    enabled: bool,
    press_start: Option<(Instant, Vec2)>,
    recognized: bool,
}

impl Default for LongPress {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPress {
    pub fn new() -> Self {
        Self {
            enabled: true,
            press_start: None,
            recognized: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable recognition. Disabling while a gesture is in
    /// flight yields `Cancelled`.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<LongPressPhase> {
        self.enabled = enabled;
        if enabled {
            return None;
        }
        let was_recognized = self.recognized;
        self.press_start = None;
        self.recognized = false;
        was_recognized.then_some(LongPressPhase::Cancelled)
    }

    /// True while a press is being tracked toward recognition.
    pub fn is_tracking(&self) -> bool {
        self.press_start.is_some()
    }

    /// Time-driven recognition for a motionless press. Platforms deliver no
    /// move samples while the pointer holds still, so the host polls this
    /// from its frame hook while `is_tracking()`.
    pub fn poll(&mut self, now: Instant) -> Option<LongPressPhase> {
        if !self.enabled || self.recognized {
            return None;
        }
        let (start_time, start_pos) = self.press_start?;
        if now.saturating_duration_since(start_time) >= LONG_PRESS_DELAY {
            trace!("long press recognized at {start_pos:?}");
            self.recognized = true;
            return Some(LongPressPhase::Began(start_pos));
        }
        None
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<LongPressPhase> {
        if !self.enabled {
            return None;
        }
        match event.kind {
            PointerEventKind::Down(_) => {
                self.press_start = Some((event.time, event.position));
                self.recognized = false;
                None
            }
            PointerEventKind::Move => {
                if self.recognized {
                    return Some(LongPressPhase::Changed(event.position));
                }
                let (start_time, start_pos) = self.press_start?;
                let distance = ((event.position.x - start_pos.x).powi(2)
                    + (event.position.y - start_pos.y).powi(2))
                .sqrt();
                if distance > TOUCH_SLOP {
                    // Moved away before the hold completed: a scroll, not
                    // a long press.
                    self.press_start = None;
                    return None;
                }
                if event.time.saturating_duration_since(start_time) >= LONG_PRESS_DELAY {
                    trace!("long press recognized at {:?}", event.position);
                    self.recognized = true;
                    return Some(LongPressPhase::Began(event.position));
                }
                None
            }
            PointerEventKind::Up(_) => {
                let was_recognized = self.recognized;
                self.press_start = None;
                self.recognized = false;
                was_recognized.then_some(LongPressPhase::Ended(event.position))
            }
            PointerEventKind::Cancel => {
                let was_recognized = self.recognized;
                self.press_start = None;
                self.recognized = false;
                was_recognized.then_some(LongPressPhase::Cancelled)
            }
        }
    }
}

/// Recognizer and controller wired together: the complete long-press
/// reorder interaction for one list. The consumer forwards pointer events
/// and timestamped frame ticks; everything else is internal.
pub struct ReorderList {
    recognizer: LongPress,
    controller: ReorderController,
}

impl Default for ReorderList {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderList {
    pub fn new() -> Self {
        Self {
            recognizer: LongPress::new(),
            controller: ReorderController::new(),
        }
    }

    pub fn controller(&self) -> &ReorderController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ReorderController {
        &mut self.controller
    }

    pub fn reorder_enabled(&self) -> bool {
        self.recognizer.is_enabled()
    }

    /// Toggle the whole interaction. Disabling cancels any in-flight drag.
    pub fn set_reorder_enabled(&mut self, host: &mut dyn TableHost, enabled: bool) {
        if self.recognizer.set_enabled(enabled) == Some(LongPressPhase::Cancelled) {
            self.controller.cancel(host);
        }
    }

    pub fn handle_pointer(&mut self, host: &mut dyn TableHost, event: &PointerEvent) {
        match self.recognizer.handle_pointer(event) {
            Some(LongPressPhase::Began(position)) => {
                if !self.controller.begin(host, position) {
                    self.cancel_gesture(host);
                }
            }
            Some(LongPressPhase::Changed(position)) => self.controller.update(host, position),
            Some(LongPressPhase::Ended(_)) => self.controller.end(host),
            Some(LongPressPhase::Cancelled) => self.controller.cancel(host),
            None => {}
        }
    }

    /// Per-frame hook. Recognizes a motionless hold (no move sample ever
    /// arrives for a stationary pointer) and advances the controller. `now`
    /// comes from the same clock that stamps pointer events.
    pub fn on_frame(&mut self, host: &mut dyn TableHost, now: Instant) {
        if let Some(LongPressPhase::Began(position)) = self.recognizer.poll(now) {
            if !self.controller.begin(host, position) {
                self.cancel_gesture(host);
            }
        }
        self.controller.on_frame(host);
    }

    pub fn needs_frames(&self) -> bool {
        self.controller.needs_frames() || self.recognizer.is_tracking()
    }

    /// The off/on recognizer toggle: forces a clean reset of the gesture
    /// and whatever session state exists.
    fn cancel_gesture(&mut self, host: &mut dyn TableHost) {
        self.recognizer.set_enabled(false);
        self.recognizer.set_enabled(true);
        self.controller.cancel(host);
    }
}
