use crate::geometry::{Rect, Transform, Vec2};
use parking_lot::RwLock;
use std::sync::Arc;
use web_time::{Duration, Instant};

pub fn now() -> Instant {
    CLOCK.read().as_ref().map(|c| c.now()).unwrap_or_else(Instant::now)
}

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
            delay: Duration::ZERO,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Vec2 {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
        }
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

impl Interpolate for Transform {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Transform {
            translate_x: self.translate_x.interpolate(&other.translate_x, t),
            translate_y: self.translate_y.interpolate(&other.translate_y, t),
            scale_x: self.scale_x.interpolate(&other.scale_x, t),
            scale_y: self.scale_y.interpolate(&other.scale_y, t),
        }
    }
}

// Animation clock
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

static CLOCK: RwLock<Option<Arc<dyn Clock>>> = RwLock::new(None);

/// Install a global animation clock. Platform installs SystemClock; tests
/// install a ManualClock. Re-installing replaces the previous clock.
pub fn set_clock(clock: Arc<dyn Clock>) {
    *CLOCK.write() = Some(clock);
}

/// A clock driven by hand, for deterministic tests.
pub struct ManualClock {
    t: parking_lot::Mutex<Instant>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: parking_lot::Mutex::new(start),
        }
    }

    pub fn advance(&self, d: Duration) {
        *self.t.lock() += d;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}

/// Animated value that transitions smoothly toward a target.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now());
    }

    /// Jump to a value with no animation.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.target = value;
        self.start_time = None;
    }

    /// Advance one frame. Returns true while the animation is ongoing.
    pub fn update(&mut self) -> bool {
        if let Some(start) = self.start_time {
            let elapsed = now().saturating_duration_since(start);

            if elapsed < self.spec.delay {
                return true;
            }

            let animation_time = elapsed - self.spec.delay;

            if animation_time >= self.spec.duration {
                self.current = self.target.clone();
                self.start_time = None;
                return false;
            }

            let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
            let eased_t = self.spec.easing.interpolate(t);
            self.current = self.start.interpolate(&self.target, eased_t);

            true
        } else {
            false
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
