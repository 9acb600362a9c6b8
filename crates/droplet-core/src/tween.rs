//! Time-based interpolation driven by the frame clock.
//!
//! A tween plays `from -> to` over `duration` seconds, optionally repeating.
//! With `yoyo` every odd repetition plays backwards, so the eased curve is
//! mirrored in time rather than re-applied from the start.

use glam::Vec3;

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic deceleration; the stock curve for one-shot transitions.
    #[default]
    QuadOut,
    SineInOut,
}

impl Ease {
    /// Map normalized time in [0, 1] onto eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::SineInOut => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Play once, then this many more times.
    Count(u32),
    Forever,
}

/// What the owner should do when a tween finishes. Replaces fire-and-forget
/// completion callbacks; the owner decides whether the tag is still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    MoodFinished { generation: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    /// Reported once, on the advance that reaches the end.
    Completed(Option<Completion>),
    /// Already reported completion on an earlier advance.
    Idle,
}

#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f32,
    repeat: Repeat,
    yoyo: bool,
    ease: Ease,
    elapsed: f32,
    finished: bool,
    on_complete: Option<Completion>,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            repeat: Repeat::Count(0),
            yoyo: false,
            ease: Ease::default(),
            elapsed: 0.0,
            finished: false,
            on_complete: None,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn on_complete(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    pub fn completion(&self) -> Option<Completion> {
        self.on_complete
    }

    /// Seconds until the last repetition ends, or `None` when it never does.
    pub fn total_duration(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Count(n) => Some(self.duration * (n as f32 + 1.0)),
            Repeat::Forever => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn advance(&mut self, dt: f32) -> TweenStatus {
        if self.finished {
            return TweenStatus::Idle;
        }
        self.elapsed += dt.max(0.0);
        match self.total_duration() {
            Some(total) if self.elapsed >= total => {
                self.elapsed = total;
                self.finished = true;
                TweenStatus::Completed(self.on_complete)
            }
            Some(_) => TweenStatus::Running,
            None => {
                // Keep elapsed bounded; a yoyo cycle spans two legs.
                let cycle = if self.yoyo {
                    self.duration * 2.0
                } else {
                    self.duration
                };
                if cycle > 0.0 {
                    self.elapsed %= cycle;
                }
                TweenStatus::Running
            }
        }
    }

    pub fn value(&self) -> T {
        if self.finished {
            return self.final_value();
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let leg = (self.elapsed / self.duration).floor();
        let mut t = (self.elapsed - leg * self.duration) / self.duration;
        if self.yoyo && (leg as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        self.from.lerp(self.to, self.ease.apply(t))
    }

    fn final_value(&self) -> T {
        match self.repeat {
            Repeat::Count(n) if self.yoyo && n % 2 == 1 => self.from,
            _ => self.to,
        }
    }
}
