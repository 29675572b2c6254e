//! Property tweens with delay, easing and reversible playheads.

use crate::easing::Ease;

/// Animatable visual properties of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenProps {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl TweenProps {
    /// Untransformed, fully opaque.
    pub const REST: TweenProps = TweenProps {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Translated and fully transparent; the usual entrance start state.
    pub const fn offset(x: f64, y: f64) -> Self {
        TweenProps {
            x,
            y,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    pub fn with_translate(self, x: f64, y: f64) -> Self {
        TweenProps { x, y, ..self }
    }

    pub fn with_fade(self, scale: f64, opacity: f64) -> Self {
        TweenProps {
            scale,
            opacity,
            ..self
        }
    }

    pub fn lerp(self, other: TweenProps, t: f64) -> TweenProps {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        TweenProps {
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            scale: mix(self.scale, other.scale),
            opacity: mix(self.opacity, other.opacity),
        }
    }
}

impl Default for TweenProps {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl Timing {
    pub const fn new(duration_ms: f64, ease: Ease) -> Self {
        Timing {
            duration_ms,
            delay_ms: 0.0,
            ease,
        }
    }

    pub const fn delayed(self, delay_ms: f64) -> Self {
        Timing { delay_ms, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A single `from -> to` tween. The delay only applies when playing forward
/// from the start.
#[derive(Clone, Debug)]
pub struct Tween {
    from: TweenProps,
    to: TweenProps,
    timing: Timing,
    time_ms: f64,
    delay_left_ms: f64,
    direction: Direction,
    playing: bool,
}

impl Tween {
    /// Tween that starts playing forward immediately.
    pub fn new(from: TweenProps, to: TweenProps, timing: Timing) -> Self {
        let mut t = Self::paused(from, to, timing);
        t.play();
        t
    }

    /// Tween parked at its start, rendering `from` until played.
    pub fn paused(from: TweenProps, to: TweenProps, timing: Timing) -> Self {
        Tween {
            from,
            to,
            timing,
            time_ms: 0.0,
            delay_left_ms: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn play(&mut self) {
        if self.time_ms <= 0.0 {
            self.delay_left_ms = self.timing.delay_ms.max(0.0);
        }
        self.direction = Direction::Forward;
        self.playing = true;
    }

    pub fn reverse(&mut self) {
        self.reverse_after(0.0);
    }

    /// Reverse once `delay_ms` has elapsed; the playhead holds until then.
    pub fn reverse_after(&mut self, delay_ms: f64) {
        self.delay_left_ms = delay_ms.max(0.0);
        self.direction = Direction::Reverse;
        self.playing = true;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Normalized playhead position in \[0, 1\].
    pub fn progress(&self) -> f64 {
        if self.timing.duration_ms <= 0.0 {
            return if self.time_ms > 0.0 { 1.0 } else { 0.0 };
        }
        (self.time_ms / self.timing.duration_ms).clamp(0.0, 1.0)
    }

    pub fn current(&self) -> TweenProps {
        self.from.lerp(self.to, self.timing.ease.apply(self.progress()))
    }

    /// Advance the playhead by `dt_ms` and return the props to render.
    pub fn advance(&mut self, dt_ms: f64) -> TweenProps {
        if !self.playing {
            return self.current();
        }
        let mut dt = dt_ms.max(0.0);
        if self.delay_left_ms > 0.0 {
            let used = dt.min(self.delay_left_ms);
            self.delay_left_ms -= used;
            dt -= used;
        }
        let duration = self.timing.duration_ms.max(0.0);
        match self.direction {
            Direction::Forward => {
                if self.delay_left_ms <= 0.0 {
                    // zero-length tweens jump straight to the end
                    self.time_ms = if duration == 0.0 {
                        1.0
                    } else {
                        (self.time_ms + dt).min(duration)
                    };
                }
            }
            Direction::Reverse => {
                self.time_ms = (self.time_ms - dt).max(0.0);
            }
        }
        if self.is_settled() {
            self.playing = false;
        }
        self.current()
    }

    /// True once the playhead rests at the end it is heading to.
    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.delay_left_ms <= 0.0
                    && (self.time_ms >= self.timing.duration_ms
                        || (self.timing.duration_ms <= 0.0 && self.time_ms > 0.0))
            }
            Direction::Reverse => self.delay_left_ms <= 0.0 && self.time_ms <= 0.0,
        }
    }
}

/// Start delay of the `index`th element of a staggered group.
#[inline]
pub fn stagger_delay(index: usize, base_delay_ms: f64, step_ms: f64) -> f64 {
    base_delay_ms + step_ms * index as f64
}
