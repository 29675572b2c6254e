//! Numeric counters and skill-bar targets.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::error::ConfigError;

/// Parse a `data-target` attribute: leading decimal digits after trimming.
pub fn parse_target(attr: &str) -> Result<u64, ConfigError> {
    let trimmed = attr.trim();
    let digits: &str = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidTarget(attr.to_string()))
}

/// Parse a `data-progress` attribute as a percentage in 0..=100.
pub fn parse_progress(attr: &str) -> Result<f64, ConfigError> {
    let value: f64 = attr
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| ConfigError::InvalidProgress(attr.to_string()))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::ProgressOutOfRange(value));
    }
    Ok(value)
}

/// Fixed-step count-up from zero to `target`.
///
/// Step `k` shows `floor(target * k / steps)` in integer arithmetic, and the
/// last step is exactly `target`.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_steps(target, COUNTER_STEPS)
    }

    pub fn with_steps(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step_interval_ms(&self) -> u32 {
        COUNTER_DURATION_MS / self.steps
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_done() {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            return Some(self.target);
        }
        let value = (self.target as u128 * self.step as u128 / self.steps as u128) as u64;
        Some(value)
    }
}
