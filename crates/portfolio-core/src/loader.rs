use crate::constants::LOADER_MAX_INCREMENT;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderTick {
    /// Rounded-down percentage to display.
    pub percent: u32,
    /// Set on the single tick that reached 100.
    pub complete: bool,
}

/// Simulated page-load progress gating the initial reveal.
#[derive(Clone, Debug, Default)]
pub struct LoadingSequencer {
    progress: f32,
    complete: bool,
}

impl LoadingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Add `increment` (negative values count as zero). Returns `None` once
    /// completion has already been reported.
    pub fn advance(&mut self, increment: f32) -> Option<LoaderTick> {
        if self.complete {
            return None;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        self.complete = self.progress >= 100.0;
        Some(LoaderTick {
            percent: self.progress.floor() as u32,
            complete: self.complete,
        })
    }

    pub fn advance_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<LoaderTick> {
        let increment = rng.gen_range(0.0..LOADER_MAX_INCREMENT);
        self.advance(increment)
    }
}
