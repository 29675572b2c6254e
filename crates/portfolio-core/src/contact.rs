use crate::error::SubmitError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

impl SubmitPhase {
    /// Class carried by the submit control in this phase.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Loading => Some("loading"),
            SubmitPhase::Success => Some("success"),
        }
    }
}

/// Simulated submission lifecycle: idle -> loading -> success -> idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactForm {
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a submission. Rejected while a previous one has not been reset.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.phase != SubmitPhase::Idle {
            return Err(SubmitError::Pending);
        }
        self.phase = SubmitPhase::Loading;
        Ok(())
    }

    /// Simulated latency elapsed. Returns true on the loading -> success edge.
    pub fn resolve(&mut self) -> bool {
        if self.phase == SubmitPhase::Loading {
            self.phase = SubmitPhase::Success;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}
