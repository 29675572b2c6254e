use crate::constants::KONAMI_SEQUENCE;

/// Incremental matcher for a fixed key sequence.
#[derive(Clone, Debug)]
pub struct KeySequence {
    code: &'static [&'static str],
    index: usize,
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }
}

impl KeySequence {
    pub fn new(code: &'static [&'static str]) -> Self {
        Self { code, index: 0 }
    }

    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one key. Any mismatch resets to zero; returns true when the
    /// sequence completes (and resets for the next round).
    pub fn feed(&mut self, key: &str) -> bool {
        if self.code.get(self.index).is_some_and(|k| *k == key) {
            self.index += 1;
            if self.index == self.code.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }
}
