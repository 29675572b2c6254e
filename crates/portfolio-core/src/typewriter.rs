use crate::constants::{DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_PHRASE_DELAY_MS, TYPE_DELAY_MS};
use crate::error::ConfigError;

/// Split a `data-words` attribute: comma separated, trimmed, quotes removed,
/// empty entries dropped.
pub fn parse_phrases(attr: &str) -> Result<Vec<String>, ConfigError> {
    let phrases: Vec<String> = attr
        .split(',')
        .map(|w| w.trim().replace(['\'', '"'], ""))
        .filter(|w| !w.is_empty())
        .collect();
    if phrases.is_empty() {
        return Err(ConfigError::EmptyPhraseList);
    }
    Ok(phrases)
}

/// Text to show after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Type / hold / delete / advance cycle over a fixed phrase list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        Ok(Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypeStep {
        let current = &self.phrases[self.phrase];
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(current.len());
        }
        let text: String = current[..self.chars].iter().collect();

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };
        if !self.deleting && self.chars == current.len() {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }
        TypeStep { text, delay_ms }
    }
}
