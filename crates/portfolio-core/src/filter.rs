//! Category filter over project cards, with deferred hiding.

use crate::constants::FILTER_ALL;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` key; `"all"` is the show-everything sentinel.
    pub fn parse(key: &str) -> Result<Self, ConfigError> {
        match key.trim() {
            "" => Err(ConfigError::EmptyCategory),
            FILTER_ALL => Ok(Filter::All),
            other => Ok(Filter::Category(other.to_string())),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

/// Per-card visibility; `Hiding` keeps the card in layout until its exit
/// transition finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    Visible,
    Hiding,
    Hidden,
}

impl CardVisibility {
    /// Whether the card carries the `hidden` class.
    pub fn is_hidden(self) -> bool {
        matches!(self, CardVisibility::Hidden)
    }
}

/// What the view layer must animate for a card after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    Show,
    /// Fade out, then report back with `generation` via `finish_hide`.
    Hide { generation: u64 },
}

#[derive(Clone, Debug)]
struct Card {
    category: String,
    visibility: CardVisibility,
    generation: u64,
}

#[derive(Clone, Debug)]
pub struct ProjectFilter {
    cards: Vec<Card>,
    controls: usize,
    active: usize,
}

impl ProjectFilter {
    pub fn new<I, S>(categories: I, controls: usize, active: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards = categories
            .into_iter()
            .map(|c| Card {
                category: c.into(),
                visibility: CardVisibility::Visible,
                generation: 0,
            })
            .collect();
        Self {
            cards,
            controls,
            active: active.min(controls.saturating_sub(1)),
        }
    }

    pub fn active_control(&self) -> usize {
        self.active
    }

    pub fn is_control_active(&self, control: usize) -> bool {
        self.active == control
    }

    pub fn visibility(&self, card: usize) -> Option<CardVisibility> {
        self.cards.get(card).map(|c| c.visibility)
    }

    /// Only cards the filter shows may be animated by anything else.
    pub fn is_free_to_animate(&self, card: usize) -> bool {
        self.visibility(card) == Some(CardVisibility::Visible)
    }

    pub fn visible_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visibility == CardVisibility::Visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Activate `control` with `filter` and return the transition for every card.
    pub fn select(&mut self, control: usize, filter: &Filter) -> Vec<(usize, CardTransition)> {
        if control < self.controls {
            self.active = control;
        }
        self.cards
            .iter_mut()
            .enumerate()
            .map(|(i, card)| {
                card.generation += 1;
                if filter.matches(&card.category) {
                    card.visibility = CardVisibility::Visible;
                    (i, CardTransition::Show)
                } else {
                    if card.visibility == CardVisibility::Visible {
                        card.visibility = CardVisibility::Hiding;
                    }
                    (
                        i,
                        CardTransition::Hide {
                            generation: card.generation,
                        },
                    )
                }
            })
            .collect()
    }

    /// Exit transition for `card` completed. Returns true if the card is now
    /// hidden; stale completions from an earlier selection are ignored.
    pub fn finish_hide(&mut self, card: usize, generation: u64) -> bool {
        match self.cards.get_mut(card) {
            Some(c) if c.generation == generation && c.visibility != CardVisibility::Visible => {
                c.visibility = CardVisibility::Hidden;
                true
            }
            _ => {
                log::trace!("stale hide for card {card} (generation {generation})");
                false
            }
        }
    }
}
