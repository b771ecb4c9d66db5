//! Flashcard deck with a wrap-around cursor.

use super::keys;
use crate::storage::{KeyValueStore, PersistedState, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

pub fn starter_deck() -> Vec<Flashcard> {
    vec![
        Flashcard::new("Charter Year?", "1948"),
        Flashcard::new("Founder?", "Kenneth Mellamby"),
    ]
}

/// Persisted deck plus the transient study cursor.
///
/// The cursor and flip side are not stored; every mount starts at the first
/// card, front side up.
pub struct FlashcardDeck<S> {
    state: PersistedState<Vec<Flashcard>, S>,
    current: usize,
    flipped: bool,
}

impl<S: KeyValueStore> FlashcardDeck<S> {
    pub fn mount(store: S) -> Self {
        Self {
            state: PersistedState::mount(store, keys::FLASHCARDS, starter_deck()),
            current: 0,
            flipped: false,
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        self.state.get()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards().get(self.current)
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Text on the visible side of the current card.
    pub fn face(&self) -> Option<&str> {
        self.current().map(|card| {
            if self.flipped {
                card.back.as_str()
            } else {
                card.front.as_str()
            }
        })
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.current = (self.current + 1) % len;
        }
        self.flipped = false;
    }

    pub fn prev(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
        self.flipped = false;
    }

    pub fn add(&mut self, card: Flashcard) -> StoreResult<()> {
        self.state.update(|cards| cards.push(card))
    }

    pub fn unmount(self) -> S {
        self.state.unmount()
    }
}

#[cfg(test)]
mod tests {
    use super::{Flashcard, FlashcardDeck};
    use crate::storage::MemoryStore;

    #[test]
    fn starter_deck_wraps_both_ways() {
        let mut store = MemoryStore::new();
        let mut deck = FlashcardDeck::mount(&mut store);
        assert_eq!(deck.face(), Some("Charter Year?"));
        deck.flip();
        assert_eq!(deck.face(), Some("1948"));
        deck.prev();
        assert_eq!(deck.position(), 1);
        assert!(!deck.is_flipped());
        deck.next();
        assert_eq!(deck.face(), Some("Charter Year?"));
    }

    #[test]
    fn added_cards_survive_remount() {
        let mut store = MemoryStore::new();
        {
            let mut deck = FlashcardDeck::mount(&mut store);
            deck.add(Flashcard::new("Motto?", "Recte Sapere Fons")).unwrap();
        }
        let deck = FlashcardDeck::mount(&mut store);
        assert_eq!(deck.cards().len(), 3);
    }
}
