// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single 52 cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates an empty deck, use [Deck::build] to add the cards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new built deck in canonical order.
    pub fn new_built() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// Creates a new built and shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new_built();
        deck.shuffle(rng);
        deck
    }

    /// Fills the deck with the 52 cards, suits first and then ranks, removing
    /// any card already in the deck.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.extend(
            Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s))),
        );
    }

    /// Shuffles the cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
