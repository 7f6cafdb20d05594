// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi decks dealing shoe.
use log::{debug, trace};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{VecDeque, vec_deque};
use thiserror::Error;

use crate::{Card, Deck};

/// Shoe errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShoeError {
    /// Not enough cards left in the shoe.
    #[error("insufficient cards: requested {requested} with {remaining} remaining")]
    InsufficientCards {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards in the shoe.
        remaining: usize,
    },
    /// The shoe has no decks.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// The cutoff is not a fraction.
    #[error("invalid cutoff {0}, must be between 0 and 1")]
    InvalidCutoff(f64),
    /// No room for another deck in the shoe.
    #[error("shoe full: {remaining} cards with capacity {capacity}")]
    ShoeFull {
        /// The number of cards in the shoe.
        remaining: usize,
        /// The number of cards in a full shoe.
        capacity: usize,
    },
}

/// How [Shoe::past_cutoff] compares the remaining cards with the cutoff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutoffScale {
    /// Compares the percent of remaining cards (0-100) with the cutoff
    /// fraction, this only fires when less than 1% of cards are left.
    #[default]
    Literal,
    /// Compares the percent of remaining cards with the cutoff as a percent.
    Fraction,
}

/// The shoe configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoeConfig {
    /// The number of decks in the shoe.
    pub num_decks: usize,
    /// The reshuffle threshold as a fraction of the shoe cards.
    pub cutoff: f64,
    /// The cutoff comparison scale.
    pub scale: CutoffScale,
}

impl ShoeConfig {
    /// The default cutoff.
    pub const DEFAULT_CUTOFF: f64 = 0.75;

    /// Sets the number of decks.
    pub fn with_decks(mut self, num_decks: usize) -> Self {
        self.num_decks = num_decks;
        self
    }

    /// Sets the cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the cutoff scale.
    pub fn with_scale(mut self, scale: CutoffScale) -> Self {
        self.scale = scale;
        self
    }

    fn validate(&self) -> Result<(), ShoeError> {
        if self.num_decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(ShoeError::InvalidCutoff(self.cutoff));
        }

        Ok(())
    }
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            num_decks: 1,
            cutoff: Self::DEFAULT_CUTOFF,
            scale: CutoffScale::default(),
        }
    }
}

/// A shoe with one or more shuffled decks.
///
/// The shoe is empty when created, [Shoe::create_shoe] fills it with
/// `num_decks` decks, each deck is shuffled on its own and appended after the
/// previous ones. Cards are dealt from the front until the caller rebuilds
/// the shoe.
#[derive(Debug)]
pub struct Shoe<R = StdRng> {
    config: ShoeConfig,
    cards: VecDeque<Card>,
    rng: R,
}

impl Shoe<StdRng> {
    /// Creates an empty shoe shuffled by an OS seeded generator.
    pub fn new(config: ShoeConfig) -> Result<Self, ShoeError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Shoe<R> {
    /// Creates an empty shoe shuffled by the given generator.
    pub fn with_rng(config: ShoeConfig, rng: R) -> Result<Self, ShoeError> {
        config.validate()?;

        Ok(Self {
            config,
            cards: VecDeque::with_capacity(config.num_decks * Deck::SIZE),
            rng,
        })
    }

    /// Builds and shuffles a deck and adds its cards at the end of the shoe.
    ///
    /// Fails if the shoe doesn't have room for another 52 cards.
    pub fn add_shuffled_deck(&mut self) -> Result<(), ShoeError> {
        if self.cards.len() + Deck::SIZE > self.capacity() {
            return Err(ShoeError::ShoeFull {
                remaining: self.cards.len(),
                capacity: self.capacity(),
            });
        }

        self.push_shuffled_deck();
        Ok(())
    }

    fn push_shuffled_deck(&mut self) {
        let deck = Deck::new_and_shuffled(&mut self.rng);
        self.cards.extend(deck);
    }

    /// Fills the shoe with `num_decks` shuffled decks.
    ///
    /// Any card left in the shoe is discarded first.
    pub fn create_shoe(&mut self) {
        self.cards.clear();
        for _ in 0..self.config.num_decks {
            self.push_shuffled_deck();
        }

        debug!(
            "Created shoe with {} decks {} cards",
            self.config.num_decks,
            self.cards.len()
        );
    }

    /// Deals a card from the front of the shoe.
    pub fn deal(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop_front().ok_or(ShoeError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;

        trace!("Dealt {card} {} remaining", self.cards.len());
        Ok(card)
    }

    /// Deals `num` cards from the front of the shoe in dealing order.
    ///
    /// If there are less than `num` cards no card is dealt.
    pub fn deal_many(&mut self, num: usize) -> Result<Vec<Card>, ShoeError> {
        if self.cards.len() < num {
            return Err(ShoeError::InsufficientCards {
                requested: num,
                remaining: self.cards.len(),
            });
        }

        let cards = self.cards.drain(..num).collect::<Vec<_>>();
        trace!("Dealt {} cards {} remaining", cards.len(), self.cards.len());
        Ok(cards)
    }
}

impl<R> Shoe<R> {
    /// Checks if the remaining cards went below the cutoff.
    pub fn past_cutoff(&self) -> bool {
        let percent = self.percent_remaining() as f64;
        let past = match self.config.scale {
            CutoffScale::Literal => percent < self.config.cutoff,
            CutoffScale::Fraction => percent < self.config.cutoff * 100.0,
        };

        if past {
            debug!("Shoe past cutoff with {}% cards remaining", percent);
        }

        past
    }

    /// The percent of remaining cards rounded down.
    pub fn percent_remaining(&self) -> u32 {
        (self.cards.len() * 100 / self.capacity()) as u32
    }

    /// The number of cards in a full shoe.
    pub fn capacity(&self) -> usize {
        self.config.num_decks * Deck::SIZE
    }

    /// The number of remaining cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the shoe is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The number of decks.
    pub fn num_decks(&self) -> usize {
        self.config.num_decks
    }

    /// The cutoff fraction.
    pub fn cutoff(&self) -> f64 {
        self.config.cutoff
    }

    /// The shoe configuration.
    pub fn config(&self) -> &ShoeConfig {
        &self.config
    }

    /// Iterates the remaining cards in dealing order.
    pub fn cards(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use ahash::HashSet;

    fn seeded_shoe(config: ShoeConfig) -> Shoe {
        let mut shoe = Shoe::with_rng(config, StdRng::seed_from_u64(101)).unwrap();
        shoe.create_shoe();
        shoe
    }

    #[test]
    fn shoe_invalid_config() {
        let err = Shoe::new(ShoeConfig::default().with_decks(0)).unwrap_err();
        assert_eq!(err, ShoeError::NoDecks);

        let err = Shoe::new(ShoeConfig::default().with_cutoff(1.5)).unwrap_err();
        assert_eq!(err, ShoeError::InvalidCutoff(1.5));

        assert!(Shoe::new(ShoeConfig::default().with_cutoff(f64::NAN)).is_err());
    }

    #[test]
    fn shoe_create() {
        for decks in 1..=8 {
            let shoe = seeded_shoe(ShoeConfig::default().with_decks(decks));
            assert_eq!(shoe.len(), decks * Deck::SIZE);
            assert_eq!(shoe.capacity(), decks * Deck::SIZE);
            assert_eq!(shoe.num_decks(), decks);
        }
    }

    #[test]
    fn shoe_create_is_rebuild() {
        let mut shoe = seeded_shoe(ShoeConfig::default().with_decks(2));
        shoe.deal_many(30).unwrap();
        shoe.create_shoe();
        assert_eq!(shoe.len(), 2 * Deck::SIZE);
    }

    #[test]
    fn shoe_decks_blocks() {
        // Each 52 cards block is a full deck.
        let shoe = seeded_shoe(ShoeConfig::default().with_decks(3));
        let cards = shoe.cards().copied().collect::<Vec<_>>();

        for block in cards.chunks(Deck::SIZE) {
            let unique = block.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), Deck::SIZE);
        }
    }

    #[test]
    fn shoe_add_shuffled_deck() {
        let mut shoe = seeded_shoe(ShoeConfig::default().with_decks(2));
        let front = shoe.cards().copied().collect::<Vec<_>>();

        shoe.deal_many(60).unwrap();
        shoe.add_shuffled_deck().unwrap();
        assert_eq!(shoe.len(), 96);
        assert!(shoe.len() <= shoe.capacity());

        // The new deck goes after the remaining cards.
        let cards = shoe.cards().copied().collect::<Vec<_>>();
        assert_eq!(&cards[..44], &front[60..]);
    }

    #[test]
    fn shoe_add_shuffled_deck_full() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        let before = shoe.cards().copied().collect::<Vec<_>>();

        let err = shoe.add_shuffled_deck().unwrap_err();
        assert_eq!(
            err,
            ShoeError::ShoeFull {
                remaining: 52,
                capacity: 52
            }
        );
        assert_eq!(shoe.cards().copied().collect::<Vec<_>>(), before);

        // A single card left still leaves no room for a deck.
        shoe.deal_many(1).unwrap();
        assert!(shoe.add_shuffled_deck().is_err());
        assert_eq!(shoe.len(), 51);
        assert_eq!(shoe.percent_remaining(), 98);
    }

    #[test]
    fn shoe_add_shuffled_deck_empty() {
        let mut shoe = Shoe::with_rng(ShoeConfig::default().with_decks(2), StdRng::seed_from_u64(3))
            .unwrap();
        shoe.add_shuffled_deck().unwrap();
        shoe.add_shuffled_deck().unwrap();
        assert_eq!(shoe.len(), shoe.capacity());
        assert_eq!(shoe.percent_remaining(), 100);
        assert!(shoe.add_shuffled_deck().is_err());
    }

    #[test]
    fn shoe_deal_one() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        let front = *shoe.cards().next().unwrap();

        let card = shoe.deal().unwrap();
        assert_eq!(card, front);
        assert_eq!(shoe.len(), 51);
    }

    #[test]
    fn shoe_deal_many() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        let front = shoe.cards().take(5).copied().collect::<Vec<_>>();

        let cards = shoe.deal_many(5).unwrap();
        assert_eq!(cards, front);
        assert_eq!(shoe.len(), 47);

        // Dealt cards are gone from the shoe.
        let rest = shoe.deal_many(47).unwrap();
        assert!(rest.iter().all(|c| !cards.contains(c)));
        assert!(shoe.is_empty());

        assert!(shoe.deal_many(0).unwrap().is_empty());
    }

    #[test]
    fn shoe_deal_insufficient() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        let before = shoe.cards().copied().collect::<Vec<_>>();

        let err = shoe.deal_many(53).unwrap_err();
        assert_eq!(
            err,
            ShoeError::InsufficientCards {
                requested: 53,
                remaining: 52
            }
        );
        assert_eq!(shoe.len(), 52);
        assert_eq!(shoe.cards().copied().collect::<Vec<_>>(), before);

        shoe.deal_many(52).unwrap();
        let err = shoe.deal().unwrap_err();
        assert_eq!(
            err,
            ShoeError::InsufficientCards {
                requested: 1,
                remaining: 0
            }
        );
    }

    #[test]
    fn shoe_deal_all_unique_cards() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        let mut cards = HashSet::default();
        while !shoe.is_empty() {
            assert!(cards.insert(shoe.deal().unwrap()));
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.contains(&Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn shoe_seeded_deals() {
        let mut s1 = seeded_shoe(ShoeConfig::default().with_decks(2));
        let mut s2 = seeded_shoe(ShoeConfig::default().with_decks(2));
        assert_eq!(s1.deal_many(104).unwrap(), s2.deal_many(104).unwrap());
    }

    #[test]
    fn shoe_percent_remaining() {
        let mut shoe = seeded_shoe(ShoeConfig::default().with_decks(2));
        assert_eq!(shoe.percent_remaining(), 100);

        // 77 of 104 cards is 74.03%.
        shoe.deal_many(27).unwrap();
        assert_eq!(shoe.percent_remaining(), 74);
    }

    #[test]
    fn shoe_past_cutoff_literal() {
        let mut shoe = seeded_shoe(ShoeConfig::default());
        assert!(!shoe.past_cutoff());

        // Below the 75% of the shoe the check still doesn't fire as it
        // compares a percent with a fraction.
        shoe.deal_many(14).unwrap();
        assert_eq!(shoe.percent_remaining(), 73);
        assert!(!shoe.past_cutoff());

        // One card is 1%.
        shoe.deal_many(37).unwrap();
        assert_eq!(shoe.percent_remaining(), 1);
        assert!(!shoe.past_cutoff());

        shoe.deal().unwrap();
        assert!(shoe.past_cutoff());
    }

    #[test]
    fn shoe_past_cutoff_literal_multi_deck() {
        // With more decks the floored percent reaches 0 before the shoe is
        // empty.
        let mut shoe = seeded_shoe(ShoeConfig::default().with_decks(2));

        // 2 of 104 cards is 1%.
        shoe.deal_many(102).unwrap();
        assert_eq!(shoe.percent_remaining(), 1);
        assert!(!shoe.past_cutoff());

        // 1 of 104 cards is 0%.
        shoe.deal().unwrap();
        assert_eq!(shoe.len(), 1);
        assert_eq!(shoe.percent_remaining(), 0);
        assert!(shoe.past_cutoff());

        let mut shoe = seeded_shoe(ShoeConfig::default().with_decks(6));
        shoe.deal_many(309).unwrap();
        assert_eq!(shoe.len(), 3);
        assert!(shoe.past_cutoff());
    }

    #[test]
    fn shoe_past_cutoff_fraction() {
        let config = ShoeConfig::default().with_scale(CutoffScale::Fraction);
        let mut shoe = seeded_shoe(config);
        assert!(!shoe.past_cutoff());

        // 39 of 52 cards is 75%.
        shoe.deal_many(13).unwrap();
        assert_eq!(shoe.percent_remaining(), 75);
        assert!(!shoe.past_cutoff());

        shoe.deal().unwrap();
        assert_eq!(shoe.percent_remaining(), 73);
        assert!(shoe.past_cutoff());
    }

    #[test]
    fn shoe_empty_past_cutoff() {
        let shoe = Shoe::with_rng(ShoeConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        assert!(shoe.is_empty());
        assert!(shoe.past_cutoff());
    }
}
