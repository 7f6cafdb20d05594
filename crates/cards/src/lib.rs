// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoebox blackjack cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use shoebox_cards::{Card, CardValue, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), CardValue::Ace);
//! assert_eq!(ah.image_name(), "AH.png");
//! ```
//!
//! a [Deck] type to build and shuffle a 52 cards deck, and a [Shoe] that
//! combines one or more shuffled decks for dealing:
//!
//! ```
//! # use shoebox_cards::{Shoe, ShoeConfig};
//! let mut shoe = Shoe::new(ShoeConfig::default().with_decks(6)).unwrap();
//! shoe.create_shoe();
//! assert_eq!(shoe.len(), 312);
//!
//! let card = shoe.deal().unwrap();
//! let hand = shoe.deal_many(2).unwrap();
//! assert_eq!(shoe.len(), 309);
//!
//! // The caller decides when to rebuild the shoe.
//! if shoe.past_cutoff() {
//!     shoe.create_shoe();
//! }
//! ```
//!
//! Shuffling takes any [rand::Rng], use a seeded generator for reproducible
//! deals:
//!
//! ```
//! # use shoebox_cards::{Shoe, ShoeConfig};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut s1 = Shoe::with_rng(ShoeConfig::default(), StdRng::seed_from_u64(1)).unwrap();
//! let mut s2 = Shoe::with_rng(ShoeConfig::default(), StdRng::seed_from_u64(1)).unwrap();
//! s1.create_shoe();
//! s2.create_shoe();
//! assert_eq!(s1.deal_many(52).unwrap(), s2.deal_many(52).unwrap());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardValue, Rank, Suit};

mod deck;
pub use deck::Deck;

mod shoe;
pub use shoe::{CutoffScale, Shoe, ShoeConfig, ShoeError};
