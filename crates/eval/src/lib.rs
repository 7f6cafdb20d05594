// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoebox blackjack hand evaluator.
//!
//! Scores blackjack hands dealt from a [Shoe]:
//!
//! ```
//! # use shoebox_eval::*;
//! let hand = [Card::new(Rank::King, Suit::Clubs), Card::new(Rank::Six, Suit::Hearts)];
//! assert_eq!(score_hand(&hand), 16);
//! assert!(!is_bust(&hand));
//! assert!(below_hard_17(&hand));
//! ```
//!
//! The default [AceRule::Literal] rule counts an ace for both its values
//! before adjusting for busts, so ace-king scores 12, use
//! [AceRule::Standard] for the casino rule:
//!
//! ```
//! # use shoebox_eval::*;
//! let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
//! assert_eq!(score_hand(&hand), 12);
//! assert_eq!(AceRule::Standard.score_hand(&hand), 21);
//! assert!(AceRule::Standard.is_blackjack(&hand));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{
    AceRule, HandValue, below_hard_17, eval_hand, is_blackjack, is_bust, is_soft_17, score_hand,
};

// Reexport cards types.
pub use shoebox_cards::{Card, CardValue, CutoffScale, Deck, Rank, Shoe, ShoeConfig, ShoeError, Suit};
