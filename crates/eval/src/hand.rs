// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack hand evaluator.
//!
//! A hand score is the sum of the cards values, with aces counted on their
//! high value and then lowered by 10 one at a time while the hand is over 21.
//! How much an ace counts before lowering depends on the [AceRule]: the
//! default [AceRule::Literal] rule adds both ace values (12) and the
//! [AceRule::Standard] rule adds 11.
//!
//! The free functions in this module use the default rule, use the [AceRule]
//! methods to score with a given rule.
use serde::{Deserialize, Serialize};

use shoebox_cards::{Card, CardValue};

/// The blackjack limit.
pub const BLACKJACK: u32 = 21;

/// The score below which a dealer must draw.
pub const HARD_17: u32 = 17;

/// The amount an ace loses when counted on its low value.
const ACE_ADJUST: u32 = 10;

/// How an ace adds to a hand before adjusting for busts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AceRule {
    /// An ace adds the sum of its values, a lone ace scores 12 and ace-king
    /// scores 12.
    #[default]
    Literal,
    /// An ace adds 11, a lone ace scores 11 and ace-king scores 21.
    Standard,
}

impl AceRule {
    /// The points a card adds before adjusting aces.
    fn points(&self, value: CardValue) -> u32 {
        match self {
            AceRule::Literal => value.contributions().iter().map(|&v| v as u32).sum(),
            AceRule::Standard => value.high() as u32,
        }
    }

    /// Evaluates a hand with this rule.
    pub fn eval(&self, hand: &[Card]) -> HandValue {
        let mut num_aces = hand.iter().filter(|c| c.is_ace()).count();
        let mut score = hand.iter().map(|c| self.points(c.value())).sum::<u32>();

        while score > BLACKJACK && num_aces > 0 {
            score -= ACE_ADJUST;
            num_aces -= 1;
        }

        HandValue {
            score,
            soft: num_aces > 0,
        }
    }

    /// The hand score with this rule.
    pub fn score_hand(&self, hand: &[Card]) -> u32 {
        self.eval(hand).score()
    }

    /// Checks if the hand is over 21 with this rule.
    pub fn is_bust(&self, hand: &[Card]) -> bool {
        self.eval(hand).is_bust()
    }

    /// Checks if the hand scores less than 17 with this rule.
    pub fn below_hard_17(&self, hand: &[Card]) -> bool {
        self.score_hand(hand) < HARD_17
    }

    /// Checks if the hand is a soft 17 with this rule.
    pub fn is_soft_17(&self, hand: &[Card]) -> bool {
        let value = self.eval(hand);
        value.is_soft() && value.score() == HARD_17
    }

    /// Checks if the hand is a two cards 21 with this rule.
    pub fn is_blackjack(&self, hand: &[Card]) -> bool {
        hand.len() == 2 && self.score_hand(hand) == BLACKJACK
    }
}

/// The value of a blackjack hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    score: u32,
    soft: bool,
}

impl HandValue {
    /// Evaluates a hand with the default rule.
    pub fn eval(hand: &[Card]) -> Self {
        AceRule::default().eval(hand)
    }

    /// The hand score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Checks if an ace is still counted on its high value.
    pub fn is_soft(&self) -> bool {
        self.soft
    }

    /// Checks if the score is over 21.
    pub fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }
}

/// Evaluates a hand score with the default rule.
pub fn eval_hand(hand: &[Card]) -> u32 {
    HandValue::eval(hand).score()
}

/// Returns the hand score.
pub fn score_hand(hand: &[Card]) -> u32 {
    eval_hand(hand)
}

/// Checks if the hand is over 21.
pub fn is_bust(hand: &[Card]) -> bool {
    eval_hand(hand) > BLACKJACK
}

/// Checks if the hand scores less than 17, a dealer with this hand must draw.
pub fn below_hard_17(hand: &[Card]) -> bool {
    eval_hand(hand) < HARD_17
}

/// Checks if the hand is a soft 17.
pub fn is_soft_17(hand: &[Card]) -> bool {
    AceRule::default().is_soft_17(hand)
}

/// Checks if the hand is a two cards 21.
pub fn is_blackjack(hand: &[Card]) -> bool {
    AceRule::default().is_blackjack(hand)
}
