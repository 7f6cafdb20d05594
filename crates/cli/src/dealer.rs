// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealer hands played from a shoe.
use anyhow::{Result, bail};
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

use shoebox_eval::{AceRule, Card, Shoe, ShoeError};

/// Dealer hands statistics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    /// Number of hands played.
    pub hands: usize,
    /// Number of hands over 21.
    pub busts: usize,
    /// Number of two cards 21.
    pub blackjacks: usize,
    /// Number of hands that stood on a soft 17.
    pub soft_17s: usize,
    /// Number of times the shoe was rebuilt.
    pub rebuilds: usize,
    /// Sum of all the hands scores.
    pub total_score: u64,
}

impl Summary {
    /// The average hand score.
    pub fn average_score(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.total_score as f64 / self.hands as f64
        }
    }

    /// The fraction of busted hands.
    pub fn bust_rate(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.busts as f64 / self.hands as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hands:         {}", self.hands)?;
        writeln!(f, "Busts:         {} ({:.2}%)", self.busts, self.bust_rate() * 100.0)?;
        writeln!(f, "Blackjacks:    {}", self.blackjacks)?;
        writeln!(f, "Soft 17s:      {}", self.soft_17s)?;
        writeln!(f, "Average score: {:.2}", self.average_score())?;
        write!(f, "Rebuilds:      {}", self.rebuilds)
    }
}

/// A dealer that draws to 17.
pub struct Dealer<R> {
    shoe: Shoe<R>,
    rule: AceRule,
    summary: Summary,
}

impl<R: Rng> Dealer<R> {
    /// Creates a dealer with a fresh shoe.
    pub fn new(mut shoe: Shoe<R>, rule: AceRule) -> Self {
        shoe.create_shoe();
        Self {
            shoe,
            rule,
            summary: Summary::default(),
        }
    }

    /// Plays a number of hands and returns the statistics.
    pub fn run(mut self, rounds: usize) -> Result<Summary> {
        info!(
            "Playing {rounds} hands with {} decks {:?} aces",
            self.shoe.num_decks(),
            self.rule
        );

        for _ in 0..rounds {
            self.play_hand()?;
        }

        Ok(self.summary)
    }

    /// Plays one dealer hand.
    pub fn play_hand(&mut self) -> Result<Vec<Card>> {
        if self.shoe.past_cutoff() {
            self.rebuild();
        }

        let hand = match self.draw_hand() {
            Ok(hand) => hand,
            Err(e @ ShoeError::InsufficientCards { .. }) => {
                // The cards dealt so far are discarded with the shoe.
                warn!("{e}, rebuilding shoe");
                self.rebuild();
                self.draw_hand()?
            }
            Err(e) => bail!(e),
        };

        let value = self.rule.eval(&hand);
        debug!("Dealer hand {hand:?} score {}", value.score());

        self.summary.hands += 1;
        self.summary.total_score += value.score() as u64;
        if value.is_bust() {
            self.summary.busts += 1;
        }
        if self.rule.is_blackjack(&hand) {
            self.summary.blackjacks += 1;
        }
        if self.rule.is_soft_17(&hand) {
            self.summary.soft_17s += 1;
        }

        Ok(hand)
    }

    /// The dealer shoe.
    pub fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    fn draw_hand(&mut self) -> Result<Vec<Card>, ShoeError> {
        let mut hand = self.shoe.deal_many(2)?;
        while self.rule.below_hard_17(&hand) {
            hand.push(self.shoe.deal()?);
        }

        Ok(hand)
    }

    fn rebuild(&mut self) {
        self.shoe.create_shoe();
        self.summary.rebuilds += 1;
    }
}
