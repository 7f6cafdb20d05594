// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, slice};

/// The file extension of a card display identifier.
const IMAGE_EXT: &str = "png";

/// A blackjack card.
///
/// A card is an immutable (rank, suit, value) triple, the value of a card built
/// with [Card::new] comes from the rank table, see [Rank::value].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    value: CardValue,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self::with_value(rank, suit, rank.value())
    }

    /// Create a card with an explicit value.
    ///
    /// The value is stored as given, callers are expected to pass the value
    /// that matches the rank.
    pub fn with_value(rank: Rank, suit: Suit, value: CardValue) -> Card {
        Self { rank, suit, value }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card value.
    pub fn value(&self) -> CardValue {
        self.value
    }

    /// Checks if this card is an ace.
    #[inline]
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// The card display identifier, the uppercased first letters of the rank
    /// and suit names followed by the image extension (i.e. `AS.png`).
    pub fn image_name(&self) -> String {
        format!("{}.{IMAGE_EXT}", self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// The blackjack value of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    /// A single value from 2 to 10.
    Fixed(u8),
    /// The ace values, 1 or 11.
    Ace,
}

impl CardValue {
    /// The values this card may count for, lowest first.
    pub fn contributions(&self) -> &[u8] {
        match self {
            CardValue::Fixed(n) => slice::from_ref(n),
            CardValue::Ace => &[1, 11],
        }
    }

    /// The lowest value this card may count for.
    pub fn low(&self) -> u8 {
        self.contributions()[0]
    }

    /// The highest value this card may count for.
    pub fn high(&self) -> u8 {
        let values = self.contributions();
        values[values.len() - 1]
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks in deck order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The rank name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    /// The blackjack value for this rank.
    pub fn value(&self) -> CardValue {
        match self {
            Rank::Ace => CardValue::Ace,
            Rank::Jack | Rank::Queen | Rank::King => CardValue::Fixed(10),
            r => CardValue::Fixed(*r as u8),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ranks names are ASCII and never empty.
        let letter = self.name().as_bytes()[0].to_ascii_uppercase() as char;
        write!(f, "{letter}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}
