// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is written on the wire as a 2 characters code `<rank><suit>` where the
/// rank uses `T` for ten and the suit is lowercase:
///
/// ```text
///   As  Td  9h  2c
/// ```
///
/// and shown to the user with the rank label and the suit symbol (`A♠ 10♦ 9♥ 2♣`).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The wire code for this card, same as its [Display](fmt::Display) output.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// The label shown on a filled card slot.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
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

/// Error returned when a card string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card {input:?}, expected <rank><suit> like Ah, 10d or Tc")]
pub struct ParseCardError {
    input: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError {
            input: s.to_string(),
        };

        let s = s.trim();
        let suit_ch = s.chars().last().ok_or_else(err)?;
        let rank_str = &s[..s.len() - suit_ch.len_utf8()];

        let rank = Rank::from_label(rank_str).ok_or_else(err)?;
        let suit = Suit::from_char(suit_ch).ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.code()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
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
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the ranks in the order they appear on the picker, aces first.
    pub fn picker_order() -> impl Iterator<Item = Rank> {
        Self::ranks().rev()
    }

    /// The code used for this rank on the wire.
    pub fn code(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// The label shown on the picker button, equal to the code but for ten.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Maps a picker label to a rank.
    ///
    /// Accepts the labels shown on the picker (`"10"` for ten) and the wire
    /// codes (`"T"`), case insensitive.
    pub fn from_label(label: &str) -> Option<Rank> {
        let label = label.trim();
        if label == "10" {
            return Some(Rank::Ten);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let c = c.to_ascii_uppercase();
                Self::ranks().find(|r| r.code() == c)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in picker order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The code used for this suit on the wire.
    pub fn code(&self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// The symbol shown on the picker button.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Checks if this suit is painted red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Maps a suit code (either case) or symbol to a suit.
    pub fn from_char(c: char) -> Option<Suit> {
        Self::suits().find(|s| s.code() == c.to_ascii_lowercase() || s.symbol() == c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_labels_map_to_codes() {
        let labels = [
            "A", "K", "Q", "J", "10", "9", "8", "7", "6", "5", "4", "3", "2",
        ];

        for (label, rank) in labels.iter().zip(Rank::picker_order()) {
            let parsed = Rank::from_label(label).unwrap();
            assert_eq!(parsed, rank);
            assert_eq!(parsed.label(), *label);

            let expected = if *label == "10" {
                'T'
            } else {
                label.chars().next().unwrap()
            };
            assert_eq!(parsed.code(), expected);
        }

        assert_eq!(Rank::from_label("T"), Some(Rank::Ten));
        assert_eq!(Rank::from_label("k"), Some(Rank::King));
        assert_eq!(Rank::from_label("1"), None);
        assert_eq!(Rank::from_label("11"), None);
        assert_eq!(Rank::from_label(""), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");
        assert_eq!(c.label(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");
        assert_eq!(c.label(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.code(), "Ac");
        assert_eq!(format!("{c:?}"), "Card(Ac)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("Ah".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("10d".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("tc".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!("9♠".parse(), Ok(Card::new(Rank::Nine, Suit::Spades)));
        assert_eq!("QS".parse(), Ok(Card::new(Rank::Queen, Suit::Spades)));

        assert!("".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
        assert!("1h".parse::<Card>().is_err());

        let err = "Zz".parse::<Card>().unwrap_err();
        assert!(err.to_string().contains("\"Zz\""));
    }

    #[test]
    fn suits_codes_and_symbols() {
        let codes = Suit::suits().map(|s| s.code()).collect::<String>();
        assert_eq!(codes, "shdc");

        let symbols = Suit::suits().map(|s| s.symbol()).collect::<String>();
        assert_eq!(symbols, "♠♥♦♣");

        assert!(Suit::Hearts.is_red());
        assert!(!Suit::Clubs.is_red());
    }
}
