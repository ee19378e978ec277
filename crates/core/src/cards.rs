use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Foundation slot order, left to right.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.name() == name)
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        let symbol = symbol.to_ascii_uppercase();
        Self::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }
}

/// Ranks in build order, Ace lowest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 1 for Ace through 13 for King.
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_value(value: u8) -> Option<Self> {
        let index = usize::from(value.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// The rank one step higher, `None` above King.
    pub fn succ(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// The rank one step lower, `None` below Ace.
    pub fn pred(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            other => other.name(),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.name() == name)
    }

    fn from_short(short: &str) -> Option<Self> {
        let upper = short.to_ascii_uppercase();
        Self::ALL.into_iter().find(|rank| rank.short() == upper)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("empty card label")]
    Empty,
    #[error("unknown rank '{0}'")]
    UnknownRank(String),
    #[error("unknown suit '{0}'")]
    UnknownSuit(String),
}

/// Face identity of a card. Never changes once dealt; where the card sits is
/// tracked by `GameState`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Asset-style key, e.g. `queen_of_spades`.
    pub fn face_key(&self) -> String {
        format!("{}_of_{}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short(), self.suit.symbol())
    }
}

/// Accepts either a face key (`10_of_hearts`) or a short label (`10H`, `qs`).
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CardParseError::Empty);
        }
        if let Some((rank, suit)) = raw.split_once("_of_") {
            let rank = rank.to_ascii_lowercase();
            let suit = suit.to_ascii_lowercase();
            let rank =
                Rank::from_name(&rank).ok_or_else(|| CardParseError::UnknownRank(rank.clone()))?;
            let suit =
                Suit::from_name(&suit).ok_or_else(|| CardParseError::UnknownSuit(suit.clone()))?;
            return Ok(Card::new(suit, rank));
        }
        let mut chars = raw.chars();
        let symbol = chars.next_back().ok_or(CardParseError::Empty)?;
        let rank_part = chars.as_str();
        let suit = Suit::from_symbol(symbol)
            .ok_or_else(|| CardParseError::UnknownSuit(symbol.to_string()))?;
        let rank = Rank::from_short(rank_part)
            .ok_or_else(|| CardParseError::UnknownRank(rank_part.to_string()))?;
        Ok(Card::new(suit, rank))
    }
}
