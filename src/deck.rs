use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    fn atlas_name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// Rank-ascending, aces high.
    pub const ALL: [Rank; 13] = [
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
        Rank::Ace,
    ];

    /// Nominal blackjack value; aces count 11 until a hand needs them soft.
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
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
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Frame name in the playing-card sprite atlas, e.g. `cardHearts10`.
    pub fn sprite_key(&self) -> String {
        format!("card{}{}", self.suit.atlas_name(), self.rank.symbol())
    }
}

/// All 52 cards, suit-major and rank-ascending.
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Fisher-Yates permutation in place.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

pub fn draw(cards: &mut Vec<Card>) -> Result<Card, EngineError> {
    cards.pop().ok_or(EngineError::EmptyDeck)
}

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn fresh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = create_deck();
        shuffle(&mut cards, rng);
        Deck { cards }
    }

    /// Deck that deals `draw_order` front to back.
    pub fn stacked(draw_order: Vec<Card>) -> Self {
        let mut cards = draw_order;
        cards.reverse();
        Deck { cards }
    }

    pub fn draw(&mut self) -> Result<Card, EngineError> {
        let card = draw(&mut self.cards)?;
        log::debug!("drew {} ({} left)", card.sprite_key(), self.cards.len());
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_create_deck_has_52_unique_cards() {
        let cards = create_deck();
        assert_eq!(cards.len(), 52);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_create_deck_canonical_order() {
        let cards = create_deck();
        assert_eq!(cards[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(cards[12], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(cards[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(cards[51], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(cards, create_deck());
    }

    #[test]
    fn test_shuffle_is_in_place_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut cards = create_deck();
        let before = cards.as_ptr();
        shuffle(&mut cards, &mut rng);
        assert_eq!(cards.as_ptr(), before);
        assert_ne!(cards, create_deck());

        let mut sorted = cards.clone();
        sorted.sort_by_key(|c| (c.suit as u8, c.rank as u8));
        assert_eq!(sorted, create_deck());
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let mut a = create_deck();
        let mut b = create_deck();
        shuffle(&mut a, &mut SmallRng::seed_from_u64(42));
        shuffle(&mut b, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_positions_roughly_uniform() {
        const TRIALS: usize = 20_000;
        let canonical = create_deck();
        let mut rng = SmallRng::seed_from_u64(2024);
        let mut counts = vec![[0u32; 52]; 52];

        for _ in 0..TRIALS {
            let mut cards = canonical.clone();
            shuffle(&mut cards, &mut rng);
            for (position, card) in cards.iter().enumerate() {
                let index = canonical.iter().position(|c| c == card).unwrap();
                counts[position][index] += 1;
            }
        }

        // Expected ~385 per cell, sd ~19; bounds are about 5 sd.
        for row in &counts {
            for &count in row.iter() {
                assert!((290..=480).contains(&count), "count {count} out of range");
            }
        }
    }

    #[test]
    fn test_draw_removes_last_card() {
        let mut cards = create_deck();
        let last = *cards.last().unwrap();
        let drawn = draw(&mut cards).unwrap();
        assert_eq!(drawn, last);
        assert_eq!(cards.len(), 51);
        assert!(!cards.contains(&drawn));
    }

    #[test]
    fn test_draw_empty_deck_errors() {
        let mut cards: Vec<Card> = Vec::new();
        assert_eq!(draw(&mut cards), Err(EngineError::EmptyDeck));

        let mut deck = Deck::stacked(Vec::new());
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck));
    }

    #[test]
    fn test_stacked_deck_deals_in_given_order() {
        let first = Card::new(Suit::Clubs, Rank::Ten);
        let second = Card::new(Suit::Hearts, Rank::Ace);
        let mut deck = Deck::stacked(vec![first, second]);
        assert_eq!(deck.draw().unwrap(), first);
        assert_eq!(deck.remaining(), 1);
        assert!(!deck.contains(&first));
        assert_eq!(deck.draw().unwrap(), second);
    }

    #[test]
    fn test_fresh_deck_is_full() {
        let deck = Deck::fresh(&mut SmallRng::seed_from_u64(1));
        assert_eq!(deck.remaining(), 52);
        assert!(deck.contains(&Card::new(Suit::Spades, Rank::Queen)));
    }

    #[test]
    fn test_sprite_key() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).sprite_key(), "cardHearts10");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).sprite_key(), "cardSpadesA");
    }

    #[test]
    fn test_card_serializes_like_host_expects() {
        let json = serde_json::to_string(&Card::new(Suit::Diamonds, Rank::King)).unwrap();
        assert_eq!(json, r#"{"suit":"diamonds","rank":"K"}"#);
    }
}
