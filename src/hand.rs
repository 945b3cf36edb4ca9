use serde::Serialize;

use crate::deck::Card;

pub const BLACKJACK: u16 = 21;

/// Returns the best total and whether an ace is still counted as 11.
pub fn hand_total(hand: &[Card]) -> (u16, bool) {
    let mut total: u32 = 0;
    let mut aces = 0;

    for card in hand {
        total += u32::from(card.value());
        if card.is_ace() { aces += 1; }
    }

    while total > u32::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (u16::try_from(total).unwrap_or(u16::MAX), aces > 0)
}

pub fn hand_value(hand: &[Card]) -> u16 {
    hand_total(hand).0
}

pub fn is_bust(hand: &[Card]) -> bool {
    hand_value(hand) > BLACKJACK
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Dealer,
}

#[derive(Clone, Debug, Serialize)]
pub struct Hand {
    pub side: Side,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(side: Side) -> Self {
        Hand { side, cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        hand_total(&self.cards).1
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }
}
