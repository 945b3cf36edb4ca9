use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

use crate::{
    config::EngineConfig,
    deck::{Card, Deck},
    error::EngineError,
    hand::{hand_value, Hand, Side, BLACKJACK},
};

/// Dealer draws below this total and stands on every 17, soft or hard.
pub const DEALER_STANDS_ON: u16 = 17;

const HOLE_CARD: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundState {
    NotStarted,
    PlayerTurn,
    DealerTurn,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Player busts! Dealer wins.",
            Outcome::DealerBust => "Dealer busts! Player wins.",
            Outcome::PlayerWin => "Player wins.",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::Push => "Push.",
        }
    }
}

/// Settles a round where neither side busted before the dealer finished.
pub fn resolve(player_value: u16, dealer_value: u16, ties_push: bool) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if ties_push && dealer_value == player_value {
        Outcome::Push
    } else if dealer_value >= player_value {
        Outcome::DealerWin
    } else {
        Outcome::PlayerWin
    }
}

/// What the host is allowed to see of the current round.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub state: RoundState,
    pub player_hand: Vec<Card>,
    pub player_value: u16,
    pub dealer_hand: Vec<Card>,
    pub dealer_value: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_hidden_index: Option<usize>,
    pub outcome: Option<Outcome>,
    pub message: Option<&'static str>,
    pub cards_remaining: usize,
}

pub struct RoundEngine {
    rng: SmallRng,
    ties_push: bool,
    state: RoundState,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    outcome: Option<Outcome>,
}

impl RoundEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        RoundEngine {
            rng,
            ties_push: config.ties_push,
            state: RoundState::NotStarted,
            deck: Deck::stacked(Vec::new()),
            player: Hand::new(Side::Player),
            dealer: Hand::new(Side::Dealer),
            outcome: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Abandons any round in progress and deals a new one from a fresh shuffled deck.
    pub fn new_round(&mut self) -> Result<RoundView, EngineError> {
        let deck = Deck::fresh(&mut self.rng);
        self.new_round_with_deck(deck)
    }

    /// Same as [`RoundEngine::new_round`] but deals from a deck supplied by the caller.
    pub fn new_round_with_deck(&mut self, deck: Deck) -> Result<RoundView, EngineError> {
        if matches!(self.state, RoundState::PlayerTurn | RoundState::DealerTurn) {
            log::info!("abandoning round in progress");
        }
        self.state = RoundState::NotStarted;
        self.outcome = None;
        self.deck = deck;
        self.player = Hand::new(Side::Player);
        self.dealer = Hand::new(Side::Dealer);

        // player, dealer, player, dealer
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.player.push(card);
            let card = self.deck.draw()?;
            self.dealer.push(card);
        }

        self.state = RoundState::PlayerTurn;
        log::info!(
            "new round: player {}, dealer shows {}",
            self.player.value(),
            self.dealer.cards()[0].value()
        );
        Ok(self.view())
    }

    pub fn hit(&mut self) -> Result<RoundView, EngineError> {
        match self.state {
            RoundState::PlayerTurn => {}
            RoundState::Settled => return Ok(self.view()),
            state => return Err(self.reject("hit", state)),
        }

        let card = self.draw_or_abandon()?;
        self.player.push(card);
        if self.player.is_bust() {
            self.settle(Outcome::PlayerBust);
        }
        Ok(self.view())
    }

    pub fn stand(&mut self) -> Result<RoundView, EngineError> {
        self.stand_with(|_, _| {})
    }

    /// Stands and auto-plays the dealer, reporting each drawn card and the dealer's new total.
    pub fn stand_with<F>(&mut self, mut on_dealer_draw: F) -> Result<RoundView, EngineError>
    where
        F: FnMut(&Card, u16),
    {
        match self.state {
            RoundState::PlayerTurn => {}
            RoundState::Settled => return Ok(self.view()),
            state => return Err(self.reject("stand", state)),
        }

        self.state = RoundState::DealerTurn;
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw_or_abandon()?;
            self.dealer.push(card);
            on_dealer_draw(&card, self.dealer.value());
        }

        let outcome = resolve(self.player.value(), self.dealer.value(), self.ties_push);
        self.settle(outcome);
        Ok(self.view())
    }

    pub fn view(&self) -> RoundView {
        let hole_hidden = self.hole_card_hidden();
        let dealer_hand: Vec<Card> = if hole_hidden {
            self.dealer.cards()[..HOLE_CARD].to_vec()
        } else {
            self.dealer.cards().to_vec()
        };
        let dealer_value = if hole_hidden {
            hand_value(&dealer_hand)
        } else {
            self.dealer.value()
        };

        RoundView {
            state: self.state,
            player_hand: self.player.cards().to_vec(),
            player_value: self.player.value(),
            dealer_hand,
            dealer_value,
            dealer_hidden_index: hole_hidden.then_some(HOLE_CARD),
            outcome: self.outcome,
            message: self.outcome.map(|outcome| outcome.message()),
            cards_remaining: self.deck.remaining(),
        }
    }

    // The hole card stays down until the dealer plays; a player bust ends the round first.
    fn hole_card_hidden(&self) -> bool {
        self.dealer.len() > HOLE_CARD
            && (self.state == RoundState::PlayerTurn || self.outcome == Some(Outcome::PlayerBust))
    }

    fn draw_or_abandon(&mut self) -> Result<Card, EngineError> {
        self.deck.draw().map_err(|err| {
            log::error!("{err}; abandoning round");
            self.state = RoundState::NotStarted;
            err
        })
    }

    fn settle(&mut self, outcome: Outcome) {
        self.state = RoundState::Settled;
        self.outcome = Some(outcome);
        log::info!(
            "round settled: {:?} (player {}, dealer {})",
            outcome,
            self.player.value(),
            self.dealer.value()
        );
    }

    fn reject(&self, action: &'static str, state: RoundState) -> EngineError {
        log::warn!("rejected {action} in {state:?}");
        EngineError::InvalidState { action, state }
    }
}
