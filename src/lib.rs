use js_sys::Function;
use wasm_bindgen::prelude::*;

mod config;
mod console;
mod deck;
mod error;
mod game;
mod hand;
pub mod host;

pub use config::EngineConfig;
pub use deck::{create_deck, draw, shuffle, Card, Deck, Rank, Suit};
pub use error::EngineError;
pub use game::{resolve, Outcome, RoundEngine, RoundState, RoundView, DEALER_STANDS_ON};
pub use hand::{hand_total, hand_value, is_bust, Hand, Side};

fn engine_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

/// One table session for the page: owns the deck and both hands between clicks.
#[wasm_bindgen]
pub struct BlackjackRound {
    engine: RoundEngine,
}

#[wasm_bindgen]
impl BlackjackRound {
    #[wasm_bindgen(constructor)]
    pub fn new(config: &JsValue) -> Result<BlackjackRound, JsValue> {
        console_error_panic_hook::set_once();
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?
        };
        let level = config.level_filter().map_err(engine_error)?;
        console::init(level);

        Ok(BlackjackRound {
            engine: RoundEngine::new(&config),
        })
    }

    #[wasm_bindgen(js_name = newRound)]
    pub fn new_round(&mut self) -> Result<JsValue, JsValue> {
        let view = self.engine.new_round().map_err(engine_error)?;
        to_js(&view)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let view = self.engine.hit().map_err(engine_error)?;
        to_js(&view)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let view = self.engine.stand().map_err(engine_error)?;
        to_js(&view)
    }

    /// Like `stand`, calling `on_draw(card, dealerTotal)` for every card the dealer takes.
    #[wasm_bindgen(js_name = standWithEvents)]
    pub fn stand_with_events(&mut self, on_draw: &Function) -> Result<JsValue, JsValue> {
        let view = self
            .engine
            .stand_with(|card, total| {
                if let Ok(card) = serde_wasm_bindgen::to_value(card) {
                    let _ = on_draw.call2(&JsValue::NULL, &card, &JsValue::from(total));
                }
            })
            .map_err(engine_error)?;
        to_js(&view)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.view())
    }
}

#[wasm_bindgen(js_name = handValue)]
pub fn hand_value_js(cards: &JsValue) -> Result<u16, JsValue> {
    let cards: Vec<Card> = serde_wasm_bindgen::from_value(cards.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    Ok(hand_value(&cards))
}

#[wasm_bindgen(js_name = spriteKey)]
pub fn sprite_key_js(card: &JsValue) -> Result<String, JsValue> {
    let card: Card = serde_wasm_bindgen::from_value(card.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    Ok(card.sprite_key())
}

#[wasm_bindgen(js_name = backdropColor)]
pub fn backdrop_color_js(region: &str) -> String {
    host::backdrop_color(region).to_string()
}
