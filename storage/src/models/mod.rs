//! Persistence models.

mod chat_turn;

pub use chat_turn::{ChatTurn, TurnRole};
