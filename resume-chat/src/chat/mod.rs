//! Chat assistant core: history window, turn lifecycle, and history erasure.

mod eraser;
mod history;
mod lifecycle;
mod types;

pub use eraser::HistoryEraser;
pub use history::{turn_to_message, HistoryAssembler, HISTORY_WINDOW};
pub use lifecycle::{ChatService, TurnState, APOLOGY_PREFIX};
pub use types::{ChatReply, ChatRequest};
