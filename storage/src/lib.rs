//! Storage crate: chat turn persistence and the store abstraction used by the chat service.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ChatTurn, TurnRole
//! - [`repository`] – MessageStore trait
//! - [`turn_repo`] – ChatTurnRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod sqlite_pool;
mod turn_repo;


pub use error::StorageError;
pub use models::{ChatTurn, TurnRole};
pub use repository::MessageStore;
pub use sqlite_pool::SqlitePoolManager;
pub use turn_repo::ChatTurnRepository;
