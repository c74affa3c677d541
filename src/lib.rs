pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod types;

pub use catalog::ReferenceData;
pub use db::{Card, Combination, Draw, ReadingStore, SqliteStore};
pub use error::TarotError;
pub use router::{TarotState, tarot_router};
