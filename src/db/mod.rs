//! Database module: models, schema and the store abstraction.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring stored rows and their JSON shape
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the sqlx-backed `ReadingStore`

pub mod models;
pub mod schema;
pub mod sqlite;

use std::future::Future;

use crate::error::TarotError;

pub use models::{Card, Combination, Draw};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStore};

/// Find and upsert primitives over the `cards` and `combinations` collections.
///
/// Every method is a single store operation; nothing spans a transaction.
pub trait ReadingStore: Send + Sync + 'static {
    /// Liveness probe.
    fn ping(&self) -> impl Future<Output = Result<(), TarotError>> + Send;

    /// Insert the card, or overwrite every field of the card with the same id.
    fn upsert_card(&self, card: &Card) -> impl Future<Output = Result<(), TarotError>> + Send;

    /// Insert the combination, or overwrite every field of the one with the same id.
    fn upsert_combination(
        &self,
        combination: &Combination,
    ) -> impl Future<Output = Result<(), TarotError>> + Send;

    /// All cards, in whatever order the store yields them.
    fn find_cards(&self) -> impl Future<Output = Result<Vec<Card>, TarotError>> + Send;

    /// Every combination whose three card ids match `draw` position by position.
    fn find_combinations(
        &self,
        draw: Draw,
    ) -> impl Future<Output = Result<Vec<Combination>, TarotError>> + Send;
}
