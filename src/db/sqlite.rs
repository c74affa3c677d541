use crate::db::ReadingStore;
use crate::db::models::{Card, Combination, Draw};
use crate::db::schema::SQLITE_INIT;
use crate::error::TarotError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool (creating the database file if needed) and ping it once.
    pub async fn connect(database_url: &str) -> Result<Self, TarotError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let store = Self::new(pool);
        store.ping().await?;
        info!(database_url = %database_url, "store connection is OK");
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TarotError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

impl ReadingStore for SqliteStore {
    async fn ping(&self) -> Result<(), TarotError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn upsert_card(&self, card: &Card) -> Result<(), TarotError> {
        sqlx::query(
            r#"
            INSERT INTO cards (id, name, image) VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name=excluded.name,
                image=excluded.image
            "#,
        )
        .bind(card.id)
        .bind(&card.name)
        .bind(&card.image)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn upsert_combination(&self, combination: &Combination) -> Result<(), TarotError> {
        sqlx::query(
            r#"
            INSERT INTO combinations (id, c1id, c2id, c3id, result) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                c1id=excluded.c1id,
                c2id=excluded.c2id,
                c3id=excluded.c3id,
                result=excluded.result
            "#,
        )
        .bind(combination.id)
        .bind(combination.first)
        .bind(combination.second)
        .bind(combination.third)
        .bind(&combination.reading)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_cards(&self) -> Result<Vec<Card>, TarotError> {
        let cards = sqlx::query_as::<_, Card>("SELECT id, name, image FROM cards")
            .fetch_all(&self.pool)
            .await?;
        Ok(cards)
    }

    async fn find_combinations(&self, draw: Draw) -> Result<Vec<Combination>, TarotError> {
        let rows = sqlx::query_as::<_, Combination>(
            r#"SELECT id, c1id, c2id, c3id, result
               FROM combinations WHERE c1id = ? AND c2id = ? AND c3id = ?"#,
        )
        .bind(draw.first)
        .bind(draw.second)
        .bind(draw.third)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
