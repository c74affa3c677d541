use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog item. Serialized as `{id, name, image}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Card {
    pub id: i64,
    pub name: String,
    pub image: String,
}

impl Card {
    /// Catalog cards use their stringified id as the image reference.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: id.to_string(),
        }
    }
}

/// An ordered three-card draw mapped to a reading.
/// Serialized as `{id, c1id, c2id, c3id, result}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Combination {
    pub id: i64,
    #[serde(rename = "c1id")]
    #[sqlx(rename = "c1id")]
    pub first: i64,
    #[serde(rename = "c2id")]
    #[sqlx(rename = "c2id")]
    pub second: i64,
    #[serde(rename = "c3id")]
    #[sqlx(rename = "c3id")]
    pub third: i64,
    #[serde(rename = "result")]
    #[sqlx(rename = "result")]
    pub reading: String,
}

impl Combination {
    pub fn new(id: i64, draw: Draw, reading: impl Into<String>) -> Self {
        Self {
            id,
            first: draw.first,
            second: draw.second,
            third: draw.third,
            reading: reading.into(),
        }
    }

    pub fn draw(&self) -> Draw {
        Draw {
            first: self.first,
            second: self.second,
            third: self.third,
        }
    }
}

/// Ordered triple of card ids; also the body of `POST /results`.
/// Position matters: `(1, 2, 3)` and `(2, 1, 3)` are different draws.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Draw {
    #[serde(rename = "c1id")]
    pub first: i64,
    #[serde(rename = "c2id")]
    pub second: i64,
    #[serde(rename = "c3id")]
    pub third: i64,
}

impl Draw {
    pub fn new(first: i64, second: i64, third: i64) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    pub fn ids(&self) -> [i64; 3] {
        [self.first, self.second, self.third]
    }
}
