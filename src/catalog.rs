//! Reference data seeded into the store on every startup.
//!
//! The built-in table is the default; `TAROT_CATALOG_PATH` may point at a JSON
//! file of the same shape (`{"cards": [...], "combinations": [...]}`, using the
//! wire field names) to replace it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fs, path::Path};
use tracing::info;

use crate::db::{Card, Combination, Draw};
use crate::error::TarotError;

const CARD_NAMES: [&str; 22] = [
    "Mecnun",
    "Büyücü",
    "Azize",
    "İmparatoriçe",
    "İmparator",
    "Aziz",
    "Aşıklar",
    "Savaş Arabası",
    "Güç",
    "Ermiş",
    "Kader Çarkı",
    "Adalet",
    "Asılan Adam",
    "Ölüm",
    "Denge",
    "Şeytan",
    "Kale",
    "Yıldız",
    "Ay",
    "Güneş",
    "Mahkeme",
    "Dünya",
];

const COMBINATIONS: [(i64, [i64; 3], &str); 6] = [
    (1, [1, 2, 3], "123 - result text"),
    (2, [1, 3, 2], "132 - result text"),
    (3, [2, 1, 3], "213 - result text"),
    (4, [2, 3, 1], "231 - result text"),
    (5, [3, 1, 2], "312 - result text"),
    (6, [3, 2, 1], "321 - result text"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReferenceData {
    pub cards: Vec<Card>,
    pub combinations: Vec<Combination>,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        let cards = CARD_NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| Card::new(id, *name))
            .collect();
        let combinations = COMBINATIONS
            .iter()
            .map(|(id, [a, b, c], text)| Combination::new(*id, Draw::new(*a, *b, *c), *text))
            .collect();
        Self {
            cards,
            combinations,
        }
    }

    /// Read and validate a catalog file.
    pub fn load_from_file(path: &Path) -> Result<Self, TarotError> {
        let contents = fs::read_to_string(path)?;
        let data: ReferenceData = serde_json::from_str(&contents)?;
        data.validate()?;
        info!(
            path = %path.display(),
            cards = data.cards.len(),
            combinations = data.combinations.len(),
            "loaded reference catalog from file"
        );
        Ok(data)
    }

    /// Ids must be positive and unique per collection, and every combination
    /// must only reference cards present in the catalog.
    pub fn validate(&self) -> Result<(), TarotError> {
        let mut card_ids = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if card.id <= 0 {
                return Err(TarotError::InvalidCatalog(format!(
                    "card id {} is not positive",
                    card.id
                )));
            }
            if !card_ids.insert(card.id) {
                return Err(TarotError::InvalidCatalog(format!(
                    "duplicate card id {}",
                    card.id
                )));
            }
        }

        let mut combination_ids = HashSet::with_capacity(self.combinations.len());
        for combination in &self.combinations {
            if combination.id <= 0 {
                return Err(TarotError::InvalidCatalog(format!(
                    "combination id {} is not positive",
                    combination.id
                )));
            }
            if !combination_ids.insert(combination.id) {
                return Err(TarotError::InvalidCatalog(format!(
                    "duplicate combination id {}",
                    combination.id
                )));
            }
            if let Some(unknown) = combination
                .draw()
                .ids()
                .into_iter()
                .find(|id| !card_ids.contains(id))
            {
                return Err(TarotError::InvalidCatalog(format!(
                    "combination {} references unknown card {}",
                    combination.id, unknown
                )));
            }
        }
        Ok(())
    }
}
