use crate::catalog::ReferenceData;
use crate::db::ReadingStore;
use crate::error::TarotError;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub cards: usize,
    pub combinations: usize,
}

/// Upsert every card and combination of `data`, keyed by id.
///
/// Stops at the first store error; callers treat that as fatal.
pub async fn seed<S: ReadingStore>(
    store: &S,
    data: &ReferenceData,
) -> Result<SeedSummary, TarotError> {
    for card in &data.cards {
        store.upsert_card(card).await?;
        debug!(id = card.id, name = %card.name, "inserted or updated card");
    }

    for combination in &data.combinations {
        store.upsert_combination(combination).await?;
        debug!(
            id = combination.id,
            c1id = combination.first,
            c2id = combination.second,
            c3id = combination.third,
            "inserted or updated combination"
        );
    }

    let summary = SeedSummary {
        cards: data.cards.len(),
        combinations: data.combinations.len(),
    };
    info!(
        cards = summary.cards,
        combinations = summary.combinations,
        "reference data seeded"
    );
    Ok(summary)
}
