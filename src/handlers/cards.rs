use axum::{Json, extract::State};

use crate::db::{Card, ReadingStore};
use crate::{TarotError, router::TarotState};

/// GET /cards -> the whole catalog, in store order.
pub async fn cards_handler<S: ReadingStore>(
    State(state): State<TarotState<S>>,
) -> Result<Json<Vec<Card>>, TarotError> {
    let cards = state.store.find_cards().await?;
    Ok(Json(cards))
}
