use axum::{Json, extract::State};

use crate::db::ReadingStore;
use crate::middleware::DrawPayload;
use crate::service::draw_reading;
use crate::types::ReadingEnvelope;
use crate::{TarotError, router::TarotState};

/// POST /results -> one random reading for the ordered draw.
///
/// No match is still a 200; the envelope carries `status: "error"`.
pub async fn results_handler<S: ReadingStore>(
    State(state): State<TarotState<S>>,
    DrawPayload(draw): DrawPayload,
) -> Result<Json<ReadingEnvelope>, TarotError> {
    let reading = draw_reading(state.store.as_ref(), state.picker.as_ref(), draw).await?;
    Ok(Json(reading.into()))
}
