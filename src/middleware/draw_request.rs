use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::TarotError;
use crate::db::Draw;

/// `POST /results` body, decoded without requiring a JSON content type.
///
/// Any decode failure (not a JSON object, missing field, non-integer id) is a 400.
/// Failures reading the body keep axum's status, e.g. 413 past the body limit.
pub struct DrawPayload(pub Draw);

impl<S> FromRequest<S> for DrawPayload
where
    S: Send + Sync,
{
    type Rejection = TarotError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| TarotError::BodyRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        // serde also maps sequences onto structs; only an object is a draw
        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| TarotError::MalformedDraw(e.to_string()))?;
        if !value.is_object() {
            return Err(TarotError::MalformedDraw(
                "expected a JSON object with c1id, c2id and c3id".to_string(),
            ));
        }
        let draw: Draw =
            serde_json::from_value(value).map_err(|e| TarotError::MalformedDraw(e.to_string()))?;
        Ok(DrawPayload(draw))
    }
}
