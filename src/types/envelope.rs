use serde::{Deserialize, Serialize};

use crate::db::Combination;

pub const NO_RESULTS_MESSAGE: &str = "No Results found.";

/// Body of a successful `POST /results`.
///
/// Serialized as `{"status":"success","result":{...}}` when a reading matched,
/// or `{"status":"error","result":"No Results found."}` when none did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum ReadingEnvelope {
    Success(Combination),
    Error(String),
}

impl ReadingEnvelope {
    pub fn not_found() -> Self {
        Self::Error(NO_RESULTS_MESSAGE.to_string())
    }
}

impl From<Option<Combination>> for ReadingEnvelope {
    fn from(value: Option<Combination>) -> Self {
        value.map_or_else(Self::not_found, Self::Success)
    }
}
