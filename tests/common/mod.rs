#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tarot_nexus::service::ReadingPicker;
use tarot_nexus::{Card, Combination, Draw, ReadingStore, TarotError};
use tower::ServiceExt;

/// In-memory store that counts reads and can be switched into a failing mode.
#[derive(Default)]
pub struct MemoryStore {
    cards: Mutex<BTreeMap<i64, Card>>,
    combinations: Mutex<BTreeMap<i64, Combination>>,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), TarotError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TarotError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

impl ReadingStore for MemoryStore {
    async fn ping(&self) -> Result<(), TarotError> {
        self.check()
    }

    async fn upsert_card(&self, card: &Card) -> Result<(), TarotError> {
        self.check()?;
        self.cards.lock().unwrap().insert(card.id, card.clone());
        Ok(())
    }

    async fn upsert_combination(&self, combination: &Combination) -> Result<(), TarotError> {
        self.check()?;
        self.combinations
            .lock()
            .unwrap()
            .insert(combination.id, combination.clone());
        Ok(())
    }

    async fn find_cards(&self) -> Result<Vec<Card>, TarotError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.cards.lock().unwrap().values().cloned().collect())
    }

    async fn find_combinations(&self, draw: Draw) -> Result<Vec<Combination>, TarotError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .combinations
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.draw() == draw)
            .cloned()
            .collect())
    }
}

/// Always picks the same index.
pub struct FixedPicker(pub usize);

impl ReadingPicker for FixedPicker {
    fn pick(&self, _candidates: usize) -> usize {
        self.0
    }
}

/// Walks through the candidates in turn.
#[derive(Default)]
pub struct CyclingPicker(AtomicUsize);

impl ReadingPicker for CyclingPicker {
    fn pick(&self, candidates: usize) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) % candidates
    }
}

pub fn temp_sqlite_url(tag: &str) -> (String, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "tarot-nexus-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    (format!("sqlite:{}", temp_path.display()), temp_path)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not JSON")
}
