#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use towerlib_client::{InventoryScript, Session, SessionResponse, Tower, TowerResult};

/// One request seen by [`RecordingSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub payload: Option<Value>,
}

/// In-memory [`Session`] that records every request and answers from a
/// queue of canned responses (`200 {}` once the queue is empty).
#[derive(Default)]
pub struct RecordingSession {
    responses: Mutex<VecDeque<SessionResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(SessionResponse::new(status, body));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, url: &str, payload: Option<&Value>) -> SessionResponse {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            payload: payload.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| SessionResponse::new(200, "{}"))
    }
}

#[async_trait]
impl Session for RecordingSession {
    async fn get(&self, url: &str) -> TowerResult<SessionResponse> {
        Ok(self.record("GET", url, None))
    }

    async fn post(&self, url: &str, payload: &Value) -> TowerResult<SessionResponse> {
        Ok(self.record("POST", url, Some(payload)))
    }

    async fn patch(&self, url: &str, payload: &Value) -> TowerResult<SessionResponse> {
        Ok(self.record("PATCH", url, Some(payload)))
    }
}

pub const TEST_API: &str = "https://tower.example.com/api/v2";

/// A tower at `tower.example.com` backed by `session`.
pub fn test_tower(session: &Arc<RecordingSession>) -> Arc<Tower> {
    Arc::new(Tower::with_session(
        "tower.example.com",
        true,
        session.clone(),
    ))
}

/// An inventory script with the given record, backed by `session`.
pub fn test_script(session: &Arc<RecordingSession>, record: Value) -> InventoryScript {
    let Value::Object(data) = record else {
        panic!("test record must be a JSON object");
    };
    InventoryScript::new(test_tower(session), data)
}

/// Shared buffer the test subscriber writes formatted log lines into.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route tracing output on the current thread into a buffer until the
/// returned guard is dropped.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
