#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use oxide_dispatch::{IdField, Request, Response, Router};

/// A handler that answers with its own name.
pub async fn named(name: &'static str, _req: Request) -> Response {
    Response::text(name)
}

/// A parametric handler that answers with its name and the id.
pub async fn named_id(name: &'static str, _req: Request, id: IdField) -> Response {
    Response::text(format!("{name}:{id}"))
}

/// Dispatches a request and returns `(status, body)`.
pub async fn dispatch(router: &Router, req: Request) -> (u16, String) {
    let res = router.handle(req).await;
    (res.status, res.body_string().unwrap_or_default())
}

/// An in-memory log sink for `tracing_subscriber`.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that records INFO and above into the capture.
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, LogCapture) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}
