//! Shared test utilities for econsultas-export integration tests.
//!
//! Provides a recording saver to observe save interactions without a
//! host, record factories, and a tracing layer that counts diagnostics.

use econsultas_export::error::Result;
use econsultas_export::{FileSaver, Record, Scalar};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// One observed save interaction
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub filename: String,
    pub mime: String,
    pub contents: Vec<u8>,
}

/// Saver that records every save interaction instead of persisting it
#[derive(Debug, Default)]
pub struct RecordingSaver {
    saves: Mutex<Vec<SavedFile>>,
}

impl RecordingSaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> Vec<SavedFile> {
        self.saves.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl FileSaver for RecordingSaver {
    fn save(&self, filename: &str, mime: &str, contents: &[u8]) -> Result<()> {
        self.saves.lock().unwrap().push(SavedFile {
            filename: filename.to_string(),
            mime: mime.to_string(),
            contents: contents.to_vec(),
        });
        Ok(())
    }
}

/// Helper to build a record from name/value pairs
pub fn record(fields: Vec<(&str, Scalar)>) -> Record {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// A small financial-report style data set of strings and numbers
pub fn sample_report() -> Vec<Record> {
    vec![
        record(vec![
            ("paciente", Scalar::Text("Ana García".into())),
            ("servicio", Scalar::Text("Consulta general".into())),
            ("monto", Scalar::Number(1500.0)),
        ]),
        record(vec![
            ("paciente", Scalar::Text("Luis \"Lucho\" Pérez".into())),
            ("servicio", Scalar::Text("Radiografía, tórax".into())),
            ("monto", Scalar::Number(3200.5)),
        ]),
    ]
}

/// Shared counter observed by [`CountingLayer`]
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsCounter(Arc<AtomicUsize>);

impl DiagnosticsCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Tracing layer counting WARN diagnostics emitted by the crate
pub struct CountingLayer(pub DiagnosticsCounter);

impl<S: Subscriber> Layer<S> for CountingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::WARN && metadata.target().starts_with("econsultas_export") {
            self.0 .0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run a closure with diagnostics counted, returning the final count
pub fn count_diagnostics<F: FnOnce()>(body: F) -> usize {
    use tracing_subscriber::prelude::*;

    let counter = DiagnosticsCounter::default();
    let subscriber = tracing_subscriber::registry().with(CountingLayer(counter.clone()));
    tracing::subscriber::with_default(subscriber, body);
    counter.count()
}
