//! Client-side suggestion pipeline
//!
//! Composes the debouncer, the length gate, and the resolver into the path
//! a consumer drives with raw keystrokes: debounced snapshots that pass the
//! gate trigger one resolver call each, and the capped result list is
//! published for presentation with stale responses discarded.

use crate::config::SuggestSettings;
use crate::debounce::Debouncer;
use crate::query::SuggestTerm;
use crate::suggest::{SuggestResolver, Suggestion};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Quiet period before a changed term propagates
    pub quiet_period: Duration,
    /// Minimum term length before a query is issued
    pub min_term_length: usize,
    /// Cap applied to published suggestion lists
    pub max_results: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(crate::DEBOUNCE_QUIET_MS),
            min_term_length: crate::MIN_TERM_LEN,
            max_results: crate::MAX_SUGGESTIONS,
        }
    }
}

impl PipelineConfig {
    /// Build from the instance settings
    pub fn from_settings(settings: &SuggestSettings) -> Self {
        Self {
            quiet_period: Duration::from_millis(settings.debounce_ms),
            min_term_length: settings.min_term_length,
            max_results: settings.max_results,
        }
    }
}

/// Debounce-gated suggestion feed for one input box
///
/// Each debounced term advances a sequence number; a response is published
/// only while its request is still the latest one, so an older response
/// can neither overwrite newer results nor resurrect a cleared list.
/// Superseded requests run to completion and are discarded.
pub struct SuggestPipeline {
    debouncer: Debouncer<String>,
    results_rx: watch::Receiver<Vec<Suggestion>>,
    worker: JoinHandle<()>,
}

impl SuggestPipeline {
    /// Spawn a pipeline around a resolver
    pub fn new(resolver: Arc<SuggestResolver>, config: PipelineConfig) -> Self {
        let debouncer = Debouncer::new(String::new(), config.quiet_period);
        let mut term_rx = debouncer.subscribe();
        let (results_tx, results_rx) = watch::channel(Vec::new());
        let latest = Arc::new(AtomicU64::new(0));

        let min_term_length = config.min_term_length;
        let max_results = config.max_results;

        let worker = tokio::spawn(async move {
            while term_rx.changed().await.is_ok() {
                let term = term_rx.borrow_and_update().clone();
                // Every gate decision supersedes older in-flight requests.
                let seq = latest.fetch_add(1, Ordering::SeqCst) + 1;

                let parsed = SuggestTerm::parse(&term);
                if !parsed.meets_minimum(min_term_length) {
                    // Below-threshold terms clear prior results instead of
                    // leaving a stale dropdown on screen.
                    results_tx.send_replace(Vec::new());
                    continue;
                }

                let resolver = resolver.clone();
                let results_tx = results_tx.clone();
                let latest = latest.clone();
                tokio::spawn(async move {
                    let mut suggestions = resolver.suggestions(parsed.as_str()).await;
                    suggestions.truncate(max_results);
                    if latest.load(Ordering::SeqCst) == seq {
                        results_tx.send_replace(suggestions);
                    } else {
                        debug!("discarding stale suggestion response");
                    }
                });
            }
        });

        Self {
            debouncer,
            results_rx,
            worker,
        }
    }

    /// Feed one raw input change
    pub fn input(&mut self, term: impl Into<String>) {
        self.debouncer.update(term.into());
    }

    /// Subscribe to the published suggestion lists
    pub fn results(&self) -> watch::Receiver<Vec<Suggestion>> {
        self.results_rx.clone()
    }

    /// Tear the pipeline down, cancelling pending work
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.worker.abort();
    }
}

impl Drop for SuggestPipeline {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
