//! Simulated AI generation runs.
//!
//! Both runs are a fixed delay followed by a deterministic result. Each
//! returns a [`GenerationHandle`] the caller can cancel, e.g. when the view
//! that started it goes away. Dropping a handle without cancelling lets the
//! run finish in the background.

use crate::sentiment::sentiment_summary;
use crate::store::DomainStore;
use ads_core::config::GenerationConfig;
use ads_core::types::ProductSentiment;
use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::info;

/// The store shared between the caller and in-flight generation tasks.
/// The lock is never held across an await point.
pub type SharedStore = Arc<Mutex<DomainStore>>;

pub fn shared(store: DomainStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Ordered phases reported while sentiment generation runs.
pub const SENTIMENT_PHASES: [&str; 3] = [
    "Aggregating source sentiment signals",
    "Calculating segment confidence and risk",
    "Producing sentiment recommendations",
];

// ─── Handle ────────────────────────────────────────────────────────────────

/// A pending generation run. Awaiting it yields the result, or `None` if the
/// run was cancelled or had nothing to do.
pub struct GenerationHandle<T> {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Option<T>>,
}

impl<T: Send + 'static> GenerationHandle<T> {
    fn spawn<F>(run: F) -> Self
    where
        F: FnOnce(oneshot::Receiver<()>) -> JoinHandle<Option<T>>,
    {
        let (tx, rx) = oneshot::channel();
        Self {
            cancel: Some(tx),
            task: run(rx),
        }
    }

    /// Request cancellation. The run stops at its next suspension point and
    /// resolves to `None`.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> Option<T> {
        self.await
    }
}

impl<T> Future for GenerationHandle<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task)
            .poll(cx)
            .map(|joined| joined.ok().flatten())
    }
}

// ─── Targeting ─────────────────────────────────────────────────────────────

/// Generate targeting for the selected product after `delay`.
///
/// With no product selected the run finishes immediately without touching
/// the store. A completion that arrives after the selection moved to a
/// different product is ignored.
pub fn generate_targeting(store: &SharedStore, delay: Duration) -> GenerationHandle<()> {
    let started = store.lock().begin_targeting_generation();
    let store = Arc::clone(store);
    GenerationHandle::spawn(move |cancel| {
        tokio::spawn(async move {
            let product_id = match started {
                Some(id) => id,
                None => {
                    info!("Targeting generation skipped, no product selected");
                    return None;
                }
            };
            info!(product_id = %product_id, delay_ms = delay.as_millis() as u64, "Targeting generation started");
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    store.lock().finish_targeting_generation(&product_id);
                    info!(product_id = %product_id, "Targeting generation finished");
                    Some(())
                }
                Ok(()) = cancel => {
                    store.lock().cancel_targeting_generation();
                    info!(product_id = %product_id, "Targeting generation cancelled");
                    None
                }
            }
        })
    })
}

// ─── Sentiment ─────────────────────────────────────────────────────────────

/// A running sentiment generation and its phase feed.
pub struct SentimentRun {
    pub handle: GenerationHandle<ProductSentiment>,
    /// Index into [`SENTIMENT_PHASES`] of the phase currently running.
    pub phase: watch::Receiver<usize>,
}

/// Generate a sentiment summary for the pending draft product.
///
/// Returns `None` unless both the product and targeting drafts are set.
/// The phase index advances every `sentiment_phase_ms` and settles on the
/// last phase when the run completes.
pub fn generate_sentiment(store: &SharedStore, timing: &GenerationConfig) -> Option<SentimentRun> {
    let (tone, category) = {
        let store = store.lock();
        let state = store.state();
        let draft = state.draft_product.as_ref()?;
        state.draft_targeting.as_ref()?;
        (draft.brand_tone.clone(), draft.category.clone())
    };
    let total = Duration::from_millis(timing.sentiment_delay_ms);
    let tick = Duration::from_millis(timing.sentiment_phase_ms.max(1));
    let last = SENTIMENT_PHASES.len() - 1;
    let (phase_tx, phase_rx) = watch::channel(0usize);

    let handle = GenerationHandle::spawn(move |mut cancel| {
        tokio::spawn(async move {
            info!(category = %category, "Sentiment generation started");
            let deadline = tokio::time::sleep(total);
            tokio::pin!(deadline);
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + tick, tick);
            // A dropped handle closes the channel; the receiver must not be
            // polled again after that.
            let mut cancel_open = true;
            loop {
                tokio::select! {
                    _ = &mut deadline => {
                        phase_tx.send_replace(last);
                        info!("Sentiment generation finished");
                        return Some(sentiment_summary(tone.as_deref(), Some(&category)));
                    }
                    _ = ticker.tick() => {
                        phase_tx.send_modify(|phase| *phase = (*phase + 1).min(last));
                    }
                    signal = &mut cancel, if cancel_open => {
                        if signal.is_ok() {
                            info!("Sentiment generation cancelled");
                            return None;
                        }
                        cancel_open = false;
                    }
                }
            }
        })
    });
    Some(SentimentRun {
        handle,
        phase: phase_rx,
    })
}
