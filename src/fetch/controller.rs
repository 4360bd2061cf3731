//! Fetch lifecycle controller.
//!
//! Owns the state machine for a single catalog fetch and exposes it to the
//! presentation layer as a read surface (`state`, `subscribe`) plus one write
//! action (`trigger`).
//!
//! Trigger policy: **supersede with generation-guarded completion**. Each
//! trigger bumps a generation counter and moves the state to `Loading`; a
//! fetch completion applies its result only while its generation is still
//! current. A slow fetch that settles after a newer trigger is discarded, so
//! overlapping fetches can never overwrite fresher data with stale data.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::catalog::{map_films, CatalogPage, Movie};

use super::error::FetchError;
use super::intent::FetchIntent;
use super::reducer::reduce;
use super::state::FetchState;
use super::transport::CatalogTransport;

/// Cheap-to-clone handle over shared controller state.
///
/// All transitions go through [`FetchController::dispatch`], serialized by the
/// generation lock; that is the sole mutation point.
#[derive(Clone)]
pub struct FetchController {
    shared: Arc<ControllerShared>,
}

struct ControllerShared {
    transport: Arc<dyn CatalogTransport>,
    endpoint: String,
    /// Generation of the newest trigger. Completions carrying an older
    /// generation are stale and discarded.
    generation: Mutex<u64>,
    state_tx: watch::Sender<FetchState>,
}

impl FetchController {
    /// Create a controller in the `Idle` state.
    pub fn new(transport: Arc<dyn CatalogTransport>, endpoint: impl Into<String>) -> Self {
        let (state_tx, _) = watch::channel(FetchState::default());

        Self {
            shared: Arc::new(ControllerShared {
                transport,
                endpoint: endpoint.into(),
                generation: Mutex::new(0),
                state_tx,
            }),
        }
    }

    /// Get a snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.shared.state_tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts at the current state and observes every
    /// transition after that.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.shared.state_tx.subscribe()
    }

    /// Start a fetch, superseding any fetch still in flight.
    ///
    /// Returns immediately; the request runs as a Tokio task and the caller
    /// observes completion through [`subscribe`](Self::subscribe). Must be
    /// called from within a Tokio runtime.
    pub fn trigger(&self) {
        let generation = {
            let mut current = self.shared.generation.lock();
            *current += 1;
            self.dispatch(FetchIntent::Trigger);
            *current
        };
        tracing::debug!(generation, endpoint = %self.shared.endpoint, "catalog fetch triggered");

        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.run_fetch().await;
            controller.settle(generation, result);
        });
    }

    /// Execute one fetch: request, status check, decode, map.
    async fn run_fetch(&self) -> Result<Vec<Movie>, FetchError> {
        let response = self.shared.transport.get(&self.shared.endpoint).await?;

        if !response.is_ok() {
            return Err(FetchError::HttpStatus {
                status: response.status,
            });
        }

        let page: CatalogPage = serde_json::from_slice(&response.body)?;
        Ok(map_films(page.results)?)
    }

    /// Apply a fetch result if its generation is still current.
    fn settle(&self, generation: u64, result: Result<Vec<Movie>, FetchError>) {
        let current = self.shared.generation.lock();

        if *current != generation {
            tracing::debug!(
                generation,
                current = *current,
                "discarding stale fetch completion"
            );
            return;
        }

        if let Err(err) = &result {
            tracing::warn!(error = %err, "catalog fetch failed");
        }

        self.dispatch(FetchIntent::Settled(result));
    }

    /// Apply the reducer to the published state. Callers hold the generation
    /// lock, which serializes every transition.
    fn dispatch(&self, intent: FetchIntent) {
        let state = self.shared.state_tx.borrow().clone();
        self.shared.state_tx.send_replace(reduce(state, intent));
    }
}
