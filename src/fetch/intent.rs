//! Intents for the fetch lifecycle.

use crate::catalog::Movie;

use super::error::FetchError;

/// Events that can be dispatched to the fetch reducer.
#[derive(Debug)]
pub enum FetchIntent {
    /// A new fetch was requested (user action or startup).
    Trigger,

    /// The in-flight fetch settled.
    /// Outside `Loading` this is a no-op (the controller discards stale
    /// completions before dispatching).
    Settled(Result<Vec<Movie>, FetchError>),
}
