//! Reducer for the fetch lifecycle.

use super::intent::FetchIntent;
use super::state::FetchState;

/// Compute the next fetch state from the current one and an intent.
///
/// Pure function — all side effects (spawning the fetch, discarding stale
/// completions, logging) are handled by the controller around the dispatch.
pub fn reduce(state: FetchState, intent: FetchIntent) -> FetchState {
    match intent {
        // Triggering from any state starts over; a prior failure message is
        // dropped with the old state.
        FetchIntent::Trigger => FetchState::Loading,

        FetchIntent::Settled(result) => match state {
            FetchState::Loading => match result {
                Ok(movies) => FetchState::Success(movies),
                Err(err) => FetchState::Failure(err.user_message()),
            },
            other => other,
        },
    }
}
