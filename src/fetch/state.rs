//! State for the fetch lifecycle.

use crate::catalog::Movie;

/// Fetch lifecycle state machine.
///
/// Tracks a single catalog fetch: nothing requested yet → request in flight →
/// settled with a result. `Success` is only reachable after a completed,
/// non-error response; an empty movie list is a valid success, distinct from
/// `Failure`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No fetch has been triggered yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The newest fetch completed and mapped cleanly.
    Success(Vec<Movie>),

    /// The newest fetch failed; holds the user-facing message.
    Failure(String),
}

impl FetchState {
    /// Check if a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the newest fetch has settled (Success or Failure).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// The fetched movies, if the state is `Success`.
    pub fn movies(&self) -> Option<&[Movie]> {
        match self {
            Self::Success(movies) => Some(movies),
            _ => None,
        }
    }
}
