//! Presentation mapping from fetch state to terminal text.
//!
//! Pure: the caller decides when and where to print. `Idle` shows the same
//! text as an empty catalog so there is sensible content before the first
//! fetch resolves.

use crate::catalog::Movie;
use crate::fetch::FetchState;

const NO_MOVIES: &str = "Found no movies.";

/// Map a fetch state to its display text.
pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Idle => NO_MOVIES.to_string(),
        FetchState::Loading => "Loading...".to_string(),
        FetchState::Failure(message) => message.clone(),
        FetchState::Success(movies) if movies.is_empty() => NO_MOVIES.to_string(),
        FetchState::Success(movies) => movies
            .iter()
            .map(format_movie)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_movie(movie: &Movie) -> String {
    format!(
        "Episode {}: {} (released {})\n    {}",
        movie.id, movie.title, movie.release_date, movie.opening_text
    )
}
