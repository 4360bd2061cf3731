use thiserror::Error;

use super::record::{FilmRecord, Movie};

/// Error produced when a record is missing a field the display shape needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

/// Map raw API records into display records.
///
/// Pure and order-preserving: output `n` corresponds to input `n`. Fails on
/// the first record missing a required field; the error names the record
/// index and the field so malformed upstream data is diagnosable.
pub fn map_films(records: Vec<FilmRecord>) -> Result<Vec<Movie>, MappingError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let missing = |field| MappingError::MissingField { index, field };
            Ok(Movie {
                id: raw.episode_id.ok_or_else(|| missing("episode_id"))?,
                title: raw.title.ok_or_else(|| missing("title"))?,
                opening_text: raw.opening_crawl.ok_or_else(|| missing("opening_crawl"))?,
                release_date: raw.release_date.ok_or_else(|| missing("release_date"))?,
            })
        })
        .collect()
}
