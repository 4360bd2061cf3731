use serde::{Deserialize, Serialize};

/// Response envelope returned by the catalog endpoint.
///
/// The API also sends pagination fields (`count`, `next`, `previous`); only
/// `results` is consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<FilmRecord>,
}

/// One film record as returned by the remote API.
///
/// Every field is optional at the wire level: the API owns this shape, and a
/// record missing a required field must surface as a mapping error rather
/// than a decode failure of the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmRecord {
    pub episode_id: Option<i64>,
    pub title: Option<String>,
    pub opening_crawl: Option<String>,
    pub release_date: Option<String>,
}

/// Normalized film record consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Episode number, taken from the API's `episode_id`.
    pub id: i64,
    pub title: String,
    pub opening_text: String,
    /// Release date as sent by the API (`YYYY-MM-DD`).
    pub release_date: String,
}
