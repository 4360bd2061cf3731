//! Fetch lifecycle: state machine, error taxonomy, transport seam, and the
//! controller that owns the trigger/settle cycle.
//!
//! ```text
//! trigger ──→ Loading ──→ settle ──→ Success | Failure
//!    ↑                                      │
//!    └──────────────────────────────────────┘
//! ```
//!
//! State transitions are computed by a pure reducer and applied at a single
//! mutation point inside [`FetchController`].

mod controller;
mod error;
mod intent;
mod reducer;
mod state;
mod transport;

pub use controller::FetchController;
pub use error::FetchError;
pub use intent::FetchIntent;
pub use reducer::reduce;
pub use state::FetchState;
pub use transport::{CatalogTransport, HttpTransport, TransportResponse};
