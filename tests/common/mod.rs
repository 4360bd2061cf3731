//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_catalog;

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use cinefetch::fetch::{FetchController, FetchState, HttpTransport};
use tokio::sync::watch;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Build a controller wired to a real HTTP transport with short timeouts.
pub fn http_controller(endpoint: &str) -> FetchController {
    let transport = Arc::new(HttpTransport::new(
        Duration::from_secs(1),
        Duration::from_secs(2),
    ));
    FetchController::new(transport, endpoint)
}

/// Wait until the newest fetch settles, with a timeout.
pub async fn wait_settled(states: &mut watch::Receiver<FetchState>) -> FetchState {
    tokio::time::timeout(Duration::from_secs(3), async {
        loop {
            let state = states.borrow_and_update().clone();
            if state.is_settled() {
                return state;
            }
            states.changed().await.expect("controller dropped");
        }
    })
    .await
    .expect("fetch did not settle")
}
