//! City lookup worker
//!
//! Runs city lookups on a background thread so the UI never blocks on the
//! network. Requests arrive over a channel, each fetch runs as its own task
//! on a current-thread tokio runtime, and results flow back tagged with the
//! request id they answer. Several lookups may be in flight at once and may
//! complete in any order; the controller decides which results to keep.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender};

use tokio::sync::mpsc as async_mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ApiError};

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Fetch suggestions for the trimmed query
    Fetch { query: String, request_id: u64 },
    /// Abort the fetch with the given id; no response will be sent for it
    Cancel { request_id: u64 },
    /// Abort everything and stop the worker
    Shutdown,
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Suggestions {
        request_id: u64,
        query: String,
        cities: Vec<String>,
    },
    Failed {
        request_id: u64,
        error: ApiError,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Suggestions { request_id, .. } => *request_id,
            LookupResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Spawn a lookup worker thread bound to `client`
///
/// Returns the request sender and response receiver the controller connects
/// to. The worker exits on `LookupRequest::Shutdown` or when the request
/// channel is dropped, cancelling whatever is still in flight.
pub fn spawn_lookup_worker(client: ApiClient) -> (Sender<LookupRequest>, Receiver<LookupResponse>) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start lookup runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(client, request_rx, response_tx));
    });

    (request_tx, response_rx)
}

/// Main worker loop - processes requests until shutdown or disconnect
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let root_token = CancellationToken::new();
    let mut in_flight: HashMap<u64, CancellationToken> = HashMap::new();
    let (done_tx, mut done_rx) = async_mpsc::unbounded_channel::<u64>();

    // Bridge the blocking std receiver into the async loop
    let (bridge_tx, mut bridge_rx) = async_mpsc::unbounded_channel::<LookupRequest>();
    std::thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            if bridge_tx.send(request).is_err() {
                return;
            }
        }
    });

    loop {
        tokio::select! {
            request = bridge_rx.recv() => {
                match request {
                    Some(LookupRequest::Fetch { query, request_id }) => {
                        let token = root_token.child_token();
                        in_flight.insert(request_id, token.clone());
                        log::debug!("Lookup {} started for {:?}", request_id, query);

                        let client = client.clone();
                        let response_tx = response_tx.clone();
                        let done_tx = done_tx.clone();
                        tokio::spawn(async move {
                            run_fetch(&client, query, request_id, &token, &response_tx).await;
                            let _ = done_tx.send(request_id);
                        });
                    }
                    Some(LookupRequest::Cancel { request_id }) => {
                        if let Some(token) = in_flight.remove(&request_id) {
                            token.cancel();
                            log::debug!("Cancelled lookup {}", request_id);
                        } else {
                            log::debug!("Cancel for lookup {} ignored (not in flight)", request_id);
                        }
                    }
                    Some(LookupRequest::Shutdown) | None => break,
                }
            }
            Some(request_id) = done_rx.recv() => {
                in_flight.remove(&request_id);
            }
        }
    }

    root_token.cancel();
    log::debug!(
        "Lookup worker shutting down ({} lookups cancelled)",
        in_flight.len()
    );
}

/// Run one lookup and report its outcome
///
/// A cancelled lookup reports nothing: whoever cancelled it has already
/// stopped caring about the answer.
async fn run_fetch(
    client: &ApiClient,
    query: String,
    request_id: u64,
    token: &CancellationToken,
    response_tx: &Sender<LookupResponse>,
) {
    let response = match client.cities(&query, token).await {
        Ok(cities) => LookupResponse::Suggestions {
            request_id,
            query,
            cities,
        },
        Err(ApiError::Cancelled) => return,
        Err(error) => LookupResponse::Failed { request_id, error },
    };

    if token.is_cancelled() {
        return;
    }
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
