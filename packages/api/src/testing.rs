//! Shared test doubles: a scripted transport and a navigator that records
//! where it was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::{ApiRequest, RawResponse, Transport, TransportError};
use crate::session::Navigator;

/// Transport that replays scripted responses and records every request.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and raw body.
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a transport-level failure (no response at all).
    pub fn push_network_failure(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError("connection refused".to_string())));
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("test scripted fewer responses than requests sent")
    }
}

/// Navigator that records the paths it was asked to visit.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}
