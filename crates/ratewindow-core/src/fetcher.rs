//! Single-attempt retrieval of one day's payload.

use std::sync::Arc;

use log::{debug, error};

use crate::domain::RawDayPayload;
use crate::error::PayloadError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::sequencer::RequestTarget;

/// Issues one GET per target and decodes the body.
///
/// Transport failures and non-200 statuses are logged and resolve to `Ok(None)`.
/// Only a 200 whose body fails to decode returns an error.
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<dyn HttpClient>,
    timeout_ms: Option<u64>,
}

impl Fetcher {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            timeout_ms: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn fetch(&self, target: &RequestTarget) -> Result<Option<RawDayPayload>, PayloadError> {
        let request = HttpRequest::get(target.as_str())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        debug!("GET {target}");
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                error!("Connection error {target}: {err}");
                return Ok(None);
            }
        };

        if !response.is_ok() {
            error!("Error status {} for {target}", response.status);
            return Ok(None);
        }

        RawDayPayload::from_json(&response.body)
            .map(Some)
            .map_err(|source| PayloadError::Malformed {
                url: target.to_string(),
                source,
            })
    }
}
