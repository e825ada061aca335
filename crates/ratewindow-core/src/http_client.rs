use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// HTTP GET request envelope used by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// `None` waits for as long as the server takes.
    pub timeout_ms: Option<u64>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Where a transport call broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    Setup,
    Timeout,
    Connect,
    Request,
    Body,
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    kind: HttpErrorKind,
    message: String,
}

impl HttpError {
    pub fn new(kind: HttpErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Connect, message)
    }

    pub const fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract used by the fetcher.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Offline transport answering from a fixed URL table.
///
/// Unknown URLs get a 404 so a missing entry behaves like a day the source never published.
#[derive(Debug, Default, Clone)]
pub struct StaticHttpClient {
    routes: BTreeMap<String, Result<HttpResponse, HttpError>>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.routes.insert(url.into(), Ok(response));
        self
    }

    pub fn with_error(mut self, url: impl Into<String>, error: HttpError) -> Self {
        self.routes.insert(url.into(), Err(error));
        self
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let outcome = self
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::with_status(404, "")));
        Box::pin(async move { outcome })
    }
}

/// Production HTTP client using reqwest.
///
/// Idle connections are never kept, so every request opens its own connection.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new(accept_invalid_certs: bool) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ratewindow/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| HttpError::new(HttpErrorKind::Setup, format!("client build failed: {e}")))?;
        Ok(Self::with_client(client))
    }

    /// Create a ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            if let Some(timeout_ms) = request.timeout_ms {
                builder = builder.timeout(Duration::from_millis(timeout_ms));
            }

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(HttpErrorKind::Timeout, format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::connect(format!("connection failed: {e}"))
                } else {
                    HttpError::new(HttpErrorKind::Request, format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| {
                HttpError::new(
                    HttpErrorKind::Body,
                    format!("failed to read response body: {e}"),
                )
            })?;

            Ok(HttpResponse { status, body })
        })
    }
}
