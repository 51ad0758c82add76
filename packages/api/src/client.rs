//! # HTTP client wrapper
//!
//! [`HttpClient`] is the one road to the backend. It prefixes every path with
//! the configured base URL, attaches the stored bearer token (unless the call
//! opted out), sends the request through a [`Transport`], and hands back the
//! parsed `{code, message, data}` envelope on success or a normalized
//! [`HttpError`] on failure.
//!
//! The [`Transport`] trait exists so the request/response handling can be
//! exercised without a network: production wires in [`HttpTransport`] over
//! reqwest, tests script a mock. The client itself never mutates storage and
//! never navigates; it only classifies.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use store::{ClientConfig, TokenStore};

use crate::error::HttpError;
use crate::models::ApiResponse;

/// HTTP verb for an [`ApiRequest`]. Only the verbs the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A fully prepared request handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    /// Raw token for the `Authorization: Bearer <token>` header, if attached.
    pub bearer: Option<String>,
}

/// Raw transport-level response: status plus unparsed body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The request never produced a response, e.g. a refused connection or an
/// elapsed timeout.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no response: {0}")]
pub struct TransportError(pub String);

/// Async interface for sending a prepared request.
pub trait Transport {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>>;
}

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Skip attaching the Authorization header even when a token is stored.
    pub skip_auth: bool,
}

impl RequestOptions {
    /// Options for endpoints that must never carry credentials.
    pub fn anonymous() -> Self {
        Self { skip_auth: true }
    }
}

/// Production [`Transport`] over reqwest.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let inner = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client construction");
        Self { inner }
    }
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport {
    /// reqwest's wasm backend has no client-level timeout; the browser's
    /// fetch budget applies instead of `timeout_secs`.
    pub fn new(_config: &ClientConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
            Method::Put => self.inner.put(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Client wrapper that attaches credentials and unwraps envelopes.
#[derive(Clone)]
pub struct HttpClient<T: Transport> {
    transport: T,
    tokens: Arc<dyn TokenStore>,
    base_url: String,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T, tokens: Arc<dyn TokenStore>, config: &ClientConfig) -> Self {
        Self {
            transport,
            tokens,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get<R>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::Get, path, None, options).await
    }

    pub async fn post<R>(
        &self,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::Post, path, body, options).await
    }

    pub async fn put<R>(
        &self,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::Put, path, body, options).await
    }

    async fn request<R>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        let bearer = if options.skip_auth {
            None
        } else {
            self.tokens.load().filter(|token| !token.is_empty())
        };

        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            bearer,
        };

        let raw = match self.transport.execute(request).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(error = %err, path, "transport failure");
                return Err(HttpError::network());
            }
        };

        if (200..300).contains(&raw.status) {
            serde_json::from_str::<ApiResponse<R>>(&raw.body).map_err(|err| {
                tracing::debug!(error = %err, status = raw.status, path, "unparseable success body");
                HttpError::decode(raw.status)
            })
        } else {
            let envelope = serde_json::from_str::<ApiResponse<Value>>(&raw.body).ok();
            Err(HttpError::from_status(raw.status, envelope))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockTransport;
    use serde_json::json;
    use store::MemoryStore;

    fn client(transport: &MockTransport, tokens: Arc<MemoryStore>) -> HttpClient<MockTransport> {
        HttpClient::new(transport.clone(), tokens, &ClientConfig::default())
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_stored() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"code":0,"message":"ok","data":null}"#);
        let tokens = Arc::new(MemoryStore::new());
        tokens.store("abc");

        client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "/api/auth/me");
        assert_eq!(requests[0].bearer.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_skip_auth_never_attaches_header() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"code":0,"message":"ok","data":null}"#);
        let tokens = Arc::new(MemoryStore::new());
        tokens.store("abc");

        client(&transport, tokens)
            .post::<Value>("/auth/login", Some(json!({"username": "alice"})), RequestOptions::anonymous())
            .await
            .unwrap();

        assert!(transport.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_empty_stored_token_counts_as_absent() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"code":0,"message":"ok","data":null}"#);
        let tokens = Arc::new(MemoryStore::new());
        tokens.store("");

        client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap();

        assert!(transport.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_success_returns_envelope() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"code":0,"message":"ok","data":{"id":"1","username":"alice"}}"#);
        let tokens = Arc::new(MemoryStore::new());

        let response = client(&transport, tokens)
            .get::<crate::models::UserInfo>("/auth/me", RequestOptions::default())
            .await
            .unwrap();

        assert_eq!(response.code, 0);
        assert_eq!(response.message, "ok");
        assert_eq!(response.data.username, "alice");
    }

    #[tokio::test]
    async fn test_put_carries_body() {
        let transport = MockTransport::new();
        transport.push_response(200, r#"{"code":0,"message":"ok","data":null}"#);
        let tokens = Arc::new(MemoryStore::new());

        client(&transport, tokens)
            .put::<Value>("/auth/me", Some(json!({"email": "a@b.c"})), RequestOptions::default())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].body, Some(json!({"email": "a@b.c"})));
    }

    #[tokio::test]
    async fn test_failure_maps_status_and_server_message() {
        let transport = MockTransport::new();
        transport.push_response(404, r#"{"code":1404,"message":"no such account","data":null}"#);
        let tokens = Arc::new(MemoryStore::new());

        let err = client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "no such account");
        assert_eq!(err.code, Some(1404));
    }

    #[tokio::test]
    async fn test_failure_without_envelope_uses_default_message() {
        let transport = MockTransport::new();
        transport.push_response(500, "upstream exploded");
        let tokens = Arc::new(MemoryStore::new());

        let err = client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "server error");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network_error() {
        let transport = MockTransport::new();
        transport.push_network_failure();
        let tokens = Arc::new(MemoryStore::new());

        let err = client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.message, "network error");
        assert!(err.status.is_none());
    }

    #[tokio::test]
    async fn test_malformed_success_body_maps_to_decode_error() {
        let transport = MockTransport::new();
        transport.push_response(200, "<!doctype html>");
        let tokens = Arc::new(MemoryStore::new());

        let err = client(&transport, tokens)
            .get::<Value>("/auth/me", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(err.status, Some(200));
    }
}
