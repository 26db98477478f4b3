use std::time::{Duration, Instant};

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use shipyard_domain::{ResilienceConfig, ShipyardError, TimeoutScope};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// HTTP client with built-in retry and timeout support.
///
/// A logical call is retried on connection failures and 5xx responses, waiting
/// `backoff_unit * backoff_base^n` before retry `n`. 4xx and successful
/// responses are returned as-is.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    max_retries: u32,
    backoff_base: f64,
    backoff_unit: Duration,
    timeout: Duration,
    timeout_scope: TimeoutScope,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ShipyardError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry and timeout semantics.
    ///
    /// # Errors
    /// - `ShipyardError::Status` when every attempt answered with a 5xx
    /// - `ShipyardError::Network` when the connection keeps failing
    /// - `ShipyardError::Timeout` when the configured timeout elapses
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ShipyardError> {
        match self.timeout_scope {
            TimeoutScope::Overall => {
                let started = Instant::now();
                tokio::time::timeout(self.timeout, self.send_with_retry(builder))
                    .await
                    .map_err(|_| {
                        ShipyardError::Timeout(format!(
                            "no response within {:?} (gave up after {:?}, retries included)",
                            self.timeout,
                            started.elapsed()
                        ))
                    })?
            }
            TimeoutScope::PerAttempt => self.send_with_retry(builder).await,
        }
    }

    async fn send_with_retry(&self, builder: RequestBuilder) -> Result<Response, ShipyardError> {
        let attempts = self.max_retries.saturating_add(1);

        for attempt in 1..=attempts {
            let cloned_builder = builder.try_clone().ok_or_else(|| {
                ShipyardError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request = cloned_builder.build().map_err(|err| {
                let infra: InfraError = err.into();
                ShipyardError::from(infra)
            })?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            let outcome = match self.timeout_scope {
                TimeoutScope::PerAttempt => {
                    tokio::time::timeout(self.timeout, self.client.execute(request))
                        .await
                        .map_err(|_| {
                            ShipyardError::Timeout(format!(
                                "{method} {url} attempt {attempt} exceeded {:?}",
                                self.timeout
                            ))
                        })?
                }
                TimeoutScope::Overall => self.client.execute(request).await,
            };

            match outcome {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if !status.is_server_error() {
                        return Ok(response);
                    }

                    if attempt < attempts {
                        self.wait_before_retry(attempt, &format!("HTTP {status}")).await;
                        continue;
                    }

                    return Err(ShipyardError::Status {
                        status: status.as_u16(),
                        message: format!("{method} {url} still failing after {attempts} attempts"),
                    });
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");

                    if attempt < attempts && should_retry_error(&err) {
                        self.wait_before_retry(attempt, &err.to_string()).await;
                        continue;
                    }

                    let infra: InfraError = err.into();
                    return Err(ShipyardError::from(infra));
                }
            }
        }

        Err(ShipyardError::Internal(
            "http client exhausted retries without producing a result".into(),
        ))
    }

    /// Delay before retry number `retry` (1-based).
    fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let seconds = self.backoff_unit.as_secs_f64() * self.backoff_base.powi(exponent);
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
    }

    async fn wait_before_retry(&self, retry: u32, cause: &str) {
        let delay = self.backoff_delay(retry);
        warn!(
            retry,
            max_retries = self.max_retries,
            wait_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            cause,
            "retrying upstream request"
        );
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    timeout_scope: TimeoutScope,
    max_retries: u32,
    backoff_base: f64,
    backoff_unit: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::default_from(&ResilienceConfig::default())
    }
}

impl HttpClientBuilder {
    fn default_from(config: &ResilienceConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            timeout_scope: config.timeout_scope,
            max_retries: config.max_retries,
            backoff_base: config.backoff_base,
            backoff_unit: Duration::from_millis(config.backoff_unit_ms),
            user_agent: None,
            default_headers: None,
        }
    }

    /// Apply every retry and timeout setting from `config`.
    pub fn resilience(self, config: &ResilienceConfig) -> Self {
        Self { user_agent: self.user_agent, default_headers: self.default_headers, ..Self::default_from(config) }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_scope(mut self, scope: TimeoutScope) -> Self {
        self.timeout_scope = scope;
        self
    }

    /// Configure the number of retries after the initial attempt.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Exponent base for the backoff; clamped to at least 1.
    pub fn backoff_base(mut self, base: f64) -> Self {
        self.backoff_base = if base.is_finite() { base.max(1.0) } else { 1.0 };
        self
    }

    pub fn backoff_unit(mut self, unit: Duration) -> Self {
        self.backoff_unit = unit;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, ShipyardError> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ShipyardError::from(infra)
        })?;

        Ok(HttpClient {
            client,
            max_retries: self.max_retries,
            backoff_base: self.backoff_base,
            backoff_unit: self.backoff_unit,
            timeout: self.timeout,
            timeout_scope: self.timeout_scope,
        })
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_request()
}
