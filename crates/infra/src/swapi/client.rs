//! SWAPI client for starship listing and detail lookups

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use shipyard_core::{StarshipDetail, StarshipPage, StarshipSource};
use shipyard_domain::{Config, Result, ShipyardError};
use tracing::debug;

use super::types::{DetailResponse, PageResponse};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the SWAPI starship endpoints
#[derive(Clone, Debug)]
pub struct SwapiClient {
    starships_url: Url,
    http_client: HttpClient,
}

impl SwapiClient {
    /// Create a client from the upstream and resilience sections of `config`.
    ///
    /// Every request carries `Accept: application/json`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .resilience(&config.resilience)
            .user_agent(config.upstream.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Self::with_http_client(&config.upstream.base_url, http_client)
    }

    /// Create a client with a custom transport (for testing)
    pub fn with_http_client(base_url: &str, http_client: HttpClient) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|e| {
            ShipyardError::Config(format!("invalid upstream base url '{base_url}': {e}"))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let starships_url = base.join("starships").map_err(|e| {
            ShipyardError::Config(format!("invalid upstream base url '{base_url}': {e}"))
        })?;
        if starships_url.cannot_be_a_base() {
            return Err(ShipyardError::Config(format!(
                "upstream base url '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self { starships_url, http_client })
    }

    fn detail_url(&self, id: &str) -> Result<Url> {
        let mut url = self.starships_url.clone();
        url.path_segments_mut()
            .map_err(|()| ShipyardError::Internal("starships url cannot be a base".into()))?
            .push(id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let response = self.http_client.send(request).await?;
        let response = ensure_success(response, what).await?;

        response.json::<T>().await.map_err(|err| {
            let infra: InfraError = err.into();
            ShipyardError::from(infra)
        })
    }
}

/// Turn a non-success status into `ShipyardError::Status`, keeping the body
/// text for context.
async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = body.trim();
    let message = if detail.is_empty() {
        format!("failed to fetch {what}")
    } else {
        format!("failed to fetch {what}: {detail}")
    };

    Err(ShipyardError::Status { status: status.as_u16(), message })
}

#[async_trait]
impl StarshipSource for SwapiClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<StarshipPage> {
        debug!(page, limit, "fetching starship page");
        let request = self
            .http_client
            .request(Method::GET, self.starships_url.clone())
            .query(&[("page", page), ("limit", limit)]);

        let body: PageResponse =
            self.get_json(request, &format!("starship page {page}")).await?;
        Ok(body.into())
    }

    async fn fetch_detail(&self, id: &str) -> Result<StarshipDetail> {
        let url = self.detail_url(id)?;
        debug!(id, %url, "fetching starship detail");
        let request = self.http_client.request(Method::GET, url);

        let body: DetailResponse =
            self.get_json(request, &format!("starship details for ID {id}")).await?;
        Ok(body.into())
    }
}
