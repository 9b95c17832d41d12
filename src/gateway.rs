use std::time::Duration;

use wreq::Client;

use crate::error::{self, AirportError};
use crate::model::Envelope;
use crate::query::FetchParams;

pub const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";

/// Connection settings for the aviationstack gateway. The access key is
/// supplied by the caller (flag or environment), never a source literal.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub access_key: String,
    pub base_url: String,
    pub proxy: Option<String>,
    pub timeout: u64,
}

impl GatewayConfig {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            timeout: 30,
        }
    }
}

/// The one seam between the store and the network. Stateless: each call is a
/// single HTTP round trip with no caching, retries, or rate limiting.
pub trait Gateway {
    fn fetch_airports(
        &self,
        params: &FetchParams,
    ) -> impl std::future::Future<Output = Result<Envelope, AirportError>> + Send;

    fn fetch_airport_by_code(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = Result<Envelope, AirportError>> + Send;
}

/// `Gateway` backed by the aviationstack REST API.
#[derive(Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<Client, AirportError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(self.config.timeout));

        if let Some(ref proxy) = self.config.proxy {
            builder = builder.proxy(wreq::Proxy::all(proxy).map_err(error::from_http_error)?);
        }

        builder.build().map_err(error::from_http_error)
    }

    async fn get_envelope(&self, params: &FetchParams) -> Result<Envelope, AirportError> {
        let client = self.build_client()?;

        let mut query = vec![("access_key".to_string(), self.config.access_key.clone())];
        query.extend(params.to_url_params());

        let url = format!("{}/airports", self.config.base_url);
        log::debug!(
            "GET {url} offset={} limit={} search={:?}",
            params.offset,
            params.limit,
            params.search
        );

        let response = client
            .get(url.as_str())
            .query(&query)
            .send()
            .await
            .map_err(error::from_http_error)?;

        let status = response.status().as_u16();
        match status {
            200 => {}
            401 | 403 => return Err(AirportError::Unauthorized),
            429 => return Err(AirportError::RateLimited),
            _ if status >= 400 => return Err(AirportError::HttpStatus(status)),
            _ => {}
        }

        let body = response.text().await.map_err(error::from_http_error)?;
        serde_json::from_str(&body).map_err(|e| AirportError::Decode(e.to_string()))
    }
}

impl Gateway for HttpGateway {
    async fn fetch_airports(&self, params: &FetchParams) -> Result<Envelope, AirportError> {
        params.validate()?;
        self.get_envelope(params).await
    }

    /// Lookup by code reuses the same envelope shape with `search = code`.
    /// The API is expected, not enforced, to return zero or one record.
    async fn fetch_airport_by_code(&self, code: &str) -> Result<Envelope, AirportError> {
        self.get_envelope(&FetchParams::for_code(code)).await
    }
}
