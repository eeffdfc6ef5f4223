use crate::{
    models::{ApiResponse, Settings, Swap},
    Error,
};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Anything that can look up a swap by its identifier.
#[async_trait(?Send)]
pub trait SwapDetailsSource {
    async fn get_swap_details(&self, id: &str) -> Result<Swap, Error>;
}

/// HTTP client for the Layerswap REST API
#[derive(Clone, Debug)]
pub struct LayerswapApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl LayerswapApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_envelope(status.as_u16(), &body).inspect_err(|err| warn!("GET {url}: {err}"))
    }

    pub async fn get_settings(&self) -> Result<Settings, Error> {
        self.get("settings").await
    }
}

#[async_trait(?Send)]
impl SwapDetailsSource for LayerswapApiClient {
    async fn get_swap_details(&self, id: &str) -> Result<Swap, Error> {
        self.get(&format!("swaps/{id}")).await
    }
}

// The envelope is honoured even on error statuses, since that is where the API puts its message.
fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, Error> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => Err(Error::Http {
            status,
            body: body.to_string(),
        }),
        Err(error) => Err(error.into()),
    }
}
