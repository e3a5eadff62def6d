use super::DogApiService;
use crate::models::{RandomImageResponse, SubBreedListResponse};
use crate::rate_limit::RateLimiter;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

const SERVICE: &str = "dog.ceo";
const MAX_CALLS_PER_SECOND: usize = 10;

/// HTTP client for the dog.ceo REST API.
pub struct DogApiClient {
    client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl DogApiClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self::new_with_limiter(
            client,
            base_url,
            RateLimiter::per_second(MAX_CALLS_PER_SECOND),
        )
    }

    /// Inject a specific limiter. The limiter is per-instance state, never
    /// shared across clients.
    pub fn new_with_limiter(client: Client, base_url: String, limiter: RateLimiter) -> Self {
        Self {
            client,
            base_url,
            limiter,
        }
    }

    async fn get_json<Resp: DeserializeOwned>(&self, url: String) -> Result<Resp> {
        self.limiter.acquire().await;

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send request to dog API: {}", e);
            e
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Dog API error (status {}): {}", status, error_text);
            return Err(Error::RemoteRequest {
                service: SERVICE,
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse dog API response: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })
    }
}

#[async_trait]
impl DogApiService for DogApiClient {
    async fn list_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let url = format!("{}/breed/{}/list", self.base_url, breed);
        let response: SubBreedListResponse = self.get_json(url).await?;
        Ok(response.message)
    }

    async fn random_image(&self, breed: &str, sub_breed: Option<&str>) -> Result<String> {
        let url = match sub_breed {
            Some(sub) => format!("{}/breed/{}/{}/images/random", self.base_url, breed, sub),
            None => format!("{}/breed/{}/images/random", self.base_url, breed),
        };
        let response: RandomImageResponse = self.get_json(url).await?;
        Ok(response.message)
    }
}
