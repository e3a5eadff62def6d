use super::DiskService;
use crate::models::{ResourceItem, ResourceList};
use crate::rate_limit::RateLimiter;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};

const SERVICE: &str = "disk";
const MAX_CALLS_PER_SECOND: usize = 10;

/// HTTP client for the Disk resources REST API.
///
/// Every request carries the account's OAuth token; folder creation treats
/// a 409 conflict (folder already exists) as success.
pub struct DiskClient {
    client: Client,
    token: String,
    base_url: String,
    limiter: RateLimiter,
}

impl DiskClient {
    pub fn new(client: Client, token: String, base_url: String) -> Self {
        Self::new_with_limiter(
            client,
            token,
            base_url,
            RateLimiter::per_second(MAX_CALLS_PER_SECOND),
        )
    }

    /// Inject a specific limiter. The limiter is per-instance state, never
    /// shared across clients.
    pub fn new_with_limiter(
        client: Client,
        token: String,
        base_url: String,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            client,
            token,
            base_url,
            limiter,
        }
    }

    async fn request(
        &self,
        http_method: Method,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        self.limiter.acquire().await;

        let response = self
            .client
            .request(http_method, &url)
            .header("Authorization", format!("OAuth {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Disk API: {}", e);
                e
            })?;

        Ok(response)
    }
}

#[async_trait]
impl DiskService for DiskClient {
    async fn create_folder(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, self.base_url.clone(), &[("path", path)])
            .await?;

        // 409 means the folder already exists. That is the one status absorbed
        // here; everything else non-2xx is a real failure.
        if response.status() == StatusCode::CONFLICT {
            tracing::info!("Folder '{}' already exists", path);
            return Ok(());
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!(
                "Failed to create folder '{}' (status {}): {}",
                path,
                status,
                error_text
            );
            return Err(Error::RemoteRequest {
                service: SERVICE,
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::info!("Folder '{}' created", path);
        Ok(())
    }

    async fn upload_url(&self, folder: &str, source_url: &str, name: &str) -> Result<()> {
        let path = format!("{}/{}", folder, name);
        let url = format!("{}/upload", self.base_url);
        let response = self
            .request(
                Method::POST,
                url,
                &[
                    ("path", path.as_str()),
                    ("url", source_url),
                    ("overwrite", "true"),
                ],
            )
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!(
                "Failed to upload file '{}' (status {}): {}",
                name,
                status,
                error_text
            );
            return Err(Error::RemoteRequest {
                service: SERVICE,
                status: status.as_u16(),
                message: error_text,
            });
        }

        tracing::info!("File '{}' uploaded to folder '{}'", name, folder);
        Ok(())
    }

    async fn list_folder(&self, path: &str) -> Result<Vec<ResourceItem>> {
        let response = self
            .request(Method::GET, self.base_url.clone(), &[("path", path)])
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!(
                "Failed to list folder '{}' (status {}): {}",
                path,
                status,
                error_text
            );
            return Err(Error::RemoteRequest {
                service: SERVICE,
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        let listing: ResourceList = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Disk listing: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })?;

        Ok(listing.embedded.items)
    }
}
