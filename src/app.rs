//! Application orchestration: one random image per breed unit, uploaded to Disk.

use crate::disk::{DiskClient, DiskService};
use crate::dogs::{DogApiClient, DogApiService};
use crate::models::{Config, UploadTask};
use crate::Result;
use tracing::{error, info};

/// Coordinates the dog API and Disk clients for a single breed run.
pub struct App {
    dogs: Box<dyn DogApiService>,
    disk: Box<dyn DiskService>,
    folder: String,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub dogs: Box<dyn DogApiService>,
    pub disk: Box<dyn DiskService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices, folder: String) -> Self {
        Self {
            dogs: services.dogs,
            disk: services.disk,
            folder,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across both API clients. Each client
        // still gets its own rate limiter.
        let http_client = reqwest::Client::new();

        let dogs: Box<dyn DogApiService> = Box::new(DogApiClient::new(
            http_client.clone(),
            config.dog_api_base_url.clone(),
        ));
        let disk: Box<dyn DiskService> = Box::new(DiskClient::new(
            http_client,
            config.yandex_token.clone(),
            config.disk_api_base_url.clone(),
        ));

        Ok(Self::with_services(
            AppServices { dogs, disk },
            config.upload_folder,
        ))
    }

    /// Upload one random image per sub-breed of `breed`, or a single image
    /// when the breed has no sub-breeds.
    ///
    /// Folder creation and the sub-breed listing abort the run on failure;
    /// after that, each unit is processed independently and a failing unit is
    /// logged and skipped. A partially completed run simply leaves fewer
    /// files than expected.
    pub async fn run(&self, breed: &str) -> Result<()> {
        info!("Uploading images for breed '{}' into '{}'", breed, self.folder);

        self.disk.create_folder(&self.folder).await?;

        let sub_breeds = self.dogs.list_sub_breeds(breed).await?;
        info!("Breed '{}' has {} sub-breeds", breed, sub_breeds.len());

        for task in UploadTask::for_breed(breed, &sub_breeds) {
            if let Err(e) = self.upload_one(&task).await {
                match &task.sub_breed {
                    Some(sub) => error!(
                        "Failed to process breed {} (sub-breed {}): {}",
                        task.breed, sub, e
                    ),
                    None => error!("Failed to process breed {}: {}", task.breed, e),
                }
            }
        }

        info!("Run complete for breed '{}'", breed);
        Ok(())
    }

    async fn upload_one(&self, task: &UploadTask) -> Result<()> {
        let image_url = self
            .dogs
            .random_image(&task.breed, task.sub_breed.as_deref())
            .await?;
        self.disk
            .upload_url(&self.folder, &image_url, &task.file_name())
            .await
    }
}
