//! Data models and structures
//!
//! Defines configuration, the upload work unit, and the wire formats for
//! the dog API and the Disk resources API.

use serde::Deserialize;

/// One unit of work: a breed, or a breed/sub-breed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    pub breed: String,
    pub sub_breed: Option<String>,
}

impl UploadTask {
    /// One task per sub-breed, or a single breed-only task when there are none.
    pub fn for_breed(breed: &str, sub_breeds: &[String]) -> Vec<Self> {
        if sub_breeds.is_empty() {
            vec![Self {
                breed: breed.to_string(),
                sub_breed: None,
            }]
        } else {
            sub_breeds
                .iter()
                .map(|sub| Self {
                    breed: breed.to_string(),
                    sub_breed: Some(sub.clone()),
                })
                .collect()
        }
    }

    /// `breed.jpg`, or `breed_subbreed.jpg` when a sub-breed is present.
    ///
    /// Sub-breed names are unique within a breed, so names never collide
    /// within a run.
    pub fn file_name(&self) -> String {
        match &self.sub_breed {
            Some(sub) => format!("{}_{}.jpg", self.breed, sub),
            None => format!("{}.jpg", self.breed),
        }
    }
}

// Dog API response models

#[derive(Debug, Deserialize)]
pub struct SubBreedListResponse {
    #[serde(default)]
    pub message: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RandomImageResponse {
    pub message: String,
}

// Disk resources API models

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceList {
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded,
}

#[derive(Debug, Default, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub items: Vec<ResourceItem>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub yandex_token: String,
    pub dog_api_base_url: String,
    pub disk_api_base_url: String,
    pub upload_folder: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            yandex_token: std::env::var("YANDEX_TOKEN")
                .map_err(|_| crate::Error::Config("YANDEX_TOKEN not set".to_string()))?,
            dog_api_base_url: std::env::var("DOG_API_BASE_URL")
                .unwrap_or_else(|_| "https://dog.ceo/api".to_string()),
            disk_api_base_url: std::env::var("DISK_API_BASE_URL")
                .unwrap_or_else(|_| "https://cloud-api.yandex.net/v1/disk/resources".to_string()),
            upload_folder: std::env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| "dog_images".to_string()),
        })
    }
}
