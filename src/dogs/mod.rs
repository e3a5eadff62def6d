//! Dog API integration
//!
//! Read-only client for the public dog.ceo breed taxonomy: sub-breed
//! listings and random image lookups.

pub mod client;
pub mod mock;

pub use client::DogApiClient;
pub use mock::MockDogApiClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DogApiService: Send + Sync {
    async fn list_sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
    async fn random_image(&self, breed: &str, sub_breed: Option<&str>) -> Result<String>;
}
