//! Yandex Disk integration
//!
//! Creates the destination folder, uploads images into it by reference URL,
//! and lists folder contents so tests can audit what was uploaded.

pub mod client;
pub mod mock;

pub use client::DiskClient;
pub use mock::MockDiskClient;

use crate::models::ResourceItem;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DiskService: Send + Sync {
    async fn create_folder(&self, path: &str) -> Result<()>;
    async fn upload_url(&self, folder: &str, source_url: &str, name: &str) -> Result<()>;
    async fn list_folder(&self, path: &str) -> Result<Vec<ResourceItem>>;
}
