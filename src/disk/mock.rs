use super::DiskService;
use crate::models::ResourceItem;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockDiskClient {
    folders: Arc<Mutex<HashMap<String, Vec<ResourceItem>>>>,
    failing_uploads: Arc<Mutex<HashSet<String>>>,
    fail_create: Arc<Mutex<bool>>,
    create_count: Arc<Mutex<usize>>,
    conflict_count: Arc<Mutex<usize>>,
    upload_count: Arc<Mutex<usize>>,
    list_count: Arc<Mutex<usize>>,
}

impl MockDiskClient {
    pub fn new() -> Self {
        Self {
            folders: Arc::new(Mutex::new(HashMap::new())),
            failing_uploads: Arc::new(Mutex::new(HashSet::new())),
            fail_create: Arc::new(Mutex::new(false)),
            create_count: Arc::new(Mutex::new(0)),
            conflict_count: Arc::new(Mutex::new(0)),
            upload_count: Arc::new(Mutex::new(0)),
            list_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_folder(self, path: &str) -> Self {
        self.folders
            .lock()
            .unwrap()
            .insert(path.to_string(), Vec::new());
        self
    }

    /// Make `upload_url` fail for one file name.
    pub fn with_failing_upload(self, name: &str) -> Self {
        self.failing_uploads.lock().unwrap().insert(name.to_string());
        self
    }

    /// Make `create_folder` fail outright (not a conflict).
    pub fn with_failing_create(self) -> Self {
        *self.fail_create.lock().unwrap() = true;
        self
    }

    pub fn get_create_count(&self) -> usize {
        *self.create_count.lock().unwrap()
    }

    /// How many creates hit an already-existing folder.
    pub fn get_conflict_count(&self) -> usize {
        *self.conflict_count.lock().unwrap()
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn get_list_count(&self) -> usize {
        *self.list_count.lock().unwrap()
    }
}

impl Default for MockDiskClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiskService for MockDiskClient {
    async fn create_folder(&self, path: &str) -> Result<()> {
        let mut count = self.create_count.lock().unwrap();
        *count += 1;

        if *self.fail_create.lock().unwrap() {
            return Err(Error::RemoteRequest {
                service: "disk",
                status: 503,
                message: "injected create failure".to_string(),
            });
        }

        let mut folders = self.folders.lock().unwrap();
        if folders.contains_key(path) {
            // Mirrors the real client absorbing a 409 conflict.
            *self.conflict_count.lock().unwrap() += 1;
        } else {
            folders.insert(path.to_string(), Vec::new());
        }
        Ok(())
    }

    async fn upload_url(&self, folder: &str, _source_url: &str, name: &str) -> Result<()> {
        let mut count = self.upload_count.lock().unwrap();
        *count += 1;

        if self.failing_uploads.lock().unwrap().contains(name) {
            return Err(Error::RemoteRequest {
                service: "disk",
                status: 500,
                message: format!("injected upload failure for {}", name),
            });
        }

        let mut folders = self.folders.lock().unwrap();
        let items = folders.get_mut(folder).ok_or_else(|| Error::RemoteRequest {
            service: "disk",
            status: 404,
            message: format!("folder not found: {}", folder),
        })?;

        // overwrite=true semantics: replace an entry with the same name.
        items.retain(|item| item.name != name);
        items.push(ResourceItem {
            name: name.to_string(),
            kind: "file".to_string(),
        });
        Ok(())
    }

    async fn list_folder(&self, path: &str) -> Result<Vec<ResourceItem>> {
        let mut count = self.list_count.lock().unwrap();
        *count += 1;

        self.folders
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::RemoteRequest {
                service: "disk",
                status: 404,
                message: format!("folder not found: {}", path),
            })
    }
}
