use super::DogApiService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

fn unit_key(breed: &str, sub_breed: Option<&str>) -> String {
    match sub_breed {
        Some(sub) => format!("{}/{}", breed, sub),
        None => breed.to_string(),
    }
}

#[derive(Clone)]
pub struct MockDogApiClient {
    sub_breeds: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failing_images: Arc<Mutex<HashSet<String>>>,
    list_count: Arc<Mutex<usize>>,
    image_count: Arc<Mutex<usize>>,
}

impl MockDogApiClient {
    pub fn new() -> Self {
        Self {
            sub_breeds: Arc::new(Mutex::new(HashMap::new())),
            failing_images: Arc::new(Mutex::new(HashSet::new())),
            list_count: Arc::new(Mutex::new(0)),
            image_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_sub_breeds(self, breed: &str, sub_breeds: &[&str]) -> Self {
        self.sub_breeds.lock().unwrap().insert(
            breed.to_string(),
            sub_breeds.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Make `random_image` fail for one breed or breed/sub-breed unit.
    pub fn with_failing_image(self, breed: &str, sub_breed: Option<&str>) -> Self {
        self.failing_images
            .lock()
            .unwrap()
            .insert(unit_key(breed, sub_breed));
        self
    }

    pub fn get_list_count(&self) -> usize {
        *self.list_count.lock().unwrap()
    }

    pub fn get_image_count(&self) -> usize {
        *self.image_count.lock().unwrap()
    }
}

impl Default for MockDogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogApiService for MockDogApiClient {
    async fn list_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let mut count = self.list_count.lock().unwrap();
        *count += 1;

        Ok(self
            .sub_breeds
            .lock()
            .unwrap()
            .get(breed)
            .cloned()
            .unwrap_or_default())
    }

    async fn random_image(&self, breed: &str, sub_breed: Option<&str>) -> Result<String> {
        let mut count = self.image_count.lock().unwrap();
        *count += 1;

        let key = unit_key(breed, sub_breed);
        if self.failing_images.lock().unwrap().contains(&key) {
            return Err(Error::RemoteRequest {
                service: "dog.ceo",
                status: 500,
                message: format!("injected failure for {}", key),
            });
        }

        Ok(format!("https://images.dog.ceo/breeds/{}/random.jpg", key))
    }
}
