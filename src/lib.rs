//! Uploads random dog images to Yandex Disk, one per breed or sub-breed.
//!
//! Image URLs come from the public dog.ceo API and are handed to the Disk
//! upload-by-URL endpoint, with each client throttled by its own
//! sliding-window rate limiter.

pub mod app;
pub mod disk;
pub mod dogs;
pub mod error;
pub mod models;
pub mod rate_limit;

pub use error::{Error, Result};
