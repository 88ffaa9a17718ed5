#![forbid(unsafe_code)]

pub mod catalog;
pub mod client;
pub mod error;

pub use catalog::{
    AudioAttachment, AudioUploadReceipt, CatalogApi, ImageAttachment, ImageUploadReceipt,
    InMemoryApi, QuestionUpdate,
};
pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
