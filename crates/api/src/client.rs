use std::env;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use async_trait::async_trait;
use study_core::model::{Question, QuestionId, Skill, SkillId, Standard, StandardId, Subject, SubjectId};

use crate::catalog::{
    AudioAttachment, AudioUploadReceipt, CatalogApi, ImageAttachment, ImageUploadReceipt,
    QuestionUpdate,
};
use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Where the remote catalog lives.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base: Url,
    // base with no trailing slash, ready for path concatenation
    base_str: String,
}

impl ApiConfig {
    /// Reads `STUDY_API_URL`, falling back to the default local backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the configured value is not an
    /// absolute http(s) URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = env::var("STUDY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(raw)
    }

    /// Validates and normalizes a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the value is not an absolute
    /// http(s) URL.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ApiError> {
        let trimmed = raw.as_ref().trim();
        let base = Url::parse(trimmed)
            .map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") || !base.has_host() {
            return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
        }
        let base_str = base.as_str().trim_end_matches('/').to_string();
        Ok(Self { base, base_str })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_str
    }

    /// Scheme + authority of the backend, for resolving relative media paths.
    #[must_use]
    pub fn origin(&self) -> String {
        self.base.origin().ascii_serialization()
    }
}

/// `CatalogApi` adapter over the remote REST backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: Value = response.json().await?;
        decode_list(body)
    }

    async fn decode_record<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: Value = response.json().await?;
        serde_json::from_value(body).map_err(|_| ApiError::MalformedPayload)
    }
}

/// A list endpoint body must be a JSON sequence; anything else is malformed.
fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    if !body.is_array() {
        return Err(ApiError::MalformedPayload);
    }
    serde_json::from_value(body).map_err(|_| ApiError::MalformedPayload)
}

fn image_mime(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn audio_mime(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn list_standards(&self) -> Result<Vec<Standard>, ApiError> {
        self.fetch_list("standards").await
    }

    async fn list_subjects(&self, standard: StandardId) -> Result<Vec<Subject>, ApiError> {
        self.fetch_list(&format!("standards/{standard}/subjects")).await
    }

    async fn list_skills(&self, subject: SubjectId) -> Result<Vec<Skill>, ApiError> {
        self.fetch_list(&format!("subjects/{subject}/skills")).await
    }

    async fn list_questions(
        &self,
        skill: SkillId,
        session: u32,
    ) -> Result<Vec<Question>, ApiError> {
        self.fetch_list(&format!("skills/{skill}/questions?session={session}"))
            .await
    }

    async fn update_question(
        &self,
        id: QuestionId,
        update: &QuestionUpdate,
    ) -> Result<Question, ApiError> {
        let response = self
            .client
            .put(self.endpoint(&format!("questions/{id}")))
            .json(update)
            .send()
            .await?;
        Self::decode_record(response).await
    }

    async fn upload_images(
        &self,
        id: QuestionId,
        images: Vec<ImageAttachment>,
    ) -> Result<ImageUploadReceipt, ApiError> {
        let mut form = Form::new().text("question_id", id.to_string());
        for image in images {
            let mime = image_mime(&image.file_name);
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(mime)?;
            form = form.part("images[]", part);
        }
        let response = self
            .client
            .post(self.endpoint(&format!("questions/{id}/upload-images")))
            .multipart(form)
            .send()
            .await?;
        Self::decode_record(response).await
    }

    async fn upload_audio(
        &self,
        id: QuestionId,
        audio: AudioAttachment,
    ) -> Result<AudioUploadReceipt, ApiError> {
        let mime = audio_mime(&audio.file_name);
        let part = Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(mime)?;
        let form = Form::new()
            .text("question_id", id.to_string())
            .part("audio", part);
        let response = self
            .client
            .post(self.endpoint(&format!("questions/{id}/upload-audio")))
            .multipart(form)
            .send()
            .await?;
        Self::decode_record(response).await
    }
}
