use std::sync::Arc;

use api::{AudioAttachment, CatalogApi, ImageAttachment, QuestionUpdate};
use study_core::model::{MediaSource, Question, QuestionId};

use crate::error::QuestionServiceError;

/// Editable fields of a question, staged in the editor before save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionDraft {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub media: MediaSource,
    pub audio_url: Option<String>,
    pub kind: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question_text: question.question_text.clone(),
            options: question.options.clone(),
            correct_answer: question.correct_answer.clone(),
            media: question.media.clone(),
            audio_url: question.audio_url.clone(),
            kind: question.kind.clone(),
        }
    }

    fn to_update(&self) -> QuestionUpdate {
        QuestionUpdate {
            question_text: self.question_text.trim().to_string(),
            options: self
                .options
                .iter()
                .map(|option| option.trim().to_string())
                .filter(|option| !option.is_empty())
                .collect(),
            correct_answer: self.correct_answer.trim().to_string(),
            media: self.media.clone(),
            audio_url: self.audio_url.clone(),
            kind: self.kind.clone(),
        }
    }
}

/// Persists question edits and media uploads through the catalog API.
#[derive(Clone)]
pub struct QuestionService {
    api: Arc<dyn CatalogApi>,
}

impl QuestionService {
    #[must_use]
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Saves a draft and returns the updated question.
    ///
    /// # Errors
    ///
    /// Returns `EmptyQuestionText` for a blank draft, or the underlying
    /// `ApiError` if the request fails.
    pub async fn save(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Question, QuestionServiceError> {
        if draft.question_text.trim().is_empty() {
            return Err(QuestionServiceError::EmptyQuestionText);
        }
        Ok(self.api.update_question(id, &draft.to_update()).await?)
    }

    /// Uploads picked images and returns the combined media value to fold
    /// into the draft.
    ///
    /// # Errors
    ///
    /// Returns `NoAttachments` for an empty pick, or the underlying
    /// `ApiError` if the upload fails.
    pub async fn upload_images(
        &self,
        id: QuestionId,
        images: Vec<ImageAttachment>,
    ) -> Result<MediaSource, QuestionServiceError> {
        if images.is_empty() {
            return Err(QuestionServiceError::NoAttachments);
        }
        let receipt = self.api.upload_images(id, images).await?;
        Ok(receipt.media)
    }

    /// Uploads a picked audio clip and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ApiError` if the upload fails.
    pub async fn upload_audio(
        &self,
        id: QuestionId,
        audio: AudioAttachment,
    ) -> Result<String, QuestionServiceError> {
        let receipt = self.api.upload_audio(id, audio).await?;
        Ok(receipt.audio_url)
    }
}
