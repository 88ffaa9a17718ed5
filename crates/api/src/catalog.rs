use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use study_core::model::{
    MediaSource, Question, QuestionId, Skill, SkillId, Standard, StandardId, Subject, SubjectId,
};

use crate::error::ApiError;

/// JSON body for `PUT /questions/{id}`.
///
/// This mirrors the wire contract so adapters can serialize without leaking
/// transport concerns into the domain layer. `media` re-encodes to the
/// JSON-array-or-bare-path `media_url` string on serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(rename = "media_url")]
    pub media: MediaSource,
    pub audio_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuestionUpdate {
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

    pub fn apply_to(&self, question: &mut Question) {
        question.question_text = self.question_text.clone();
        question.options = self.options.clone();
        question.correct_answer = self.correct_answer.clone();
        question.media = self.media.clone();
        question.audio_url = self.audio_url.clone();
        question.kind = self.kind.clone();
    }
}

/// One image picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One audio clip picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Response of `POST /questions/{id}/upload-images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUploadReceipt {
    #[serde(rename = "media_url")]
    pub media: MediaSource,
    pub count: u32,
}

/// Response of `POST /questions/{id}/upload-audio`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioUploadReceipt {
    pub audio_url: String,
}

/// Contract for the remote catalog API.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the root standards list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a JSON sequence.
    async fn list_standards(&self) -> Result<Vec<Standard>, ApiError>;

    /// Fetch the subjects of a standard.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a JSON sequence.
    async fn list_subjects(&self, standard: StandardId) -> Result<Vec<Subject>, ApiError>;

    /// Fetch the skills of a subject.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a JSON sequence.
    async fn list_skills(&self, subject: SubjectId) -> Result<Vec<Skill>, ApiError>;

    /// Fetch the questions of a (skill, session) pair.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a JSON sequence.
    async fn list_questions(
        &self,
        skill: SkillId,
        session: u32,
    ) -> Result<Vec<Question>, ApiError>;

    /// Persist edits to a question and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable record body.
    async fn update_question(
        &self,
        id: QuestionId,
        update: &QuestionUpdate,
    ) -> Result<Question, ApiError>;

    /// Upload question images as a multipart form (`images[]`, `question_id`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable receipt.
    async fn upload_images(
        &self,
        id: QuestionId,
        images: Vec<ImageAttachment>,
    ) -> Result<ImageUploadReceipt, ApiError>;

    /// Upload a question audio clip as a multipart form (`audio`, `question_id`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or an
    /// undecodable receipt.
    async fn upload_audio(
        &self,
        id: QuestionId,
        audio: AudioAttachment,
    ) -> Result<AudioUploadReceipt, ApiError>;
}

#[derive(Default)]
struct InMemoryState {
    standards: Vec<Standard>,
    subjects: HashMap<StandardId, Vec<Subject>>,
    skills: HashMap<SubjectId, Vec<Skill>>,
    questions: HashMap<(SkillId, u32), Vec<Question>>,
    failure: Option<String>,
    uploaded_files: Vec<String>,
}

/// Seedable in-memory catalog implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryApi {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_standards(&self, standards: Vec<Standard>) {
        if let Ok(mut state) = self.state.lock() {
            state.standards = standards;
        }
    }

    pub fn seed_subjects(&self, standard: StandardId, subjects: Vec<Subject>) {
        if let Ok(mut state) = self.state.lock() {
            state.subjects.insert(standard, subjects);
        }
    }

    pub fn seed_skills(&self, subject: SubjectId, skills: Vec<Skill>) {
        if let Ok(mut state) = self.state.lock() {
            state.skills.insert(subject, skills);
        }
    }

    pub fn seed_questions(&self, skill: SkillId, session: u32, questions: Vec<Question>) {
        if let Ok(mut state) = self.state.lock() {
            state.questions.insert((skill, session), questions);
        }
    }

    /// Makes every subsequent call fail with the given message.
    pub fn set_failure(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = Some(message.into());
        }
    }

    pub fn clear_failure(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = None;
        }
    }

    /// File names received by the upload endpoints, in order.
    #[must_use]
    pub fn uploaded_files(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.uploaded_files.clone())
            .unwrap_or_default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, ApiError> {
        let state = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        if let Some(message) = &state.failure {
            return Err(ApiError::Unavailable(message.clone()));
        }
        Ok(state)
    }
}

#[async_trait]
impl CatalogApi for InMemoryApi {
    async fn list_standards(&self) -> Result<Vec<Standard>, ApiError> {
        Ok(self.locked()?.standards.clone())
    }

    async fn list_subjects(&self, standard: StandardId) -> Result<Vec<Subject>, ApiError> {
        Ok(self
            .locked()?
            .subjects
            .get(&standard)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_skills(&self, subject: SubjectId) -> Result<Vec<Skill>, ApiError> {
        Ok(self
            .locked()?
            .skills
            .get(&subject)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_questions(
        &self,
        skill: SkillId,
        session: u32,
    ) -> Result<Vec<Question>, ApiError> {
        Ok(self
            .locked()?
            .questions
            .get(&(skill, session))
            .cloned()
            .unwrap_or_default())
    }

    async fn update_question(
        &self,
        id: QuestionId,
        update: &QuestionUpdate,
    ) -> Result<Question, ApiError> {
        let mut state = self.locked()?;
        let question = state
            .questions
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .find(|question| question.id == id)
            .ok_or(ApiError::NotFound)?;
        update.apply_to(question);
        Ok(question.clone())
    }

    async fn upload_images(
        &self,
        _id: QuestionId,
        images: Vec<ImageAttachment>,
    ) -> Result<ImageUploadReceipt, ApiError> {
        let mut state = self.locked()?;
        let mut paths = Vec::with_capacity(images.len());
        for image in &images {
            state.uploaded_files.push(image.file_name.clone());
            paths.push(format!("uploads/{}", image.file_name));
        }
        let media = match paths.len() {
            0 => MediaSource::Empty,
            1 => MediaSource::Single(paths.remove(0)),
            _ => MediaSource::Multiple(paths),
        };
        Ok(ImageUploadReceipt {
            media,
            count: images.len() as u32,
        })
    }

    async fn upload_audio(
        &self,
        _id: QuestionId,
        audio: AudioAttachment,
    ) -> Result<AudioUploadReceipt, ApiError> {
        let mut state = self.locked()?;
        state.uploaded_files.push(audio.file_name.clone());
        Ok(AudioUploadReceipt {
            audio_url: format!("uploads/{}", audio.file_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64) -> Question {
        Question {
            id: QuestionId::new(id),
            question_text: format!("Question {id}"),
            options: vec!["a".into(), "b".into()],
            correct_answer: "a".into(),
            media: MediaSource::Empty,
            audio_url: None,
            kind: "mcq".into(),
        }
    }

    #[tokio::test]
    async fn serves_seeded_levels() {
        let api = InMemoryApi::new();
        let standard = StandardId::new(1);
        api.seed_standards(vec![Standard {
            id: standard,
            name: "Common Core".into(),
        }]);
        api.seed_subjects(
            standard,
            vec![Subject {
                id: SubjectId::new(9),
                name: "Math".into(),
            }],
        );

        let standards = api.list_standards().await.unwrap();
        assert_eq!(standards.len(), 1);
        let subjects = api.list_subjects(standard).await.unwrap();
        assert_eq!(subjects[0].name, "Math");
        // unseeded scope is an empty list, not an error
        assert!(api.list_subjects(StandardId::new(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_injection_rejects_every_call() {
        let api = InMemoryApi::new();
        api.set_failure("backend down");
        let err = api.list_standards().await.unwrap_err();
        assert!(err.to_string().contains("backend down"));

        api.clear_failure();
        assert!(api.list_standards().await.is_ok());
    }

    #[tokio::test]
    async fn update_question_applies_edits_in_place() {
        let api = InMemoryApi::new();
        let skill = SkillId::new(3);
        api.seed_questions(skill, 2, vec![question(7)]);

        let mut update = QuestionUpdate::from_question(&question(7));
        update.question_text = "Edited".into();
        update.media = MediaSource::Single("a.png".into());

        let updated = api
            .update_question(QuestionId::new(7), &update)
            .await
            .unwrap();
        assert_eq!(updated.question_text, "Edited");

        let listed = api.list_questions(skill, 2).await.unwrap();
        assert_eq!(listed[0].question_text, "Edited");
        assert_eq!(listed[0].media, MediaSource::Single("a.png".into()));
    }

    #[tokio::test]
    async fn update_unknown_question_is_not_found() {
        let api = InMemoryApi::new();
        let update = QuestionUpdate::from_question(&question(7));
        let err = api
            .update_question(QuestionId::new(7), &update)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn upload_images_returns_combined_receipt() {
        let api = InMemoryApi::new();
        let receipt = api
            .upload_images(
                QuestionId::new(7),
                vec![
                    ImageAttachment {
                        file_name: "a.png".into(),
                        bytes: vec![1],
                    },
                    ImageAttachment {
                        file_name: "b.png".into(),
                        bytes: vec![2],
                    },
                ],
            )
            .await
            .unwrap();

        assert_eq!(receipt.count, 2);
        assert_eq!(
            receipt.media,
            MediaSource::Multiple(vec!["uploads/a.png".into(), "uploads/b.png".into()])
        );
        assert_eq!(api.uploaded_files(), vec!["a.png", "b.png"]);
    }

    #[tokio::test]
    async fn upload_audio_returns_clip_url() {
        let api = InMemoryApi::new();
        let receipt = api
            .upload_audio(
                QuestionId::new(7),
                AudioAttachment {
                    file_name: "clip.mp3".into(),
                    bytes: vec![0, 1, 2],
                },
            )
            .await
            .unwrap();
        assert_eq!(receipt.audio_url, "uploads/clip.mp3");
    }
}
