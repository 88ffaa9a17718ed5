use serde::{Deserialize, Serialize};

use super::ids::QuestionId;
use super::media::MediaSource;

/// A question belonging to a (skill, session) pair, as served by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(rename = "media_url", default)]
    pub media: MediaSource,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let question: Question = serde_json::from_str(
            r#"{
                "id": 7,
                "question_text": "2 + 2?",
                "options": ["3", "4"],
                "correct_answer": "4",
                "media_url": "[\"a.png\",\"b.png\"]",
                "audio_url": "clips/7.mp3",
                "type": "mcq"
            }"#,
        )
        .unwrap();

        assert_eq!(question.id, QuestionId::new(7));
        assert_eq!(
            question.media,
            MediaSource::Multiple(vec!["a.png".into(), "b.png".into()])
        );
        assert_eq!(question.audio_url.as_deref(), Some("clips/7.mp3"));
        assert_eq!(question.kind, "mcq");
    }

    #[test]
    fn deserializes_sparse_record() {
        let question: Question = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(question.question_text, "");
        assert!(question.options.is_empty());
        assert_eq!(question.media, MediaSource::Empty);
        assert_eq!(question.audio_url, None);
    }
}
