//! Display mapping between domain records and what the views render.

use study_core::model::{MediaSource, Question, QuestionId, Skill};

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub media_urls: Vec<String>,
    pub audio_url: Option<String>,
    pub kind: String,
}

/// Resolves one media path against the API origin. Absolute URLs pass
/// through untouched.
#[must_use]
pub fn resolve_media_path(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[must_use]
pub fn resolve_media(origin: &str, media: &MediaSource) -> Vec<String> {
    media
        .paths()
        .into_iter()
        .map(|path| resolve_media_path(origin, path))
        .collect()
}

#[must_use]
pub fn map_question(origin: &str, question: &Question) -> QuestionVm {
    QuestionVm {
        id: question.id,
        text: question.question_text.clone(),
        options: question.options.clone(),
        correct_answer: question.correct_answer.clone(),
        media_urls: resolve_media(origin, &question.media),
        audio_url: question
            .audio_url
            .as_deref()
            .map(|url| resolve_media_path(origin, url)),
        kind: question.kind.clone(),
    }
}

/// Secondary line under a skill name: category plus session count.
#[must_use]
pub fn skill_subtitle(skill: &Skill) -> String {
    let sessions = format!("{} sessions", skill.session_count());
    match skill.category.as_deref() {
        Some(category) => format!("{category}, {sessions}"),
        None => sessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::SkillId;

    #[test]
    fn relative_paths_resolve_against_origin() {
        assert_eq!(
            resolve_media_path("http://localhost:4000", "uploads/a.png"),
            "http://localhost:4000/uploads/a.png"
        );
        assert_eq!(
            resolve_media_path("http://localhost:4000/", "/uploads/a.png"),
            "http://localhost:4000/uploads/a.png"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_media_path("http://localhost:4000", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn maps_question_media_variants() {
        let question = Question {
            id: QuestionId::new(7),
            question_text: "2 + 2?".into(),
            options: vec!["3".into(), "4".into()],
            correct_answer: "4".into(),
            media: MediaSource::Multiple(vec!["a.png".into(), "b.png".into()]),
            audio_url: Some("clips/7.mp3".into()),
            kind: "mcq".into(),
        };
        let vm = map_question("http://localhost:4000", &question);
        assert_eq!(
            vm.media_urls,
            vec![
                "http://localhost:4000/a.png".to_string(),
                "http://localhost:4000/b.png".to_string(),
            ]
        );
        assert_eq!(
            vm.audio_url.as_deref(),
            Some("http://localhost:4000/clips/7.mp3")
        );
    }

    #[test]
    fn skill_subtitle_mentions_category_when_present() {
        let mut skill = Skill {
            id: SkillId::new(3),
            name: "Algebra".into(),
            category: Some("Math".into()),
            total_sessions: Some(4),
        };
        assert_eq!(skill_subtitle(&skill), "Math, 4 sessions");
        skill.category = None;
        skill.total_sessions = None;
        assert_eq!(skill_subtitle(&skill), "10 sessions");
    }
}
