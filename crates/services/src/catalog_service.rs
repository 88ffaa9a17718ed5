use std::sync::Arc;

use api::CatalogApi;

use crate::navigation::{Command, NavEvent};

/// Runs navigation commands against the catalog API.
///
/// This is the only place fetch results become events: errors are stringified
/// here, so the state machine itself stays infallible and network-free.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Executes one command and returns its settle event.
    pub async fn run(&self, command: Command) -> NavEvent {
        match command {
            Command::LoadStandards { tag } => NavEvent::StandardsLoaded {
                tag,
                result: self
                    .api
                    .list_standards()
                    .await
                    .map_err(|e| e.to_string()),
            },
            Command::LoadSubjects { tag, standard } => NavEvent::SubjectsLoaded {
                tag,
                result: self
                    .api
                    .list_subjects(standard)
                    .await
                    .map_err(|e| e.to_string()),
            },
            Command::LoadSkills { tag, subject } => NavEvent::SkillsLoaded {
                tag,
                result: self
                    .api
                    .list_skills(subject)
                    .await
                    .map_err(|e| e.to_string()),
            },
            Command::LoadQuestions { tag, skill, session } => NavEvent::QuestionsLoaded {
                tag,
                result: self
                    .api
                    .list_questions(skill, session)
                    .await
                    .map_err(|e| e.to_string()),
            },
        }
    }
}
