use serde::{Deserialize, Serialize};

use super::ids::{SkillId, StandardId, SubjectId};
use super::session::DEFAULT_SESSION_COUNT;

/// Root-level selectable entity of the catalog hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    pub id: StandardId,
    pub name: String,
}

/// A subject within a standard. The relationship to its standard is realized
/// by the scoped fetch, not by a foreign key held client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

/// A skill within a subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_sessions: Option<u32>,
}

impl Skill {
    /// Number of practice sessions this skill offers.
    #[must_use]
    pub fn session_count(&self) -> u32 {
        self.total_sessions.unwrap_or(DEFAULT_SESSION_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_count_uses_declared_total() {
        let skill = Skill {
            id: SkillId::new(3),
            name: "Algebra".into(),
            category: None,
            total_sessions: Some(4),
        };
        assert_eq!(skill.session_count(), 4);
    }

    #[test]
    fn session_count_defaults_when_absent() {
        let skill = Skill {
            id: SkillId::new(3),
            name: "Algebra".into(),
            category: None,
            total_sessions: None,
        };
        assert_eq!(skill.session_count(), DEFAULT_SESSION_COUNT);
    }

    #[test]
    fn skill_deserializes_without_optional_fields() {
        let skill: Skill = serde_json::from_str(r#"{"id":3,"name":"Algebra"}"#).unwrap();
        assert_eq!(skill.id, SkillId::new(3));
        assert_eq!(skill.category, None);
        assert_eq!(skill.total_sessions, None);
    }
}
