use serde::{Deserialize, Serialize};

use super::catalog::Skill;

/// Session count used when a skill does not declare `total_sessions`.
pub const DEFAULT_SESSION_COUNT: u32 = 10;

/// A practice session within a skill. Sessions are synthesized client-side
/// from the skill's session count; the API never serves them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub number: u32,
    pub name: String,
}

impl Session {
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            name: format!("Session {number}"),
        }
    }
}

/// Builds the session list `1..=session_count` for a skill.
#[must_use]
pub fn synthesize_sessions(skill: &Skill) -> Vec<Session> {
    (1..=skill.session_count()).map(Session::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillId;

    fn skill(total_sessions: Option<u32>) -> Skill {
        Skill {
            id: SkillId::new(3),
            name: "Algebra".into(),
            category: Some("Math".into()),
            total_sessions,
        }
    }

    #[test]
    fn synthesizes_declared_count() {
        let sessions = synthesize_sessions(&skill(Some(5)));
        assert_eq!(sessions.len(), 5);
        assert_eq!(sessions[0].number, 1);
        assert_eq!(sessions[4].number, 5);
        assert_eq!(sessions[2].name, "Session 3");
    }

    #[test]
    fn synthesizes_default_count_when_absent() {
        let sessions = synthesize_sessions(&skill(None));
        assert_eq!(sessions.len(), DEFAULT_SESSION_COUNT as usize);
        assert_eq!(sessions.last().unwrap().number, DEFAULT_SESSION_COUNT);
    }
}
