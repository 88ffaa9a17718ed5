mod catalog;
mod ids;
mod media;
mod question;
mod session;

pub use catalog::{Skill, Standard, Subject};
pub use ids::{ParseIdError, QuestionId, SkillId, StandardId, SubjectId};
pub use media::MediaSource;
pub use question::Question;
pub use session::{DEFAULT_SESSION_COUNT, Session, synthesize_sessions};
