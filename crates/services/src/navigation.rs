//! The drill-down navigation state machine.
//!
//! One value owns `{view, selection, data, loading, error}`. Transitions are
//! pure: [`NavState::apply`] mutates the state and returns the fetch
//! [`Command`]s to dispatch, so the whole machine is unit-testable with no UI
//! and no network. Fetch outcomes come back as settle events carrying the
//! [`FetchTag`] they were issued under; a settle whose tag has been superseded
//! is discarded, which closes the stale-response race between a late reply
//! and a user who has already navigated elsewhere.

use study_core::model::{
    Question, Session, Skill, SkillId, Standard, StandardId, Subject, SubjectId,
    synthesize_sessions,
};

/// Which screen the dashboard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Standards,
    Subjects,
    Skills,
    Sessions,
    Questions,
}

impl View {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            View::Standards => "Standards",
            View::Subjects => "Subjects",
            View::Skills => "Skills",
            View::Sessions => "Sessions",
            View::Questions => "Questions",
        }
    }
}

/// Pairs a fetch with the selection snapshot it was issued under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FetchTag(u64);

/// The chain of chosen entities. A level may be `Some` only if every
/// shallower level is `Some`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub standard: Option<Standard>,
    pub subject: Option<Subject>,
    pub skill: Option<Skill>,
    pub session: Option<Session>,
}

impl Selection {
    /// True when the chain is strictly ordered with no gaps.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let levels = [
            self.standard.is_some(),
            self.subject.is_some(),
            self.skill.is_some(),
            self.session.is_some(),
        ];
        levels.windows(2).all(|pair| pair[0] || !pair[1])
    }
}

/// In-flight flags for the four fetched levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loading {
    pub standards: bool,
    pub subjects: bool,
    pub skills: bool,
    pub questions: bool,
}

impl Loading {
    #[must_use]
    pub fn any(&self) -> bool {
        self.standards || self.subjects || self.skills || self.questions
    }
}

/// User intents and fetch outcomes.
#[derive(Clone, Debug)]
pub enum NavEvent {
    /// Initial standards load, issued once on mount.
    Start,
    SelectStandard(Standard),
    SelectSubject(Subject),
    SelectSkill(Skill),
    SelectSession(Session),
    NavigateBack(View),
    /// Guarded jump from the nav bar; a missing prerequisite is a silent no-op.
    NavigateTo(View),
    StandardsLoaded {
        tag: FetchTag,
        result: Result<Vec<Standard>, String>,
    },
    SubjectsLoaded {
        tag: FetchTag,
        result: Result<Vec<Subject>, String>,
    },
    SkillsLoaded {
        tag: FetchTag,
        result: Result<Vec<Skill>, String>,
    },
    QuestionsLoaded {
        tag: FetchTag,
        result: Result<Vec<Question>, String>,
    },
}

/// Side effects requested by a transition, to be run by the command runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    LoadStandards {
        tag: FetchTag,
    },
    LoadSubjects {
        tag: FetchTag,
        standard: StandardId,
    },
    LoadSkills {
        tag: FetchTag,
        subject: SubjectId,
    },
    LoadQuestions {
        tag: FetchTag,
        skill: SkillId,
        session: u32,
    },
}

/// Current tag per level plus the shared counter. Re-issuing or invalidating
/// a level's tag makes every older settle for that level a dead letter.
#[derive(Clone, Debug)]
struct TagSlots {
    next: u64,
    standards: FetchTag,
    subjects: FetchTag,
    skills: FetchTag,
    questions: FetchTag,
}

impl Default for TagSlots {
    fn default() -> Self {
        // issued tags start at 1, so the initial slots never match a settle
        Self {
            next: 1,
            standards: FetchTag(0),
            subjects: FetchTag(0),
            skills: FetchTag(0),
            questions: FetchTag(0),
        }
    }
}

impl TagSlots {
    fn issue(&mut self) -> FetchTag {
        let tag = FetchTag(self.next);
        self.next += 1;
        tag
    }
}

/// The navigation controller state.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    view: View,
    pub selection: Selection,
    pub standards: Vec<Standard>,
    pub subjects: Vec<Subject>,
    pub skills: Vec<Skill>,
    pub sessions: Vec<Session>,
    pub questions: Vec<Question>,
    pub loading: Loading,
    pub error: Option<String>,
    tags: TagSlots,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Applies one event and returns the commands it requests.
    pub fn apply(&mut self, event: NavEvent) -> Vec<Command> {
        match event {
            NavEvent::Start => {
                self.loading.standards = true;
                let tag = self.tags.issue();
                self.tags.standards = tag;
                vec![Command::LoadStandards { tag }]
            }
            NavEvent::SelectStandard(standard) => {
                let standard_id = standard.id;
                self.clear_below_standard();
                self.selection.standard = Some(standard);
                self.view = View::Subjects;
                self.loading.subjects = true;
                let tag = self.tags.issue();
                self.tags.subjects = tag;
                vec![Command::LoadSubjects {
                    tag,
                    standard: standard_id,
                }]
            }
            NavEvent::SelectSubject(subject) => {
                if self.selection.standard.is_none() {
                    return Vec::new();
                }
                let subject_id = subject.id;
                self.clear_below_subject();
                self.selection.subject = Some(subject);
                self.view = View::Skills;
                self.loading.skills = true;
                let tag = self.tags.issue();
                self.tags.skills = tag;
                vec![Command::LoadSkills {
                    tag,
                    subject: subject_id,
                }]
            }
            NavEvent::SelectSkill(skill) => {
                if self.selection.subject.is_none() {
                    return Vec::new();
                }
                self.clear_below_skill();
                self.sessions = synthesize_sessions(&skill);
                self.selection.skill = Some(skill);
                self.view = View::Sessions;
                Vec::new()
            }
            NavEvent::SelectSession(session) => {
                // guarded unreachable without a skill; keep it a no-op anyway
                let Some(skill_id) = self.selection.skill.as_ref().map(|skill| skill.id) else {
                    return Vec::new();
                };
                let number = session.number;
                self.selection.session = Some(session);
                self.view = View::Questions;
                self.loading.questions = true;
                let tag = self.tags.issue();
                self.tags.questions = tag;
                vec![Command::LoadQuestions {
                    tag,
                    skill: skill_id,
                    session: number,
                }]
            }
            NavEvent::NavigateBack(target) => {
                self.reset_to(target);
                Vec::new()
            }
            NavEvent::NavigateTo(target) => {
                if target == View::Standards {
                    self.reset_to(View::Standards);
                } else if self.prerequisite_met(target) {
                    self.view = target;
                }
                Vec::new()
            }
            NavEvent::StandardsLoaded { tag, result } => {
                if tag == self.tags.standards {
                    self.loading.standards = false;
                    match result {
                        Ok(list) => self.standards = list,
                        Err(message) => {
                            self.error = Some(message);
                            self.standards = Vec::new();
                        }
                    }
                }
                Vec::new()
            }
            NavEvent::SubjectsLoaded { tag, result } => {
                if tag == self.tags.subjects {
                    self.loading.subjects = false;
                    match result {
                        Ok(list) => self.subjects = list,
                        Err(message) => {
                            self.error = Some(message);
                            self.subjects = Vec::new();
                        }
                    }
                }
                Vec::new()
            }
            NavEvent::SkillsLoaded { tag, result } => {
                if tag == self.tags.skills {
                    self.loading.skills = false;
                    match result {
                        Ok(list) => self.skills = list,
                        Err(message) => {
                            self.error = Some(message);
                            self.skills = Vec::new();
                        }
                    }
                }
                Vec::new()
            }
            NavEvent::QuestionsLoaded { tag, result } => {
                if tag == self.tags.questions {
                    self.loading.questions = false;
                    match result {
                        Ok(list) => self.questions = list,
                        Err(message) => {
                            self.error = Some(message);
                            self.questions = Vec::new();
                        }
                    }
                }
                Vec::new()
            }
        }
    }

    /// Swaps an edited question back into the loaded list.
    pub fn replace_question(&mut self, updated: Question) {
        if let Some(slot) = self
            .questions
            .iter_mut()
            .find(|question| question.id == updated.id)
        {
            *slot = updated;
        }
    }

    fn prerequisite_met(&self, target: View) -> bool {
        match target {
            View::Standards => true,
            View::Subjects => self.selection.standard.is_some(),
            View::Skills => self.selection.subject.is_some(),
            View::Sessions => self.selection.skill.is_some(),
            View::Questions => self.selection.session.is_some(),
        }
    }

    /// Backward navigation: resets everything strictly deeper than `target`.
    fn reset_to(&mut self, target: View) {
        self.view = target;
        self.error = None;
        match target {
            View::Standards => {
                self.selection.standard = None;
                self.subjects = Vec::new();
                self.loading.subjects = false;
                self.tags.subjects = self.tags.issue();
                self.clear_below_standard();
            }
            View::Subjects => self.clear_below_standard(),
            View::Skills => self.clear_below_subject(),
            View::Sessions => self.clear_below_skill(),
            // not a backward target; the guarded jump handles Questions
            View::Questions => {}
        }
    }

    fn clear_below_standard(&mut self) {
        self.selection.subject = None;
        self.skills = Vec::new();
        self.loading.skills = false;
        self.tags.skills = self.tags.issue();
        self.clear_below_subject();
    }

    fn clear_below_subject(&mut self) {
        self.selection.skill = None;
        self.sessions = Vec::new();
        self.clear_below_skill();
    }

    fn clear_below_skill(&mut self) {
        self.selection.session = None;
        self.questions = Vec::new();
        self.loading.questions = false;
        self.tags.questions = self.tags.issue();
    }
}
