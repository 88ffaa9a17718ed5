use std::sync::Arc;

use dioxus::prelude::*;

use services::{CatalogService, NavEvent, NavState, View};
use study_core::model::Question;

use crate::context::AppContext;
use crate::views::QuestionEditor;
use crate::vm::{map_question, skill_subtitle};

const DRILL_ORDER: [View; 5] = [
    View::Standards,
    View::Subjects,
    View::Skills,
    View::Sessions,
    View::Questions,
];

/// Applies one event and dispatches the fetch commands it requests. Settle
/// events are fed back through the same state machine, which discards them
/// when the selection has already moved on.
fn dispatch(mut nav: Signal<NavState>, catalog: Arc<CatalogService>, event: NavEvent) {
    let commands = nav.write().apply(event);
    for command in commands {
        let catalog = Arc::clone(&catalog);
        spawn(async move {
            let settled = catalog.run(command).await;
            nav.write().apply(settled);
        });
    }
}

fn back_target(view: View) -> Option<View> {
    match view {
        View::Standards => None,
        View::Subjects => Some(View::Standards),
        View::Skills => Some(View::Subjects),
        View::Sessions => Some(View::Skills),
        View::Questions => Some(View::Sessions),
    }
}

fn jump_enabled(state: &NavState, target: View) -> bool {
    match target {
        View::Standards => true,
        View::Subjects => state.selection.standard.is_some(),
        View::Skills => state.selection.subject.is_some(),
        View::Sessions => state.selection.skill.is_some(),
        View::Questions => state.selection.session.is_some(),
    }
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_signal(NavState::new);
    let mut editing = use_signal(|| None::<Question>);

    let catalog = ctx.catalog();
    {
        let catalog = catalog.clone();
        use_hook(move || dispatch(nav, catalog, NavEvent::Start));
    }

    let state = nav.read().clone();
    let view = state.view();
    let origin = ctx.api_origin().to_string();

    let crumbs = DRILL_ORDER.iter().map(|target| {
        let target = *target;
        let enabled = jump_enabled(&state, target);
        let active = target == view;
        let catalog = catalog.clone();
        let class = if active {
            "crumb crumb--active"
        } else if enabled {
            "crumb"
        } else {
            "crumb crumb--disabled"
        };
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                disabled: !enabled,
                onclick: move |_| dispatch(nav, catalog.clone(), NavEvent::NavigateTo(target)),
                "{target.title()}"
            }
        }
    });

    let catalog_for_back = catalog.clone();
    let body = match view {
        View::Standards => {
            let items = state.standards.iter().map(|standard| {
                let standard = standard.clone();
                let name = standard.name.clone();
                let catalog = catalog.clone();
                rsx! {
                    li {
                        button {
                            class: "list-item",
                            r#type: "button",
                            onclick: move |_| dispatch(
                                nav,
                                catalog.clone(),
                                NavEvent::SelectStandard(standard.clone()),
                            ),
                            "{name}"
                        }
                    }
                }
            });
            rsx! {
                if state.standards.is_empty() && !state.loading.standards {
                    p { class: "empty", "No standards found." }
                } else {
                    ul { class: "drill-list", {items} }
                }
            }
        }
        View::Subjects => {
            let items = state.subjects.iter().map(|subject| {
                let subject = subject.clone();
                let name = subject.name.clone();
                let catalog = catalog.clone();
                rsx! {
                    li {
                        button {
                            class: "list-item",
                            r#type: "button",
                            onclick: move |_| dispatch(
                                nav,
                                catalog.clone(),
                                NavEvent::SelectSubject(subject.clone()),
                            ),
                            "{name}"
                        }
                    }
                }
            });
            rsx! {
                if state.subjects.is_empty() && !state.loading.subjects {
                    p { class: "empty", "No subjects found." }
                } else {
                    ul { class: "drill-list", {items} }
                }
            }
        }
        View::Skills => {
            let items = state.skills.iter().map(|skill| {
                let skill = skill.clone();
                let name = skill.name.clone();
                let subtitle = skill_subtitle(&skill);
                let catalog = catalog.clone();
                rsx! {
                    li {
                        button {
                            class: "list-item",
                            r#type: "button",
                            onclick: move |_| dispatch(
                                nav,
                                catalog.clone(),
                                NavEvent::SelectSkill(skill.clone()),
                            ),
                            span { class: "list-item-name", "{name}" }
                            span { class: "list-item-subtitle", "{subtitle}" }
                        }
                    }
                }
            });
            rsx! {
                if state.skills.is_empty() && !state.loading.skills {
                    p { class: "empty", "No skills found." }
                } else {
                    ul { class: "drill-list", {items} }
                }
            }
        }
        View::Sessions => {
            let items = state.sessions.iter().map(|session| {
                let session = session.clone();
                let name = session.name.clone();
                let catalog = catalog.clone();
                rsx! {
                    li {
                        button {
                            class: "list-item",
                            r#type: "button",
                            onclick: move |_| dispatch(
                                nav,
                                catalog.clone(),
                                NavEvent::SelectSession(session.clone()),
                            ),
                            "{name}"
                        }
                    }
                }
            });
            rsx! {
                ul { class: "drill-list", {items} }
            }
        }
        View::Questions => {
            let items = state.questions.iter().map(|question| {
                let vm = map_question(&origin, question);
                let question = question.clone();
                let options = vm.options.join(" / ");
                let media_count = vm.media_urls.len();
                rsx! {
                    li { class: "question-card",
                        p { class: "question-text", "{vm.text}" }
                        if !options.is_empty() {
                            p { class: "question-options", "Options: {options}" }
                        }
                        p { class: "question-answer", "Answer: {vm.correct_answer}" }
                        if media_count > 0 {
                            p { class: "question-media", "{media_count} image(s) attached" }
                        }
                        if let Some(audio) = vm.audio_url.as_ref() {
                            p { class: "question-audio", "Audio: {audio}" }
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| editing.set(Some(question.clone())),
                            "Edit"
                        }
                    }
                }
            });
            rsx! {
                if state.questions.is_empty() && !state.loading.questions {
                    p { class: "empty", "No questions found." }
                } else {
                    ul { class: "question-list", {items} }
                }
            }
        }
    };

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "{view.title()}" }
                nav { class: "breadcrumb", {crumbs} }
            }
            div { class: "view-divider" }
            if state.loading.any() {
                p { class: "loading", "Loading..." }
            }
            if let Some(message) = state.error.as_ref() {
                p { class: "error", "{message}" }
            }
            {body}
            if let Some(target) = back_target(view) {
                button {
                    class: "btn btn-secondary back-button",
                    r#type: "button",
                    onclick: move |_| dispatch(
                        nav,
                        catalog_for_back.clone(),
                        NavEvent::NavigateBack(target),
                    ),
                    "Back"
                }
            }
            if let Some(question) = editing() {
                QuestionEditor {
                    question,
                    on_close: move |updated: Option<Question>| {
                        let mut nav = nav;
                        if let Some(question) = updated {
                            nav.write().replace_question(question);
                        }
                        editing.set(None);
                    },
                }
            }
        }
    }
}
