use dioxus::prelude::*;

use services::{AudioAttachment, ImageAttachment, QuestionDraft};
use study_core::model::Question;

use crate::context::AppContext;
use crate::views::state::{SaveState, UploadState};

/// Edit panel for one question. Uploads go through their own acknowledgement
/// states; only a successful save closes the panel and hands the updated
/// record back to the dashboard.
#[component]
pub fn QuestionEditor(question: Question, on_close: EventHandler<Option<Question>>) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.questions();
    let id = question.id;

    let mut draft = use_signal(move || QuestionDraft::from_question(&question));
    let mut save_state = use_signal(|| SaveState::Idle);
    let mut image_upload = use_signal(|| UploadState::Idle);
    let mut audio_upload = use_signal(|| UploadState::Idle);
    let mut pending_images = use_signal(Vec::<ImageAttachment>::new);
    let mut pending_audio = use_signal(|| None::<AudioAttachment>);
    let mut new_option = use_signal(String::new);

    let current = draft.read().clone();
    let media_count = current.media.paths().len();
    let pending_image_count = pending_images.read().len();
    let pending_audio_name = pending_audio
        .read()
        .as_ref()
        .map(|audio| audio.file_name.clone());
    let saving = *save_state.read() == SaveState::Saving;

    let option_rows = current
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let option = option.clone();
            rsx! {
                li { key: "{index}",
                    input {
                        class: "option-input",
                        value: "{option}",
                        oninput: move |evt| {
                            draft.write().options[index] = evt.value();
                        },
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            draft.write().options.remove(index);
                        },
                        "Remove"
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    let service_for_save = service.clone();
    let service_for_images = service.clone();
    let service_for_audio = service.clone();

    rsx! {
        div { class: "editor-overlay",
            div { class: "editor-panel",
                h3 { "Edit question" }

                label { class: "field-label", "Question text" }
                textarea {
                    class: "field-input",
                    value: "{current.question_text}",
                    oninput: move |evt| draft.write().question_text = evt.value(),
                }

                label { class: "field-label", "Options" }
                ul { class: "option-list", {option_rows.into_iter()} }
                div { class: "option-add",
                    input {
                        class: "option-input",
                        placeholder: "New option",
                        value: "{new_option}",
                        oninput: move |evt| new_option.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let option = new_option.read().trim().to_string();
                            if !option.is_empty() {
                                draft.write().options.push(option);
                                new_option.set(String::new());
                            }
                        },
                        "Add"
                    }
                }

                label { class: "field-label", "Correct answer" }
                input {
                    class: "field-input",
                    value: "{current.correct_answer}",
                    oninput: move |evt| draft.write().correct_answer = evt.value(),
                }

                div { class: "editor-media",
                    p { "{media_count} image(s) attached" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        onchange: move |evt| {
                            let files = evt.files();
                            spawn(async move {
                                let mut picked = Vec::new();
                                for file in files {
                                    if let Ok(bytes) = file.read_bytes().await {
                                        picked.push(ImageAttachment {
                                            file_name: file.name(),
                                            bytes: bytes.to_vec(),
                                        });
                                    }
                                }
                                pending_images.set(picked);
                            });
                        },
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: pending_image_count == 0
                            || *image_upload.read() == UploadState::Uploading,
                        onclick: move |_| {
                            let service = service_for_images.clone();
                            let picked = pending_images.read().clone();
                            spawn(async move {
                                image_upload.set(UploadState::Uploading);
                                match service.upload_images(id, picked).await {
                                    Ok(media) => {
                                        let count = media.paths().len();
                                        draft.write().media = media;
                                        pending_images.set(Vec::new());
                                        image_upload.set(UploadState::Done(format!(
                                            "{count} image(s) uploaded"
                                        )));
                                    }
                                    Err(err) => {
                                        image_upload.set(UploadState::Error(err.to_string()));
                                    }
                                }
                            });
                        },
                        "Upload {pending_image_count} image(s)"
                    }
                    match image_upload() {
                        UploadState::Done(message) => rsx! {
                            p { class: "ack",
                                "{message} "
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| image_upload.set(UploadState::Idle),
                                    "OK"
                                }
                            }
                        },
                        UploadState::Error(message) => rsx! {
                            p { class: "ack ack--error",
                                "Upload failed: {message} "
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| image_upload.set(UploadState::Idle),
                                    "OK"
                                }
                            }
                        },
                        _ => rsx! {},
                    }
                }

                div { class: "editor-media",
                    if let Some(url) = current.audio_url.as_ref() {
                        p { "Audio: {url}" }
                    } else {
                        p { "No audio attached" }
                    }
                    input {
                        r#type: "file",
                        accept: "audio/*",
                        onchange: move |evt| {
                            let files = evt.files();
                            spawn(async move {
                                if let Some(file) = files.into_iter().next()
                                    && let Ok(bytes) = file.read_bytes().await
                                {
                                    pending_audio.set(Some(AudioAttachment {
                                        file_name: file.name(),
                                        bytes: bytes.to_vec(),
                                    }));
                                }
                            });
                        },
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: pending_audio_name.is_none()
                            || *audio_upload.read() == UploadState::Uploading,
                        onclick: move |_| {
                            let service = service_for_audio.clone();
                            let Some(audio) = pending_audio.read().clone() else {
                                return;
                            };
                            spawn(async move {
                                audio_upload.set(UploadState::Uploading);
                                match service.upload_audio(id, audio).await {
                                    Ok(url) => {
                                        draft.write().audio_url = Some(url);
                                        pending_audio.set(None);
                                        audio_upload.set(UploadState::Done(
                                            "Audio uploaded".into(),
                                        ));
                                    }
                                    Err(err) => {
                                        audio_upload.set(UploadState::Error(err.to_string()));
                                    }
                                }
                            });
                        },
                        if let Some(name) = pending_audio_name.as_ref() {
                            "Upload {name}"
                        } else {
                            "Upload audio"
                        }
                    }
                    match audio_upload() {
                        UploadState::Done(message) => rsx! {
                            p { class: "ack",
                                "{message} "
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| audio_upload.set(UploadState::Idle),
                                    "OK"
                                }
                            }
                        },
                        UploadState::Error(message) => rsx! {
                            p { class: "ack ack--error",
                                "Upload failed: {message} "
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| audio_upload.set(UploadState::Idle),
                                    "OK"
                                }
                            }
                        },
                        _ => rsx! {},
                    }
                }

                if let SaveState::Error(message) = save_state() {
                    p { class: "ack ack--error", "Save failed: {message}" }
                }

                div { class: "editor-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving,
                        onclick: move |_| {
                            let service = service_for_save.clone();
                            let current = draft.read().clone();
                            spawn(async move {
                                save_state.set(SaveState::Saving);
                                match service.save(id, &current).await {
                                    Ok(updated) => {
                                        save_state.set(SaveState::Success);
                                        on_close.call(Some(updated));
                                    }
                                    Err(err) => {
                                        save_state.set(SaveState::Error(err.to_string()));
                                    }
                                }
                            });
                        },
                        if saving { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(None),
                        "Cancel"
                    }
                }
            }
        }
    }
}
