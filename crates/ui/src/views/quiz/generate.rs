use dioxus::prelude::*;
use quiz_core::model::{GenerationForm, QuestionCount, Session, UploadedFile};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{generate_button, generation_notice};

#[component]
pub(super) fn GeneratePanel(source: Signal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let mut topic = use_signal(String::new);
    let file = use_signal(|| None::<UploadedFile>);
    let mut count = use_signal(QuestionCount::default);
    let error = use_signal(|| None::<ViewError>);
    let notice = use_signal(|| None::<&'static str>);
    let busy = use_signal(|| false);
    let reading = use_signal(|| false);

    let on_generate = {
        let quiz = ctx.quiz_service();
        move |_: MouseEvent| {
            if busy() || reading() {
                return;
            }
            let quiz = quiz.clone();
            let form = GenerationForm {
                topic: topic(),
                file: file(),
                count: count(),
            };
            let mut session = session;
            let mut source = source;
            let mut busy = busy;
            let mut error = error;
            let mut notice = notice;
            spawn(async move {
                busy.set(true);
                notice.set(None);
                let mut draft = (*session.peek()).clone();
                match quiz.generate(&mut draft, form).await {
                    Ok(generated) => {
                        error.set(None);
                        notice.set(generation_notice(generated.received));
                        source.set(generated.source);
                        session.set(draft);
                    }
                    Err(err) => error.set(Some(ViewError::from(&err))),
                }
                busy.set(false);
            });
        }
    };

    let on_pick = move |evt: FormEvent| {
        let picked = evt.files().into_iter().next();
        let mut file = file;
        let mut reading = reading;
        let Some(picked) = picked else {
            file.set(None);
            return;
        };
        // Set before the task starts so Generate is blocked immediately.
        reading.set(true);
        spawn(async move {
            match picked.read_bytes().await {
                Ok(bytes) => file.set(Some(UploadedFile::new(picked.name(), bytes.to_vec()))),
                Err(err) => {
                    tracing::warn!(error = %err, "Could not read picked document");
                    file.set(None);
                }
            }
            reading.set(false);
        });
    };

    let min = QuestionCount::MIN;
    let max = QuestionCount::MAX;
    let selected_file = file.read().as_ref().map(|f| f.name().to_string());
    let generate = generate_button(busy(), reading());

    rsx! {
        section { class: "generate-panel",
            div { class: "generate-sources",
                label { class: "field",
                    span { "Enter topic or paste notes" }
                    textarea {
                        rows: "5",
                        value: "{topic()}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Upload PDF" }
                    input {
                        r#type: "file",
                        accept: ".pdf,application/pdf",
                        onchange: on_pick,
                    }
                    if let Some(name) = selected_file {
                        span { class: "view-hint", "Selected: {name}" }
                    }
                }
            }
            label { class: "field",
                span { "Number of questions: {count()}" }
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "1",
                    value: "{count().value()}",
                    oninput: move |evt| {
                        let raw = evt.value().parse::<i64>().unwrap_or(i64::from(min));
                        count.set(QuestionCount::saturating(raw));
                    },
                }
            }
            if let Some(err) = error() {
                p {
                    class: if err.is_warning() { "form-warning" } else { "form-error" },
                    "{err.message()}"
                }
            }
            if let Some(text) = notice() {
                p { class: "form-warning", "{text}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: generate.disabled,
                onclick: on_generate,
                "{generate.label}"
            }
        }
    }
}
