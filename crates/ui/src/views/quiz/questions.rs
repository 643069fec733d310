use dioxus::prelude::*;
use quiz_core::model::{QuizPhase, Session};

use crate::context::AppContext;
use crate::vm::{QuestionVm, map_questions, progress_label};

#[component]
pub(super) fn QuestionList(source: Signal<String>, scoreboard_refresh: Signal<u32>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let (questions, progress) = {
        let current = session.read();
        (map_questions(&current), progress_label(&current))
    };

    let on_submit = {
        let scoreboard = ctx.scoreboard_service();
        move |_: MouseEvent| {
            let mut session = session;
            let first_submission = session.peek().phase() != QuizPhase::Graded;
            let report = session.write().submit();
            if !first_submission {
                return;
            }
            let snapshot = (*session.peek()).clone();
            let scoreboard = scoreboard.clone();
            let topic = source();
            let mut refresh = scoreboard_refresh;
            spawn(async move {
                match scoreboard.record(&snapshot, &report, &topic).await {
                    Ok(()) => {
                        let next = refresh.peek().wrapping_add(1);
                        refresh.set(next);
                    }
                    Err(err) => tracing::warn!(error = %err, "Could not record score"),
                }
            });
        }
    };

    let cards = questions.into_iter().map(|question| {
        rsx! {
            QuestionCard { key: "{question.index}", question }
        }
    });

    rsx! {
        section { class: "quiz-list",
            h3 { class: "section-title", "Quiz" }
            p { class: "view-hint", "{progress}" }
            {cards}
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: on_submit,
                "Submit Quiz"
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm) -> Element {
    let session = use_context::<Signal<Session>>();
    let index = question.index;
    let group = question.group_name();

    let options = question.options.iter().enumerate().map(|(position, option)| {
        let choice = option.clone();
        let checked = question.is_selected(option);
        rsx! {
            label { key: "{position}", class: "quiz-option",
                input {
                    r#type: "radio",
                    name: "{group}",
                    value: "{option}",
                    checked: checked,
                    onchange: move |_| {
                        let mut session = session;
                        if let Err(err) = session.write().set_answer(index, choice.clone()) {
                            tracing::warn!(error = %err, "Ignored answer");
                        }
                    },
                }
                span { "{option}" }
            }
        }
    });

    rsx! {
        div { class: "quiz-card",
            h4 { class: "quiz-question", "{question.heading}" }
            div { class: "quiz-options", role: "radiogroup",
                {options}
            }
        }
    }
}
