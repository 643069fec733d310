use dioxus::prelude::*;
use quiz_core::model::Session;

use crate::vm::map_results;

#[component]
pub(super) fn ResultsPanel() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let Some(report) = session.read().report() else {
        return rsx! {};
    };
    let results = map_results(&report);

    let rows = results.rows.iter().map(|row| {
        let class = if row.is_correct { "result-row result-row--correct" } else { "result-row result-row--wrong" };
        rsx! {
            div { key: "{row.index}", class: "{class}",
                p { class: "result-verdict", "{row.verdict_label}" }
                if let Some(label) = row.correct_answer_label.as_ref() {
                    p { class: "result-answer", "{label}" }
                }
                if let Some(explanation) = row.explanation.as_ref() {
                    p { class: "result-explanation", "💡 {explanation}" }
                }
            }
        }
    });

    rsx! {
        section { class: "results-panel",
            h3 { class: "section-title", "Results" }
            {rows}
            div { class: "score-box",
                h3 { class: "score-total", "{results.score_label}" }
                p { "{results.accuracy_label}" }
                p { class: "view-hint", "{results.difficulty_label}" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| session.write().retake(),
                "Retake Quiz"
            }
        }
    }
}
