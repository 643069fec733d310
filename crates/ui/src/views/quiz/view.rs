use dioxus::prelude::*;
use quiz_core::model::{QuizPhase, Session};

use super::generate::GeneratePanel;
use super::questions::QuestionList;
use super::results::ResultsPanel;
use crate::context::AppContext;
use crate::views::ScoreboardPanel;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<Session>>();
    // Topic text or "File Upload"; recorded with the score.
    let source = use_signal(String::new);
    let scoreboard_refresh = use_signal(|| 0_u32);

    let auth = ctx.auth_service();
    let phase = session.read().phase();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "IntelliQuiz" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| auth.logout(&mut session.write()),
                    "Logout"
                }
            }
            div { class: "view-divider" }
            GeneratePanel { source }
            if phase != QuizPhase::NoQuiz {
                QuestionList { source, scoreboard_refresh }
            }
            if phase == QuizPhase::Graded {
                ResultsPanel {}
            }
            ScoreboardPanel { refresh: scoreboard_refresh }
        }
    }
}
