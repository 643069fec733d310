use dioxus::prelude::*;
use quiz_core::model::Session;

use crate::views::{LoginView, QuizView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Quiz,
}

/// Which screen a session belongs on. Only the token matters.
#[must_use]
pub fn screen_for(session: &Session) -> Screen {
    if session.is_authenticated() {
        Screen::Quiz
    } else {
        Screen::Auth
    }
}

/// Renders the screen for the session signal in context.
#[component]
pub fn ScreenRouter() -> Element {
    let session = use_context::<Signal<Session>>();
    let screen = screen_for(&session.read());

    match screen {
        Screen::Auth => rsx! { LoginView {} },
        Screen::Quiz => rsx! { QuizView {} },
    }
}
