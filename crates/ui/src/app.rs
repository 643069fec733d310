use dioxus::prelude::*;
use quiz_core::model::Session;

use crate::routes::ScreenRouter;

#[component]
pub fn App() -> Element {
    // One session per window, shared with every view through context.
    let session = use_signal(Session::new);
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "IntelliQuiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h2 { "IntelliQuiz stopped rendering" }
                        p { "Restart the app. Details:" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenRouter {}
            }
        }
    }
}
