use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ScoreboardRowVm, map_scoreboard_rows};

/// Public leaderboard. Bumping `refresh` reloads it.
#[component]
pub fn ScoreboardPanel(refresh: Signal<u32>) -> Element {
    let ctx = use_context::<AppContext>();
    let scoreboard = ctx.scoreboard_service();

    let resource = use_resource(move || {
        let scoreboard = scoreboard.clone();
        let _version = refresh();
        async move {
            let entries = scoreboard.leaderboard().await.map_err(|err| {
                tracing::warn!(error = %err, "Could not load scoreboard");
                ViewError::Unknown
            })?;
            Ok(map_scoreboard_rows(&entries))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        section { class: "scoreboard-panel",
            h3 { class: "section-title", "Scoreboard" }

            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "view-hint", "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { class: "view-hint", "No scores yet." }
                    } else {
                        ol { class: "scoreboard-list",
                            for row in rows {
                                ScoreboardRow { row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn ScoreboardRow(row: ScoreboardRowVm) -> Element {
    rsx! {
        li { class: "scoreboard-row",
            span { class: "scoreboard-name", "{row.rank_label}" }
            span { class: "scoreboard-score", "{row.score_label}" }
            if let Some(topic) = row.topic {
                span { class: "scoreboard-topic", "{topic}" }
            }
        }
    }
}
