use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::Session;
use services::{AppServices, AuthService, InMemoryQuizApi, QuizService, ScoreboardService};

use crate::context::{UiApp, build_app_context};
use crate::routes::ScreenRouter;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn scoreboard_service(&self) -> Arc<ScoreboardService> {
        self.services.scoreboard()
    }

    fn backend_label(&self) -> String {
        "in-memory".to_string()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    session: Session,
    handle: Rc<Cell<Option<Signal<Session>>>>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let seeded = props.session.clone();
    let session = use_signal(move || seeded);
    use_context_provider(|| session);
    props.handle.set(Some(session));
    rsx! { ScreenRouter {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryQuizApi,
    pub services: AppServices,
    session: Rc<Cell<Option<Signal<Session>>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Copy of the session the views currently render.
    pub fn session(&self) -> Session {
        let signal = self.session.get().expect("harness rebuilt");
        self.dom.in_runtime(|| (*signal.peek()).clone())
    }

    /// Apply `change` to the shared session and re-render, as a view handler would.
    pub fn update_session(&mut self, change: impl FnOnce(&mut Session)) {
        let mut signal = self.session.get().expect("harness rebuilt");
        self.dom.in_runtime(|| change(&mut signal.write()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount the router over `session`, backed by `api`.
pub fn setup_view_harness(api: InMemoryQuizApi, session: Session) -> ViewHarness {
    let services = AppServices::new(Arc::new(api.clone()));
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let handle = Rc::new(Cell::new(None));
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app,
            session,
            handle: Rc::clone(&handle),
        },
    );
    ViewHarness {
        dom,
        api,
        services,
        session: handle,
    }
}
