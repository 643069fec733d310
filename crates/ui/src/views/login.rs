use dioxus::prelude::*;
use quiz_core::model::{Credentials, Session, SignupForm};

use crate::context::AppContext;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut notice = use_signal(|| None::<&'static str>);
    let busy = use_signal(|| false);

    let on_login = {
        let auth = ctx.auth_service();
        move |_: MouseEvent| {
            if busy() {
                return;
            }
            let auth = auth.clone();
            let credentials = Credentials::new(email(), password());
            let mut session = session;
            let mut busy = busy;
            let mut error = error;
            let mut notice = notice;
            spawn(async move {
                busy.set(true);
                notice.set(None);
                // The committed session keeps rendering while the request is in flight.
                let mut draft = (*session.peek()).clone();
                match auth.login(&mut draft, credentials).await {
                    Ok(()) => {
                        error.set(None);
                        session.set(draft);
                    }
                    Err(err) => error.set(Some(ViewError::from(&err))),
                }
                busy.set(false);
            });
        }
    };

    let on_signup = {
        let auth = ctx.auth_service();
        move |_: MouseEvent| {
            if busy() {
                return;
            }
            let auth = auth.clone();
            let form = SignupForm {
                name: name(),
                email: email(),
                password: password(),
            };
            let mut busy = busy;
            let mut error = error;
            let mut notice = notice;
            let mut mode = mode;
            let mut password = password;
            spawn(async move {
                busy.set(true);
                match auth.signup(&form).await {
                    Ok(()) => {
                        error.set(None);
                        password.set(String::new());
                        notice.set(Some("Account created. Log in to continue."));
                        mode.set(AuthMode::Login);
                    }
                    Err(err) => error.set(Some(ViewError::from(&err))),
                }
                busy.set(false);
            });
        }
    };

    let is_signup = mode() == AuthMode::Signup;
    let title = if is_signup {
        "Create your IntelliQuiz account"
    } else {
        "IntelliQuiz Login"
    };

    rsx! {
        div { class: "page auth-page",
            header { class: "view-header",
                h2 { class: "view-title", "{title}" }
            }
            div { class: "view-divider" }
            form { class: "auth-form",
                onsubmit: move |evt| evt.prevent_default(),
                if is_signup {
                    label { class: "field",
                        span { "Name" }
                        input {
                            r#type: "text",
                            value: "{name()}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }
                if let Some(text) = notice() {
                    p { class: "form-notice", "{text}" }
                }
                if is_signup {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: on_signup,
                        "Sign up"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: on_login,
                        "Login"
                    }
                }
            }
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| {
                    error.set(None);
                    notice.set(None);
                    mode.set(if is_signup { AuthMode::Login } else { AuthMode::Signup });
                },
                if is_signup { "Already have an account? Log in" } else { "New here? Create an account" }
            }
            p { class: "view-hint", "Server: {ctx.backend_label()}" }
        }
    }
}
