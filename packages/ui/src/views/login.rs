use api::{ApiError, ReportApi};
use dioxus::prelude::*;
use store::validation::Field;
use store::{FieldErrors, LoginForm};

use crate::components::{Button, TextField};
use crate::messages;
use crate::session::use_app;
use crate::NoticeLevel;

/// Username and password sign-in.
///
/// Stores the token, records the user in the session and calls
/// `on_login_success`. Visiting while already signed in calls it right away.
#[component]
pub fn LoginView(on_login_success: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    // Already signed in. Peeking keeps this to a single run on mount.
    use_effect(move || {
        if app.session.peek().is_authenticated() {
            on_login_success.call(());
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let credentials = form();
        if let Err(field_errors) = credentials.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        submitting.set(true);

        spawn(async move {
            let api = app.api();
            let result = api
                .login(credentials.username.trim(), &credentials.password)
                .await;
            match result {
                Ok(response) => {
                    let (user, token) = response.into_parts();
                    if let Err(e) = app.tokens.read().set(&token) {
                        let e = ApiError::from(e);
                        tracing::error!("Could not store token: {}", e);
                        app.notify(NoticeLevel::Error, messages::LOGIN_FAILED, Some(&e.to_string()));
                        submitting.set(false);
                        return;
                    }
                    tracing::info!("Logged in as {}", user.username);
                    let name = user.display_name().to_string();
                    let mut session = app.session;
                    session.write().login(user, token);
                    app.notify(NoticeLevel::Success, messages::LOGIN_SUCCESS, Some(&format!("Welcome, {name}")));
                    submitting.set(false);
                    on_login_success.call(());
                }
                Err(ApiError::Unauthorized) => {
                    tracing::warn!("Login rejected for {}", credentials.username);
                    app.notify(
                        NoticeLevel::Error,
                        messages::LOGIN_FAILED,
                        Some(messages::LOGIN_FAILED_DETAIL),
                    );
                    submitting.set(false);
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    app.notify(NoticeLevel::Error, messages::LOGIN_FAILED, Some(&e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let busy = submitting();
    let current = form();

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                h1 { "{messages::APP_TITLE}" }
                p { class: "muted", "Sign in to continue" }
                form {
                    onsubmit: handle_submit,
                    TextField {
                        id: "username",
                        label: "Username",
                        value: current.username.clone(),
                        placeholder: "employee1",
                        required: true,
                        disabled: busy,
                        error: errors.read().get(Field::Username).map(str::to_string),
                        oninput: move |value: String| form.write().username = value,
                    }
                    TextField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: current.password.clone(),
                        required: true,
                        disabled: busy,
                        error: errors.read().get(Field::Password).map(str::to_string),
                        oninput: move |value: String| form.write().password = value,
                    }
                    Button {
                        submit: true,
                        disabled: busy,
                        if busy { "Signing in..." } else { "Sign in" }
                    }
                }
                p {
                    class: "muted small",
                    "Demo accounts: admin, manager, employee1 (password: password)"
                }
            }
        }
    }
}
