//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds everything a page needs from the app config and
//! provides it as signal contexts:
//!
//! | Context | Hook |
//! |---------|------|
//! | `Signal<SessionStore<PlatformStorage>>` | [`use_session`] |
//! | `Signal<TokenStore<PlatformStorage>>` | [`use_tokens`] |
//! | `Signal<AppApi>` | [`use_api`] |
//!
//! [`use_app`] bundles them with the toast handle from the
//! [`ToastProvider`](crate::components::ToastProvider) into one `Copy` handle for
//! event handlers.

use api::{ApiError, ApiService};
use dioxus::prelude::*;
use store::{AppConfig, SessionStore, TokenStore, UserInfo};

use crate::actions::Feedback;
use crate::components::{use_toast, Toasts};
use crate::messages;
use crate::notifications::{notify, NoticeLevel};

/// Key-value storage of the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStore;

pub type AppApi = ApiService<PlatformStorage>;
pub type AppSession = SessionStore<PlatformStorage>;

pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

pub fn use_tokens() -> Signal<TokenStore<PlatformStorage>> {
    use_context::<Signal<TokenStore<PlatformStorage>>>()
}

pub fn use_api() -> Signal<AppApi> {
    use_context::<Signal<AppApi>>()
}

/// Provider component for session, token storage and API.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let storage = use_hook(PlatformStorage::default);

    let session_storage = storage.clone();
    use_context_provider(|| {
        let mut store = SessionStore::load(session_storage);
        store.subscribe(|session| {
            tracing::info!("Session changed: authenticated={}", session.is_authenticated());
        });
        Signal::new(store)
    });

    let token_storage = storage.clone();
    use_context_provider(|| Signal::new(TokenStore::new(token_storage)));

    use_context_provider(|| Signal::new(ApiService::from_config(&config, storage)));

    rsx! {
        {children}
    }
}

pub(crate) fn end_session(
    mut session: Signal<AppSession>,
    tokens: Signal<TokenStore<PlatformStorage>>,
) {
    tokens.read().remove();
    if session.peek().is_authenticated() {
        session.write().logout();
    }
}

/// Handles to every app-wide context, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Signal<AppSession>,
    pub tokens: Signal<TokenStore<PlatformStorage>>,
    pub api: Signal<AppApi>,
    pub toasts: Toasts,
}

pub fn use_app() -> AppContext {
    AppContext {
        session: use_session(),
        tokens: use_tokens(),
        api: use_api(),
        toasts: use_toast(),
    }
}

impl AppContext {
    /// A handle to the API for use inside a spawned task.
    pub fn api(&self) -> AppApi {
        self.api.read().clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.read().user().cloned()
    }

    pub fn notify(&self, level: NoticeLevel, title: &str, description: Option<&str>) {
        notify(self.toasts, level, title, description);
    }

    /// Drop the stored token and reset the session. A mounted
    /// [`crate::SessionGuard`] then redirects to the login page.
    pub fn end_session(&self) {
        end_session(self.session, self.tokens);
    }

    /// Full logout: remove the token, reset the session, tell the user.
    /// Navigating to the login page is up to the caller.
    pub fn logout(&self) {
        self.end_session();
        self.notify(NoticeLevel::Info, messages::LOGGED_OUT, None);
    }

    /// Log a failed backend call and tell the user. An authentication failure
    /// also ends the session.
    pub fn report_error(&self, action: &str, error: &ApiError) {
        if error.is_auth() {
            tracing::warn!("{} rejected, session expired: {}", action, error);
            self.notify(
                NoticeLevel::Error,
                messages::SESSION_EXPIRED,
                Some(messages::SESSION_EXPIRED_DETAIL),
            );
            self.end_session();
            return;
        }
        tracing::error!("{} failed: {}", action, error);
        self.notify(NoticeLevel::Error, action, Some(&error.to_string()));
    }
}

impl Feedback for AppContext {
    fn succeeded(&self, title: &str) {
        self.notify(NoticeLevel::Success, title, None);
    }

    fn failed(&self, action: &str, error: &ApiError) {
        self.report_error(action, error);
    }
}
