//! # Session guard: gate for protected routes
//!
//! [`SessionGuard`] decides once per mount (and again whenever the session
//! changes) whether its children may render:
//!
//! | Session | Stored token | Validation | Result |
//! |---------|--------------|------------|--------|
//! | authenticated | any | not called | [`GuardState::Authenticated`] |
//! | anonymous | none | not called | [`GuardState::Unauthenticated`] |
//! | anonymous | present | `Ok(true)` | [`GuardState::Authenticated`] |
//! | anonymous | present | `Ok(false)` or `Err(_)` | [`GuardState::Unauthenticated`] |
//!
//! A positive validation only lets the children render; it does not mark the
//! session authenticated. On [`GuardState::Unauthenticated`] the guard clears the
//! token and the session, then calls `on_unauthenticated` so the router can go
//! to the login page. Children and the loading indicator are never shown
//! together.

use std::future::Future;

use api::{ApiError, ReportApi};
use dioxus::prelude::*;

use crate::components::LoadingState;
use crate::session::{end_session, use_api, use_session, use_tokens};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Validating,
    Authenticated,
    Unauthenticated,
}

/// Decide access for a protected route. `validate` is only called when the
/// session is anonymous and a token is stored.
pub async fn resolve_access<F, Fut>(
    is_authenticated: bool,
    token: Option<String>,
    validate: F,
) -> GuardState
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<bool, ApiError>>,
{
    if is_authenticated {
        return GuardState::Authenticated;
    }
    let Some(token) = token else {
        tracing::debug!("No stored token, access denied");
        return GuardState::Unauthenticated;
    };
    match validate(token).await {
        Ok(true) => GuardState::Authenticated,
        Ok(false) => {
            tracing::info!("Stored token rejected");
            GuardState::Unauthenticated
        }
        Err(e) => {
            tracing::error!("Token validation failed: {}", e);
            GuardState::Unauthenticated
        }
    }
}

/// Renders `children` only once access is established.
#[component]
pub fn SessionGuard(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let session = use_session();
    let tokens = use_tokens();
    let api = use_api();
    // An authenticated session needs no check, so the first paint already shows the page
    let mut state = use_signal(|| {
        if session.peek().is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Validating
        }
    });

    // Dropped with the guard, so a late validation never lands on a dead scope
    let _access = use_resource(move || {
        let is_authenticated = session.read().is_authenticated();
        let token = tokens.read().get();
        let api = api.read().clone();
        async move {
            let resolved = resolve_access(is_authenticated, token, |token| async move {
                Ok(api.validate_token(&token).await)
            })
            .await;
            state.set(resolved);
            if resolved == GuardState::Unauthenticated {
                end_session(session, tokens);
                on_unauthenticated.call(());
            }
        }
    });

    match state() {
        GuardState::Validating => rsx! {
            LoadingState { message: "Checking your session..." }
        },
        GuardState::Authenticated => rsx! {
            {children}
        },
        GuardState::Unauthenticated => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting(
        calls: &Rc<Cell<u32>>,
        answer: Result<bool, ApiError>,
    ) -> impl FnOnce(String) -> std::future::Ready<Result<bool, ApiError>> {
        let calls = calls.clone();
        move |_token| {
            calls.set(calls.get() + 1);
            std::future::ready(answer)
        }
    }

    #[tokio::test]
    async fn authenticated_session_skips_validation() {
        let calls = Rc::new(Cell::new(0));
        let state = resolve_access(true, None, counting(&calls, Ok(false))).await;
        assert_eq!(state, GuardState::Authenticated);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn missing_token_denies_without_validation() {
        let calls = Rc::new(Cell::new(0));
        let state = resolve_access(false, None, counting(&calls, Ok(true))).await;
        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_token_grants_access() {
        let calls = Rc::new(Cell::new(0));
        let state = resolve_access(
            false,
            Some("mock-jwt-token-3-1".to_string()),
            counting(&calls, Ok(true)),
        )
        .await;
        assert_eq!(state, GuardState::Authenticated);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn rejected_token_denies() {
        let calls = Rc::new(Cell::new(0));
        let state = resolve_access(false, Some("stale".to_string()), counting(&calls, Ok(false))).await;
        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn validation_error_fails_closed() {
        let calls = Rc::new(Cell::new(0));
        let state = resolve_access(
            false,
            Some("token".to_string()),
            counting(&calls, Err(ApiError::Network("offline".to_string()))),
        )
        .await;
        assert_eq!(state, GuardState::Unauthenticated);
    }

    #[tokio::test]
    async fn validates_against_the_mock_backend() {
        use std::time::Duration;

        use api::MockApi;
        use store::{MemoryStore, TokenStore};

        let api = MockApi::new(TokenStore::new(MemoryStore::new())).with_latency(Duration::ZERO);
        let validate = |token: String| {
            let api = api.clone();
            async move { Ok(api.validate_token(&token).await) }
        };
        let state = resolve_access(false, Some("mock-jwt-token-3-1".to_string()), validate).await;
        assert_eq!(state, GuardState::Authenticated);

        let validate = |token: String| {
            let api = api.clone();
            async move { Ok(api.validate_token(&token).await) }
        };
        let state = resolve_access(false, Some("mock-jwt-token-42-1".to_string()), validate).await;
        assert_eq!(state, GuardState::Unauthenticated);
    }

    mod mounted {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::time::Duration;

        use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
        use store::{AppConfig, UserInfo, UserRole};

        use super::*;
        use crate::session::{use_session, use_tokens, SessionProvider};

        #[derive(Debug, Default)]
        struct Outcome {
            redirects: u32,
            child_renders: u32,
            token_at_redirect: Option<String>,
            authenticated_at_redirect: bool,
        }

        #[derive(Clone, Default)]
        struct Observed(Rc<RefCell<Outcome>>);

        impl PartialEq for Observed {
            fn eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.0, &other.0)
            }
        }

        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Start {
            StaleToken,
            SignedIn,
        }

        fn employee() -> UserInfo {
            UserInfo {
                id: "3".to_string(),
                username: "employee1".to_string(),
                email: "emp1@example.com".to_string(),
                role: UserRole::Subordinate,
                display_name: Some("Taro Tanaka".to_string()),
            }
        }

        #[component]
        fn Harness(start: Start, observed: Observed) -> Element {
            let mut config = AppConfig::default();
            config.mock.latency_ms = 0;
            rsx! {
                SessionProvider { config, Seeded { start, observed } }
            }
        }

        #[component]
        fn Seeded(start: Start, observed: Observed) -> Element {
            let tokens = use_tokens();
            let mut session = use_session();
            use_hook(|| match start {
                // No mock user has id 42
                Start::StaleToken => tokens.peek().set("mock-jwt-token-42-1").unwrap(),
                Start::SignedIn => {
                    tokens.peek().set("mock-jwt-token-3-1").unwrap();
                    session.write().login(employee(), "mock-jwt-token-3-1".to_string());
                }
            });

            let seen = observed.clone();
            let on_unauthenticated = move |_: ()| {
                let mut outcome = seen.0.borrow_mut();
                outcome.redirects += 1;
                outcome.token_at_redirect = tokens.peek().get();
                outcome.authenticated_at_redirect = session.peek().is_authenticated();
            };

            rsx! {
                SessionGuard { on_unauthenticated, Protected { observed } }
            }
        }

        #[component]
        fn Protected(observed: Observed) -> Element {
            observed.0.borrow_mut().child_renders += 1;
            rsx! { p { "Reports" } }
        }

        async fn settle(dom: &mut VirtualDom) {
            for _ in 0..10 {
                let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
                if work.await.is_err() {
                    break;
                }
                dom.render_immediate(&mut NoOpMutations);
            }
        }

        fn mount(start: Start, observed: &Observed) -> VirtualDom {
            let mut dom = VirtualDom::new_with_props(
                Harness,
                HarnessProps {
                    start,
                    observed: observed.clone(),
                },
            );
            dom.rebuild_in_place();
            dom
        }

        #[tokio::test]
        async fn stale_token_is_cleared_before_redirect() {
            let observed = Observed::default();
            let mut dom = mount(Start::StaleToken, &observed);
            settle(&mut dom).await;

            let outcome = observed.0.borrow();
            assert_eq!(outcome.redirects, 1);
            assert_eq!(outcome.token_at_redirect, None);
            assert!(!outcome.authenticated_at_redirect);
            assert_eq!(outcome.child_renders, 0);
        }

        #[tokio::test]
        async fn signed_in_session_renders_on_first_pass() {
            let observed = Observed::default();
            let mut dom = mount(Start::SignedIn, &observed);
            assert_eq!(observed.0.borrow().child_renders, 1);

            settle(&mut dom).await;
            let outcome = observed.0.borrow();
            assert_eq!(outcome.redirects, 0);
            assert!(outcome.child_renders >= 1);
        }
    }
}
