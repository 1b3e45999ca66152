//! # Session store: who is logged in, persisted across page loads
//!
//! [`SessionStore`] owns the client's [`Session`] and writes it to a
//! [`KeyValueStore`] under [`SESSION_KEY`] after every mutation. The JSON shape is
//! `{ "isAuthenticated": bool, "user": UserInfo | null, "token": string | null }`.
//!
//! The auth token used for API calls lives separately under [`TOKEN_KEY`] and is
//! managed through [`TokenStore`]. The session store never touches it: a full
//! logout is "remove token, reset store, notify, navigate", and only the second
//! step belongs here.

use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, StorageError};
use crate::models::{UserInfo, UserPatch};

/// Storage key of the persisted session.
pub const SESSION_KEY: &str = "authState";

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Client-held authentication state.
///
/// Either nobody is logged in, or a user and their token both are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PersistedSession", into = "PersistedSession")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: UserInfo, token: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }
}

/// Wire shape of [`Session`] in storage.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    is_authenticated: bool,
    user: Option<UserInfo>,
    token: Option<String>,
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        match persisted {
            PersistedSession {
                is_authenticated: true,
                user: Some(user),
                token: Some(token),
            } => Session::Authenticated { user, token },
            _ => Session::Anonymous,
        }
    }
}

impl From<Session> for PersistedSession {
    fn from(session: Session) -> Self {
        match session {
            Session::Anonymous => PersistedSession {
                is_authenticated: false,
                user: None,
                token: None,
            },
            Session::Authenticated { user, token } => PersistedSession {
                is_authenticated: true,
                user: Some(user),
                token: Some(token),
            },
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&Session)>;

/// Observable, persisted session state.
pub struct SessionStore<K: KeyValueStore> {
    storage: K,
    session: Session,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Restore the session persisted in `storage`, or start anonymous.
    pub fn load(storage: K) -> Self {
        let session = match storage.get(SESSION_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable session: {}", e);
                Session::Anonymous
            }),
            None => Session::Anonymous,
        };
        Self {
            storage,
            session,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.user()
    }

    /// Replace the session with an authenticated one. No merge with prior state.
    pub fn login(&mut self, user: UserInfo, token: String) {
        tracing::debug!("Session login: {}", user.username);
        self.commit(Session::Authenticated { user, token });
    }

    /// Reset to the initial anonymous state. Does not remove the stored token.
    pub fn logout(&mut self) {
        tracing::debug!("Session logout");
        self.commit(Session::Anonymous);
    }

    /// Merge `patch` into the current user. No-op when nobody is logged in.
    pub fn update_user(&mut self, patch: UserPatch) {
        let Session::Authenticated { user, token } = &self.session else {
            return;
        };
        let mut user = user.clone();
        let token = token.clone();
        patch.apply_to(&mut user);
        self.commit(Session::Authenticated { user, token });
    }

    /// Call `listener` with the new session after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, session: Session) {
        self.session = session;
        self.persist();
        for (_, listener) in &self.listeners {
            listener(&self.session);
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.session) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &json) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialise session: {}", e),
        }
    }
}

impl<K: KeyValueStore + std::fmt::Debug> std::fmt::Debug for SessionStore<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.storage)
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The bearer token, stored apart from the session.
#[derive(Clone, Debug)]
pub struct TokenStore<K> {
    storage: K,
}

impl<K: KeyValueStore> TokenStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)?;
        tracing::debug!("Auth token saved");
        Ok(())
    }

    pub fn remove(&self) {
        self.storage.remove(TOKEN_KEY);
        tracing::debug!("Auth token removed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::UserRole;

    fn user() -> UserInfo {
        UserInfo {
            id: "3".to_string(),
            username: "employee1".to_string(),
            email: "emp1@example.com".to_string(),
            role: UserRole::Subordinate,
            display_name: Some("Taro Tanaka".to_string()),
        }
    }

    fn assert_invariant(session: &Session) {
        if session.is_authenticated() {
            assert!(session.user().is_some() && session.token().is_some());
        } else {
            assert!(session.user().is_none() && session.token().is_none());
        }
    }

    #[test]
    fn login_sets_user_and_token() {
        let mut store = SessionStore::load(MemoryStore::new());
        assert_invariant(store.session());
        assert!(!store.is_authenticated());

        store.login(user(), "token-1".to_string());
        assert_invariant(store.session());
        assert!(store.is_authenticated());
        assert_eq!(store.session().token(), Some("token-1"));

        // A second login overwrites rather than merges
        let mut other = user();
        other.id = "2".to_string();
        other.display_name = None;
        store.login(other.clone(), "token-2".to_string());
        assert_eq!(store.user(), Some(&other));
        assert_eq!(store.session().token(), Some("token-2"));
    }

    #[test]
    fn logout_restores_initial_state() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::load(storage.clone());
        let initial = store.session().clone();

        store.logout();
        assert_eq!(store.session(), &initial);

        store.login(user(), "token".to_string());
        store.update_user(UserPatch::display_name("Someone"));
        store.logout();
        assert_eq!(store.session(), &initial);
        assert_eq!(store.session(), &Session::Anonymous);
        assert_invariant(store.session());

        // Persisted state matches too
        let reloaded = SessionStore::load(storage);
        assert_eq!(reloaded.session(), &Session::Anonymous);
    }

    #[test]
    fn logout_keeps_token_storage() {
        let storage = MemoryStore::new();
        let tokens = TokenStore::new(storage.clone());
        tokens.set("abc").unwrap();

        let mut store = SessionStore::load(storage);
        store.login(user(), "abc".to_string());
        store.logout();

        assert_eq!(tokens.get().as_deref(), Some("abc"));
        tokens.remove();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn update_user_merges_only_when_logged_in() {
        let mut store = SessionStore::load(MemoryStore::new());
        store.update_user(UserPatch::display_name("Ghost"));
        assert_eq!(store.session(), &Session::Anonymous);

        store.login(user(), "token".to_string());
        store.update_user(UserPatch {
            email: Some("new@example.com".to_string()),
            ..UserPatch::default()
        });
        let updated = store.user().unwrap();
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.display_name(), "Taro Tanaka");
        assert_eq!(updated.username, "employee1");
        assert_eq!(store.session().token(), Some("token"));
    }

    #[test]
    fn session_survives_reload() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::load(storage.clone());
        store.login(user(), "persisted".to_string());

        let raw = storage.get(SESSION_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["token"], "persisted");
        assert_eq!(json["user"]["username"], "employee1");

        let reloaded = SessionStore::load(storage);
        assert_eq!(reloaded.session(), store.session());
    }

    #[test]
    fn inconsistent_or_corrupt_storage_loads_anonymous() {
        let storage = MemoryStore::new();
        storage
            .set(SESSION_KEY, r#"{"isAuthenticated":true,"user":null,"token":"x"}"#)
            .unwrap();
        assert_eq!(SessionStore::load(storage.clone()).session(), &Session::Anonymous);

        storage.set(SESSION_KEY, "not json").unwrap();
        assert_eq!(SessionStore::load(storage).session(), &Session::Anonymous);
    }

    #[test]
    fn listeners_see_every_mutation_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SessionStore::load(MemoryStore::new());

        let sink = seen.clone();
        let id = store.subscribe(move |session| sink.borrow_mut().push(session.is_authenticated()));

        store.login(user(), "token".to_string());
        store.logout();
        assert_eq!(*seen.borrow(), vec![true, false]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.login(user(), "token".to_string());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn empty_token_reads_as_missing() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "").unwrap();
        assert!(TokenStore::new(storage).get().is_none());
    }
}
