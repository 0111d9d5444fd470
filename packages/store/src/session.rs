//! # Persisted sessions: two storage scopes, one user record
//!
//! A signed-in user is remembered as a JSON [`UserRecord`] under a single key
//! (`"user"` by default) in one of two places:
//!
//! | Scope | Browser backing | Lifetime |
//! |-------|-----------------|----------|
//! | [`SessionScope::Persistent`] | `localStorage` | survives restarts ("remember me") |
//! | [`SessionScope::Session`] | `sessionStorage` | until the tab closes |
//!
//! [`Sessions::resync`] is the one read path. It is idempotent and cheap, so
//! views call it whenever something that could have changed the answer
//! happens (mount, a registration result, an error transition).
//!
//! Storage backends never fail loudly. A backend that cannot be reached reads
//! as empty and drops writes, logging a warning; only a record that is
//! present but unparsable is reported, as [`SessionError::Corrupt`].

use api::UserRecord;
use thiserror::Error;

/// Which storage location a record lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionScope {
    Persistent,
    Session,
}

impl std::fmt::Display for SessionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionScope::Persistent => f.write_str("persistent"),
            SessionScope::Session => f.write_str("session"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored {scope} session is not a valid user record: {source}")]
    Corrupt {
        scope: SessionScope,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode user record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage, modelled on the Web Storage API.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// The two storage scopes plus the key the user record lives under.
#[derive(Clone, Debug)]
pub struct Sessions<S> {
    persistent: S,
    session: S,
    key: String,
}

impl<S: SessionStorage> Sessions<S> {
    pub fn new(persistent: S, session: S) -> Self {
        Self::with_key(persistent, session, "user")
    }

    pub fn with_key(persistent: S, session: S, key: impl Into<String>) -> Self {
        Self {
            persistent,
            session,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self, scope: SessionScope) -> &S {
        match scope {
            SessionScope::Persistent => &self.persistent,
            SessionScope::Session => &self.session,
        }
    }

    /// Look up a stored user in either scope.
    ///
    /// The session scope is consulted first since it reflects the most recent
    /// sign-in in this tab. Returns `Ok(None)` when neither scope holds a value.
    pub fn resync(&self) -> Result<Option<UserRecord>, SessionError> {
        for scope in [SessionScope::Session, SessionScope::Persistent] {
            let Some(raw) = self.storage(scope).get_item(&self.key) else {
                continue;
            };
            tracing::debug!("Found stored user in {} scope", scope);
            return UserRecord::from_json(&raw)
                .map(Some)
                .map_err(|source| SessionError::Corrupt { scope, source });
        }
        Ok(None)
    }

    /// Store `user` in the given scope.
    pub fn remember(&self, user: &UserRecord, scope: SessionScope) -> Result<(), SessionError> {
        let json = user.to_json()?;
        self.storage(scope).set_item(&self.key, &json);
        Ok(())
    }

    /// Remove the stored user from both scopes.
    pub fn forget(&self) {
        self.persistent.remove_item(&self.key);
        self.session.remove_item(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn sessions() -> Sessions<MemoryStorage> {
        Sessions::new(MemoryStorage::new(), MemoryStorage::new())
    }

    fn grace() -> UserRecord {
        UserRecord {
            id: "7".to_string(),
            email: "grace@example.com".to_string(),
            name: None,
            token: Some("t0k".to_string()),
        }
    }

    #[test]
    fn test_resync_empty() {
        assert!(sessions().resync().unwrap().is_none());
    }

    #[test]
    fn test_resync_finds_either_scope() {
        for scope in [SessionScope::Persistent, SessionScope::Session] {
            let s = sessions();
            s.remember(&grace(), scope).unwrap();
            assert_eq!(s.resync().unwrap(), Some(grace()), "{scope}");
        }
    }

    #[test]
    fn test_resync_prefers_session_scope() {
        let s = sessions();
        let mut older = grace();
        older.token = Some("old".to_string());
        s.remember(&older, SessionScope::Persistent).unwrap();
        s.remember(&grace(), SessionScope::Session).unwrap();
        assert_eq!(s.resync().unwrap().unwrap().token.as_deref(), Some("t0k"));
    }

    #[test]
    fn test_resync_is_idempotent() {
        let s = sessions();
        s.remember(&grace(), SessionScope::Session).unwrap();
        let first = s.resync().unwrap();
        let second = s.resync().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resync_reports_corrupt_record() {
        let s = sessions();
        s.storage(SessionScope::Persistent).set_item("user", "{not json");
        let err = s.resync().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Corrupt { scope: SessionScope::Persistent, .. }
        ));
    }

    #[test]
    fn test_custom_key_and_forget() {
        let s = Sessions::with_key(MemoryStorage::new(), MemoryStorage::new(), "account");
        s.remember(&grace(), SessionScope::Persistent).unwrap();
        s.remember(&grace(), SessionScope::Session).unwrap();
        assert!(s.storage(SessionScope::Session).get_item("user").is_none());
        assert!(s.resync().unwrap().is_some());

        s.forget();
        assert!(s.resync().unwrap().is_none());
    }
}
