//! # User slice: remote registration status
//!
//! A small redux-style slice: [`RemoteAuthState`] is the state, [`UserAction`]
//! the actions, [`RemoteAuthState::reduce`] the reducer. Views keep the state
//! in a signal and feed actions into it; nothing here knows about the UI.
//!
//! [`register_user`] is the async action creator. It dispatches
//! `RegisterPending`, awaits the [`Registrar`], remembers a new user in the
//! session scope and finishes with `RegisterFulfilled` or `RegisterRejected`.
//! There is no retry and no timeout: a hung request leaves `loading` set.

use api::{RegisterRequest, Registrar, UserRecord};

use crate::session::{SessionScope, SessionStorage, Sessions};

/// Status of the registration request as held by the shared store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteAuthState {
    pub loading: bool,
    pub error: Option<String>,
    pub user_info: Option<UserRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    RegisterPending,
    RegisterFulfilled(UserRecord),
    RegisterRejected(String),
    /// Clear the remote error without touching the rest of the state.
    ClearError,
}

impl RemoteAuthState {
    pub fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::RegisterPending => {
                self.loading = true;
                self.error = None;
            }
            UserAction::RegisterFulfilled(user) => {
                self.loading = false;
                self.error = None;
                self.user_info = Some(user);
            }
            UserAction::RegisterRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            UserAction::ClearError => {
                self.error = None;
            }
        }
    }
}

/// Register a new account and report progress through `dispatch`.
pub async fn register_user<R, S>(
    registrar: &R,
    sessions: &Sessions<S>,
    request: RegisterRequest,
    mut dispatch: impl FnMut(UserAction),
) where
    R: Registrar,
    S: SessionStorage,
{
    dispatch(UserAction::RegisterPending);

    match registrar.register(request).await {
        Ok(user) => {
            tracing::info!("Registered {}", user.email);
            if let Err(e) = sessions.remember(&user, SessionScope::Session) {
                tracing::warn!("Failed to persist session: {}", e);
            }
            dispatch(UserAction::RegisterFulfilled(user));
        }
        Err(e) => {
            tracing::info!("Registration failed: {}", e);
            dispatch(UserAction::RegisterRejected(e.to_string()));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use api::ApiError;

    use super::*;
    use crate::memory::MemoryStorage;

    /// Registrar double that records every request it receives.
    pub(crate) struct RecordingRegistrar {
        pub calls: RefCell<Vec<RegisterRequest>>,
        reject_with: Option<(u16, String)>,
    }

    impl RecordingRegistrar {
        pub fn accepting() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reject_with: None,
            }
        }

        pub fn rejecting(status: u16, message: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reject_with: Some((status, message.to_string())),
            }
        }
    }

    impl Registrar for RecordingRegistrar {
        async fn register(&self, request: RegisterRequest) -> Result<UserRecord, ApiError> {
            let email = request.email.clone();
            self.calls.borrow_mut().push(request);
            match &self.reject_with {
                Some((status, message)) => Err(ApiError::Rejected {
                    status: *status,
                    message: message.clone(),
                }),
                None => Ok(UserRecord {
                    id: "1".to_string(),
                    email,
                    name: None,
                    token: Some("token".to_string()),
                }),
            }
        }
    }

    fn sessions() -> Sessions<MemoryStorage> {
        Sessions::new(MemoryStorage::new(), MemoryStorage::new())
    }

    #[test]
    fn test_reducer_transitions() {
        let mut state = RemoteAuthState {
            error: Some("old".to_string()),
            ..Default::default()
        };

        state.reduce(UserAction::RegisterPending);
        assert!(state.loading);
        assert!(state.error.is_none());

        state.reduce(UserAction::RegisterRejected("taken".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("taken"));
        assert!(state.user_info.is_none());

        state.reduce(UserAction::ClearError);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_register_user_success() {
        let registrar = RecordingRegistrar::accepting();
        let sessions = sessions();
        let mut state = RemoteAuthState::default();
        let mut seen = Vec::new();

        let request = RegisterRequest::new("grace@example.com", "correct9horse", "correct9horse");
        register_user(&registrar, &sessions, request.clone(), |action| {
            seen.push(action.clone());
            state.reduce(action);
        })
        .await;

        assert_eq!(registrar.calls.borrow().as_slice(), &[request]);
        assert_eq!(seen.first(), Some(&UserAction::RegisterPending));
        assert!(matches!(seen.last(), Some(UserAction::RegisterFulfilled(_))));
        assert!(!state.loading);
        assert_eq!(state.user_info.as_ref().map(|u| u.email.as_str()), Some("grace@example.com"));

        // New users land in the session scope only.
        assert!(sessions.storage(SessionScope::Session).get_item("user").is_some());
        assert!(sessions.storage(SessionScope::Persistent).get_item("user").is_none());
    }

    #[tokio::test]
    async fn test_register_user_rejected() {
        let registrar = RecordingRegistrar::rejecting(409, "An account with this email already exists");
        let sessions = sessions();
        let mut state = RemoteAuthState::default();

        let request = RegisterRequest::new("grace@example.com", "correct9horse", "correct9horse");
        register_user(&registrar, &sessions, request, |action| state.reduce(action)).await;

        assert!(!state.loading);
        assert!(state.user_info.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("An account with this email already exists")
        );
        assert!(sessions.resync().unwrap().is_none());
    }
}
