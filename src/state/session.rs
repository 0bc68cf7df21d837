use crate::config;
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Portal roles as a closed set. The serde renames match the strings the
/// identity service writes into the stored session; anything outside this
/// set fails deserialization and is treated as an absent principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "studentAffairs")]
    StudentAffairs,
    #[serde(rename = "doitp")]
    Doitp,
    #[serde(rename = "advisor")]
    Advisor,
    #[serde(rename = "student")]
    Student,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::StudentAffairs => "Student Affairs",
            Role::Doitp => "DOITP",
            Role::Advisor => "Advisor",
            Role::Student => "Student",
        }
    }
}

/// The authenticated actor as known to the portal. Read-only here: the
/// portal never creates or rewrites the stored principal, it only clears it
/// on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub principal: Option<Principal>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("browser storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("stored principal is malformed: {0}")]
    MalformedPrincipal(#[from] serde_json::Error),
}

fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window()
        .ok_or_else(|| SessionError::StorageUnavailable("no window object".into()))?;
    window
        .local_storage()
        .map_err(|_| SessionError::StorageUnavailable("localStorage rejected".into()))?
        .ok_or_else(|| SessionError::StorageUnavailable("no localStorage".into()))
}

/// Synchronous lookup of the stored principal. `Ok(None)` means nobody is
/// signed in; errors mean the session store itself could not be read.
pub fn current_principal() -> Result<Option<Principal>, SessionError> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(&config::session_key())
        .map_err(|_| SessionError::StorageUnavailable("localStorage read failed".into()))?;
    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
fn resolve_principal() -> Option<Principal> {
    match current_principal() {
        Ok(principal) => principal,
        Err(err) => {
            log::warn!("session lookup failed, treating as signed out: {err}");
            None
        }
    }
}

// Storage is a browser facility; off-wasm there is never a stored session.
#[cfg(not(target_arch = "wasm32"))]
fn resolve_principal() -> Option<Principal> {
    None
}

/// Resolves the principal exactly once at construction and provides the
/// resulting state as context. There is no refresh path: the decision holds
/// for the lifetime of the mounted tree.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (session, set_session) = create_signal(SessionState {
        principal: resolve_principal(),
    });
    provide_context::<SessionContext>((session, set_session));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Clears the stored principal and the in-memory state. Storage failures are
/// ignored: the in-memory session is gone either way.
pub fn end_session(set_session: WriteSignal<SessionState>) {
    clear_stored_principal();
    set_session.update(|state| state.principal = None);
}

#[cfg(target_arch = "wasm32")]
fn clear_stored_principal() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(&config::session_key());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_stored_principal() {}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_session_returns_signed_out_without_context() {
        with_runtime(|| {
            let (session, _set_session) = use_session();
            assert!(session.get().principal.is_none());
        });
    }

    #[test]
    fn principal_deserializes_known_roles() {
        let principal: Principal =
            serde_json::from_str(r#"{"name": "Selin Arslan", "role": "studentAffairs"}"#).unwrap();
        assert_eq!(principal.role, Role::StudentAffairs);

        let principal: Principal =
            serde_json::from_str(r#"{"name": "Kerem Aydın", "role": "doitp"}"#).unwrap();
        assert_eq!(principal.role, Role::Doitp);
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        let result = serde_json::from_str::<Principal>(r#"{"name": "X", "role": "registrar"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn principal_round_trips_through_storage_format() {
        let principal = Principal {
            name: "Selin Arslan".into(),
            role: Role::StudentAffairs,
        };
        let json = serde_json::to_string(&principal).unwrap();
        assert!(json.contains("studentAffairs"));
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, principal);
    }

    #[test]
    fn end_session_clears_in_memory_principal() {
        with_runtime(|| {
            let (session, set_session) = create_signal(SessionState {
                principal: Some(Principal {
                    name: "Selin Arslan".into(),
                    role: Role::StudentAffairs,
                }),
            });
            end_session(set_session);
            assert!(session.get().principal.is_none());
        });
    }
}
