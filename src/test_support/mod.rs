#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::state::notifications::NotificationState;
    use crate::state::session::{Principal, Role, SessionState};
    use leptos::*;

    pub fn student_affairs_principal() -> Principal {
        Principal {
            name: "Selin Arslan".into(),
            role: Role::StudentAffairs,
        }
    }

    pub fn doitp_principal() -> Principal {
        Principal {
            name: "Kerem Aydın".into(),
            role: Role::Doitp,
        }
    }

    pub fn provide_session(
        principal: Option<Principal>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(SessionState { principal });
        provide_context((session, set_session));
        (session, set_session)
    }

    pub fn provide_notifications(
    ) -> (ReadSignal<NotificationState>, WriteSignal<NotificationState>) {
        let (state, set_state) = create_signal(NotificationState::default());
        provide_context((state, set_state));
        (state, set_state)
    }
}
