use crate::state::session::{use_session, Principal, Role};
use leptos::*;

pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Advisory client-side gate: admits the page body only when the resolved
/// principal carries one of the allowed roles, otherwise navigates to the
/// unauthorized page. The decision is made from the session resolved at
/// provider construction and is final for the mounted page; there is no
/// retry path.
#[component]
pub fn RequireRole(allow: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let permitted = create_memo(move |_| is_permitted(session.get().principal.as_ref(), allow));
    create_effect(move |_| {
        if permitted.get() {
            return;
        }
        let denied = session
            .get_untracked()
            .principal
            .map(|p| p.role.label().to_string())
            .unwrap_or_else(|| "no session".into());
        log::warn!("access denied ({denied}), redirecting to {UNAUTHORIZED_ROUTE}");
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(UNAUTHORIZED_ROUTE);
        }
    });
    view! {
        <Show when=move || permitted.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

pub fn is_permitted(principal: Option<&Principal>, allow: &[Role]) -> bool {
    principal
        .map(|p| allow.contains(&p.role))
        .unwrap_or(false)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireRole;
    use crate::state::session::Role;
    use crate::test_support::helpers::{doitp_principal, provide_session, student_affairs_principal};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn renders_children_for_allowed_role() {
        let html = render_to_string(move || {
            provide_session(Some(student_affairs_principal()));
            view! {
                <RequireRole allow=&[Role::StudentAffairs]>
                    {|| view! { <div>"ceremony-roster"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("ceremony-roster"));
    }

    #[test]
    fn hides_children_for_wrong_role() {
        let html = render_to_string(move || {
            provide_session(Some(doitp_principal()));
            view! {
                <RequireRole allow=&[Role::StudentAffairs]>
                    {|| view! { <div>"ceremony-roster"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("ceremony-roster"));
    }

    #[test]
    fn hides_children_without_a_session() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireRole allow=&[Role::Doitp]>
                    {|| view! { <div>"clearance-roster"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("clearance-roster"));
    }
}
