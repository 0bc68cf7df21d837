use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireRole,
    pages::{CeremonyPage, ClearancePage, HomePage, UnauthorizedPage},
    state::{notifications::NotificationProvider, session::Role, session::SessionProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/ceremony", "/clearance", "/unauthorized"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/ceremony", "/clearance"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/unauthorized"];

pub const CEREMONY_ALLOWED_ROLES: &[Role] = &[Role::StudentAffairs];

pub const CLEARANCE_ALLOWED_ROLES: &[Role] = &[Role::Doitp];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <SessionProvider>
            <NotificationProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/ceremony" view=ProtectedCeremony/>
                        <Route path="/clearance" view=ProtectedClearance/>
                        <Route path="/unauthorized" view=UnauthorizedPage/>
                    </Routes>
                </Router>
            </NotificationProvider>
        </SessionProvider>
    }
}

#[component]
fn ProtectedCeremony() -> impl IntoView {
    view! { <RequireRole allow=CEREMONY_ALLOWED_ROLES><CeremonyPage/></RequireRole> }
}

#[component]
fn ProtectedClearance() -> impl IntoView {
    view! { <RequireRole allow=CLEARANCE_ALLOWED_ROLES><ClearancePage/></RequireRole> }
}
