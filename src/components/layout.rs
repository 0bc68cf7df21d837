use crate::{
    components::toast::ToastStack,
    config,
    state::{
        notifications::{notify, use_notifications},
        session::{end_session, use_session, Role},
    },
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let (_, set_notifications) = use_notifications();

    let signed_in = move || session.get().principal.is_some();
    let display_name = move || {
        session
            .get()
            .principal
            .map(|p| p.name)
            .unwrap_or_default()
    };
    let can_plan_ceremony = move || {
        session
            .get()
            .principal
            .map(|p| p.role == Role::StudentAffairs)
            .unwrap_or(false)
    };
    let can_process_clearance = move || {
        session
            .get()
            .principal
            .map(|p| p.role == Role::Doitp)
            .unwrap_or(false)
    };

    let on_logout = move |_| {
        end_session(set_session);
        notify(
            set_notifications,
            "Logged out",
            "You have been successfully logged out.",
        );
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">{config::portal_name()}</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <nav class="flex space-x-4">
                            <Show when=can_plan_ceremony>
                                <a href="/ceremony" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    "Graduation Ceremony"
                                </a>
                            </Show>
                            <Show when=can_process_clearance>
                                <a href="/clearance" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    "Clearance Requests"
                                </a>
                            </Show>
                        </nav>
                        <Show when=signed_in>
                            <span class="hidden sm:block text-sm text-fg-muted">{display_name}</span>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-4xl w-full mx-auto py-10 px-4">
                {children()}
            </main>
            <ToastStack/>
        </div>
    }
}
