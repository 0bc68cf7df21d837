use crate::state::notifications::{dismiss, use_notifications, Notification};
use leptos::*;

/// Transient notification overlay. Entries come from the notification
/// context and can be dismissed manually; on the browser they also expire on
/// their own.
#[component]
pub fn ToastStack() -> impl IntoView {
    let (notifications, set_notifications) = use_notifications();
    let entries = move || notifications.get().entries().to_vec();

    view! {
        <div class="fixed bottom-4 right-4 z-[80] w-full max-w-sm space-y-2">
            <For
                each=entries
                key=|entry| entry.id
                children=move |entry: Notification| {
                    let id = entry.id;
                    view! {
                        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded shadow-lg flex items-start justify-between gap-3">
                            <div>
                                <p class="text-sm font-semibold">{entry.title}</p>
                                <p class="text-sm">{entry.description}</p>
                            </div>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-status-success-text opacity-70 hover:opacity-100"
                                on:click=move |_| dismiss(set_notifications, id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
