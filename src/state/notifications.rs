use leptos::*;

type NotificationContext = (
    ReadSignal<NotificationState>,
    WriteSignal<NotificationState>,
);

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    entries: Vec<Notification>,
    next_id: u32,
}

impl NotificationState {
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    fn push(&mut self, title: String, description: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Notification {
            id,
            title,
            description,
        });
        id
    }

    fn remove(&mut self, id: u32) {
        self.entries.retain(|entry| entry.id != id);
    }
}

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(NotificationState::default());
    provide_context::<NotificationContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .unwrap_or_else(|| create_signal(NotificationState::default()))
}

/// Fire-and-forget: queues a transient notification. In the browser the entry
/// also dismisses itself after a few seconds.
pub fn notify(
    set_state: WriteSignal<NotificationState>,
    title: impl Into<String>,
    description: impl Into<String>,
) {
    let (title, description) = (title.into(), description.into());
    let mut assigned = 0;
    set_state.update(|state| assigned = state.push(title, description));
    schedule_auto_dismiss(set_state, assigned);
}

pub fn dismiss(set_state: WriteSignal<NotificationState>, id: u32) {
    set_state.update(|state| state.remove(id));
}

#[cfg(target_arch = "wasm32")]
fn schedule_auto_dismiss(set_state: WriteSignal<NotificationState>, id: u32) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        dismiss(set_state, id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_auto_dismiss(_set_state: WriteSignal<NotificationState>, _id: u32) {}
