use crate::components::{confirm_dialog::ConfirmDialog, layout::Layout};
use crate::pages::ceremony::{components::table::StudentTable, view_model::CeremonyViewModel};
use leptos::*;

#[component]
pub fn CeremonyPage() -> impl IntoView {
    let vm = CeremonyViewModel::new();
    let students = Signal::derive(move || vm.students.get());
    let prompt_open = Signal::derive(move || vm.prompt.get().is_open());

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg">
                <div class="px-6 py-4 border-b border-border">
                    <h2 class="text-lg font-semibold text-fg">"Graduation Ceremony Planning"</h2>
                </div>
                <div class="px-6 py-4 space-y-6">
                    <StudentTable students=students />
                    <div class="flex gap-3">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| vm.request_send()
                        >
                            "Generate Invitations"
                        </button>
                    </div>
                </div>
            </div>

            <ConfirmDialog
                is_open=prompt_open
                title="Send Invitations?"
                message="Are you sure you want to send graduation invitations to all eligible students?"
                on_confirm=Callback::new(move |_| vm.confirm_send())
                on_cancel=Callback::new(move |_| vm.cancel_send())
            />
        </Layout>
    }
}
