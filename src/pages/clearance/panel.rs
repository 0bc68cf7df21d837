use crate::components::layout::Layout;
use crate::pages::clearance::{
    components::table::RequestTable,
    view_model::{ClearanceDecision, ClearanceViewModel},
};
use leptos::*;

#[component]
pub fn ClearancePage() -> impl IntoView {
    let vm = ClearanceViewModel::new();
    let requests = Signal::derive(move || vm.requests.get());

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg">
                <div class="px-6 py-4 border-b border-border">
                    <h2 class="text-lg font-semibold text-fg">"DOITP Clearance Requests"</h2>
                    <p class="text-sm text-fg-muted">
                        "Review and process clearance requests for the DOITP department."
                    </p>
                </div>
                <div class="px-6 py-4">
                    <RequestTable
                        requests=requests
                        on_approve=Callback::new(move |id| vm.decide(ClearanceDecision::Approved, id))
                        on_reject=Callback::new(move |id| vm.decide(ClearanceDecision::Rejected, id))
                    />
                </div>
            </div>
        </Layout>
    }
}
