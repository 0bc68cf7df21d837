use crate::pages::clearance::roster::ClearanceRequest;
use leptos::*;

#[component]
pub fn RequestTable(
    requests: Signal<Vec<ClearanceRequest>>,
    on_approve: Callback<u32>,
    on_reject: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Student ID"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Name"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Department"</th>
                        <th class="px-4 py-2 text-center text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || requests.get()
                        key=|request| request.id
                        children=move |request: ClearanceRequest| {
                            let id = request.id;
                            view! {
                                <tr class="border-b border-border">
                                    <td class="px-4 py-2 text-fg">{request.id}</td>
                                    <td class="px-4 py-2 text-fg">{request.name.clone()}</td>
                                    <td class="px-4 py-2 text-fg">{request.department.clone()}</td>
                                    <td class="px-4 py-2 text-center space-x-2">
                                        <button
                                            type="button"
                                            class="px-3 py-1 rounded text-xs font-semibold bg-status-success-bg text-status-success-text hover:opacity-90"
                                            on:click=move |_| on_approve.call(id)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            type="button"
                                            class="px-3 py-1 rounded text-xs font-semibold bg-status-error-bg text-status-error-text hover:opacity-90"
                                            on:click=move |_| on_reject.call(id)
                                        >
                                            "Reject"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::clearance::roster::seed;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_a_row_with_actions_per_request() {
        let html = render_to_string(move || {
            let (requests, _) = create_signal(seed());
            view! {
                <RequestTable
                    requests=requests.into()
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ahmet Yılmaz"));
        assert!(html.contains("Computer Engineering"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
    }
}
