use leptos::*;

/// Terminal view for denied access. No inputs, no actions; the only way out
/// is browser navigation.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface">
            <p class="text-xl font-semibold text-status-error-text">
                "🚫 You are not authorized to view this page."
            </p>
        </div>
    }
}
