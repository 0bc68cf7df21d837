use crate::config;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        {config::portal_name()}
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Administrative desk for student affairs and departmental clearance."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center sm:gap-3 lg:mt-8">
                        <a href="/ceremony" class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover">
                            "Graduation Ceremony"
                        </a>
                        <a href="/clearance" class="mt-3 sm:mt-0 w-full flex items-center justify-center px-8 py-3 border border-border text-base font-medium rounded-md text-fg bg-surface-elevated hover:bg-surface-muted">
                            "Clearance Requests"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
