/// 404 Not Found page
///
/// Error page for routes that don't exist.

use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold">"404"</h1>
                <p class="mt-4 text-xl text-muted-foreground">"Page not found"</p>
                <div class="mt-8">
                    <A
                        href="/"
                        class="inline-flex items-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                    >
                        "Back to projects"
                    </A>
                </div>
            </div>
        </div>
    }
}
