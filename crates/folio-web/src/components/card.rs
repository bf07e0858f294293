/// Card primitives
///
/// Bordered container with header, title, content and footer regions. Every
/// primitive takes a `class` that is appended to its defaults.

use leptos::*;

use crate::utils::class::cn;

#[component]
pub fn Card(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["rounded-lg border bg-card text-card-foreground shadow-sm", &class])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["flex flex-col space-y-1.5 p-6", &class])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=cn(&["text-2xl font-semibold leading-none tracking-tight", &class])>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["p-6 pt-0", &class])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardFooter(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["flex items-center p-6 pt-0", &class])>
            {children()}
        </div>
    }
}
