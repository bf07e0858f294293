/// Main application component and routing
///
/// Root App component with document metadata and the site routes.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{home::HomePage, not_found::NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio-web.css"/>
        <Title text="Projects"/>
        <Meta name="description" content="Portfolio of projects"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
