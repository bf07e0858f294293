/// Home page
///
/// Site hero followed by the project grid, loaded through a server function.

use leptos::*;
use leptos_meta::Title;

use folio_common::{Portfolio, SiteSettings};

use crate::api::portfolio::get_portfolio;
use crate::components::projects::ProjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = create_resource(|| (), |_| async move { get_portfolio().await });

    view! {
        <main class="mx-auto min-h-screen max-w-3xl px-6 py-12 sm:py-24">
            <Suspense fallback=move || view! {
                <p class="text-center text-sm text-muted-foreground">"Loading projects..."</p>
            }>
                {move || portfolio.get().map(|result| match result {
                    Ok(portfolio) => view! { <PortfolioView portfolio=portfolio/> }.into_view(),
                    Err(err) => view! {
                        <p class="text-center text-sm text-destructive">
                            {format!("Failed to load projects: {}", err)}
                        </p>
                    }.into_view(),
                })}
            </Suspense>
        </main>
    }
}

#[component]
pub fn PortfolioView(portfolio: Portfolio) -> impl IntoView {
    let Portfolio { site, projects } = portfolio;
    let SiteSettings { name, title, description, projects_heading } = site;
    let description = (!description.is_empty()).then_some(description);

    view! {
        <Title text=title/>
        <div class="flex flex-col space-y-10">
            <section id="hero" class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tighter sm:text-5xl">
                    {format!("Hi, I'm {}", name)}
                </h1>
                {description.map(|text| view! {
                    <p class="max-w-[600px] md:text-xl text-muted-foreground">{text}</p>
                })}
            </section>
            <ProjectsSection projects=projects heading=projects_heading/>
        </div>
    }
}
