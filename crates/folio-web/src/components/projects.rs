/// Projects section
///
/// Heading block plus a responsive grid with one card per project, in
/// configuration order.

use leptos::*;

use folio_common::Project;

use crate::components::project_card::ConfiguredProjectCard;

#[component]
pub fn ProjectsSection(
    projects: Vec<Project>,
    #[prop(into)]
    heading: String,
    #[prop(optional, into)]
    subheading: Option<String>,
) -> impl IntoView {
    let is_empty = projects.is_empty();

    view! {
        <section id="projects" class="space-y-12 w-full py-12">
            <div class="flex flex-col items-center justify-center space-y-4 text-center">
                <div class="inline-block rounded-lg bg-foreground text-background px-3 py-1 text-sm">
                    "My Projects"
                </div>
                <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl">{heading}</h2>
                {subheading.map(|text| view! {
                    <p class="text-muted-foreground md:text-xl/relaxed lg:text-base/relaxed xl:text-xl/relaxed">
                        {text}
                    </p>
                })}
            </div>

            <Show
                when=move || !is_empty
                fallback=|| view! {
                    <p class="text-center text-sm text-muted-foreground">"No projects yet."</p>
                }
            >
                <div class="grid grid-cols-1 gap-3 sm:grid-cols-2 max-w-[800px] mx-auto">
                    <For
                        each={
                            let projects = projects.clone();
                            move || projects.clone().into_iter().enumerate()
                        }
                        key=|(idx, _)| *idx
                        children=|(_, project)| view! { <ConfiguredProjectCard project=project/> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::Portfolio;
    use leptos::ssr::render_to_string;

    #[test]
    fn test_cards_follow_configuration_order() {
        let projects = Portfolio::example().projects;
        let html = render_to_string(move || view! {
            <ProjectsSection projects=projects heading="Check out my latest work"/>
        })
        .to_string();

        assert!(html.contains("Check out my latest work"));
        let first = html.find("Chat Collect").unwrap();
        let second = html.find("Magic UI").unwrap();
        assert!(first < second);
        assert!(!html.contains("No projects yet."));
    }

    #[test]
    fn test_empty_projects_show_notice() {
        let html = render_to_string(|| view! {
            <ProjectsSection
                projects=Vec::new()
                heading="Projects"
                subheading="Things I've built"
            />
        })
        .to_string();

        assert!(html.contains("No projects yet."));
        assert!(html.contains("Things I&#x27;ve built") || html.contains("Things I've built"));
        assert!(!html.contains("grid grid-cols-1"));
    }
}
