/// Project card
///
/// Summarizes one portfolio entry: media, title, dates, description, tags, and
/// external links. Rendering is a pure function of the props; absent optional
/// data leaves its region out.

use leptos::*;

use folio_common::{Project, ProjectLink};

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, CardContent, CardFooter, CardHeader, CardTitle};
use crate::components::icons::LinkIconGlyph;
use crate::render::{self, ImageSource};
use crate::utils::class::cn;
use crate::utils::format::display_link;

pub const IMAGE_WIDTH: u32 = 500;
pub const IMAGE_HEIGHT: u32 = 300;

const CARD_CLASS: &str = "flex flex-col overflow-hidden border hover:shadow-lg transition-all duration-300 ease-out h-full";
const MEDIA_CLASS: &str = "h-full w-full object-cover object-top";

#[component]
pub fn ProjectCard(
    #[prop(into)]
    title: String,
    /// Target of the media link, `#` when absent
    #[prop(default = None)]
    href: Option<String>,
    /// Markdown text
    #[prop(into)]
    description: String,
    #[prop(into)]
    dates: String,
    /// Rendered in order and keyed by text, so entries should be unique
    tags: Vec<String>,
    /// Canonical URL, only visible in print
    #[prop(default = None)]
    link: Option<String>,
    #[prop(default = None)]
    image: Option<String>,
    #[prop(default = None)]
    video: Option<String>,
    #[prop(optional)]
    links: Vec<ProjectLink>,
    /// Appended to the card and media link classes
    #[prop(optional, into)]
    class: String,
    /// Replaces the default markdown renderer for `description`
    #[prop(optional, into)]
    render_markup: Option<Callback<String, View>>,
    /// Replaces the default `<img>` renderer
    #[prop(optional, into)]
    render_image: Option<Callback<ImageSource, View>>,
) -> impl IntoView {
    // Empty strings count as absent, like missing values.
    let href = href.filter(|s| !s.is_empty());
    let image = image.filter(|s| !s.is_empty());
    let video = video.filter(|s| !s.is_empty());

    let target = href.unwrap_or_else(|| "#".to_string());
    let card_class = cn(&[CARD_CLASS, &class]);
    let link_class = cn(&["block cursor-pointer", &class]);

    let description = match render_markup {
        Some(renderer) => renderer.call(description),
        None => render::markup(description),
    };

    // Video and image are independent; both render when both are set.
    let video = video.map(|src| view! {
        <video
            src=src
            autoplay=true
            loop=true
            muted=true
            playsinline=true
            class=cn(&["pointer-events-none", MEDIA_CLASS])
        ></video>
    });

    let image = image.map(|src| {
        let source = ImageSource {
            src,
            alt: title.clone(),
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            class: MEDIA_CLASS.to_string(),
        };
        match render_image {
            Some(renderer) => renderer.call(source),
            None => render::image(source),
        }
    });

    let print_link = link.as_deref().map(display_link);

    let tag_list = (!tags.is_empty()).then(move || view! {
        <div class="flex flex-wrap gap-1.5">
            <For
                each=move || tags.clone()
                key=|tag| tag.clone()
                children=|tag| view! {
                    <Badge class="px-2 py-0.5 text-xs" variant=BadgeVariant::Secondary>
                        {tag}
                    </Badge>
                }
            />
        </div>
    });

    let link_list = (!links.is_empty()).then(move || view! {
        <div class="flex flex-wrap gap-2">
            <For
                each=move || links.clone().into_iter().enumerate()
                key=|(idx, _)| *idx
                children=|(_, ProjectLink { icon, kind, href })| view! {
                    <a href=href target="_blank" rel="noopener noreferrer">
                        <Badge class="flex items-center gap-1.5 px-2 py-1 text-xs">
                            <LinkIconGlyph icon=icon/>
                            {kind}
                        </Badge>
                    </a>
                }
            />
        </div>
    });

    view! {
        <Card class=card_class>
            <a href=target class=link_class>
                <div class="relative h-48 w-full overflow-hidden">
                    {video}
                    {image}
                </div>
            </a>
            <CardHeader class="px-4 py-4">
                <div class="space-y-2">
                    <CardTitle class="text-base font-semibold">{title}</CardTitle>
                    <time class="block text-sm text-muted-foreground">{dates}</time>
                    <div class="hidden font-sans text-xs underline print:visible">
                        {print_link}
                    </div>
                    <div class="prose max-w-full text-pretty font-sans text-sm text-muted-foreground dark:prose-invert">
                        {description}
                    </div>
                </div>
            </CardHeader>
            <CardContent class="px-4 py-2">
                {tag_list}
            </CardContent>
            <CardFooter class="px-4 py-3">
                {link_list}
            </CardFooter>
        </Card>
    }
}

/// Card for a configured project
#[component]
pub fn ConfiguredProjectCard(
    project: Project,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let Project { title, href, description, dates, tags, link, image, video, links } = project;

    view! {
        <ProjectCard
            title=title
            href=href
            description=description
            dates=dates
            tags=tags
            link=link
            image=image
            video=video
            links=links
            class=class
        />
    }
}
