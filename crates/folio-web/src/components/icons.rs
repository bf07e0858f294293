/// Link icons
///
/// Inline SVG glyphs for the link badges in a project card footer.

use leptos::*;

use folio_common::LinkIcon;

#[component]
pub fn LinkIconGlyph(
    icon: LinkIcon,
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "size-3".to_string());

    match icon {
        LinkIcon::Globe => view! {
            <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/>
                <path d="M2 12h20"/>
            </svg>
        }.into_view(),
        LinkIcon::Github => view! {
            <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                <path d="M12 .3a12 12 0 0 0-3.8 23.4c.6.1.8-.3.8-.6v-2.2c-3.3.7-4-1.6-4-1.6-.6-1.4-1.4-1.8-1.4-1.8-1-.7.1-.7.1-.7 1.2.1 1.8 1.2 1.8 1.2 1 1.8 2.8 1.3 3.5 1 .1-.8.4-1.3.7-1.6-2.7-.3-5.5-1.3-5.5-5.9 0-1.3.5-2.4 1.2-3.2-.1-.3-.5-1.5.1-3.2 0 0 1-.3 3.3 1.2a11.5 11.5 0 0 1 6 0C17.3 4.6 18.3 5 18.3 5c.7 1.7.3 2.9.1 3.2.8.8 1.2 1.9 1.2 3.2 0 4.6-2.8 5.6-5.5 5.9.4.4.8 1.1.8 2.2v3.3c0 .3.2.7.8.6A12 12 0 0 0 12 .3"/>
            </svg>
        }.into_view(),
        LinkIcon::Youtube => view! {
            <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                <path d="M23.5 6.2a3 3 0 0 0-2.1-2.1C19.5 3.6 12 3.6 12 3.6s-7.5 0-9.4.5A3 3 0 0 0 .5 6.2 31.4 31.4 0 0 0 0 12a31.4 31.4 0 0 0 .5 5.8 3 3 0 0 0 2.1 2.1c1.9.5 9.4.5 9.4.5s7.5 0 9.4-.5a3 3 0 0 0 2.1-2.1A31.4 31.4 0 0 0 24 12a31.4 31.4 0 0 0-.5-5.8zM9.6 15.6V8.4l6.3 3.6z"/>
            </svg>
        }.into_view(),
        LinkIcon::Document => view! {
            <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>
                <path d="M14 2v4a2 2 0 0 0 2 2h4"/>
                <path d="M10 13H8"/>
                <path d="M16 17H8"/>
            </svg>
        }.into_view(),
        LinkIcon::Play => view! {
            <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="6 3 20 12 6 21 6 3"/>
            </svg>
        }.into_view(),
        LinkIcon::None => ().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::ssr::render_to_string;

    #[test]
    fn test_glyph_renders_svg() {
        let html = render_to_string(|| view! { <LinkIconGlyph icon=LinkIcon::Github/> }).to_string();
        assert!(html.contains("<svg"));
        assert!(html.contains("size-3"));
    }

    #[test]
    fn test_none_renders_nothing() {
        let html = render_to_string(|| view! { <LinkIconGlyph icon=LinkIcon::None/> }).to_string();
        assert!(!html.contains("<svg"));
    }
}
