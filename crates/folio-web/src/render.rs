/// Default renderers injected into project cards
///
/// Cards delegate description markup and images to these unless the caller
/// passes its own callbacks.

use leptos::*;

use crate::utils::markdown;

/// Everything needed to render one project image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub class: String,
}

/// Render markdown text as HTML inside a wrapper element
pub fn markup(text: String) -> View {
    let html = markdown::to_html(&text);
    view! { <div inner_html=html></div> }.into_view()
}

/// Plain lazy-loaded `<img>` at its intrinsic size
pub fn image(source: ImageSource) -> View {
    view! {
        <img
            src=source.src
            alt=source.alt
            width=source.width.to_string()
            height=source.height.to_string()
            class=source.class
            loading="lazy"
            decoding="async"
        />
    }
    .into_view()
}
