use leptos::prelude::*;

/// Lazy-loaded map iframe.
#[component]
pub fn MapEmbed(
    #[prop(into)] src: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] class_name: String,
) -> impl IntoView {
    // `loading` has no typed setter on <iframe> in tachys; set it as a plain attribute.
    let frame = view! {
        <iframe
            src=src
            title=title
            class="map-embed__frame"
            referrerpolicy="no-referrer-when-downgrade"
            allowfullscreen=true
        ></iframe>
    }
    .attr("loading", "lazy");
    view! {
        <div class=format!("map-embed {class_name}")>
            {frame}
        </div>
    }
}
