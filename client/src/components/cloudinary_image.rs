//! CDN-optimized image.
//!
//! Public ids go through the Cloudinary URL builder with auto format and
//! quality; absolute URLs are used as-is. Lazy public-id images show a
//! tiny blurred copy until the full image arrives, then fade it in; a failed
//! primary source swaps to `fallback`.
//!
//! An image can finish before hydration attaches `on:load`, so the hydrated
//! component also checks the element's `complete` flag once it mounts.

#[cfg(test)]
#[path = "cloudinary_image_test.rs"]
mod cloudinary_image_test;

use leptos::html::Img;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::util::cloudinary::{
    Crop, Gravity, ImageOptions, blur_placeholder, is_absolute_url, optimized_url, responsive_srcset,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
}

impl ObjectFit {
    fn class(self) -> &'static str {
        match self {
            Self::Cover => "img--cover",
            Self::Contain => "img--contain",
            Self::Fill => "img--fill",
            Self::None => "",
        }
    }
}

fn image_class(loaded: bool, placeholder: bool, fit: ObjectFit, extra: &str) -> String {
    let parts = [
        "cdn-img",
        if loaded { "cdn-img--loaded" } else { "" },
        if placeholder && !loaded { "cdn-img--placeholder" } else { "" },
        fit.class(),
        extra.trim(),
    ];
    parts.iter().filter(|p| !p.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

/// Blurred backdrop shown until the full image has loaded.
fn placeholder_style(placeholder: Option<&str>, loaded: bool) -> Option<String> {
    placeholder
        .filter(|_| !loaded)
        .map(|url| format!("background-image: url('{url}')"))
}

/// How an image the browser already finished turned out.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Settled {
    Loaded,
    Failed,
}

/// `complete` with zero natural width means the request failed.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn settled(complete: bool, natural_width: u32) -> Option<Settled> {
    match (complete, natural_width) {
        (false, _) => None,
        (true, 0) => Some(Settled::Failed),
        (true, _) => Some(Settled::Loaded),
    }
}

#[component]
pub fn CloudinaryImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(default = Crop::Fill)] crop: Crop,
    #[prop(default = Gravity::Auto)] gravity: Gravity,
    #[prop(optional)] responsive: bool,
    #[prop(optional, into)] sizes: Option<String>,
    #[prop(default = "lazy")] loading: &'static str,
    #[prop(optional)] object_fit: ObjectFit,
    #[prop(optional, into)] fallback: Option<String>,
    #[prop(optional, into)] class_name: String,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let opts = ImageOptions {
        width,
        height,
        crop: Some(crop),
        gravity: Some(gravity),
        ..ImageOptions::default()
    };
    let primary = optimized_url(&config.cloudinary_cloud_name, &src, &opts);
    let srcset = (responsive && !is_absolute_url(&src)).then(|| {
        let set_opts = ImageOptions {
            crop: Some(crop),
            gravity: Some(gravity),
            ..ImageOptions::default()
        };
        responsive_srcset(&config.cloudinary_cloud_name, &src, &set_opts)
    });

    let placeholder = (loading == "lazy" && !is_absolute_url(&src))
        .then(|| blur_placeholder(&config.cloudinary_cloud_name, &src));
    let has_placeholder = placeholder.is_some();

    let img_ref = NodeRef::<Img>::new();
    let failed = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(img) = img_ref.get() else {
                return;
            };
            match settled(img.complete(), img.natural_width()) {
                Some(Settled::Loaded) => loaded.set(true),
                Some(Settled::Failed) => failed.set(true),
                None => {}
            }
        });
    }

    let current_src = move || match (failed.get(), fallback.as_ref()) {
        (true, Some(fb)) => fb.clone(),
        _ => primary.clone(),
    };

    view! {
        <img
            node_ref=img_ref
            src=current_src
            srcset=srcset
            sizes=sizes
            alt=alt
            loading=loading
            width=width.map(|w| w.to_string())
            height=height.map(|h| h.to_string())
            class=move || image_class(loaded.get(), has_placeholder, object_fit, &class_name)
            style=move || placeholder_style(placeholder.as_deref(), loaded.get())
            on:load=move |_| loaded.set(true)
            on:error=move |_| failed.set(true)
        />
    }
}
