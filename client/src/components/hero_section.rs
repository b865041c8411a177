//! Page hero banner.

#[cfg(test)]
#[path = "hero_section_test.rs"]
mod hero_section_test;

use leptos::prelude::*;

use crate::state::route::Page;

/// What fills the hero behind the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroBackground {
    Image(&'static str),
    Video(&'static str),
    #[default]
    Gradient,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroSize {
    #[default]
    Full,
    Medium,
    Small,
}

impl HeroSize {
    fn class(self) -> &'static str {
        match self {
            Self::Full => "hero--full",
            Self::Medium => "hero--medium",
            Self::Small => "hero--small",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroOverlay {
    #[default]
    Blue,
    Dark,
}

impl HeroOverlay {
    fn class(self) -> &'static str {
        match self {
            Self::Blue => "hero__overlay hero__overlay--blue",
            Self::Dark => "hero__overlay hero__overlay--dark",
        }
    }
}

/// Floating particle count; only full-size heroes get them.
fn particle_count(size: HeroSize) -> usize {
    if size == HeroSize::Full { 6 } else { 0 }
}

#[allow(clippy::cast_precision_loss)]
fn particle_style(index: usize) -> String {
    let delay_s = index as f64 * 0.8;
    format!(
        "left: {}%; animation-duration: {}s; animation-delay: {delay_s:.1}s",
        15 + index * 15,
        6 + index * 2,
    )
}

#[component]
pub fn HeroSection(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] cta: Option<&'static str>,
    #[prop(default = Page::About)] cta_target: Page,
    #[prop(optional)] background: HeroBackground,
    #[prop(optional)] size: HeroSize,
    #[prop(optional)] overlay: HeroOverlay,
) -> impl IntoView {
    let backdrop = match background {
        HeroBackground::Video(src) => view! {
            <video class="hero__media" autoplay=true muted=true loop=true playsinline=true preload="metadata">
                <source src=src type="video/mp4"/>
            </video>
        }
        .into_any(),
        HeroBackground::Image(src) => view! {
            <img class="hero__media hero__media--zoom" src=src alt="" loading="eager"/>
        }
        .into_any(),
        HeroBackground::Gradient => view! { <div class="hero__gradient"></div> }.into_any(),
    };

    let particles = (0..particle_count(size))
        .map(|i| view! { <div class="hero__particle" style=particle_style(i)></div> })
        .collect_view();

    view! {
        <section class=format!("hero {}", size.class())>
            {backdrop}
            <div class=overlay.class()></div>
            <div class="hero__pattern"></div>
            <div class="hero__particles">{particles}</div>

            <div class="hero__content">
                <h1 class="hero__title">{title}</h1>
                {subtitle.map(|text| view! { <p class="hero__subtitle">{text}</p> })}
                {cta.map(|label| view! {
                    <a class="hero__cta" href=cta_target.path()>
                        {label}
                        <span class="hero__cta-arrow">"→"</span>
                    </a>
                })}
            </div>

            <div class="hero__fade"></div>
            <Show when=move || size == HeroSize::Full>
                <div class="hero__scroll-indicator">
                    <div class="hero__scroll-dot"></div>
                </div>
            </Show>
        </section>
    }
}
