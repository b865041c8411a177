//! Landing page: hero, client logo strip and featured products.

use leptos::prelude::*;

use crate::components::hero_section::{HeroBackground, HeroSection, HeroSize};
use crate::components::logo_marquee::LogoMarquee;
use crate::components::product_card::ProductCard;
use crate::components::reveal::{Reveal, StaggerGroup, StaggerItem};
use crate::content::{client_logos, featured_products};
use crate::state::locale::LocaleState;
use crate::state::route::Page;
use crate::util::reveal::Animation;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?w=1920&q=80";

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move || locale.get().t();

    let featured = featured_products()
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            view! {
                <StaggerItem index=index>
                    <ProductCard product=product/>
                </StaggerItem>
            }
        })
        .collect_view();

    view! {
        {move || {
            let hero = &t().hero;
            view! {
                <HeroSection
                    title=hero.title
                    subtitle=hero.subtitle
                    cta=hero.cta
                    cta_target=Page::About
                    background=HeroBackground::Image(HERO_IMAGE)
                    size=HeroSize::Full
                />
            }
        }}

        <section class="section section--muted">
            <div class="container">
                <Reveal animation=Animation::FadeUp>
                    <p class="section__eyebrow section__eyebrow--center">{move || t().home.trusted_by}</p>
                </Reveal>
            </div>
            <LogoMarquee logos=client_logos()/>
        </section>

        <section class="section">
            <div class="container">
                <Reveal animation=Animation::FadeUp class_name="section__header">
                    <h2 class="section__title">{move || t().home.featured_products}</h2>
                    <div class="section__rule"></div>
                    <p class="section__lead">{move || t().home.featured_desc}</p>
                </Reveal>

                <StaggerGroup animation=Animation::FadeUp stagger_ms=80 threshold=0.05 class_name="product-grid">
                    {featured}
                </StaggerGroup>

                <Reveal animation=Animation::FadeUp delay_ms=400 class_name="section__actions">
                    <a class="button button--primary" href=Page::Products.path()>
                        {move || t().home.view_all}
                        <span class="button__arrow">"→"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
