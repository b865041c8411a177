//! Company profile: overview, headline numbers, vision and mission,
//! milestone timeline and a contact call to action.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::hero_section::{HeroBackground, HeroOverlay, HeroSection, HeroSize};
use crate::components::reveal::{Reveal, use_reveal};
use crate::components::stat_card::StatCard;
use crate::components::timeline::Timeline;
use crate::content::{stats, timeline};
use crate::state::locale::LocaleState;
use crate::state::route::Page;
use crate::util::reveal::{Animation, RevealOptions, reveal_class};

const HERO_VIDEO: &str = "https://res.cloudinary.com/dalb8mpfd/video/upload/v1770360399/samples/dance-2.mp4";
const FACTORY_IMAGE: &str = "https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=600&h=500&fit=crop";

#[component]
pub fn AboutPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move || &locale.get().t().about;

    let image_ref = NodeRef::<Div>::new();
    let image_visible = use_reveal(image_ref, RevealOptions::default());

    let stat_cards = stats()
        .iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatCard stat=stat index=index/> })
        .collect_view();

    let missions = move || {
        t().missions
            .into_iter()
            .map(|mission| {
                view! {
                    <li class="mission-list__item">
                        <span class="mission-list__check">"✓"</span>
                        <span>{mission}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        {move || {
            let about = t();
            view! {
                <HeroSection
                    title=about.hero_title
                    subtitle=about.hero_subtitle
                    background=HeroBackground::Video(HERO_VIDEO)
                    overlay=HeroOverlay::Blue
                    size=HeroSize::Medium
                />
            }
        }}

        // Company description
        <section class="section about-company">
            <div class="container about-company__grid">
                <Reveal animation=Animation::FadeRight class_name="about-company__text">
                    <span class="pill">{move || t().who_we_are}</span>
                    <h2 class="section__title">{move || t().company_title}</h2>
                    <p class="about-company__lead">{move || t().company_desc}</p>
                    <p class="about-company__body">{move || t().company_desc2}</p>
                    <div class="about-company__highlights">
                        <div class="highlight">
                            <span class="highlight__icon highlight__icon--green">"✓"</span>
                            <span class="highlight__label">{move || t().iso_certified}</span>
                        </div>
                        <div class="highlight">
                            <span class="highlight__icon highlight__icon--blue">"◎"</span>
                            <span class="highlight__label">{move || t().global_reach}</span>
                        </div>
                    </div>
                </Reveal>

                <div
                    node_ref=image_ref
                    class=move || reveal_class(Animation::ZoomRotate, image_visible.get(), "about-company__media")
                >
                    <img class="about-company__image" src=FACTORY_IMAGE alt="Factory" loading="lazy"/>
                    <div class="about-company__badge about-company__badge--years">
                        <div class="about-company__badge-value">"11+"</div>
                        <div class="about-company__badge-label">{move || t().stats_years}</div>
                    </div>
                    <div class="about-company__badge about-company__badge--iso">
                        <span class="highlight__icon highlight__icon--green">"✓"</span>
                        <div>
                            <div class="about-company__badge-title">"ISO 9001"</div>
                            <div class="about-company__badge-label">{move || t().certified}</div>
                        </div>
                    </div>
                    <div class="about-company__backdrop"></div>
                </div>
            </div>
        </section>

        // Stats
        <section class="section section--muted">
            <div class="container">
                <Reveal animation=Animation::FadeUp class_name="section__header">
                    <span class="pill">{move || t().by_the_numbers}</span>
                    <h2 class="section__title">{move || t().impact_title}</h2>
                </Reveal>
                <div class="stat-grid">{stat_cards}</div>
            </div>
        </section>

        // Vision and mission
        <section class="section">
            <div class="container">
                <Reveal animation=Animation::FadeUp class_name="section__header">
                    <span class="pill">{move || t().our_purpose}</span>
                    <h2 class="section__title">{move || t().vision_mission}</h2>
                </Reveal>
                <div class="purpose-grid">
                    <Reveal animation=Animation::FadeRight delay_ms=100>
                        <div class="purpose-card purpose-card--vision">
                            <h3 class="purpose-card__title">{move || t().vision_title}</h3>
                            <p class="purpose-card__body">{move || t().vision_desc}</p>
                        </div>
                    </Reveal>
                    <Reveal animation=Animation::FadeLeft delay_ms=200>
                        <div class="purpose-card">
                            <h3 class="purpose-card__title">{move || t().mission_title}</h3>
                            <ul class="mission-list">{missions}</ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>

        // Timeline
        <section class="section section--muted">
            <div class="container">
                <Reveal animation=Animation::FadeUp class_name="section__header">
                    <span class="pill">{move || t().our_journey}</span>
                    <h2 class="section__title">{move || t().timeline_title}</h2>
                    <p class="section__lead">{move || t().timeline_desc}</p>
                </Reveal>
                <div class="timeline-wrap">
                    <Timeline events=timeline()/>
                </div>
            </div>
        </section>

        // Call to action
        <section class="cta-band">
            <Reveal animation=Animation::ScaleUp class_name="container cta-band__inner">
                <h2 class="cta-band__title">{move || t().cta_title}</h2>
                <p class="cta-band__lead">{move || t().cta_desc}</p>
                <a class="button button--light" href=Page::Contact.path()>
                    {move || t().cta_button}
                    <span class="button__arrow">"→"</span>
                </a>
            </Reveal>
        </section>
    }
}
