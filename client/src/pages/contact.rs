//! Contact page: form beside the company's contact details and map.

use leptos::prelude::*;

use crate::components::cloudinary_image::{CloudinaryImage, ObjectFit};
use crate::components::contact_form::ContactForm;
use crate::components::map_embed::MapEmbed;
use crate::components::reveal::Reveal;
use crate::config::SiteConfig;
use crate::content::contact_info;
use crate::state::locale::LocaleState;
use crate::util::reveal::Animation;

const LOGO_URL: &str = "https://res.cloudinary.com/dtny14e7t/image/upload/Logo_CMP.png";

#[component]
pub fn ContactPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let config = expect_context::<SiteConfig>();
    let info = contact_info(&config);
    let t = move || &locale.get().t().contact;
    let address = info.address;
    let email_href = format!("mailto:{}", info.email);
    let highlight_href = email_href.clone();
    let highlight_email = info.email.clone();

    view! {
        <div class="contact-page">
            <section class="contact-page__intro">
                <div class="container contact-page__center">
                    <Reveal animation=Animation::ScaleUp>
                        <div class="contact-page__logo">
                            <CloudinaryImage
                                src=LOGO_URL
                                alt="CMP"
                                loading="eager"
                                object_fit=ObjectFit::Contain
                            />
                        </div>
                    </Reveal>
                    <Reveal animation=Animation::FadeUp delay_ms=100>
                        <h1 class="contact-page__title">{move || t().title}</h1>
                        <p class="contact-page__subtitle">{move || t().subtitle}</p>
                    </Reveal>
                    <Reveal animation=Animation::FadeUp delay_ms=200>
                        <a class="contact-page__email" href=highlight_href>
                            <span class="contact-page__email-icon">"✉"</span>
                            <span>{highlight_email}</span>
                        </a>
                    </Reveal>
                </div>
            </section>

            <section class="contact-page__body">
                <div class="container">
                    <div class="contact-panel">
                        <div class="contact-panel__form">
                            <Reveal animation=Animation::FadeRight delay_ms=100>
                                <h2 class="contact-panel__heading">{move || t().send_us_message}</h2>
                                <p class="contact-panel__hint">{move || t().subtitle}</p>
                                <ContactForm/>
                            </Reveal>
                        </div>

                        <div class="contact-panel__aside">
                            <Reveal animation=Animation::FadeLeft delay_ms=200 class_name="contact-panel__info">
                                <h2 class="contact-panel__heading">{move || t().contact_information}</h2>
                                <p class="contact-panel__hint">{move || t().reach_out}</p>
                                <dl class="contact-details">
                                    <div class="contact-details__row">
                                        <dt>{move || t().phone}</dt>
                                        <dd>{info.phone}</dd>
                                    </div>
                                    <div class="contact-details__row">
                                        <dt>{move || t().email}</dt>
                                        <dd><a href=email_href>{info.email}</a></dd>
                                    </div>
                                    <div class="contact-details__row">
                                        <dt>{move || t().address}</dt>
                                        <dd>{move || address.get(locale.get().locale)}</dd>
                                    </div>
                                    <div class="contact-details__row">
                                        <dt>{move || t().office_hours}</dt>
                                        <dd>{move || t().office_hours_value}</dd>
                                    </div>
                                </dl>
                            </Reveal>
                            <Reveal animation=Animation::FadeUp delay_ms=300 class_name="contact-panel__map">
                                <MapEmbed src=info.map_embed_url title="CMP location"/>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
