//! Site footer: company blurb, quick links, contact details and map.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use super::cloudinary_image::{CloudinaryImage, ObjectFit};
use super::map_embed::MapEmbed;
use super::reveal::Reveal;
use crate::config::SiteConfig;
use crate::content::contact_info;
use crate::state::locale::LocaleState;
use crate::state::route::Page;
use crate::util::clock::current_year;
use crate::util::cloudinary::Crop;
use crate::util::reveal::Animation;

#[component]
pub fn Footer() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let config = expect_context::<SiteConfig>();
    let info = contact_info(&config);
    let year = current_year();
    let t = move || locale.get().t();

    let links = Page::ALL
        .into_iter()
        .map(|page| {
            view! {
                <li>
                    <a class="site-footer__link" href=page.path()>
                        <span class="site-footer__bullet"></span>
                        {move || page.nav_label(&t().nav)}
                    </a>
                </li>
            }
        })
        .collect_view();

    let address = info.address;
    let phone_href = format!("tel:{}", info.phone.replace(' ', ""));
    let email_href = format!("mailto:{}", info.email);

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <Reveal animation=Animation::FadeUp class_name="site-footer__col">
                    <CloudinaryImage
                        src="Logo_CMP"
                        alt="CMP Logo"
                        height=80
                        crop=Crop::Scale
                        object_fit=ObjectFit::Contain
                        class_name="site-footer__logo"
                    />
                    <p class="site-footer__text">{move || t().footer.description}</p>
                </Reveal>

                <Reveal animation=Animation::FadeUp delay_ms=100 class_name="site-footer__col">
                    <h4 class="site-footer__heading">{move || t().footer.quick_links}</h4>
                    <ul class="site-footer__links">{links}</ul>
                </Reveal>

                <Reveal animation=Animation::FadeUp delay_ms=200 class_name="site-footer__col">
                    <h4 class="site-footer__heading">{move || t().footer.contact_info}</h4>
                    <ul class="site-footer__contact">
                        <li>{move || address.get(locale.get().locale)}</li>
                        <li><a class="site-footer__link" href=phone_href>{info.phone}</a></li>
                        <li><a class="site-footer__link" href=email_href>{info.email}</a></li>
                    </ul>
                </Reveal>

                <Reveal animation=Animation::FadeUp delay_ms=300 class_name="site-footer__col">
                    <h4 class="site-footer__heading">{move || t().footer.location}</h4>
                    <MapEmbed src=info.map_embed_url title="CMP location" class_name="site-footer__map"/>
                </Reveal>
            </div>

            <div class="site-footer__bottom">
                <p>{move || copyright(year, t().footer.rights)}</p>
                <div class="site-footer__legal">
                    <span>{move || t().footer.privacy}</span>
                    <span>{move || t().footer.terms}</span>
                </div>
            </div>
        </footer>
    }
}

fn copyright(year: i32, rights: &str) -> String {
    format!("© {year} PT Cipta Metalindo Persada. {rights}")
}
