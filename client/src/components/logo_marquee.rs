//! Endless strip of client logos.
//!
//! The track holds `MARQUEE_COPIES` copies of the logo list and is shifted
//! left by a `Marquee` offset on every animation frame. During SSR the strip renders
//! at rest.

#[cfg(test)]
#[path = "logo_marquee_test.rs"]
mod logo_marquee_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::content::ClientLogo;
use crate::util::marquee::MARQUEE_COPIES;

#[component]
pub fn LogoMarquee(logos: &'static [ClientLogo]) -> impl IntoView {
    let track = NodeRef::<Div>::new();
    let offset = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::animation_frame::request_frames;
        use crate::util::marquee::Marquee;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_frames = alive.clone();
        let mut marquee = Marquee::default();
        request_frames(move |_| {
            if !alive_frames.load(Ordering::Relaxed) {
                return false;
            }
            let Some(el) = track.get_untracked() else {
                return true;
            };
            let next = marquee.tick(f64::from(el.scroll_width()));
            offset.try_set(next).is_none()
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let items = (0..MARQUEE_COPIES)
        .flat_map(|copy| logos.iter().map(move |logo| (copy, logo)))
        .map(|(copy, logo)| {
            view! {
                <div class="logo-marquee__item" aria-hidden=(copy > 0).then_some("true")>
                    <img class="logo-marquee__logo" src=logo.image alt=logo.name loading="lazy"/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="logo-marquee">
            <div class="logo-marquee__fade logo-marquee__fade--left"></div>
            <div class="logo-marquee__fade logo-marquee__fade--right"></div>
            <div node_ref=track class="logo-marquee__track" style=move || track_style(offset.get())>
                {items}
            </div>
        </div>
    }
}

fn track_style(offset: f64) -> String {
    format!("transform: translateX(-{offset:.1}px)")
}
