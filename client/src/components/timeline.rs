//! Company milestone timeline.
//!
//! Items alternate sides on wide screens. The centre line fills as the
//! section scrolls past (`util::scroll::timeline_progress`); cards, dots and
//! the end dot fade in on staggered delays once the section is first seen.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::content::TimelineEvent;
use crate::state::locale::LocaleState;
use crate::util::reveal::{RevealOptions, VISIBLE_CLASS};

const ICONS: [&str; 6] = [
    // building
    "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
    // document
    "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
    // shield
    "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    // cog
    "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.066 2.573c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.573 1.066c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.066-2.573c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z",
    // globe
    "M3.055 11H5a2 2 0 012 2v1a2 2 0 002 2 2 2 0 012 2v2.945M8 3.935V5.5A2.5 2.5 0 0010.5 8h.5a2 2 0 012 2 2 2 0 104 0 2 2 0 012-2h1.064M15 20.488V18a2 2 0 012-2h3.064M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    // chip
    "M9 3v2m6-2v2M9 19v2m6-2v2M3 9h2m14 0h2M3 15h2m14 0h2M7 7h10v10H7V7z",
];

fn icon_path(index: usize) -> &'static str {
    ICONS.get(index).copied().unwrap_or(ICONS[0])
}

fn dot_delay_ms(index: usize) -> usize {
    index * 200 + 100
}

fn card_delay_ms(index: usize) -> usize {
    index * 200 + 300
}

fn end_dot_delay_ms(count: usize) -> usize {
    count * 200 + 400
}

/// Even items put their card on the left.
fn is_left(index: usize) -> bool {
    index % 2 == 0
}

fn with_visible(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} {VISIBLE_CLASS}")
    } else {
        base.to_owned()
    }
}

fn fill_style(progress: f64) -> String {
    format!("height: {:.2}%", progress * 100.0)
}

#[component]
fn Icon(index: usize) -> impl IntoView {
    view! {
        <svg class="timeline__icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d=icon_path(index)></path>
        </svg>
    }
}

#[component]
fn TimelineItem(event: &'static TimelineEvent, index: usize, visible: RwSignal<bool>) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let title = move || event.title.get(locale.get().locale);
    let description = move || event.description.get(locale.get().locale);

    let side = if is_left(index) { "timeline__item--left" } else { "timeline__item--right" };
    let card_base = if is_left(index) { "timeline-card" } else { "timeline-card timeline-card--right" };
    let card_style = format!("transition-delay: {}ms", card_delay_ms(index));
    let dot_style = format!("transition-delay: {}ms", dot_delay_ms(index));

    view! {
        <div class=format!("timeline__item {side}")>
            <div class="timeline__side timeline__side--card">
                <div class=move || with_visible(card_base, visible.get()) style=card_style.clone()>
                    <div class="timeline-card__heading">
                        <div class="timeline-card__badge"><Icon index=index/></div>
                        <h3 class="timeline-card__title">{title}</h3>
                    </div>
                    <p class="timeline-card__description">{description}</p>
                </div>
            </div>

            <div class="timeline__marker">
                <div class=move || with_visible("timeline-dot", visible.get()) style=dot_style>
                    <div class="timeline-dot__glow"></div>
                    <div class="timeline-dot__year">{event.year}</div>
                </div>
            </div>

            // Narrow screens: single column card beside the line.
            <div class="timeline__mobile">
                <div class=move || with_visible("timeline-card", visible.get()) style=card_style>
                    <div class="timeline-card__heading">
                        <div class="timeline-card__badge timeline-card__badge--small"><Icon index=index/></div>
                        <div>
                            <span class="timeline-card__year">{event.year}</span>
                            <h3 class="timeline-card__title">{title}</h3>
                        </div>
                    </div>
                    <p class="timeline-card__description">{description}</p>
                </div>
            </div>

            <div class="timeline__side timeline__side--empty"></div>
        </div>
    }
}

#[component]
pub fn Timeline(events: &'static [TimelineEvent]) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let visible = super::reveal::use_reveal(
        container,
        RevealOptions {
            threshold: 0.05,
            root_margin: "0px".to_owned(),
            trigger_once: true,
        },
    );
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{timeline_progress, viewport_height};

        let update = move || {
            if !visible.get_untracked() {
                return;
            }
            if let Some(el) = container.get_untracked() {
                let rect = el.get_bounding_client_rect();
                progress.set(timeline_progress(rect.top(), rect.height(), viewport_height()));
            }
        };
        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || handle.remove());
        Effect::new(move || {
            if visible.get() {
                update();
            }
        });
    }

    let items = events
        .iter()
        .enumerate()
        .map(|(index, event)| view! { <TimelineItem event=event index=index visible=visible/> })
        .collect_view();
    let end_style = format!("transition-delay: {}ms", end_dot_delay_ms(events.len()));

    view! {
        <div node_ref=container class="timeline">
            <div class="timeline__line">
                <div class="timeline__fill" style=move || fill_style(progress.get())></div>
            </div>
            <div class="timeline__items">{items}</div>
            <div class="timeline__end">
                <div class=move || with_visible("timeline-dot timeline-dot--end", visible.get()) style=end_style></div>
            </div>
        </div>
    }
}
