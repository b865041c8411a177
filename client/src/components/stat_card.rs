//! Headline figure that counts up the first time it scrolls into view.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::content::Stat;
use crate::state::locale::LocaleState;
use crate::util::count_up::split_stat_value;
use crate::util::reveal::{Animation, RevealOptions, delay_style, reveal_class};

const ICONS: [&str; 4] = [
    // clock
    "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
    // beaker
    "M19.428 15.428a2 2 0 00-1.022-.547l-2.387-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z",
    // people
    "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
    // cube
    "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4",
];

/// Card `index` in a row of stats; drives the reveal delay and icon.
#[component]
pub fn StatCard(stat: &'static Stat, index: usize) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(node_ref, RevealOptions::default());
    let (target, suffix) = split_stat_value(stat.value);
    let shown = RwSignal::new(0_u64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::animation_frame::{FrameClock, request_frames};
        use crate::util::count_up::{COUNT_UP_DURATION_MS, CountUp, value_at};

        let latch = StoredValue::new(CountUp::default());
        Effect::new(move || {
            if !visible.get() {
                return;
            }
            let mut start = false;
            latch.update_value(|l| start = l.try_start());
            if !start {
                return;
            }
            let mut clock = FrameClock::default();
            request_frames(move |ts| {
                let value = value_at(target, clock.elapsed(ts), COUNT_UP_DURATION_MS);
                shown.try_set(value).is_none() && value < target
            });
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(Animation::BounceUp, visible.get(), "stat-card")
            style=delay_style(card_delay_ms(index))
        >
            <div class="stat-card__orb"></div>
            <div class="stat-card__icon">
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d=icon_path(index)></path>
                </svg>
            </div>
            <div class="stat-card__value">{move || format_stat(shown.get(), suffix)}</div>
            <div class="stat-card__label">{move || stat.label.get(locale.get().locale)}</div>
        </div>
    }
}

fn card_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(0, |i| i.saturating_mul(120))
}

fn icon_path(index: usize) -> &'static str {
    ICONS[index % ICONS.len()]
}

fn format_stat(value: u64, suffix: &str) -> String {
    format!("{value}{suffix}")
}
