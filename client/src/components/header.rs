//! Fixed site header with primary navigation and the locale switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transparent over the hero; switches to a solid bar once the window has
//! scrolled past `HEADER_SCROLL_THRESHOLD` or while the mobile menu is open.
//! Navigation is plain anchors, intercepted by the router for client-side
//! transitions. The mobile menu closes whenever the page changes.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use super::cloudinary_image::{CloudinaryImage, ObjectFit};
use crate::app::use_current_page;
use crate::state::locale::LocaleState;
use crate::state::route::Page;
use crate::util::cloudinary::Crop;
use crate::util::locale_pref;

const LOGO_PUBLIC_ID: &str = "Logo_CMP";

#[component]
pub fn Header() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let current = use_current_page();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{is_scrolled, scroll_y};

        Effect::new(move || scrolled.set(is_scrolled(scroll_y())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(is_scrolled(scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || {
        let _ = current.get();
        menu_open.set(false);
    });

    let toggle_locale = move |_| {
        let mut next = locale.get_untracked().locale;
        locale.update(|state| next = state.toggle());
        locale_pref::persist(next);
    };

    let desktop_links = Page::ALL
        .into_iter()
        .map(|page| {
            let label = move || page.nav_label(&locale.get().t().nav);
            view! {
                <a class=move || nav_link_class(current.get() == page) href=page.path()>
                    {label}
                    // Active underline
                    <Show when=move || current.get() == page>
                        <span class="site-nav__indicator"></span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    let mobile_links = Page::ALL
        .into_iter()
        .enumerate()
        .map(|(index, page)| {
            let label = move || page.nav_label(&locale.get().t().nav);
            view! {
                <a
                    class=move || mobile_link_class(current.get() == page)
                    href=page.path()
                    style=mobile_delay_style(index)
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=move || header_class(scrolled.get(), menu_open.get())>
            <div class="site-header__inner">
                <a class="site-header__logo" href=Page::Home.path()>
                    <CloudinaryImage
                        src=LOGO_PUBLIC_ID
                        alt="CMP Logo"
                        height=80
                        crop=Crop::Scale
                        object_fit=ObjectFit::Contain
                        loading="eager"
                        class_name="site-header__logo-img"
                    />
                </a>

                <nav class="site-nav">
                    {desktop_links}
                    <button class="locale-switch" type="button" on:click=toggle_locale>
                        <span class="locale-switch__current">{move || locale.get().t().locale.switch_label}</span>
                        <span class="locale-switch__sep">"|"</span>
                        <span class="locale-switch__other">{move || locale.get().t().locale.other_label}</span>
                    </button>
                </nav>

                <button
                    class="site-header__burger"
                    type="button"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class=move || burger_line_class(menu_open.get(), 0)></span>
                    <span class=move || burger_line_class(menu_open.get(), 1)></span>
                    <span class=move || burger_line_class(menu_open.get(), 2)></span>
                </button>
            </div>

            <div class=move || if menu_open.get() { "mobile-menu mobile-menu--open" } else { "mobile-menu" }>
                <nav class="mobile-menu__links">
                    {mobile_links}
                    <button class="mobile-menu__locale" type="button" on:click=toggle_locale>
                        <span>{move || locale.get().t().locale.current}</span>
                        <span class="mobile-menu__locale-arrow">"→"</span>
                        <span>{move || locale.get().t().locale.other_name}</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}

fn header_class(scrolled: bool, menu_open: bool) -> &'static str {
    if scrolled || menu_open {
        "site-header site-header--solid"
    } else {
        "site-header"
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "site-nav__link site-nav__link--active"
    } else {
        "site-nav__link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "mobile-menu__link mobile-menu__link--active"
    } else {
        "mobile-menu__link"
    }
}

fn mobile_delay_style(index: usize) -> String {
    format!("transition-delay: {}ms", index * 50)
}

fn burger_line_class(open: bool, line: usize) -> String {
    if open {
        format!("burger__line burger__line--{line} burger__line--open")
    } else {
        format!("burger__line burger__line--{line}")
    }
}
