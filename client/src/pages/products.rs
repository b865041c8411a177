//! Product catalog: category tabs, grid/list toggle and pagination.
//!
//! The filter, page and layout live in a page-local
//! `RwSignal<CatalogState>`; leaving the page resets them.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::hero_section::{HeroBackground, HeroOverlay, HeroSection, HeroSize};
use crate::components::product_card::ProductCard;
use crate::components::product_tabs::ProductTabs;
use crate::components::reveal::Reveal;
use crate::content::ProductCategory;
use crate::i18n::ProductsText;
use crate::state::catalog::{CatalogState, ViewMode};
use crate::state::locale::LocaleState;
use crate::util::reveal::Animation;
use crate::util::scroll::scroll_to_element;

const HERO_IMAGE: &str = "https://res.cloudinary.com/dtny14e7t/image/upload/v1770360393/samples/bike.jpg";
const GRID_ANCHOR: &str = "products-grid";

#[component]
pub fn ProductsPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let t = move || &locale.get().t().products;

    let active = Signal::derive(move || catalog.get().category);
    let on_category = Callback::new(move |category: ProductCategory| {
        catalog.update(|c| c.set_category(category));
    });
    let change_page = move |apply: fn(&mut CatalogState)| {
        catalog.update(apply);
        scroll_to_element(GRID_ANCHOR);
    };

    let items = move || {
        let state = catalog.get();
        let layout = state.view;
        state
            .page_items()
            .into_iter()
            .enumerate()
            .map(|(index, product)| {
                view! {
                    <div class="catalog__item" style=item_delay_style(index)>
                        <ProductCard product=product layout=layout/>
                    </div>
                }
            })
            .collect_view()
    };

    let page_buttons = move || {
        let state = catalog.get();
        (1..=state.total_pages())
            .map(|page| {
                view! {
                    <button
                        type="button"
                        class=page_button_class(page == state.page)
                        on:click=move |_| {
                            catalog.update(|c| c.go_to(page));
                            scroll_to_element(GRID_ANCHOR);
                        }
                    >
                        {page}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        {move || {
            let products = t();
            view! {
                <HeroSection
                    title=products.title
                    subtitle=products.subtitle
                    background=HeroBackground::Image(HERO_IMAGE)
                    overlay=HeroOverlay::Blue
                    size=HeroSize::Small
                />
            }
        }}

        <section class="section">
            <div class="container">
                <Reveal animation=Animation::FadeDown class_name="catalog__tabs">
                    <ProductTabs active=active on_change=on_category/>
                </Reveal>

                <div class="catalog__toolbar" id=GRID_ANCHOR>
                    <p class="catalog__count">{move || showing_label(t(), catalog.get().showing())}</p>
                    <div class="view-toggle">
                        <button
                            type="button"
                            class=move || view_button_class(catalog.get().view == ViewMode::Grid)
                            title=move || t().grid_view
                            on:click=move |_| catalog.update(|c| c.set_view(ViewMode::Grid))
                        >
                            <span class="view-toggle__icon">"▦"</span>
                            <span class="view-toggle__label">{move || t().grid_view}</span>
                        </button>
                        <button
                            type="button"
                            class=move || view_button_class(catalog.get().view == ViewMode::List)
                            title=move || t().list_view
                            on:click=move |_| catalog.update(|c| c.set_view(ViewMode::List))
                        >
                            <span class="view-toggle__icon">"☰"</span>
                            <span class="view-toggle__label">{move || t().list_view}</span>
                        </button>
                    </div>
                </div>

                <div class=move || list_class(catalog.get().view)>{items}</div>

                <Show when=move || catalog.get().page_items().is_empty()>
                    <div class="catalog__empty">
                        <span class="catalog__empty-icon">"□"</span>
                        <p>{move || t().no_products}</p>
                    </div>
                </Show>

                <Show when=move || { catalog.get().total_pages() > 1 }>
                    <nav class="pagination">
                        <button
                            type="button"
                            class="pagination__step"
                            disabled=move || !catalog.get().has_prev()
                            on:click=move |_| change_page(CatalogState::prev)
                        >
                            "‹ "
                            {move || t().prev}
                        </button>
                        <div class="pagination__pages">{page_buttons}</div>
                        <button
                            type="button"
                            class="pagination__step"
                            disabled=move || !catalog.get().has_next()
                            on:click=move |_| change_page(CatalogState::next)
                        >
                            {move || t().next}
                            " ›"
                        </button>
                    </nav>
                </Show>
            </div>
        </section>
    }
}

fn showing_label(text: &ProductsText, (first, last, total): (usize, usize, usize)) -> String {
    format!(
        "{} {first}–{last} {} {total} {}",
        text.showing, text.of, text.products_label
    )
}

fn item_delay_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * 60)
}

fn list_class(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Grid => "catalog__grid",
        ViewMode::List => "catalog__list",
    }
}

fn view_button_class(active: bool) -> &'static str {
    if active {
        "view-toggle__button view-toggle__button--active"
    } else {
        "view-toggle__button"
    }
}

fn page_button_class(current: bool) -> &'static str {
    if current {
        "pagination__page pagination__page--current"
    } else {
        "pagination__page"
    }
}
