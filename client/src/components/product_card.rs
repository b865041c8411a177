//! Catalog product card in grid or list layout.

use leptos::prelude::*;

use crate::content::Product;
use crate::state::catalog::ViewMode;
use crate::state::locale::LocaleState;

#[component]
pub fn ProductCard(product: &'static Product, #[prop(optional)] layout: ViewMode) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();

    let name = move || product.name.get(locale.get().locale);
    let description = move || product.description.get(locale.get().locale);
    let category = move || product.category.label(&locale.get().t().products.categories);
    let view_details = move || locale.get().t().products.view_details;

    match layout {
        ViewMode::Grid => view! {
            <div class="product-card">
                <div class="product-card__media">
                    <img class="product-card__image" src=product.image alt=name loading="lazy"/>
                    <div class="product-card__shade"></div>
                    <div class="product-card__hover">
                        <button class="product-card__details" type="button">
                            {view_details}
                            <span class="product-card__chevron">"›"</span>
                        </button>
                    </div>
                </div>
                <div class="product-card__body">
                    <h3 class="product-card__name">{name}</h3>
                    <p class="product-card__description">{description}</p>
                    <span class="product-card__badge">{category}</span>
                </div>
            </div>
        }
        .into_any(),
        ViewMode::List => view! {
            <div class="product-row">
                <div class="product-row__media">
                    <img class="product-row__image" src=product.image alt=name loading="lazy"/>
                </div>
                <div class="product-row__body">
                    <div class="product-row__heading">
                        <h3 class="product-row__name">{name}</h3>
                        <span class="product-card__badge">{category}</span>
                    </div>
                    <p class="product-row__description">{description}</p>
                    <button class="product-row__details" type="button">
                        {view_details}
                        <span class="product-card__chevron">"›"</span>
                    </button>
                </div>
            </div>
        }
        .into_any(),
    }
}
