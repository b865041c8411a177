use leptos::prelude::*;

use crate::content::ProductCategory;
use crate::state::locale::LocaleState;

/// Category filter pills for the catalog.
#[component]
pub fn ProductTabs(active: Signal<ProductCategory>, on_change: Callback<ProductCategory>) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();

    let tabs = ProductCategory::TABS
        .into_iter()
        .map(|category| {
            let label = move || category.label(&locale.get().t().products.categories);
            let class = move || {
                if active.get() == category {
                    "product-tabs__tab product-tabs__tab--active"
                } else {
                    "product-tabs__tab"
                }
            };
            view! {
                <button type="button" class=class on:click=move |_| on_change.run(category)>
                    {label}
                </button>
            }
        })
        .collect_view();

    view! { <div class="product-tabs">{tabs}</div> }
}
