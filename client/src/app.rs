//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{footer::Footer, header::Header};
use crate::config::SiteConfig;
use crate::i18n::Translations;
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, products::ProductsPage};
use crate::state::locale::LocaleState;
use crate::state::route::Page;

const COMPANY_NAME: &str = "PT Cipta Metalindo Persada";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let lang = SiteConfig::current().default_locale.as_str();
    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/assets/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site config and locale store. Every known path (and
/// anything unknown) routes to [`ActivePage`] between the shared header and
/// footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::current().clone();
    let default_locale = config.default_locale;
    let locale = RwSignal::new(LocaleState::new(default_locale));
    provide_context(config);
    provide_context(locale);

    // Stored preference wins over the configured default once hydrated.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::locale_pref;

        Effect::new(move || {
            let stored = locale_pref::read_stored();
            let preferred = LocaleState::from_stored(stored.as_deref(), default_locale).locale;
            locale.update(|state| {
                state.set(preferred);
            });
            locale_pref::apply(preferred);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/cmp-site.css"/>

        <Router>
            <PageMeta/>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <ActivePage/> }>
                    <Route path=StaticSegment("") view=ActivePage/>
                    <Route path=StaticSegment("about") view=ActivePage/>
                    <Route path=StaticSegment("products") view=ActivePage/>
                    <Route path=StaticSegment("contact") view=ActivePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Page for the current location; a page-naming fragment wins over the path.
pub fn use_current_page() -> Memo<Page> {
    let location = use_location();
    Memo::new(move |_| Page::from_location(&location.pathname.get(), &location.hash.get()))
}

/// Document title and description; scrolls to the top on page change.
#[component]
fn PageMeta() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let page = use_current_page();

    Effect::new(move |prev: Option<Page>| {
        let current = page.get();
        if prev.is_some_and(|p| p != current) {
            crate::util::scroll::scroll_to_top();
        }
        current
    });

    let title = move || page_title(page.get(), locale.get().t());
    let description = move || locale.get().t().hero.subtitle;

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
    }
}

#[component]
fn ActivePage() -> impl IntoView {
    let page = use_current_page();
    move || match page.get() {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Products => view! { <ProductsPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
    }
}

fn page_title(page: Page, t: &Translations) -> String {
    match page {
        Page::Home => COMPANY_NAME.to_owned(),
        other => format!("{} | {COMPANY_NAME}", other.nav_label(&t.nav)),
    }
}
