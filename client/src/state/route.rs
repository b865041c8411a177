//! Page identity and URL mapping.
//!
//! DESIGN
//! ======
//! The site has four pages. A URL fragment that names a page wins over the
//! path (old `/#products` links keep working); anything unrecognized lands
//! on home rather than a not-found view.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::i18n::NavText;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Products,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Products, Page::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Products => "products",
            Self::Contact => "contact",
        }
    }

    /// Canonical URL path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Products => "/products",
            Self::Contact => "/contact",
        }
    }

    /// Parse a bare page name; `None` when it names no page.
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim().trim_matches('/');
        Self::ALL.into_iter().find(|page| page.as_str() == name)
    }

    /// Page for a URL path. Unknown paths resolve to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if path.trim_matches('/').is_empty() {
            return Self::Home;
        }
        Self::parse(path).unwrap_or_default()
    }

    /// Page for a path plus optional fragment (with or without the `#`).
    pub fn from_location(path: &str, hash: &str) -> Self {
        Self::parse(hash.trim_start_matches('#')).unwrap_or_else(|| Self::from_path(path))
    }

    pub fn nav_label(self, nav: &NavText) -> &'static str {
        match self {
            Self::Home => nav.home,
            Self::About => nav.about,
            Self::Products => nav.products,
            Self::Contact => nav.contact,
        }
    }
}
