//! Named views of the site. Platform crates map these to their own router.

use crate::i18n::MessageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    Home,
    WhatIsLia,
    RequestDemo,
}

impl AppView {
    /// Navbar order.
    pub const ALL: [AppView; 3] = [AppView::Home, AppView::WhatIsLia, AppView::RequestDemo];

    pub fn path(self) -> &'static str {
        match self {
            AppView::Home => "/",
            AppView::WhatIsLia => "/what-is-lia",
            AppView::RequestDemo => "/demo",
        }
    }

    /// Resolve a location path. Trailing slashes, query strings and
    /// fragments are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = page_path(path);
        Self::ALL.into_iter().find(|view| view.path() == normalized)
    }

    pub fn nav_label_key(self) -> MessageKey {
        match self {
            AppView::Home => MessageKey::NavHome,
            AppView::WhatIsLia => MessageKey::NavWhatIsLia,
            AppView::RequestDemo => MessageKey::NavDemo,
        }
    }
}

/// The page part of a location: no query, no fragment, no trailing slash.
/// Two locations with the same page path show the same page.
pub fn page_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for view in AppView::ALL {
            assert_eq!(AppView::from_path(view.path()), Some(view));
        }
    }

    #[test]
    fn paths_are_normalized() {
        assert_eq!(AppView::from_path(""), Some(AppView::Home));
        assert_eq!(AppView::from_path("/demo/"), Some(AppView::RequestDemo));
        assert_eq!(AppView::from_path("/what-is-lia?ref=nav"), Some(AppView::WhatIsLia));
        assert_eq!(AppView::from_path("/demo#form"), Some(AppView::RequestDemo));
    }

    #[test]
    fn unknown_paths_have_no_view() {
        assert_eq!(AppView::from_path("/pricing"), None);
        assert_eq!(AppView::from_path("/demo/extra"), None);
    }

    #[test]
    fn page_path_ignores_fragments_and_queries() {
        assert_eq!(page_path("/#features"), "/");
        assert_eq!(page_path("/demo?ref=hero"), "/demo");
        assert_eq!(page_path("/what-is-lia/"), "/what-is-lia");
        assert_eq!(page_path("/no/such/page"), "/no/such/page");
        assert_ne!(page_path("/demo"), page_path("/what-is-lia"));
    }
}
