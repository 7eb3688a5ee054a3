//! Shared UI crate for the LIA Hub site. Preferences, content, the demo
//! request form and every page live here; platform crates only add routing.

pub mod core;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod views;

pub mod components {
    // Root provider: catalog + preferences context (components/app_root.rs)
    pub mod app_root;
    pub use app_root::{use_translator, AppRoot};

    // Localized navbar and platform link registration (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::ViewLink;

    pub mod icon;

    // Landing page sections
    pub mod audiences;
    pub mod features;
    pub mod hero;
    pub mod how_it_works;
    pub mod internship_types;
    pub use audiences::Audiences;
    pub use features::Features;
    pub use hero::Hero;
    pub use how_it_works::HowItWorks;
    pub use internship_types::InternshipTypes;

    pub mod floating_cta;
    pub mod footer;
    pub mod scroll_to_top;
    pub use floating_cta::FloatingDemoButton;
    pub use footer::SiteFooter;
    pub use scroll_to_top::ScrollToTop;
}

#[cfg(test)]
mod tests;
