use dioxus::prelude::*;

use ui::components::{
    register_nav, AppNavbar, AppRoot, FloatingDemoButton, NavBuilder, ScrollToTop, SiteFooter,
};
use ui::core::routes::AppView;
use ui::demo::SubmissionChannel;
use ui::views::{Home, PageNotFound, RequestDemo, WhatIsLia};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
        #[route("/")]
        Home {},
        #[route("/what-is-lia")]
        WhatIsLia {},
        #[route("/demo")]
        RequestDemo {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl From<AppView> for Route {
    fn from(view: AppView) -> Self {
        match view {
            AppView::Home => Route::Home {},
            AppView::WhatIsLia => Route::WhatIsLia {},
            AppView::RequestDemo => Route::RequestDemo {},
        }
    }
}

/// Named view behind a route, if any.
fn view_of(route: &Route) -> Option<AppView> {
    match route {
        Route::Home {} => Some(AppView::Home),
        Route::WhatIsLia {} => Some(AppView::WhatIsLia),
        Route::RequestDemo {} => Some(AppView::RequestDemo),
        Route::PageNotFound { .. } => None,
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_link(view: AppView, class: String, children: Element) -> Element {
    rsx!(Link {
        class,
        active_class: "is-active",
        to: Route::from(view),
        {children}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });

    use_context_provider(|| {
        if cfg!(feature = "fullstack") {
            SubmissionChannel::Server
        } else {
            SubmissionChannel::simulated()
        }
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        AppRoot {
            Router::<Route> {}
        }
    }
}

/// Shared chrome around every web route. Changing page scrolls back to the
/// top; the floating demo button is hidden on the demo page itself.
#[component]
fn WebLayout() -> Element {
    let route = use_route::<Route>();
    let on_demo_page = view_of(&route) == Some(AppView::RequestDemo);

    rsx! {
        ScrollToTop { path: route.to_string() }
        AppNavbar {}
        main { class: "app__main",
            Outlet::<Route> {}
        }
        if !on_demo_page {
            FloatingDemoButton {}
        }
        SiteFooter {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_a_route_with_the_same_path() {
        for view in AppView::ALL {
            let route = Route::from(view);
            assert_eq!(route.to_string(), view.path());
            assert_eq!(view_of(&route), Some(view));
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/no/such/page".parse().expect("catch-all route");
        assert_eq!(view_of(&route), None);
    }
}
