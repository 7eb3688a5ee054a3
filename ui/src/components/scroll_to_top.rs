use dioxus::prelude::*;

use crate::core::routes::page_path;

/// Scroll the window back to the top whenever `path` lands on another page.
/// Fragment and query changes on the same page keep the scroll position.
#[component]
pub fn ScrollToTop(path: String) -> Element {
    let page = page_path(&path).to_string();

    use_effect(use_reactive((&page,), |(page,)| {
        tracing::debug!(%page, "page changed, scrolling to top");
        document::eval("window.scrollTo(0, 0);");
    }));

    rsx! {}
}
