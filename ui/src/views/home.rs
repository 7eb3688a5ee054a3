use dioxus::prelude::*;

use crate::components::{Audiences, Features, Hero, HowItWorks, InternshipTypes};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page page-home",
            Hero {}
            Features {}
            Audiences {}
            HowItWorks {}
            InternshipTypes {}
        }
    }
}
