use dioxus::prelude::*;

/// A horizontal rule between content sections.
#[component]
pub fn Separator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "separator",
            role: "separator",
            aria_orientation: "horizontal",
            ..attributes,
        }
    }
}
