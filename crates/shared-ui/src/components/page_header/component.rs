use dioxus::prelude::*;

/// Header strip at the top of a routed page: title on the left edge,
/// actions pushed to the right.
#[component]
pub fn PageHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            class: "page-head",
            ..attributes,
            {children}
        }
    }
}

/// The page's h1. One per page.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-head-title", {children} }
    }
}

/// Cluster of page-level action buttons inside a [`PageHeader`].
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-head-actions", {children} }
    }
}
