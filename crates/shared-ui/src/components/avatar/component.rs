use dioxus::prelude::*;

/// Circular avatar container.
#[component]
pub fn Avatar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "avatar",
            ..attributes,
            {children}
        }
    }
}

/// Fallback content (initials) shown when no image is available.
#[component]
pub fn AvatarFallback(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "avatar-fallback",
            ..attributes,
            {children}
        }
    }
}
