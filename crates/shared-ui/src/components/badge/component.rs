use dioxus::prelude::*;

/// Visual tone of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

/// Small inline pill for labels and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let tone = match variant {
        BadgeVariant::Primary => "badge badge-primary",
        BadgeVariant::Secondary => "badge badge-secondary",
        BadgeVariant::Destructive => "badge badge-destructive",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: tone,
            ..attributes,
            {children}
        }
    }
}
