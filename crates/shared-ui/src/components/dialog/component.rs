use dioxus::prelude::*;

/// Controlled modal dialog. Renders nothing while `open` is false;
/// clicking the backdrop requests close through `on_open_change`.
#[component]
pub fn DialogRoot(
    open: bool,
    #[props(default)] on_open_change: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dialog-overlay",
            onclick: move |_| on_open_change.call(false),
            ..attributes,
            {children}
        }
    }
}

/// Dialog panel. Swallows clicks so they do not reach the backdrop.
#[component]
pub fn DialogContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "dialog-content",
            role: "dialog",
            aria_modal: "true",
            onclick: move |evt| evt.stop_propagation(),
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn DialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        h2 {
            class: "dialog-title",
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn DialogDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        p {
            class: "dialog-description",
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // EventHandler props can only be built inside a Dioxus runtime, so the
    // rsx is evaluated inside a VirtualDom app fn rather than at the call site.
    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render(|| rsx! {
            DialogRoot { open: false,
                DialogContent { DialogTitle { "Hidden" } }
            }
        });
        assert!(!html.contains("Hidden"), "{html}");
    }

    #[test]
    fn open_dialog_renders_content() {
        let html = render(|| rsx! {
            DialogRoot { open: true,
                DialogContent {
                    DialogTitle { "Add Users" }
                    DialogDescription { "Pick people to add." }
                }
            }
        });
        assert!(html.contains("Add Users"), "{html}");
        assert!(html.contains(r#"role="dialog""#), "{html}");
    }
}
