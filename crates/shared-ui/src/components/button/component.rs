use dioxus::prelude::*;

/// Visual tone of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class_name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Secondary => "button button-secondary",
            ButtonVariant::Destructive => "button button-destructive",
            ButtonVariant::Ghost => "button button-ghost",
        }
    }
}

/// Themed button. `onclick` is optional so a button can sit inside a router
/// `Link` and let the navigation handle the click.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: props.variant.class_name(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..props.attributes,
            {props.children}
        }
    }
}
