use dioxus::prelude::*;

/// Checked state of a [`Checkbox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxState {
    Checked,
    #[default]
    Unchecked,
}

impl CheckboxState {
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckboxState::Checked)
    }

    fn toggled(&self) -> Self {
        match self {
            CheckboxState::Checked => CheckboxState::Unchecked,
            CheckboxState::Unchecked => CheckboxState::Checked,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            CheckboxState::Checked => "checked",
            CheckboxState::Unchecked => "unchecked",
        }
    }
}

impl From<bool> for CheckboxState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckboxState::Checked
        } else {
            CheckboxState::Unchecked
        }
    }
}

/// A controlled checkbox. The parent owns the state and receives the
/// toggled value through `on_checked_change`.
#[component]
pub fn Checkbox(
    #[props(default)] checked: CheckboxState,
    #[props(default)] on_checked_change: EventHandler<CheckboxState>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "checkbox",
            r#type: "button",
            role: "checkbox",
            aria_checked: if checked.is_checked() { "true" } else { "false" },
            "data-state": checked.as_str(),
            disabled: disabled,
            onclick: move |_| on_checked_change.call(checked.toggled()),
            ..attributes,
            {children}
        }
    }
}

/// Check mark shown while the parent checkbox is in the checked state.
#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let indicator_children = if children.is_ok() {
        children
    } else {
        rsx! {
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "14",
                height: "14",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 6L9 17l-5-5" }
            }
        }
    };

    rsx! {
        span {
            class: "checkbox-indicator",
            ..attributes,
            {indicator_children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggled_flips_state() {
        assert_eq!(CheckboxState::Checked.toggled(), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::Unchecked.toggled(), CheckboxState::Checked);
    }

    #[test]
    fn from_bool() {
        assert_eq!(CheckboxState::from(true), CheckboxState::Checked);
        assert_eq!(CheckboxState::from(false), CheckboxState::Unchecked);
        assert!(CheckboxState::from(true).is_checked());
    }
}
