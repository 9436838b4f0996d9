use dioxus::prelude::*;
use shared_types::UserCard;
use shared_ui::{Avatar, AvatarFallback, Checkbox, CheckboxIndicator, CheckboxState};
use uuid::Uuid;

use crate::format_helpers::initials;

/// One selectable row in the add-members picker. Clicking anywhere on the
/// row toggles it; the checkbox is display-only and bubbles its click up.
#[component]
pub fn UserRow(card: UserCard, checked: bool, on_toggle: EventHandler<Uuid>) -> Element {
    let row_id = card.id;
    let display_initials = initials(&card.display_name);

    rsx! {
        div {
            class: if checked { "user-row selected" } else { "user-row" },
            onclick: move |_| on_toggle.call(row_id),

            Checkbox {
                checked: CheckboxState::from(checked),
                CheckboxIndicator {}
            }

            Avatar {
                AvatarFallback { "{display_initials}" }
            }

            div { class: "user-info",
                span { class: "user-display-name", "{card.display_name}" }
                span { class: "user-path", "{card.fully_qualified_name}" }
            }

            if let Some(email) = card.email.as_ref() {
                span { class: "user-email", "{email}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(email: Option<&str>) -> UserCard {
        UserCard {
            id: Uuid::new_v4(),
            display_name: "Ada Lovelace".to_string(),
            name: "ada".to_string(),
            fully_qualified_name: "eng/ada".to_string(),
            email: email.map(str::to_string),
            entity_type: "user".to_string(),
        }
    }

    // EventHandler props can only be built inside a Dioxus runtime, so the
    // rsx is evaluated inside a VirtualDom app fn rather than at the call site.
    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_name_path_and_initials() {
        let html = render(|| rsx! {
            UserRow { card: card(Some("ada@acme.dev")), checked: false, on_toggle: |_| {} }
        });
        assert!(html.contains("Ada Lovelace"), "{html}");
        assert!(html.contains("eng/ada"), "{html}");
        assert!(html.contains("AL"), "{html}");
        assert!(html.contains("ada@acme.dev"), "{html}");
    }

    #[test]
    fn email_span_is_omitted_when_absent() {
        let html = render(|| rsx! {
            UserRow { card: card(None), checked: false, on_toggle: |_| {} }
        });
        assert!(!html.contains("user-email"), "{html}");
    }

    #[test]
    fn checked_row_is_marked_selected() {
        let html = render(|| rsx! {
            UserRow { card: card(None), checked: true, on_toggle: |_| {} }
        });
        assert!(html.contains("user-row selected"), "{html}");
        assert!(html.contains(r#"aria-checked="true""#), "{html}");
    }
}
