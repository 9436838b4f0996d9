use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use std::time::Duration;

use crate::timing::sleep;

/// Debounced search field.
///
/// `on_search` fires only after `typing_interval` milliseconds pass with no
/// further keystrokes, so every emitted value is a settled query. The text
/// shown in the box updates on every keystroke.
#[component]
pub fn SearchBar(
    #[props(default)] search_value: String,
    #[props(default)] placeholder: String,
    #[props(default = 500)] typing_interval: u64,
    on_search: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| search_value.clone());
    // Each keystroke bumps the generation; a pending timer only emits if no
    // newer keystroke arrived while it slept.
    let mut typing_gen: Signal<u64> = use_signal(|| 0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            span {
                class: "search-bar-icon",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                class: "search-bar-input",
                r#type: "search",
                value: "{text}",
                placeholder: placeholder,
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    text.set(value.clone());
                    let generation = typing_gen() + 1;
                    typing_gen.set(generation);
                    spawn(async move {
                        sleep(Duration::from_millis(typing_interval)).await;
                        if typing_gen() == generation {
                            on_search.call(value);
                        }
                    });
                },
            }
        }
    }
}
