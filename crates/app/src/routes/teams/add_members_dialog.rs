use dioxus::prelude::*;
use shared_types::{EntityReference, Team, UserCard};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    ScrollMetrics, SearchBar, ToastOptions, Toasts, VirtualList,
};

use super::user_row::UserRow;
use crate::picker::{self, FetchPlan, FetchRequest, PickerState};

/// Modal for picking directory users to add to a team.
///
/// Mounted fresh each time it opens, so the picker state starts clean. The
/// first listing page is requested on mount; typing switches to the search
/// index once the input settles, and scrolling to the bottom of the list
/// asks for the next page.
#[component]
pub fn AddMembersDialog(
    team: Team,
    on_close: EventHandler<()>,
    on_save: EventHandler<Vec<EntityReference>>,
) -> Element {
    let toast = use_toast();
    let mut state = use_signal(PickerState::new);

    use_future(move || async move {
        let request = state.write().set_query(String::new());
        run_fetch(state, request, toast).await;
    });

    let existing = team.member_ids();
    let visible = state.read().visible_cards(&existing);
    let selected = state.read().selected_count();
    let loading = state.read().is_loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./add_members_dialog.css") }

        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Add members to {team.name}" }
                DialogDescription {
                    "Search the directory or scroll the list. Existing members are hidden."
                }

                SearchBar {
                    search_value: state.read().query().to_string(),
                    placeholder: "Search users".to_string(),
                    typing_interval: 500,
                    on_search: move |query: String| {
                        let request = state.write().set_query(query);
                        spawn(run_fetch(state, request, toast));
                    },
                }

                div { class: "picker-list",
                    if visible.is_empty() {
                        div { class: "picker-empty",
                            if loading { "Loading users\u{2026}" } else { "No users to show." }
                        }
                    } else {
                        VirtualList {
                            items: visible.clone(),
                            row_height: picker::ROW_HEIGHT,
                            height: picker::CONTAINER_HEIGHT,
                            on_scroll: move |metrics: ScrollMetrics| {
                                if !picker::at_load_threshold(&metrics) {
                                    return;
                                }
                                let request = state.write().request_more();
                                if let Some(request) = request {
                                    spawn(run_fetch(state, request, toast));
                                }
                            },
                            render_row: move |card: UserCard| {
                                let checked = state.read().is_selected(card.id);
                                rsx! {
                                    UserRow {
                                        card,
                                        checked,
                                        on_toggle: move |id| state.write().toggle(id),
                                    }
                                }
                            },
                        }
                    }
                }

                div { class: "dialog-actions",
                    span { class: "picker-count",
                        if selected == 1 { "1 user selected" } else { "{selected} users selected" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: selected == 0,
                        onclick: move |_| on_save.call(state.read().confirm()),
                        "Add selected"
                    }
                }
            }
        }
    }
}

/// Execute one picker fetch and feed the outcome back into the state.
///
/// The state drops outcomes from superseded requests itself; only failures
/// that actually applied surface a notification.
async fn run_fetch(mut state: Signal<PickerState>, request: FetchRequest, toast: Toasts) {
    match request.plan {
        FetchPlan::Listing { after } => {
            match server::api::list_users(Some(picker::PAGE_SIZE as i64), after).await {
                Ok(page) => {
                    state.write().apply_listing(request.generation, page);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "user listing fetch failed");
                    if state.write().fail_fetch(request.generation) {
                        toast.error("Failed to load users".to_string(), ToastOptions::new());
                    }
                }
            }
        }
        FetchPlan::Search { query, page } => {
            match server::api::search_users(query, page, picker::PAGE_SIZE).await {
                Ok(hits) => {
                    state.write().apply_search(request.generation, hits);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "user search failed");
                    if state.write().fail_fetch(request.generation) {
                        toast.error("Search failed".to_string(), ToastOptions::new());
                    }
                }
            }
        }
    }
}
