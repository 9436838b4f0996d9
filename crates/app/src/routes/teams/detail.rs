use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdUserPlus, LdX};
use dioxus_free_icons::Icon;
use shared_types::{EntityReference, Team};
use shared_ui::{
    use_toast, Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, PageActions,
    PageHeader, PageTitle, Separator, ToastOptions,
};

use super::add_members_dialog::AddMembersDialog;
use crate::format_helpers::{format_date_human, initials};
use crate::routes::Route;

/// One team: description, creation date, and the member roster.
#[component]
pub fn TeamDetailPage(id: String) -> Element {
    let toast = use_toast();

    let team_id = id.clone();
    let mut team = use_resource(move || {
        let tid = team_id.clone();
        async move { server::api::get_team(tid).await }
    });

    let mut show_add_dialog = use_signal(|| false);

    let save_id = id.clone();
    let handle_add = move |members: Vec<EntityReference>| {
        let tid = save_id.clone();
        spawn(async move {
            match server::api::add_team_members(tid, members).await {
                Ok(added) => {
                    let noun = if added == 1 { "member" } else { "members" };
                    toast.success(format!("Added {added} {noun}"), ToastOptions::new());
                    show_add_dialog.set(false);
                    team.restart();
                }
                Err(err) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&err.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teams.css") }

        match &*team.read() {
            Some(Ok(t)) => rsx! {
                PageHeader {
                    PageTitle { "{t.name}" }
                    PageActions {
                        Link { to: Route::TeamListPage {},
                            Button { variant: ButtonVariant::Secondary, "All Teams" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_add_dialog.set(true),
                            Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                            "Add members"
                        }
                    }
                }

                if let Some(desc) = t.description.as_ref() {
                    p { class: "team-description", "{desc}" }
                }
                p { class: "team-created",
                    "Created {format_date_human(&t.created_at.to_rfc3339())}"
                }

                Separator {}

                MemberList { team: t.clone(), on_changed: move |_| team.restart() }

                if show_add_dialog() {
                    AddMembersDialog {
                        team: t.clone(),
                        on_close: move |_| show_add_dialog.set(false),
                        on_save: handle_add,
                    }
                }
            },
            Some(Err(err)) => {
                let msg = shared_types::AppError::friendly_message(&err.to_string());
                rsx! {
                    div { class: "team-empty", "Error loading team: {msg}" }
                }
            }
            None => rsx! {
                div { class: "team-empty", "Loading team\u{2026}" }
            },
        }
    }
}

/// Roster with a remove action per member.
#[component]
fn MemberList(team: Team, on_changed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let team_id = team.id.to_string();

    rsx! {
        div { class: "member-list",
            div { class: "member-list-head",
                h2 { class: "member-list-heading", "Members" }
                Badge { variant: BadgeVariant::Secondary, "{team.members.len()}" }
            }

            if team.members.is_empty() {
                div { class: "team-empty",
                    "No members yet. Use \"Add members\" to build the roster."
                }
            }

            for member in team.members.iter() {
                {
                    let member_id = member.id;
                    let tid = team_id.clone();
                    let display_initials = initials(&member.display_name);

                    rsx! {
                        div { class: "member-row",
                            Avatar {
                                AvatarFallback { "{display_initials}" }
                            }
                            div { class: "member-info",
                                span { class: "member-name", "{member.display_name}" }
                                span { class: "member-path", "{member.fully_qualified_name}" }
                            }
                            if let Some(email) = member.email.as_ref() {
                                span { class: "member-email", "{email}" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    let tid = tid.clone();
                                    spawn(async move {
                                        match server::api::remove_team_member(tid, member_id.to_string()).await {
                                            Ok(true) => {
                                                toast.success("Member removed".to_string(), ToastOptions::new());
                                                on_changed.call(());
                                            }
                                            Ok(false) => {
                                                toast.info("Member was already gone".to_string(), ToastOptions::new());
                                                on_changed.call(());
                                            }
                                            Err(err) => {
                                                toast.error(
                                                    shared_types::AppError::friendly_message(&err.to_string()),
                                                    ToastOptions::new(),
                                                );
                                            }
                                        }
                                    });
                                },
                                Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                            }
                        }
                        Separator {}
                    }
                }
            }
        }
    }
}
