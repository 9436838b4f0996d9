use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUsers;
use dioxus_free_icons::Icon;
use shared_types::TeamSummary;
use shared_ui::{Badge, BadgeVariant, PageHeader, PageTitle};

use crate::routes::Route;

/// Teams index: every team with its member count.
#[component]
pub fn TeamListPage() -> Element {
    let teams = use_resource(move || async move { server::api::list_teams().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teams.css") }

        PageHeader {
            PageTitle { "Teams" }
        }

        div { class: "team-grid",
            match &*teams.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "team-empty", "No teams yet." }
                },
                Some(Ok(list)) => rsx! {
                    for team in list.iter() {
                        TeamCard { key: "{team.id}", team: team.clone() }
                    }
                },
                Some(Err(err)) => {
                    let msg = shared_types::AppError::friendly_message(&err.to_string());
                    rsx! {
                        div { class: "team-empty", "Error loading teams: {msg}" }
                    }
                }
                None => rsx! {
                    div { class: "team-empty", "Loading teams\u{2026}" }
                },
            }
        }
    }
}

#[component]
fn TeamCard(team: TeamSummary) -> Element {
    rsx! {
        Link {
            to: Route::TeamDetailPage { id: team.id.to_string() },
            class: "team-card",
            div { class: "team-card-head",
                span { class: "team-card-name", "{team.name}" }
                Badge { variant: BadgeVariant::Secondary,
                    Icon::<LdUsers> { icon: LdUsers, width: 12, height: 12 }
                    "{team.member_count}"
                }
            }
            if let Some(desc) = team.description.as_ref() {
                p { class: "team-card-description", "{desc}" }
            }
        }
    }
}
