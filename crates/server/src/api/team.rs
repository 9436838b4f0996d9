use dioxus::prelude::*;
use shared_types::{EntityReference, Team, TeamSummary};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Team Server Functions ──────────────────────────────

/// List all teams with member counts.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_teams() -> Result<Vec<TeamSummary>, ServerFnError> {
    use crate::repo::team;

    let pool = get_db().await;
    team::list_summaries(pool)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Fetch a team and its member roster.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_team(team_id: String) -> Result<Team, ServerFnError> {
    use crate::repo::team;
    use shared_types::AppError;
    use uuid::Uuid;

    let pool = get_db().await;
    let id = Uuid::parse_str(&team_id)
        .map_err(|_| AppError::bad_request("Invalid team ID").into_server_fn_error())?;

    team::find_by_id(pool, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Add the referenced users to a team. Returns the number of members added.
///
/// Every reference must carry the "user" entity type; adding someone who
/// is already on the roster is a Conflict.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn add_team_members(
    team_id: String,
    members: Vec<EntityReference>,
) -> Result<u64, ServerFnError> {
    use crate::repo::team;
    use shared_types::AppError;
    use uuid::Uuid;

    let pool = get_db().await;
    let id = Uuid::parse_str(&team_id)
        .map_err(|_| AppError::bad_request("Invalid team ID").into_server_fn_error())?;

    let mut user_ids = Vec::with_capacity(members.len());
    for member in &members {
        if member.entity_type != "user" {
            return Err(AppError::bad_request(format!(
                "Cannot add entity of type '{}' to a team",
                member.entity_type
            ))
            .into_server_fn_error());
        }
        user_ids.push(member.id);
    }

    if user_ids.is_empty() {
        return Ok(0);
    }

    let added = team::add_members(pool, id, &user_ids)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(team_id = %id, added, "team members added");
    Ok(added)
}

/// Remove a user from a team. Returns true if a membership was deleted.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn remove_team_member(team_id: String, user_id: String) -> Result<bool, ServerFnError> {
    use crate::repo::team;
    use shared_types::AppError;
    use uuid::Uuid;

    let pool = get_db().await;
    let team_uuid = Uuid::parse_str(&team_id)
        .map_err(|_| AppError::bad_request("Invalid team ID").into_server_fn_error())?;
    let user_uuid = Uuid::parse_str(&user_id)
        .map_err(|_| AppError::bad_request("Invalid user ID").into_server_fn_error())?;

    let removed = team::remove_member(pool, team_uuid, user_uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if removed {
        tracing::info!(team_id = %team_uuid, user_id = %user_uuid, "team member removed");
    }
    Ok(removed)
}
