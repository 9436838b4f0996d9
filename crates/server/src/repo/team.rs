use chrono::{DateTime, Utc};
use shared_types::{AppError, Team, TeamSummary, User};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Team row as stored; the roster is loaded separately.
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// List all teams with their member counts, ordered by name.
pub async fn list_summaries(pool: &Pool<Postgres>) -> Result<Vec<TeamSummary>, AppError> {
    sqlx::query_as::<_, TeamSummary>(
        r#"
        SELECT t.id, t.name, t.description, COUNT(m.user_id) AS member_count
        FROM teams t
        LEFT JOIN team_members m ON m.team_id = t.id
        GROUP BY t.id, t.name, t.description
        ORDER BY t.name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Fetch a team with its member roster. NotFound if the team does not exist.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Team, AppError> {
    let row = sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, name, description, created_at
        FROM teams
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found("Team not found"))?;

    let members = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.name, u.display_name, u.fully_qualified_name, u.email
        FROM users u
        JOIN team_members m ON m.user_id = u.id
        WHERE m.team_id = $1
        ORDER BY u.name, u.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(Team {
        id: row.id,
        name: row.name,
        description: row.description,
        created_at: row.created_at,
        members,
    })
}

/// Add users to a team. Returns the number of memberships inserted.
///
/// An id that is already a member trips the `team_members` primary key
/// (23505), which `error_convert` surfaces as a Conflict; an id with no
/// user row trips the foreign key (23503) and surfaces as a BadRequest.
pub async fn add_members(
    pool: &Pool<Postgres>,
    team_id: Uuid,
    user_ids: &[Uuid],
) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO team_members (team_id, user_id)
        SELECT $1, u.id FROM UNNEST($2::uuid[]) AS u(id)
        "#,
    )
    .bind(team_id)
    .bind(user_ids)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected())
}

/// Remove a user from a team. Returns true if a membership row was deleted.
pub async fn remove_member(
    pool: &Pool<Postgres>,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND user_id = $2")
        .bind(team_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
