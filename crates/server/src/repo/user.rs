use shared_types::{AppError, User};
use sqlx::{Pool, Postgres};

use crate::cursor::UserCursor;
use crate::error_convert::SqlxErrorExt;

/// One page of the user directory plus the cursor for the next page, if any.
#[derive(Debug)]
pub struct UserPage {
    pub users: Vec<User>,
    pub next: Option<UserCursor>,
}

/// List users ordered by `(name, id)`, starting after the given cursor.
///
/// Fetches one row beyond `limit` to decide whether another page exists;
/// the extra row is dropped and its predecessor becomes the next cursor.
pub async fn list(
    pool: &Pool<Postgres>,
    limit: i64,
    after: Option<UserCursor>,
) -> Result<UserPage, AppError> {
    let mut users: Vec<User> = match after {
        Some(cursor) => {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, display_name, fully_qualified_name, email
                FROM users
                WHERE (name, id) > ($1, $2)
                ORDER BY name, id
                LIMIT $3
                "#,
            )
            .bind(&cursor.name)
            .bind(cursor.id)
            .bind(limit + 1)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, display_name, fully_qualified_name, email
                FROM users
                ORDER BY name, id
                LIMIT $1
                "#,
            )
            .bind(limit + 1)
            .fetch_all(pool)
            .await
        }
    }
    .map_err(SqlxErrorExt::into_app_error)?;

    let next = if users.len() as i64 > limit {
        users.truncate(limit as usize);
        users.last().map(|u| UserCursor {
            name: u.name.clone(),
            id: u.id,
        })
    } else {
        None
    };

    Ok(UserPage { users, next })
}

/// Fetch every user. Used to build the search index at startup.
pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<User>, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, display_name, fully_qualified_name, email
        FROM users
        ORDER BY name, id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
