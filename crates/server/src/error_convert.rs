use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a sqlx::Error into an AppError.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation (error code 23505)
            if db_err.code().as_deref() == Some("23505") {
                let detail = db_err.message();
                let friendly = if detail.contains("team_members") {
                    "One of the selected users is already a member of this team"
                } else if detail.contains("teams_name") {
                    "A team with this name already exists"
                } else {
                    "A record with this value already exists"
                };
                return AppError::conflict(friendly);
            }
            // Foreign key violation (error code 23503), e.g. a membership
            // referencing a user row that no longer exists.
            if db_err.code().as_deref() == Some("23503") {
                return AppError::bad_request("Request references a record that does not exist");
            }
            AppError::database(err.to_string())
        }
        _ => AppError::database(err.to_string()),
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
