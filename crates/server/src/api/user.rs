use dioxus::prelude::*;
use shared_types::{CursorPage, SearchPage, User};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── User Directory Server Functions ────────────────────

/// One page of the user directory, ordered by name.
///
/// `after` is the opaque cursor from the previous page's `paging.after`;
/// omit it for the first page. A response with `paging.after == None`
/// means the directory is exhausted.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users(
    limit: Option<i64>,
    after: Option<String>,
) -> Result<CursorPage<User>, ServerFnError> {
    use crate::cursor::UserCursor;
    use crate::repo::user;
    use shared_types::{normalize_page_size, Paging};

    let pool = get_db().await;
    let limit = normalize_page_size(limit);

    let cursor = match after {
        Some(token) => Some(UserCursor::decode(&token).map_err(|e| e.into_server_fn_error())?),
        None => None,
    };

    let page = user::list(pool, limit, cursor)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(CursorPage {
        data: page.users,
        paging: Paging {
            after: page.next.map(|c| c.encode()),
        },
    })
}

/// Full-text search over the user directory. `page` starts at 1.
///
/// Returns one page of hits plus the total hit count, so the client can
/// tell whether further pages exist (`page * page_size < total`).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_users(
    query: String,
    page: usize,
    page_size: usize,
) -> Result<SearchPage<User>, ServerFnError> {
    use shared_types::PAGE_SIZE_MAX;

    // Ensure DB + search index are initialized.
    let _pool = get_db().await;
    let index = crate::search::get_search();

    let page = page.max(1);
    let page_size = page_size.clamp(1, PAGE_SIZE_MAX as usize);

    let hits = index
        .search(&query, page, page_size)
        .map_err(|e| e.into_server_fn_error())?;

    Ok(SearchPage {
        data: hits.users,
        total: hits.total,
    })
}
