use dioxus::prelude::*;

mod format_helpers;
mod picker;
mod routes;

use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
        use tower_http::trace::TraceLayer;

        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let search = server::search::init_search();
        server::search::build_index(&pool, search).await;

        let health_routes = axum::Router::new()
            .route("/health", axum::routing::get(server::health::health_check))
            .with_state(pool);

        let router = dioxus::server::router(App)
            .merge(health_routes)
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "route-loading", "Loading\u{2026}" }
                },
                Router::<Route> {}
            }
        }
    }
}
