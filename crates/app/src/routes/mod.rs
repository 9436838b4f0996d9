pub mod not_found;
pub mod teams;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUsers;
use dioxus_free_icons::Icon;

use not_found::NotFound;
use teams::detail::TeamDetailPage;
use teams::list::TeamListPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    TeamListPage {},
    #[route("/teams/:id")]
    TeamDetailPage { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with the top navigation bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::TeamListPage {} => "Teams",
        Route::TeamDetailPage { .. } => "Team",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "topbar",
            Link { to: Route::TeamListPage {}, class: "topbar-brand", "Quorum" }
            nav { class: "topbar-nav",
                Link {
                    to: Route::TeamListPage {},
                    class: if matches!(route, Route::TeamListPage {}) { "topbar-link active" } else { "topbar-link" },
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                    "Teams"
                }
            }
            span { class: "topbar-page-title", "{page_title}" }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
