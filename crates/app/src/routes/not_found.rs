use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for paths that match no route.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let requested = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        section { class: "missing-route",
            p { class: "missing-route-code", "404" }
            h1 { class: "missing-route-title",
                "Nothing lives at "
                code { "{requested}" }
            }
            p { class: "missing-route-hint",
                "Check the address, or head back to the team index."
            }
            Link { to: Route::TeamListPage {}, class: "missing-route-link", "Go to Teams" }
        }
    }
}
