//! Breadcrumb wrapper
//!
//! Thin wrapper that bridges the current route to BreadcrumbView.

use crate::Route;
use dioxus::prelude::*;
use rolo_ui::BreadcrumbView;

#[component]
pub fn AppBreadcrumb() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        BreadcrumbView {
            path,
            on_navigate: move |href: String| match href.parse::<Route>() {
                Ok(route) => {
                    navigator().push(route);
                }
                Err(e) => {
                    tracing::warn!("Breadcrumb link {} is not a route: {}", href, e);
                }
            },
        }
    }
}
