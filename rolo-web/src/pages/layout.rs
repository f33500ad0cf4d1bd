use crate::components::{AppBreadcrumb, GlobalLoadingOverlay};
use crate::Route;
use dioxus::prelude::*;

struct NavEntry {
    label: &'static str,
    to: Route,
}

fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Dashboard",
            to: Route::Dashboard {},
        },
        NavEntry {
            label: "Users",
            to: Route::Users {},
        },
        NavEntry {
            label: "Contacts",
            to: Route::ContactListing {},
        },
        NavEntry {
            label: "My List",
            to: Route::MyList {},
        },
        NavEntry {
            label: "Settings",
            to: Route::Settings {},
        },
    ]
}

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "bg-gray-800 border-b border-gray-700",
                nav { class: "container mx-auto px-6 py-3 flex items-center gap-6",
                    span { class: "font-bold text-lg mr-4", "rolo" }
                    for entry in nav_entries() {
                        NavLink {
                            key: "{entry.label}",
                            label: entry.label,
                            is_active: is_section_active(&current_route, &entry.to),
                            to: entry.to,
                        }
                    }
                }
            }
            main { class: "container mx-auto p-6",
                AppBreadcrumb {}
                Outlet::<Route> {}
            }
            GlobalLoadingOverlay {}
        }
    }
}

#[component]
fn NavLink(label: &'static str, to: Route, is_active: bool) -> Element {
    let class = if is_active {
        "text-white"
    } else {
        "text-gray-400 hover:text-white transition-colors"
    };

    rsx! {
        Link { to, class: "{class}", "{label}" }
    }
}

fn is_section_active(current: &Route, entry: &Route) -> bool {
    match (current, entry) {
        (Route::ContactDetail { .. }, Route::ContactListing {}) => true,
        _ => current == entry,
    }
}
