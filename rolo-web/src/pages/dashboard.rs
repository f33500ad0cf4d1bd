use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let contact_count = demo_data::contacts().len();
    let user_count = demo_data::users().len();

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Dashboard" }
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            SummaryCard {
                title: "Contacts",
                value: contact_count,
                to: Route::ContactListing {},
            }
            SummaryCard { title: "Users", value: user_count, to: Route::Users {} }
        }
    }
}

/// A card-style navigation link with a headline number
#[component]
fn SummaryCard(title: &'static str, value: usize, to: Route) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "text-sm text-gray-400", "{title}" }
            div { class: "text-3xl font-bold", "{value}" }
        }
    }
}
