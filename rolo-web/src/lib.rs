//! rolo web - contact database front-end
//!
//! Hosts the rolo-ui components behind a router. The whole tree sits inside
//! a `LoadingProvider` so any page can raise the global loading overlay.

pub mod components;
pub mod demo_data;
pub mod pages;
mod timers;

use dioxus::prelude::*;
use pages::{
    AppLayout, ContactDetail, ContactListing, Dashboard, MyList, NotFound, Settings, Users,
};
use rolo_ui::LoadingProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[redirect("/admin", || Route::Dashboard {})]
        #[route("/admin/dashboard")]
        Dashboard {},
        #[route("/admin/users")]
        Users {},
        #[redirect("/contacts", || Route::ContactListing {})]
        #[redirect("/contacts/detail", || Route::ContactListing {})]
        #[route("/contacts/listing")]
        ContactListing {},
        #[route("/contacts/detail/:contact_id")]
        ContactDetail { contact_id: String },
        #[route("/my-list")]
        MyList {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        LoadingProvider {
            div { class: "min-h-screen", Router::<Route> {} }
        }
    }
}
