use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-gray-400", "Nothing lives at {path}." }
            Link { to: Route::Dashboard {}, class: "text-indigo-400 hover:text-indigo-300",
                "Back to dashboard"
            }
        }
    }
}
