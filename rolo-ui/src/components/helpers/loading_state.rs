//! Loading state component

use super::loader::{Loader, LoaderSize, LoaderVariant};
use dioxus::prelude::*;

/// Loader with a message underneath
#[component]
pub fn LoadingState(
    /// Message to display under the loader (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
    #[props(default)] size: LoaderSize,
    #[props(default)] variant: LoaderVariant,
    #[props(default)] full_screen: bool,
) -> Element {
    let body = rsx! {
        div { class: "flex flex-col items-center gap-4 py-12",
            Loader { size, variant }
            p { class: "text-gray-300", "data-testid": "loading-message", "{message}" }
        }
    };

    if full_screen {
        return rsx! {
            div { class: "fixed inset-0 z-[4000] flex items-center justify-center bg-gray-900/80",
                {body}
            }
        };
    }

    body
}
