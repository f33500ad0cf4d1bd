//! Global loading overlay
//!
//! Shows a full-screen loader whenever the shared loading flag is set.

use dioxus::prelude::*;
use rolo_ui::{use_loading, LoaderSize, LoadingState};

#[component]
pub fn GlobalLoadingOverlay() -> Element {
    let Ok(loading) = use_loading() else {
        return rsx! {};
    };

    if !loading.is_loading() {
        return rsx! {};
    }

    rsx! {
        LoadingState { message: "Working...", size: LoaderSize::Large, full_screen: true }
    }
}
