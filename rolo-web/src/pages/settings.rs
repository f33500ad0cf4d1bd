use crate::timers::sleep_ms;
use dioxus::prelude::*;
use rolo_ui::{
    use_loading, Button, ButtonSize, ButtonVariant, Loader, LoaderSize, LoaderVariant,
    LoadingState,
};

/// How long the overlay preview stays up
const PREVIEW_MS: u64 = 1500;

const SIZES: [LoaderSize; 3] = [LoaderSize::Small, LoaderSize::Medium, LoaderSize::Large];

#[component]
pub fn Settings() -> Element {
    let loading = use_loading();
    let mut variant = use_signal(LoaderVariant::default);

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Settings" }

        section { class: "mb-8",
            h2 { class: "text-lg font-semibold mb-3", "Loading indicator" }
            label { class: "flex items-center gap-3 mb-4 text-sm text-gray-400",
                "Style"
                select {
                    class: "bg-gray-700 text-gray-300 text-sm rounded px-2 py-1 border border-gray-600",
                    value: "{variant}",
                    onchange: move |e| variant.set(LoaderVariant::from_name(Some(e.value().as_str()))),
                    option { value: "spinner", "Spinner" }
                    option { value: "pulse", "Pulse" }
                    option { value: "skeleton", "Skeleton" }
                }
            }
            div { class: "flex items-end gap-8 p-6 bg-gray-800 rounded-lg",
                for size in SIZES {
                    div { key: "{size}", class: "flex flex-col items-center gap-2",
                        Loader { size, variant: variant() }
                        span { class: "text-xs text-gray-500", "{size}" }
                    }
                }
            }
            LoadingState { message: "Preview message", variant: variant() }
        }

        section {
            h2 { class: "text-lg font-semibold mb-3", "Global overlay" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                disabled: loading.is_err(),
                onclick: move |_| {
                    let Ok(loading) = loading else {
                        return;
                    };
                    loading.start_loading();
                    spawn(async move {
                        sleep_ms(PREVIEW_MS).await;
                        loading.stop_loading();
                    });
                },
                "Preview overlay"
            }
        }
    }
}
