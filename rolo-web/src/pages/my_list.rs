use crate::demo_data::{self, Contact};
use dioxus::prelude::*;
use rolo_ui::{Button, ButtonSize, ButtonVariant, ConfirmDialogView, ConfirmVariant};

#[component]
pub fn MyList() -> Element {
    let mut saved = use_signal(|| {
        demo_data::contacts()
            .into_iter()
            .take(3)
            .collect::<Vec<Contact>>()
    });
    let mut confirm_clear = use_signal(|| false);

    rsx! {
        div { class: "flex items-center justify-between mb-6",
            h1 { class: "text-2xl font-bold", "My List" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: saved.read().is_empty(),
                onclick: move |_| confirm_clear.set(true),
                "Clear list"
            }
        }
        if saved.read().is_empty() {
            p { class: "text-gray-400", "Your list is empty." }
        }
        ul { class: "divide-y divide-gray-800",
            for contact in saved() {
                li { key: "{contact.id}", class: "py-3", "{contact.name}" }
            }
        }
        ConfirmDialogView {
            is_open: confirm_clear(),
            title: "Clear your list?",
            message: "Saved contacts stay in the database; only your list is emptied.",
            confirm_label: "Clear",
            cancel_label: "Keep",
            variant: ConfirmVariant::Warning,
            on_cancel: move |_| confirm_clear.set(false),
            on_confirm: move |_| {
                saved.set(Vec::new());
                confirm_clear.set(false);
            },
        }
    }
}
