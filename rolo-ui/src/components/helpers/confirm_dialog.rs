//! Confirm dialog view component
//!
//! Pure, props-based: the caller owns `is_open` and closes the dialog when it
//! receives either callback.

use crate::components::icons::{AlertTriangleIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

/// Severity of the confirm action. Only changes styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmVariant {
    #[default]
    Danger,
    Warning,
    Success,
}

impl ConfirmVariant {
    pub fn button_variant(self) -> ButtonVariant {
        match self {
            ConfirmVariant::Danger => ButtonVariant::Danger,
            ConfirmVariant::Warning => ButtonVariant::Warning,
            ConfirmVariant::Success => ButtonVariant::Success,
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            ConfirmVariant::Danger => "w-5 h-5 text-red-400",
            ConfirmVariant::Warning => "w-5 h-5 text-amber-400",
            ConfirmVariant::Success => "w-5 h-5 text-emerald-400",
        }
    }
}

/// Interactive controls of the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogControl {
    Confirm,
    Cancel,
    /// The × button in the header
    Dismiss,
}

/// Callback fired for a control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

impl DialogControl {
    pub fn outcome(self) -> DialogOutcome {
        match self {
            DialogControl::Confirm => DialogOutcome::Confirmed,
            DialogControl::Cancel | DialogControl::Dismiss => DialogOutcome::Cancelled,
        }
    }
}

/// A generic confirmation dialog view
#[component]
pub fn ConfirmDialogView(
    is_open: bool,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default)] variant: ConfirmVariant,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let resolve = move |control: DialogControl| match control.outcome() {
        DialogOutcome::Confirmed => on_confirm.call(()),
        DialogOutcome::Cancelled => on_cancel.call(()),
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000]",
            "data-testid": "confirm-dialog",
            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                role: "alertdialog",
                aria_modal: "true",
                div { class: "flex items-start justify-between mb-4",
                    h2 { class: "flex items-center gap-2 text-xl font-bold text-white",
                        AlertTriangleIcon { class: variant.icon_class() }
                        "{title}"
                    }
                    ChromelessButton {
                        class: Some("text-gray-400 hover:text-white rounded p-1".to_string()),
                        aria_label: Some("Close".to_string()),
                        test_id: Some("confirm-dialog-dismiss".to_string()),
                        onclick: move |_| resolve(DialogControl::Dismiss),
                        XIcon { class: "w-5 h-5" }
                    }
                }
                p { class: "text-gray-300 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        test_id: Some("confirm-dialog-cancel".to_string()),
                        onclick: move |_| resolve(DialogControl::Cancel),
                        "{cancel_label}"
                    }
                    Button {
                        variant: variant.button_variant(),
                        size: ButtonSize::Medium,
                        test_id: Some("confirm-dialog-confirm".to_string()),
                        onclick: move |_| resolve(DialogControl::Confirm),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
