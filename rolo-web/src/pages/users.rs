use crate::demo_data::{self, User};
use crate::timers::sleep_ms;
use dioxus::prelude::*;
use rolo_ui::{use_loading, Button, ButtonSize, ButtonVariant, ConfirmDialogView};

/// Simulated round trip for deleting a user
const DELETE_DELAY_MS: u64 = 600;

#[component]
pub fn Users() -> Element {
    let loading = use_loading();
    let mut users = use_signal(demo_data::users);
    let mut pending_delete = use_signal(|| None::<User>);

    let is_open = pending_delete.read().is_some();
    let message = pending_delete()
        .map(|u| format!("{} will lose access to the contact database.", u.name))
        .unwrap_or_default();

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "User Management" }
        table { class: "w-full text-left",
            thead {
                tr { class: "text-gray-400 text-sm",
                    th { class: "py-2", "Name" }
                    th { class: "py-2", "Role" }
                    th {}
                }
            }
            tbody {
                for user in users() {
                    tr { key: "{user.id}", class: "border-t border-gray-800",
                        td { class: "py-2", "{user.name}" }
                        td { class: "py-2 text-gray-400", "{user.role}" }
                        td { class: "py-2 text-right",
                            Button {
                                variant: ButtonVariant::Danger,
                                size: ButtonSize::Small,
                                onclick: {
                                    let user = user.clone();
                                    move |_| pending_delete.set(Some(user.clone()))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
        ConfirmDialogView {
            is_open,
            title: "Delete user?",
            message,
            confirm_label: "Delete",
            on_cancel: move |_| pending_delete.set(None),
            on_confirm: move |_| {
                let Some(user) = pending_delete.take() else {
                    return;
                };
                let Ok(loading) = loading else {
                    users.with_mut(|list| list.retain(|u| u.id != user.id));
                    return;
                };
                loading.start_loading();
                spawn(async move {
                    sleep_ms(DELETE_DELAY_MS).await;
                    users.with_mut(|list| list.retain(|u| u.id != user.id));
                    tracing::info!("Deleted user {}", user.id);
                    loading.stop_loading();
                });
            },
        }
    }
}
