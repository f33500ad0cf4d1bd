use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn ContactListing() -> Element {
    let mut query = use_signal(String::new);

    let needle = query().to_lowercase();
    let matches: Vec<_> = demo_data::contacts()
        .into_iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.company.to_lowercase().contains(&needle)
        })
        .collect();

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Contact Search" }
        input {
            class: "w-full mb-4 px-3 py-2 rounded-lg bg-gray-800 border border-gray-700 text-white",
            placeholder: "Search by name or company",
            value: "{query}",
            oninput: move |e| query.set(e.value()),
        }
        if matches.is_empty() {
            p { class: "text-gray-400", "No contacts match \"{query}\"." }
        }
        ul { class: "divide-y divide-gray-800",
            for contact in matches {
                li { key: "{contact.id}", class: "py-3",
                    Link {
                        to: Route::ContactDetail {
                            contact_id: contact.id.clone(),
                        },
                        class: "hover:text-white text-gray-200",
                        "{contact.name}"
                    }
                    span { class: "ml-2 text-sm text-gray-500", "{contact.company}" }
                }
            }
        }
    }
}

#[component]
pub fn ContactDetail(contact_id: String) -> Element {
    let Some(contact) = demo_data::find_contact(&contact_id) else {
        return rsx! {
            p { class: "text-gray-400", "No contact with id {contact_id}." }
        };
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-2", "{contact.name}" }
        p { class: "text-gray-400 mb-6", "{contact.company}" }
        dl { class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-2",
            dt { class: "text-gray-500", "Email" }
            dd { "{contact.email}" }
            dt { class: "text-gray-500", "ID" }
            dd { "{contact.id}" }
        }
    }
}
