//! Breadcrumb trail derived from the current path

use crate::components::icons::ChevronRightIcon;
use crate::display_types::BreadcrumbSegment;
use dioxus::prelude::*;

/// Display names for known path segments
const ROUTE_LABELS: &[(&str, &str)] = &[
    ("admin", "Admin"),
    ("dashboard", "Dashboard"),
    ("users", "User Management"),
    ("contacts", "Contact Database"),
    ("listing", "Contact Search"),
    ("detail", "Contact Details"),
    ("my-list", "My List"),
    ("settings", "Settings"),
];

/// Configured label for a path segment, if it has one
pub fn route_label(segment: &str) -> Option<&'static str> {
    ROUTE_LABELS
        .iter()
        .find(|(name, _)| *name == segment)
        .map(|(_, label)| *label)
}

/// Label shown for a segment: the configured name, else the segment with its
/// first character uppercased.
pub fn segment_label(segment: &str) -> String {
    if let Some(label) = route_label(segment) {
        return label.to_string();
    }
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a path into breadcrumb segments.
///
/// Empty tokens (leading, trailing or doubled slashes) are dropped. Each
/// segment's href is the path of the segment and its ancestors.
pub fn breadcrumb_segments(path: &str) -> Vec<BreadcrumbSegment> {
    let names: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let last = names.len().saturating_sub(1);

    let mut href = String::new();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            href.push('/');
            href.push_str(name);
            BreadcrumbSegment {
                name: name.to_string(),
                label: segment_label(name),
                href: href.clone(),
                is_current: i == last,
            }
        })
        .collect()
}

/// Breadcrumb navigation view
///
/// Every segment except the last is a link; clicking one emits its href
/// through `on_navigate`. Renders nothing for the root path.
#[component]
pub fn BreadcrumbView(
    /// Current path, e.g. `/contacts/listing`
    path: String,
    /// Called with the href of the clicked segment
    on_navigate: EventHandler<String>,
) -> Element {
    let segments = breadcrumb_segments(&path);
    if segments.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "flex items-center text-sm text-gray-400 mb-4",
            aria_label: "Breadcrumb",
            "data-testid": "breadcrumb",
            ol { class: "flex items-center gap-1",
                for (i , segment) in segments.into_iter().enumerate() {
                    li { key: "{segment.href}", class: "flex items-center gap-1",
                        if i > 0 {
                            ChevronRightIcon { class: "w-3.5 h-3.5 text-gray-600" }
                        }
                        if segment.is_current {
                            span {
                                class: "text-white font-medium",
                                aria_current: "page",
                                "data-testid": "breadcrumb-current",
                                "{segment.label}"
                            }
                        } else {
                            a {
                                class: "hover:text-white transition-colors cursor-pointer",
                                href: "{segment.href}",
                                "data-testid": "breadcrumb-link",
                                onclick: {
                                    let href = segment.href.clone();
                                    move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_navigate.call(href.clone());
                                    }
                                },
                                "{segment.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
