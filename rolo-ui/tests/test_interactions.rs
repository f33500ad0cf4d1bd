mod support;

use std::cell::{Cell, RefCell};

use dioxus::prelude::*;
use rolo_ui::{BreadcrumbView, ConfirmDialogView};
use support::{tracing_init, MountedDom};

thread_local! {
    static CONFIRMS: Cell<usize> = const { Cell::new(0) };
    static CANCELS: Cell<usize> = const { Cell::new(0) };
    static NAVIGATED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

/// (on_confirm calls, on_cancel calls)
fn dialog_calls() -> (usize, usize) {
    (CONFIRMS.with(Cell::get), CANCELS.with(Cell::get))
}

fn counting_dialog() -> Element {
    rsx! {
        ConfirmDialogView {
            is_open: true,
            title: "Delete user?",
            message: "This cannot be undone.",
            on_confirm: |_| bump(&CONFIRMS),
            on_cancel: |_| bump(&CANCELS),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TrailProps {
    path: String,
}

fn recording_trail(props: TrailProps) -> Element {
    rsx! {
        BreadcrumbView {
            path: props.path,
            on_navigate: |href: String| NAVIGATED.with(|n| n.borrow_mut().push(href)),
        }
    }
}

fn mount_trail(path: &str) -> MountedDom {
    MountedDom::with_props(
        recording_trail,
        TrailProps {
            path: path.to_string(),
        },
    )
}

fn navigated() -> Vec<String> {
    NAVIGATED.with(|n| n.borrow().clone())
}

// =============================================================================
// ConfirmDialogView
// =============================================================================

#[test]
fn confirm_click_fires_only_on_confirm() {
    tracing_init();
    let mut mounted = MountedDom::new(counting_dialog);
    mounted.click("data-testid", "confirm-dialog-confirm");
    assert_eq!(dialog_calls(), (1, 0));
}

#[test]
fn cancel_click_fires_only_on_cancel() {
    tracing_init();
    let mut mounted = MountedDom::new(counting_dialog);
    mounted.click("data-testid", "confirm-dialog-cancel");
    assert_eq!(dialog_calls(), (0, 1));
}

#[test]
fn dismiss_click_fires_on_cancel() {
    tracing_init();
    let mut mounted = MountedDom::new(counting_dialog);
    mounted.click("data-testid", "confirm-dialog-dismiss");
    assert_eq!(dialog_calls(), (0, 1));
}

#[test]
fn every_control_resolves_exactly_once_per_click() {
    tracing_init();
    let mut mounted = MountedDom::new(counting_dialog);
    mounted.click("data-testid", "confirm-dialog-dismiss");
    mounted.click("data-testid", "confirm-dialog-cancel");
    mounted.click("data-testid", "confirm-dialog-confirm");
    mounted.click("data-testid", "confirm-dialog-confirm");
    assert_eq!(dialog_calls(), (2, 2));
    // The dialog does not close itself
    assert!(mounted.html().contains("Delete user?"));
}

// =============================================================================
// BreadcrumbView
// =============================================================================

#[test]
fn breadcrumb_link_click_emits_its_ancestor_path() {
    tracing_init();
    let mut mounted = mount_trail("/contacts/detail/42");
    mounted.click("href", "/contacts");
    assert_eq!(navigated(), vec!["/contacts".to_string()]);

    mounted.click("href", "/contacts/detail");
    assert_eq!(
        navigated(),
        vec!["/contacts".to_string(), "/contacts/detail".to_string()]
    );
}

#[test]
fn breadcrumb_current_segment_has_no_link() {
    tracing_init();
    let mounted = mount_trail("/contacts/detail/42");
    assert!(mounted.element_with("href", "/contacts/detail/42").is_none());
    assert!(navigated().is_empty());
}
