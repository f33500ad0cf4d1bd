//! Shared UI components

pub mod breadcrumb;
pub mod button;
pub mod helpers;
pub mod icons;

pub use breadcrumb::{breadcrumb_segments, route_label, segment_label, BreadcrumbView};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::{
    ConfirmDialogView, ConfirmVariant, DialogControl, DialogOutcome, Loader, LoaderSize,
    LoaderVariant, LoadingState, ParseLoaderError,
};
pub use icons::{AlertTriangleIcon, ChevronRightIcon, XIcon};
