//! Common helper UI components

mod confirm_dialog;
mod loader;
mod loading_state;

pub use confirm_dialog::{ConfirmDialogView, ConfirmVariant, DialogControl, DialogOutcome};
pub use loader::{Loader, LoaderSize, LoaderVariant, ParseLoaderError};
pub use loading_state::LoadingState;
