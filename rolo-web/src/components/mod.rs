//! App-side wrappers that bridge router and context state into rolo-ui views

mod breadcrumb;
mod loading_overlay;

pub use breadcrumb::AppBreadcrumb;
pub use loading_overlay::GlobalLoadingOverlay;
