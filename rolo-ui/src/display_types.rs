//! Display types for UI components
//!
//! Lightweight values derived from host state, containing only the fields
//! needed for display. They keep the view components props-based.

/// One entry of a breadcrumb trail
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    /// Raw path segment, e.g. `my-list`
    pub name: String,
    /// Label shown to the user
    pub label: String,
    /// Path of this segment and all of its ancestors, e.g. `/contacts/listing`
    pub href: String,
    /// The last segment is the current page and is not navigable
    pub is_current: bool,
}
