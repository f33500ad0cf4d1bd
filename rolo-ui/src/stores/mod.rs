//! Store types for UI state management
//!
//! These stores hold UI state shared across a component subtree through
//! Dioxus context. Handles are `Copy` signal wrappers owned by a provider scope.

pub mod loading;

pub use loading::*;
