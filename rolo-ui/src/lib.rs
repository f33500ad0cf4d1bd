//! rolo-ui - Shared UI types and components for rolo
//!
//! Contains display types, the shared loading store, and pure view
//! components used by the web app.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
pub use stores::*;
