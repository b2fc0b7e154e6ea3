//! Menu recommendation engine.
//!
//! Everything here is synchronous and free of shared mutable state; the
//! only input besides the event parameters is the read-only catalog.

pub mod filter;
pub mod menu;
pub mod proportions;
pub mod quantity;
pub mod scoring;
pub mod selector;

pub use menu::generate_menu_recommendation;
