/// State management module
///
/// This module holds all gallery state, including:
/// - The static photo catalog and category set (catalog.rs)
/// - The filter engine and derived filtered view (filter.rs)
/// - The modal controller state machine (modal.rs)
/// - The logical focus model and containment helpers (focus.rs)
pub mod catalog;
pub mod filter;
pub mod focus;
pub mod modal;
