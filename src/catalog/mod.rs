/// Project catalog module
///
/// This module owns the static project table:
/// - Record types shared with the UI (data.rs)
/// - Loading, validation, and lookups (store.rs)

pub mod data;
pub mod store;
