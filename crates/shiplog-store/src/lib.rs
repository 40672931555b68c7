//! Shiplog Store - Durable entry storage for the shiplog changelog editor
//!
//! This crate owns the authoritative list of changelog entries. Every
//! mutation loads the full document, applies one change, and rewrites the
//! document as a whole, so the persisted state is never partially written.

pub mod entry;
pub mod store;

pub use entry::{Entry, Operation};
pub use store::EntryStore;
