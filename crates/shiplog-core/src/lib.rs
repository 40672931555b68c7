//! Shiplog Core - Core library for the shiplog changelog editor
//!
//! This crate provides the error types and configuration system shared by
//! the store, report, and CLI crates.

pub mod config;
pub mod error;

pub use error::{ConfigError, ReportError, Result, ShiplogError, StoreError};
