//! Console for a Lens3 registrar: list, make and delete pools, and manage the
//! buckets and access keys inside them.
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

/// Registrar client and wire types
pub mod api;
/// Command line interface
pub mod cli;
/// Persistent configuration
pub mod config;
/// View-state, reconciliation and rendering
pub mod console;
