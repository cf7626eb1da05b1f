//! # Engine Module
//!
//! The algorithms that turn a parsed data file and a requested type order into an edited
//! document. Every step works on a [`Document`](crate::core::models::document::Document)
//! and reports failures through [`error::EngineError`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The per-run settings and their builder
//! - **Section Location** ([`locate`]) - Header lookup for the known section kinds
//! - **Metadata** ([`metadata`]) - Type labels, masses and the declared type count
//! - **Mapping** ([`mapping`]) - Old-to-new type id mapping from a symbol order
//! - **Remapping** ([`remap`]) - In-place renumbering of type columns
//! - **Detection** ([`detect`]) - Fallback inference of the `Atoms` type column
//! - **Rewriting** ([`rewrite`]) - Regeneration of the `Atom Type Labels` and `Masses` bodies
//! - **Progress Monitoring** ([`progress`]) - Progress reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod detect;
pub mod error;
pub mod locate;
pub mod mapping;
pub mod metadata;
pub mod progress;
pub mod remap;
pub mod rewrite;
