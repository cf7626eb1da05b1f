//! # Workflows Module
//!
//! High-level entry points that run a complete reorder over an in-memory document.
//!
//! - **Reorder Workflow** ([`reorder`]) - Locates sections, builds the type mapping, remaps
//!   the `Atoms` (and optionally coefficient) sections and regenerates the metadata sections,
//!   returning the edited document together with a [`reorder::ReorderReport`].
//!
//! Workflows never touch the filesystem; reading and writing go through
//! [`crate::core::io`].

pub mod reorder;
