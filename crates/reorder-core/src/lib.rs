//! # lmpreorder
//!
//! Reorders the atom types of a LAMMPS data file to follow a requested symbol order,
//! renumbering every reference to a type id while leaving the rest of the file byte-for-byte
//! intact.
//!
//! ## Architecture
//!
//! The library is split into three layers:
//!
//! - **[`core`]: The Foundation.** Line-preserving document model, section kinds, type
//!   symbol and mass tables, id mappings, and file I/O.
//!
//! - **[`engine`]: The Logic Core.** Section location, metadata reading, mapping
//!   construction, column remapping and detection, and metadata rewriting.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a single
//!   reorder run with progress reporting and a structured report.
//!
//! ```
//! use lmpreorder::core::models::document::Document;
//! use lmpreorder::core::models::order::TypeOrder;
//! use lmpreorder::engine::config::ReorderConfigBuilder;
//! use lmpreorder::engine::progress::ProgressReporter;
//! use lmpreorder::workflows::reorder;
//!
//! let doc = Document::from_text(
//!     "LAMMPS data file\n\nAtom Type Labels\n\n1 Co\n2 Ni\n\nAtoms\n\n1 1 0 0 0\n",
//! );
//! let config = ReorderConfigBuilder::new()
//!     .order(TypeOrder::parse("Ni Co").unwrap())
//!     .build()
//!     .unwrap();
//! let result = reorder::run(&doc, &config, &ProgressReporter::new()).unwrap();
//! assert!(result.document.to_text().ends_with("1 2 0 0 0\n"));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
