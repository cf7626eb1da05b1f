//! # Core Models Module
//!
//! Data structures describing a LAMMPS data file and the type relabeling applied to it.
//!
//! ## Key Components
//!
//! - [`document`] - Line buffer that preserves every byte of the source text, plus splicing
//! - [`section`] - Named sections, their header patterns and their line extents
//! - [`symbols`] - Type-id to symbol associations and per-type masses
//! - [`order`] - The requested symbol order
//! - [`mapping`] - The old-to-new type id bijection
//!
//! ## Usage
//!
//! ```
//! use lmpreorder::core::models::{document::Document, order::TypeOrder};
//!
//! let doc = Document::from_text("Masses\n\n1 12.011 # C\n");
//! assert_eq!(doc.len(), 3);
//!
//! let order = TypeOrder::parse("H, C").unwrap();
//! assert_eq!(order.new_id_of("C"), Some(2));
//! ```

pub mod document;
pub mod mapping;
pub mod order;
pub mod section;
pub mod symbols;
