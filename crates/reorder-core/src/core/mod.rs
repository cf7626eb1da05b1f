//! # Core Module
//!
//! Stateless building blocks for editing LAMMPS data files.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - The line buffer, section extents, symbol tables, the
//!   requested order and the resulting id mapping
//! - **File I/O** ([`io`]) - Byte-exact reading and atomic whole-file writing
//!
//! Nothing in this module interprets the physics of a file. Lines that are not part of a
//! section being renumbered are carried through untouched.

pub mod io;
pub mod models;
