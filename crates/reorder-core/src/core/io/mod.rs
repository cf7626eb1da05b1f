//! Provides input/output for LAMMPS data files.
//!
//! Files are read as raw text into a [`Document`](crate::core::models::document::Document)
//! and written back whole. The [`traits::DataFile`] trait supplies path-based helpers whose
//! writes replace the destination atomically.

pub mod lammps;
pub mod traits;
