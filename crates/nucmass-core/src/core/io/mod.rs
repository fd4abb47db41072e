//! # I/O Module
//!
//! CSV input of nuclide lists and CSV output of evaluated result tables.
//!
//! - [`nuclides`] - `read_nuclides` parses an `a,z` table into [`Nucleus`](crate::core::models::nucleus::Nucleus)
//!   values; `write_report` serializes [`NuclearProperties`](crate::core::models::properties::NuclearProperties)

pub mod nuclides;
