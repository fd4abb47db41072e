//! # Core Module
//!
//! The stateless foundation of nucmass: the nucleus value type, the parameters of the
//! semi-empirical mass formula, its individual terms, and file I/O for nuclide lists.
//!
//! ## Architecture
//!
//! - **Nuclear Representation** ([`models`]) - The [`Nucleus`](models::nucleus::Nucleus)
//!   value type and the element symbol table
//! - **Mass Formula** ([`formula`]) - Coefficients, formula terms and the binding energy breakdown
//! - **File I/O** ([`io`]) - Reading nuclide lists and writing result tables as CSV
//!
//! Everything in this layer is a pure function of its inputs. No module keeps state between
//! calls, so any computation may be repeated or run concurrently with identical results.

pub mod formula;
pub mod io;
pub mod models;
