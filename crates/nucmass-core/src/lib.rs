//! # nucmass Core Library
//!
//! Semi-empirical nuclear properties for individual nuclei, computed from the
//! Weizsäcker (Bethe–Weizsäcker) mass formula: binding energy per nucleon, neutral
//! atomic mass, nuclear radius, an N/Z beta-stability heuristic and an even-even
//! parity check.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** The immutable [`Nucleus`](core::models::nucleus::Nucleus)
//!   value type, the per-nucleus result record (`NuclearProperties`), the formula
//!   coefficients ([`MassModel`](core::formula::model::MassModel)), the individual formula
//!   terms and CSV I/O for nuclide lists and result tables.
//!
//! - **[`engine`]: Evaluation support.** Validated configuration (`ReportConfig`), progress
//!   reporting and the error taxonomy.
//!
//! - **[`workflows`]: The Public API.** Evaluates a list of nuclei in one pass and
//!   exposes the report lines and plot series to front-ends such as the CLI.
//!
//! ## Example
//!
//! ```
//! use nucmass::core::models::nucleus::Nucleus;
//!
//! let uranium = Nucleus::new(238, 92);
//! assert_eq!(uranium.neutron_number(), 146);
//! assert!(uranium.is_stable_to_beta_decay());
//! assert!(uranium.is_even_even_fission_possible());
//! assert!((uranium.nuclear_radius() - 7.4366).abs() < 1e-3);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
