//! # Core Models Module
//!
//! Data structures describing atomic nuclei.
//!
//! ## Key Components
//!
//! - [`nucleus`] - The immutable [`Nucleus`](nucleus::Nucleus) value with its derived
//!   neutron number and the five formula computations
//! - [`element`] - Chemical symbols for atomic numbers 1 through 118, used for nuclide
//!   notation such as `U-238`
//! - [`properties`] - [`NuclearProperties`](properties::NuclearProperties), the record of
//!   every derived quantity of one nucleus and its one-line report format
//!
//! ## Usage
//!
//! ```
//! use nucmass::core::models::nucleus::Nucleus;
//!
//! let iron: Nucleus = "Fe-56".parse().unwrap();
//! assert_eq!(iron.atomic_number(), 26);
//! assert_eq!(iron.to_string(), "Fe-56");
//! ```

pub mod element;
pub mod nucleus;
pub mod properties;
