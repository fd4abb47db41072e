//! # Mass Formula Module
//!
//! The Weizsäcker semi-empirical mass formula and the constants it is evaluated with.
//!
//! ## Overview
//!
//! The binding energy of a nucleus with mass number `A` and proton number `Z` is
//! approximated by a sum of five terms:
//!
//! ```text
//! B(A, Z) = a_v·A − a_s·A^(2/3) − a_c·Z²/A^(1/3) − a_a·(A − 2Z)²/A + δ(A, Z)
//! ```
//!
//! - **Volume** - proportional to the number of nucleons
//! - **Surface** - correction for nucleons with fewer neighbours at the surface
//! - **Coulomb** - electrostatic repulsion between protons
//! - **Asymmetry** - penalty for unequal proton and neutron counts
//! - **Pairing** - `+δ₀·A^(−3/4)` for even-even, `−δ₀·A^(−3/4)` for odd-odd, `0` for odd-A
//!
//! ## Key Components
//!
//! - [`model`] - [`MassModel`](model::MassModel): coefficients, particle masses, radius
//!   constant and the beta-stability window, loadable from TOML
//! - [`binding`] - [`BindingTerms`](binding::BindingTerms): the signed contribution of
//!   every term for one nucleus
//! - `terms` - the individual term functions

pub mod binding;
pub mod model;
pub(crate) mod terms;
