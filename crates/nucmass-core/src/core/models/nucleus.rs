use super::element;
use crate::core::formula::binding::BindingTerms;
use crate::core::formula::model::MassModel;
use crate::core::formula::terms;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An atomic nucleus identified by its mass number `A` and atomic number `Z`.
///
/// The neutron number is derived as `N = A − Z`, so `A = Z + N` holds by construction.
/// Construction performs no validation: negative values or `Z > A` are accepted and
/// produce numerically defined but physically meaningless results. The beta-stability
/// check is the only computation that guards against such inputs.
///
/// All computations are pure. Methods without a model argument evaluate against
/// [`MassModel::REFERENCE`]; the `*_with` variants take a custom [`MassModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nucleus {
    mass_number: i32,
    atomic_number: i32,
}

impl Nucleus {
    /// Creates a nucleus from its mass number `A` and atomic number `Z`.
    pub const fn new(mass_number: i32, atomic_number: i32) -> Self {
        Self {
            mass_number,
            atomic_number,
        }
    }

    /// Mass number `A`, the total nucleon count.
    #[inline]
    pub const fn mass_number(&self) -> i32 {
        self.mass_number
    }

    /// Atomic number `Z`, the proton count.
    #[inline]
    pub const fn atomic_number(&self) -> i32 {
        self.atomic_number
    }

    /// Neutron number `N = A − Z`, widened so that any pair of `i32` inputs fits.
    #[inline]
    pub const fn neutron_number(&self) -> i64 {
        self.mass_number as i64 - self.atomic_number as i64
    }

    /// Chemical symbol of the element, if `Z` lies within the periodic table.
    pub fn element_symbol(&self) -> Option<&'static str> {
        element::symbol(self.atomic_number)
    }

    /// `true` when `A` and `Z` are positive and `Z ≤ A`.
    pub fn is_physical(&self) -> bool {
        self.mass_number > 0 && self.atomic_number > 0 && self.neutron_number() >= 0
    }

    /// Signed contribution of every formula term to the binding energy, in MeV.
    pub fn binding_terms_with(&self, model: &MassModel) -> BindingTerms {
        let a = f64::from(self.mass_number);
        let z = f64::from(self.atomic_number);
        let coefficients = &model.coefficients;
        BindingTerms::new(
            terms::volume(a, coefficients.volume),
            -terms::surface(a, coefficients.surface),
            -terms::coulomb(a, z, coefficients.coulomb),
            -terms::asymmetry(a, z, coefficients.asymmetry),
            terms::pairing(
                a,
                i64::from(self.atomic_number),
                self.neutron_number(),
                coefficients.pairing,
            ),
        )
    }

    pub fn binding_terms(&self) -> BindingTerms {
        self.binding_terms_with(&MassModel::REFERENCE)
    }

    /// Pairing term `δ` in MeV: positive for even-even, negative for odd-odd, zero otherwise.
    pub fn pairing_term(&self) -> f64 {
        self.binding_terms().pairing
    }

    /// Total binding energy in MeV.
    pub fn binding_energy(&self) -> f64 {
        self.binding_terms().total()
    }

    pub fn binding_energy_per_nucleon_with(&self, model: &MassModel) -> f64 {
        self.binding_terms_with(model).total() / f64::from(self.mass_number)
    }

    /// Binding energy per nucleon in MeV/nucleon.
    pub fn binding_energy_per_nucleon(&self) -> f64 {
        self.binding_energy_per_nucleon_with(&MassModel::REFERENCE)
    }

    /// Neutral-atom mass in atomic mass units.
    ///
    /// `m = Z·m_p + N·m_n − E_bind/931.5 + Z·m_e`, where `E_bind` is the binding energy per
    /// nucleon multiplied back by `A`. One electron mass is added per proton.
    pub fn atomic_mass_with(&self, model: &MassModel) -> f64 {
        let a = f64::from(self.mass_number);
        let z = f64::from(self.atomic_number);
        let n = self.neutron_number() as f64;
        let masses = &model.masses;
        let binding_energy = self.binding_energy_per_nucleon_with(model) * a;
        z * masses.proton + n * masses.neutron - binding_energy / masses.mev_per_u
            + z * masses.electron
    }

    pub fn atomic_mass(&self) -> f64 {
        self.atomic_mass_with(&MassModel::REFERENCE)
    }

    pub fn nuclear_radius_with(&self, model: &MassModel) -> f64 {
        terms::radius(f64::from(self.mass_number), model.radius_constant)
    }

    /// Nuclear radius `R = 1.2·A^(1/3)` in femtometers.
    pub fn nuclear_radius(&self) -> f64 {
        self.nuclear_radius_with(&MassModel::REFERENCE)
    }

    /// Approximate beta stability: `N/Z` strictly inside the model's stability window.
    ///
    /// Returns `false` without dividing when any of `A`, `Z` or `N` is zero or negative.
    pub fn is_stable_to_beta_decay_with(&self, model: &MassModel) -> bool {
        let n = self.neutron_number();
        if self.mass_number <= 0 || self.atomic_number <= 0 || n <= 0 {
            return false;
        }
        let ratio = n as f64 / f64::from(self.atomic_number);
        model.stability.contains(ratio)
    }

    /// `true` iff `1 < N/Z < 1.6`; boundary ratios are unstable.
    pub fn is_stable_to_beta_decay(&self) -> bool {
        self.is_stable_to_beta_decay_with(&MassModel::REFERENCE)
    }

    /// `true` iff `A`, `Z` and `N` are all even.
    pub fn is_even_even_fission_possible(&self) -> bool {
        self.mass_number % 2 == 0 && self.atomic_number % 2 == 0 && self.neutron_number() % 2 == 0
    }
}

impl fmt::Display for Nucleus {
    /// Formats as `U-238`, or `(Z=200, A=500)` when `Z` has no chemical symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element_symbol() {
            Some(symbol) => write!(f, "{}-{}", symbol, self.mass_number),
            None => write!(f, "(Z={}, A={})", self.atomic_number, self.mass_number),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NuclideParseError {
    #[error(
        "Invalid nuclide '{0}'. Expected 'A,Z' (e.g., '238,92') or symbol notation (e.g., 'U-238')."
    )]
    Malformed(String),

    #[error("Unknown element symbol '{0}'.")]
    UnknownElement(String),

    #[error("Invalid number '{value}' in nuclide '{input}'.")]
    InvalidNumber { input: String, value: String },
}

impl FromStr for Nucleus {
    type Err = NuclideParseError;

    /// Parses a nuclide from either an `A,Z` pair or symbol notation.
    ///
    /// Accepted forms: `238,92`, `U-238`, `U238`, `u-238`, `238U`, `238-U`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(NuclideParseError::Malformed(s.to_string()));
        }

        if let Some((a_str, z_str)) = input.split_once(',') {
            let parse = |value: &str| -> Result<i32, NuclideParseError> {
                value
                    .trim()
                    .parse()
                    .map_err(|_| NuclideParseError::InvalidNumber {
                        input: input.to_string(),
                        value: value.trim().to_string(),
                    })
            };
            return Ok(Self::new(parse(a_str)?, parse(z_str)?));
        }

        let compact: String = input
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        let split_at = compact
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| NuclideParseError::Malformed(input.to_string()))?;

        let (symbol, digits) = if split_at == 0 {
            let letters_at = compact
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| NuclideParseError::Malformed(input.to_string()))?;
            let (digits, symbol) = compact.split_at(letters_at);
            (symbol, digits)
        } else {
            compact.split_at(split_at)
        };

        if !symbol.chars().all(|c| c.is_ascii_alphabetic())
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(NuclideParseError::Malformed(input.to_string()));
        }

        let atomic_number = element::atomic_number(symbol)
            .ok_or_else(|| NuclideParseError::UnknownElement(symbol.to_string()))?;
        let mass_number = digits
            .parse()
            .map_err(|_| NuclideParseError::InvalidNumber {
                input: input.to_string(),
                value: digits.to_string(),
            })?;
        Ok(Self::new(mass_number, atomic_number))
    }
}
