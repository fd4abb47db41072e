/// Signed contribution of each semi-empirical mass formula term to the binding energy, in MeV.
///
/// Attractive terms (volume, even-even pairing) are positive; the surface, Coulomb and
/// asymmetry corrections are stored negated so that [`BindingTerms::total`] is a plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BindingTerms {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl BindingTerms {
    pub fn new(volume: f64, surface: f64, coulomb: f64, asymmetry: f64, pairing: f64) -> Self {
        Self {
            volume,
            surface,
            coulomb,
            asymmetry,
            pairing,
        }
    }

    /// Total binding energy in MeV.
    ///
    /// Summed left to right in formula order, so the result is bit-identical to evaluating
    /// `a_v·A − a_s·A^(2/3) − a_c·Z²/A^(1/3) − a_a·(A−2Z)²/A + δ` directly.
    #[inline]
    pub fn total(&self) -> f64 {
        self.volume + self.surface + self.coulomb + self.asymmetry + self.pairing
    }

    /// Labelled view over the terms in formula order, for tabular output.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("volume", self.volume),
            ("surface", self.surface),
            ("coulomb", self.coulomb),
            ("asymmetry", self.asymmetry),
            ("pairing", self.pairing),
        ]
    }
}
