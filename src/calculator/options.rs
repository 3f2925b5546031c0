//! This module defines configuration options for the dispersion-coefficient calculator.
//!
//! It provides the `CalculatorOptions` struct, which selects the covalent radius scheme, the
//! constants of the coordination-number and interpolation recipes, and whether the per-atom
//! work runs on the rayon thread pool.

use crate::elements::RadiusScheme;
use crate::math::coordination::CoordinationParameters;
use crate::math::interpolation::InterpolationParameters;

/// Configuration parameters for the dispersion-coefficient calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorOptions {
    /// The covalent radius set used for coordination numbers.
    ///
    /// Defaults to the Pyykkö single-bond radii.
    pub radius_scheme: RadiusScheme,
    /// Constants of the sigmoid counting function (`k1`, `k2`).
    pub coordination: CoordinationParameters,
    /// Sharpness of the Gaussian interpolation weights (`k3`).
    pub interpolation: InterpolationParameters,
    /// Whether per-atom work is spread over the rayon thread pool.
    ///
    /// Results are identical either way; serial execution avoids pool overhead for very
    /// small molecules.
    pub parallel: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            radius_scheme: RadiusScheme::default(),
            coordination: CoordinationParameters::default(),
            interpolation: InterpolationParameters::default(),
            parallel: true,
        }
    }
}
