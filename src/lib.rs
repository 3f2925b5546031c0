//! # dftd3c6
//!
//! Per-atom C6 and C8 dispersion coefficients from molecular geometry alone, following the
//! coordination-number dependent D3 model of Grimme et al. (J. Chem. Phys. 2010, 132, 154104).
//!
//! Coordination numbers come from a smoothed count of neighbors within the covalent-radius sum;
//! C6 is a Gaussian-weighted average over tabulated reference values, and C8 follows from C6
//! through the r²r⁴ scaling relation.
//!
//! ```
//! use dftd3c6::{D3Calculator, get_default_reference_table};
//!
//! let table = get_default_reference_table().unwrap();
//! let (c6, c8) = D3Calculator::new(table)
//!     .run(&["O", "H", "H"], &[[0.0, 0.0, 0.0], [0.757, 0.586, 0.0], [-0.757, 0.586, 0.0]])
//!     .unwrap()
//!     .into_pair();
//!
//! assert_eq!(c6.len(), 3);
//! assert!(c8.iter().zip(&c6).all(|(c8, c6)| c8 > c6));
//! ```

pub mod calculator;
pub mod elements;
pub mod error;
pub mod math;
pub mod reference;
pub mod types;

pub use calculator::{CalculatorOptions, D3Calculator};
pub use elements::{ElementId, RadiusScheme};
pub use error::{DispersionError, LoadError};
pub use math::coordination::{CoordinationNumberCalculator, CoordinationParameters};
pub use math::interpolation::{DispersionInterpolator, InterpolationParameters};
pub use reference::{ReferenceEntry, ReferenceTable};
pub use types::{Atom, AtomView, DispersionCoefficients};

use std::sync::OnceLock;

static DEFAULT_REFERENCE_TABLE: OnceLock<ReferenceTable> = OnceLock::new();

/// Returns the embedded D3 reference C6 table, parsing it on first use.
///
/// Concurrent first calls may both parse the embedded resource, but only one table is ever
/// stored and every caller receives that same instance.
///
/// # Errors
///
/// Returns `DispersionError::Load` if the embedded resource fails validation.
pub fn get_default_reference_table() -> Result<&'static ReferenceTable, DispersionError> {
    if let Some(table) = DEFAULT_REFERENCE_TABLE.get() {
        return Ok(table);
    }

    const DEFAULT_REFERENCE_TOML: &str = include_str!("../resources/d3.reference.toml");
    let table = ReferenceTable::load_from_str(DEFAULT_REFERENCE_TOML)?;
    Ok(DEFAULT_REFERENCE_TABLE.get_or_init(|| table))
}
