//! This module provides the static element table used by the dispersion model.
//!
//! It resolves element identifiers (chemical symbols or atomic numbers) to canonical atomic
//! numbers and exposes the tabulated per-element constants the calculation needs: covalent
//! radii under a selectable radius scheme, and the r²r⁴ expectation-value ratio used to
//! extrapolate C8 from C6. All data is embedded and read-only.

use super::error::DispersionError;
use std::fmt;
use std::str::FromStr;

/// An element identifier as supplied by a caller.
///
/// Both accepted input shapes are explicit: a chemical symbol, matched case-insensitively,
/// or an atomic number that is taken as canonical once it is checked against the table.
/// Mixed forms may appear within a single calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// A chemical symbol such as `"C"`, `"cl"` or `"FE"`.
    Symbol(String),
    /// An atomic number such as `6`.
    Number(u8),
}

impl From<&str> for ElementId {
    fn from(symbol: &str) -> Self {
        ElementId::Symbol(symbol.to_string())
    }
}

impl From<String> for ElementId {
    fn from(symbol: String) -> Self {
        ElementId::Symbol(symbol)
    }
}

impl From<u8> for ElementId {
    fn from(atomic_number: u8) -> Self {
        ElementId::Number(atomic_number)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Symbol(symbol) => f.write_str(symbol),
            ElementId::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Resolves an element identifier to its atomic number.
///
/// # Errors
///
/// Returns `DispersionError::UnknownElement` if the symbol is not a chemical symbol, or if the
/// number lies outside 1..=118.
///
/// # Examples
///
/// ```
/// use dftd3c6::elements::{resolve, ElementId};
///
/// assert_eq!(resolve(&ElementId::from("cl")).unwrap(), 17);
/// assert_eq!(resolve(&ElementId::from(17u8)).unwrap(), 17);
/// assert!(resolve(&ElementId::from("Xx")).is_err());
/// ```
pub fn resolve(identifier: &ElementId) -> Result<u8, DispersionError> {
    match identifier {
        ElementId::Symbol(symbol) => atomic_number_from_symbol(symbol)
            .ok_or_else(|| DispersionError::UnknownElement(symbol.clone())),
        ElementId::Number(number) => {
            if (1..=SYMBOLS.len()).contains(&(*number as usize)) {
                Ok(*number)
            } else {
                Err(DispersionError::UnknownElement(number.to_string()))
            }
        }
    }
}

/// Converts a chemical symbol to its atomic number, ignoring ASCII case and surrounding
/// whitespace.
pub(crate) fn atomic_number_from_symbol(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| (index + 1) as u8)
}

/// Returns the chemical symbol for an atomic number, if it is a known element.
pub fn symbol(atomic_number: u8) -> Option<&'static str> {
    (atomic_number as usize)
        .checked_sub(1)
        .and_then(|index| SYMBOLS.get(index))
        .copied()
}

/// Tabulated covalent radius sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadiusScheme {
    /// Single-bond covalent radii of Pyykkö and Atsumi (2009).
    #[default]
    Pyykko,
    /// Covalent radii of Cordero, Alvarez et al. (2008).
    Cordero,
}

impl RadiusScheme {
    /// The canonical lowercase name of the scheme.
    pub fn name(&self) -> &'static str {
        match self {
            RadiusScheme::Pyykko => "pyykko",
            RadiusScheme::Cordero => "cordero",
        }
    }

    fn table(&self) -> &'static [f64] {
        match self {
            RadiusScheme::Pyykko => &PYYKKO_RADII,
            RadiusScheme::Cordero => &CORDERO_RADII,
        }
    }
}

impl fmt::Display for RadiusScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RadiusScheme {
    type Err = DispersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pyykko" | "pyykkö" => Ok(RadiusScheme::Pyykko),
            "cordero" | "alvarez" => Ok(RadiusScheme::Cordero),
            _ => Err(DispersionError::UnknownScheme(s.to_string())),
        }
    }
}

/// Returns the covalent radius in angstroms of an element under the given scheme.
///
/// # Errors
///
/// Returns `DispersionError::UnknownElement` if the atomic number is not an element, or
/// `DispersionError::ElementNotInScheme` if the scheme has no radius for it.
pub fn covalent_radius(atomic_number: u8, scheme: RadiusScheme) -> Result<f64, DispersionError> {
    let index = table_index(atomic_number)?;
    scheme
        .table()
        .get(index)
        .copied()
        .ok_or_else(|| DispersionError::ElementNotInScheme {
            atomic_number,
            scheme: scheme.name().to_string(),
        })
}

/// Returns the r²r⁴ scaling constant of an element, used as `C8 = 3 · C6 · r2r4²`.
///
/// # Errors
///
/// Returns `DispersionError::UnknownElement` if the element has no tabulated constant.
pub fn r2r4_constant(atomic_number: u8) -> Result<f64, DispersionError> {
    let index = table_index(atomic_number)?;
    R2R4.get(index).copied().ok_or_else(|| {
        DispersionError::UnknownElement(
            symbol(atomic_number)
                .map(str::to_string)
                .unwrap_or_else(|| atomic_number.to_string()),
        )
    })
}

fn table_index(atomic_number: u8) -> Result<usize, DispersionError> {
    match symbol(atomic_number) {
        Some(_) => Ok(atomic_number as usize - 1),
        None => Err(DispersionError::UnknownElement(atomic_number.to_string())),
    }
}

const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

// Radii in angstroms, indexed by atomic number - 1. Pyykkö and Atsumi single-bond radii
// cover H through Og; Cordero et al. stop at Cm.
const PYYKKO_RADII: [f64; 118] = [
    0.32, 0.46, 1.33, 1.02, 0.85, 0.75, 0.71, 0.63, 0.64, 0.67, // H - Ne
    1.55, 1.39, 1.26, 1.16, 1.11, 1.03, 0.99, 0.96, // Na - Ar
    1.96, 1.71, 1.48, 1.36, 1.34, 1.22, 1.19, 1.16, 1.11, 1.10, 1.12, 1.18, // K - Zn
    1.24, 1.21, 1.21, 1.16, 1.14, 1.17, // Ga - Kr
    2.10, 1.85, 1.63, 1.54, 1.47, 1.38, 1.28, 1.25, 1.25, 1.20, 1.28, 1.36, // Rb - Cd
    1.42, 1.40, 1.40, 1.36, 1.33, 1.31, // In - Xe
    2.32, 1.96, 1.80, 1.63, 1.76, 1.74, 1.73, 1.72, // Cs - Sm
    1.68, 1.69, 1.68, 1.67, 1.66, 1.65, 1.64, 1.70, // Eu - Yb
    1.62, 1.52, 1.46, 1.37, 1.31, 1.29, 1.22, 1.23, // Lu - Pt
    1.24, 1.33, 1.44, 1.44, 1.51, 1.45, 1.47, 1.42, // Au - Rn
    2.23, 2.01, 1.86, 1.75, 1.69, 1.70, 1.71, 1.72, // Fr - Pu
    1.66, 1.66, 1.68, 1.68, 1.65, 1.67, 1.73, 1.76, // Am - No
    1.61, 1.57, 1.49, 1.43, 1.41, 1.34, 1.29, 1.28, // Lr - Ds
    1.21, 1.22, 1.36, 1.43, 1.62, 1.75, 1.65, 1.57, // Rg - Og
];

const CORDERO_RADII: [f64; 96] = [
    0.31, 0.28, 1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58, // H - Ne
    1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, // Na - Ar
    2.03, 1.76, 1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22, // K - Zn
    1.22, 1.20, 1.19, 1.20, 1.20, 1.16, // Ga - Kr
    2.20, 1.95, 1.90, 1.75, 1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, // Rb - Cd
    1.42, 1.39, 1.39, 1.38, 1.39, 1.40, // In - Xe
    2.44, 2.15, 2.07, 2.04, 2.03, 2.01, 1.99, 1.98, // Cs - Sm
    1.98, 1.96, 1.94, 1.92, 1.92, 1.89, 1.90, 1.87, // Eu - Yb
    1.87, 1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, // Lu - Pt
    1.36, 1.32, 1.45, 1.46, 1.48, 1.40, 1.50, 1.50, // Au - Rn
    2.60, 2.21, 2.15, 2.06, 2.00, 1.96, 1.90, 1.87, // Fr - Pu
    1.80, 1.69, // Am - Cm
];

// sqrt(0.5 * <r⁴>/<r²> * sqrt(Z)), dimensionless, H through Pu.
const R2R4: [f64; 94] = [
    2.00734898, 1.56637132, 5.01986934, 3.85379032, 3.64446594, // H - B
    3.10492822, 2.71175247, 2.59361680, 2.38825250, 2.21522516, // C - Ne
    6.58585536, 5.46295967, 5.65216669, 4.88284902, 4.29727576, // Na - P
    4.04108902, 3.72932356, 3.44677275, 7.97762753, 7.07623947, // S - Ca
    6.60844053, 6.28791364, 6.07728703, 5.54643096, 5.80491167, // Sc - Mn
    5.58415602, 5.41374528, 5.28497229, 5.22592821, 5.09817141, // Fe - Zn
    6.12149689, 5.54083734, 5.06696878, 4.87005108, 4.59089647, // Ga - Br
    4.31176304, 9.55461698, 8.67396077, 7.97210197, 7.43439917, // Kr - Zr
    6.58711862, 6.19536215, 6.01517290, 5.81623410, 5.65710424, // Nb - Rh
    5.52640661, 5.44263305, 5.58285373, 7.02081898, 6.46815523, // Pd - Sn
    5.98089120, 5.81686657, 5.53321815, 5.25060605, // Sb - Xe
    11.02793244, 9.93137490, 9.22183803, 8.38345554, 8.58326098, // Cs - Pr
    8.44271078, 8.32628622, 8.21762213, 8.11838720, 8.03011733, // Nd - Gd
    7.95063693, 7.87968612, 7.81665693, 7.76146440, 7.71362543, // Tb - Tm
    7.67291694, 7.63850765, 7.31279961, 7.05830407, 6.63966426, // Yb - W
    6.26741001, 6.06458651, 5.89816050, 5.89549342, 5.76545536, // Re - Au
    5.85549648, 7.33893270, 6.86108718, 6.62152474, 6.39845637, // Hg - Po
    6.14780026, 5.89870574, 11.35683186, 9.74216622, 9.30003714, // At - Ac
    8.88281154, 8.59419006, 8.28628224, 8.08011437, 7.91569045, // Th - Pu
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_symbols_case_insensitive() {
        assert_eq!(resolve(&ElementId::from("H")).unwrap(), 1);
        assert_eq!(resolve(&ElementId::from("c")).unwrap(), 6);
        assert_eq!(resolve(&ElementId::from("FE")).unwrap(), 26);
        assert_eq!(resolve(&ElementId::from(" Cl ")).unwrap(), 17);
        assert_eq!(resolve(&ElementId::from("Og")).unwrap(), 118);
    }

    #[test]
    fn test_resolve_numbers() {
        assert_eq!(resolve(&ElementId::from(1u8)).unwrap(), 1);
        assert_eq!(resolve(&ElementId::from(118u8)).unwrap(), 118);
        assert!(matches!(
            resolve(&ElementId::from(0u8)),
            Err(DispersionError::UnknownElement(_))
        ));
        assert!(matches!(
            resolve(&ElementId::from(119u8)),
            Err(DispersionError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_symbols() {
        for bad in ["Xx", "", "6", "Carbon"] {
            let err = resolve(&ElementId::from(bad)).unwrap_err();
            assert!(err.is_unknown_element(), "'{}' should be unknown", bad);
        }
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol(1), Some("H"));
        assert_eq!(symbol(54), Some("Xe"));
        assert_eq!(symbol(0), None);
        assert_eq!(symbol(119), None);
    }

    #[test]
    fn test_radius_scheme_parsing() {
        assert_eq!("pyykko".parse::<RadiusScheme>().unwrap(), RadiusScheme::Pyykko);
        assert_eq!("Pyykko".parse::<RadiusScheme>().unwrap(), RadiusScheme::Pyykko);
        assert_eq!("CORDERO".parse::<RadiusScheme>().unwrap(), RadiusScheme::Cordero);
        assert_eq!(RadiusScheme::default(), RadiusScheme::Pyykko);
        assert!(matches!(
            "bondi".parse::<RadiusScheme>(),
            Err(DispersionError::UnknownScheme(name)) if name == "bondi"
        ));
    }

    #[test]
    fn test_covalent_radius_values() {
        assert_eq!(covalent_radius(1, RadiusScheme::Pyykko).unwrap(), 0.32);
        assert_eq!(covalent_radius(6, RadiusScheme::Pyykko).unwrap(), 0.75);
        assert_eq!(covalent_radius(6, RadiusScheme::Cordero).unwrap(), 0.76);
        assert_eq!(covalent_radius(54, RadiusScheme::Pyykko).unwrap(), 1.31);
        assert_eq!(covalent_radius(79, RadiusScheme::Pyykko).unwrap(), 1.24);
        assert_eq!(covalent_radius(79, RadiusScheme::Cordero).unwrap(), 1.36);
        assert_eq!(covalent_radius(118, RadiusScheme::Pyykko).unwrap(), 1.57);
    }

    #[test]
    fn test_covalent_radius_missing_entries() {
        assert!(matches!(
            covalent_radius(97, RadiusScheme::Cordero),
            Err(DispersionError::ElementNotInScheme { atomic_number: 97, .. })
        ));
        assert!(covalent_radius(97, RadiusScheme::Pyykko).is_ok());
        assert!(matches!(
            covalent_radius(0, RadiusScheme::Cordero),
            Err(DispersionError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_r2r4_constant() {
        assert_eq!(r2r4_constant(1).unwrap(), 2.00734898);
        assert_eq!(r2r4_constant(6).unwrap(), 3.10492822);
        assert_eq!(r2r4_constant(79).unwrap(), 5.76545536);
        assert_eq!(r2r4_constant(94).unwrap(), 7.91569045);
        let err = r2r4_constant(95).unwrap_err();
        assert!(matches!(err, DispersionError::UnknownElement(ref s) if s == "Am"));
    }

    #[test]
    fn test_table_coverage() {
        assert_eq!(PYYKKO_RADII.len(), SYMBOLS.len());
        assert_eq!(CORDERO_RADII.len(), 96);
        assert_eq!(R2R4.len(), 94);
        assert!(PYYKKO_RADII.iter().chain(CORDERO_RADII.iter()).all(|r| *r > 0.0));
    }
}
