use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `dftd3c6` library.
///
/// Every failure of a dispersion-coefficient calculation surfaces as one of these variants.
/// Nothing is defaulted to zero or NaN, and a failure for any atom aborts the whole
/// calculation, so callers never observe partial results.
#[derive(Error, Debug)]
pub enum DispersionError {
    /// The element identifier is neither a known chemical symbol nor a known atomic number.
    #[error("Unknown element identifier: '{0}'")]
    UnknownElement(String),

    /// The element is known, but the selected radius scheme has no covalent radius for it.
    ///
    /// This is the unknown-element condition scoped to a single radius scheme; see
    /// [`DispersionError::is_unknown_element`].
    #[error("Element with atomic number {atomic_number} has no covalent radius in scheme '{scheme}'")]
    ElementNotInScheme {
        /// The atomic number that was looked up.
        atomic_number: u8,
        /// The name of the radius scheme that lacks an entry.
        scheme: String,
    },

    /// The named covalent radius scheme is not recognized.
    #[error("Unknown covalent radius scheme: '{0}'")]
    UnknownScheme(String),

    /// The reference data resource is missing or malformed.
    ///
    /// This is fatal: retrying with the same resource cannot succeed.
    #[error("Failed to load reference data: {0}")]
    Load(#[from] LoadError),

    /// The element is valid but the reference table carries no C6 entries for it.
    ///
    /// Callers may recover by falling back to a different method for this system.
    #[error("No reference C6 data for element with atomic number: {0}")]
    MissingReferenceData(u8),

    /// Two atoms occupy exactly the same position, which leaves the coordination
    /// number undefined. Indices are 1-based positions in the input.
    #[error("Atoms {first} and {second} have identical coordinates")]
    DegenerateGeometry {
        /// 1-based index of the first coincident atom.
        first: usize,
        /// 1-based index of the second coincident atom.
        second: usize,
    },

    /// Every Gaussian weight of the interpolation underflowed to zero.
    #[error(
        "All interpolation weights vanished for element {atomic_number} at coordination number {coordination_number:.4}"
    )]
    InterpolationDegeneracy {
        /// The atomic number being interpolated.
        atomic_number: u8,
        /// The coordination number at which the weights vanished.
        coordination_number: f64,
    },

    /// The element and coordinate sequences have different lengths.
    #[error("Input shape mismatch: {elements} elements but {coordinates} coordinate triples")]
    ShapeMismatch {
        /// Number of element identifiers supplied.
        elements: usize,
        /// Number of coordinate triples supplied.
        coordinates: usize,
    },

    /// A validation error indicating that the input contained no atoms.
    #[error("Input validation failed: at least one atom is required for a calculation")]
    EmptyInput,
}

impl DispersionError {
    /// Returns `true` for both flavors of unknown-element failure.
    pub fn is_unknown_element(&self) -> bool {
        matches!(
            self,
            DispersionError::UnknownElement(_) | DispersionError::ElementNotInScheme { .. }
        )
    }
}

/// Failures while reading or validating a reference C6 table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An I/O error that occurred while attempting to read a reference data file.
    #[error("I/O error at path '{}': {source}", .path.display())]
    Io {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid TOML, or does not match the table schema.
    ///
    /// Unrecognized or duplicate element keys land here.
    #[error("Failed to deserialize TOML reference data: {0}")]
    Deserialization(#[from] toml::de::Error),

    /// The resource declares a schema version this build cannot read.
    #[error("Unsupported reference data version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version declared by the resource.
        found: u32,
        /// Version understood by this library.
        supported: u32,
    },

    /// An element is listed without any reference records.
    #[error("Element {0} has an empty reference record list")]
    EmptyReferences(u8),

    /// A record does not hold exactly three values.
    #[error(
        "Reference record {record} of element {atomic_number} has {width} values, expected [c6, cn1, cn2]"
    )]
    RecordWidth {
        /// Element whose record is invalid.
        atomic_number: u8,
        /// 0-based position of the record within the element's list.
        record: usize,
        /// Number of values found in the record.
        width: usize,
    },

    /// A record contains NaN or an infinity.
    #[error("Non-finite value in reference record {record} of element {atomic_number}")]
    NonFiniteValue {
        /// Element whose record is invalid.
        atomic_number: u8,
        /// 0-based position of the record within the element's list.
        record: usize,
    },

    /// A record contains a negative C6 or coordination number.
    #[error("Negative value in reference record {record} of element {atomic_number}")]
    NegativeValue {
        /// Element whose record is invalid.
        atomic_number: u8,
        /// 0-based position of the record within the element's list.
        record: usize,
    },
}
