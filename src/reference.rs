//! This module provides the reference C6 table and utilities for loading it from TOML.
//!
//! It defines the `ReferenceEntry` triple, one tabulated (C6, CN1, CN2) anchor point, and the
//! `ReferenceTable` that groups these anchors by atomic number. Tables are schema-checked on
//! load: the version must be supported, every record must hold exactly three finite,
//! non-negative values, and no element may be listed without records. A loaded table is
//! immutable, so it can be shared freely between threads.

use super::elements;
use super::error::{DispersionError, LoadError};
use log::trace;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// The reference table schema version understood by this library.
pub const SUPPORTED_VERSION: u32 = 1;

/// One tabulated anchor point of the C6 interpolation.
///
/// `c6` is the homonuclear C6 coefficient (Hartree·Bohr⁶) computed for a pair of reference
/// systems whose coordination numbers are `cn1` and `cn2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntry {
    /// Reference C6 coefficient in atomic units.
    pub c6: f64,
    /// Coordination number of the first reference system.
    pub cn1: f64,
    /// Coordination number of the second reference system.
    pub cn2: f64,
}

impl From<[f64; 3]> for ReferenceEntry {
    fn from([c6, cn1, cn2]: [f64; 3]) -> Self {
        Self { c6, cn1, cn2 }
    }
}

/// Reference C6 entries for every covered element, keyed by atomic number.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    version: u32,
    elements: BTreeMap<u8, Vec<ReferenceEntry>>,
}

/// Number of values in one reference record.
const RECORD_WIDTH: usize = 3;

/// On-disk layout of a reference table before validation.
#[derive(Deserialize)]
struct RawReferenceTable {
    version: u32,
    #[serde(deserialize_with = "deserialize_element_map")]
    elements: BTreeMap<u8, Vec<Vec<f64>>>,
}

impl ReferenceTable {
    /// Loads a reference table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, or any validation error of
    /// [`ReferenceTable::load_from_str`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dftd3c6::ReferenceTable;
    /// use std::path::Path;
    ///
    /// let table = ReferenceTable::load_from_file(Path::new("c6_reference.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| LoadError::Io {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses and validates a reference table from a TOML string.
    ///
    /// The document must carry a top-level `version` and an `[elements]` table whose keys are
    /// element symbols or atomic numbers and whose values are lists of `[c6, cn1, cn2]` records.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Deserialization` for invalid TOML or unknown element keys;
    /// `LoadError::UnsupportedVersion`, `LoadError::EmptyReferences`, `LoadError::RecordWidth`,
    /// `LoadError::NonFiniteValue` or `LoadError::NegativeValue` when the content fails
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::ReferenceTable;
    ///
    /// let toml_data = r#"
    /// version = 1
    /// [elements]
    /// "H" = [[3.0267, 0.9118, 0.9118], [7.5916, 0.0, 0.0]]
    /// "6" = [[49.113, 0.0, 0.0]]
    /// "#;
    ///
    /// let table = ReferenceTable::load_from_str(toml_data).unwrap();
    /// assert_eq!(table.entries_for(1).unwrap().len(), 2);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, LoadError> {
        let raw: RawReferenceTable = toml::from_str(toml_str)?;

        if raw.version != SUPPORTED_VERSION {
            return Err(LoadError::UnsupportedVersion {
                found: raw.version,
                supported: SUPPORTED_VERSION,
            });
        }

        let mut elements = BTreeMap::new();
        for (atomic_number, records) in raw.elements {
            if records.is_empty() {
                return Err(LoadError::EmptyReferences(atomic_number));
            }
            for (record, values) in records.iter().enumerate() {
                if values.len() != RECORD_WIDTH {
                    return Err(LoadError::RecordWidth {
                        atomic_number,
                        record,
                        width: values.len(),
                    });
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(LoadError::NonFiniteValue {
                        atomic_number,
                        record,
                    });
                }
                if values.iter().any(|v| *v < 0.0) {
                    return Err(LoadError::NegativeValue {
                        atomic_number,
                        record,
                    });
                }
            }
            trace!(
                "Loaded {} reference records for element {}",
                records.len(),
                atomic_number
            );
            elements.insert(
                atomic_number,
                records
                    .into_iter()
                    .map(|values| ReferenceEntry::from([values[0], values[1], values[2]]))
                    .collect(),
            );
        }

        Ok(Self {
            version: raw.version,
            elements,
        })
    }

    /// Returns the reference entries of an element, in file order.
    ///
    /// # Errors
    ///
    /// Returns `DispersionError::MissingReferenceData` if the table has no entries for the
    /// element. This is an expected condition for elements outside the reference set, not a
    /// sign of a corrupt table.
    pub fn entries_for(&self, atomic_number: u8) -> Result<&[ReferenceEntry], DispersionError> {
        self.elements
            .get(&atomic_number)
            .map(Vec::as_slice)
            .ok_or(DispersionError::MissingReferenceData(atomic_number))
    }

    /// Returns `true` if the table has entries for the element.
    pub fn contains(&self, atomic_number: u8) -> bool {
        self.elements.contains_key(&atomic_number)
    }

    /// Iterates the covered atomic numbers in ascending order.
    pub fn elements(&self) -> impl Iterator<Item = u8> + '_ {
        self.elements.keys().copied()
    }

    /// The number of covered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element is covered.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The schema version the table was loaded from.
    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Deserializes the `[elements]` table, accepting atomic numbers or element symbols as keys.
fn deserialize_element_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<u8, Vec<Vec<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ElementMapVisitor;

    impl<'de> Visitor<'de> for ElementMapVisitor {
        type Value = BTreeMap<u8, Vec<Vec<f64>>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from atomic number or symbol to [c6, cn1, cn2] records")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut elements = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, Vec<Vec<f64>>>()? {
                let atomic_number = key
                    .parse::<u8>()
                    .ok()
                    .filter(|z| elements::symbol(*z).is_some())
                    .or_else(|| elements::atomic_number_from_symbol(&key))
                    .ok_or_else(|| de::Error::custom(format!("invalid element key: '{}'", key)))?;
                if elements.insert(atomic_number, value).is_some() {
                    return Err(de::Error::custom(format!(
                        "duplicate element key: '{}'",
                        key
                    )));
                }
            }
            Ok(elements)
        }
    }

    deserializer.deserialize_map(ElementMapVisitor)
}
