//! This module defines the core types used in the dftd3c6 library for representing atoms and
//! calculation results.
//!
//! It includes the `AtomView` trait for abstracting caller-side atom data, the transient `Atom`
//! record that lives for the duration of one calculation, and the `DispersionCoefficients`
//! struct holding the per-atom output.

use crate::elements;
use std::fmt;

/// A trait for viewing caller-owned atom data without converting it.
///
/// Implementing this trait lets [`crate::D3Calculator::run_atoms`] consume existing molecular
/// data structures directly.
pub trait AtomView {
    /// Returns the atomic number of the atom.
    fn atomic_number(&self) -> u8;

    /// Returns the Cartesian position of the atom in angstroms.
    fn position(&self) -> [f64; 3];
}

/// An atom prepared for one dispersion calculation.
///
/// The coordination number starts out absent and is filled in once, after every atom of the
/// system has been processed by the coordination-number calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atomic number of the atom.
    pub element: u8,
    /// Cartesian coordinates in angstroms.
    pub position: [f64; 3],
    /// Covalent radius in angstroms under the selected radius scheme.
    pub covalent_radius: f64,
    /// 1-based position of the atom in the input, used for diagnostics only.
    pub index: usize,
    coordination_number: Option<f64>,
}

impl Atom {
    /// Creates an atom whose coordination number is not yet known.
    pub fn new(element: u8, position: [f64; 3], covalent_radius: f64, index: usize) -> Self {
        Self {
            element,
            position,
            covalent_radius,
            index,
            coordination_number: None,
        }
    }

    /// The coordination number, or `None` before it has been computed.
    pub fn coordination_number(&self) -> Option<f64> {
        self.coordination_number
    }

    pub(crate) fn set_coordination_number(&mut self, coordination_number: f64) {
        self.coordination_number = Some(coordination_number);
    }
}

impl AtomView for Atom {
    #[inline(always)]
    fn atomic_number(&self) -> u8 {
        self.element
    }

    #[inline(always)]
    fn position(&self) -> [f64; 3] {
        self.position
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            elements::symbol(self.element).unwrap_or("X"),
            self.index
        )
    }
}

/// The result of a dispersion-coefficient calculation.
///
/// All vectors have one entry per input atom, and entry `i` always belongs to input atom `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionCoefficients {
    /// Homonuclear C6(AA) coefficients in Hartree·Bohr⁶.
    pub c6_coefficients: Vec<f64>,
    /// Homonuclear C8(AA) coefficients in Hartree·Bohr⁸.
    pub c8_coefficients: Vec<f64>,
    /// The coordination numbers the C6 values were interpolated at.
    pub coordination_numbers: Vec<f64>,
}

impl DispersionCoefficients {
    /// The number of atoms covered by the result.
    pub fn len(&self) -> usize {
        self.c6_coefficients.len()
    }

    /// Returns `true` if the result covers no atoms.
    pub fn is_empty(&self) -> bool {
        self.c6_coefficients.is_empty()
    }

    /// Splits the result into the `(c6, c8)` coefficient sequences.
    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.c6_coefficients, self.c8_coefficients)
    }
}
