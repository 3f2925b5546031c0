//! This module implements the `D3Calculator`, which computes per-atom dispersion coefficients
//! following the D3 procedure of J. Chem. Phys. 2010, 132, 154104.
//!
//! A calculation validates the input shape, resolves every element and its covalent radius,
//! computes coordination numbers over all atom pairs, and finally interpolates C6 from the
//! reference table and extrapolates C8 for each atom. Any failure aborts the calculation as a
//! whole; the output order always matches the input order.

use super::options::CalculatorOptions;
use crate::{
    elements::{self, ElementId},
    error::DispersionError,
    math::{
        coordination::CoordinationNumberCalculator, interpolation::DispersionInterpolator,
        map_ordered,
    },
    reference::ReferenceTable,
    types::{Atom, AtomView, DispersionCoefficients},
};
use log::debug;
use std::fmt;

/// The main calculator for coordination-number dependent C6 and C8 coefficients.
///
/// This struct holds a reference to the reference C6 table and the calculator options. The
/// table is only read, so a single calculator can serve many calculations.
pub struct D3Calculator<'t> {
    /// Reference C6 data used for the interpolation.
    table: &'t ReferenceTable,
    /// Radius scheme, recipe constants and parallelism switch.
    options: CalculatorOptions,
}

impl<'t> D3Calculator<'t> {
    /// Creates a new `D3Calculator` with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{D3Calculator, get_default_reference_table};
    ///
    /// let table = get_default_reference_table().unwrap();
    /// let calculator = D3Calculator::new(table);
    /// ```
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self {
            table,
            options: CalculatorOptions::default(),
        }
    }

    /// Configures the calculator with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{CalculatorOptions, D3Calculator, RadiusScheme, get_default_reference_table};
    ///
    /// let table = get_default_reference_table().unwrap();
    /// let options = CalculatorOptions {
    ///     radius_scheme: "cordero".parse::<RadiusScheme>().unwrap(),
    ///     parallel: false,
    ///     ..Default::default()
    /// };
    ///
    /// let calculator = D3Calculator::new(table).with_options(options);
    /// ```
    pub fn with_options(mut self, options: CalculatorOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this calculator runs with.
    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Computes C6(AA) and C8(AA) coefficients for every atom of a molecule.
    ///
    /// # Arguments
    ///
    /// * `elements` - Element identifiers as symbols, atomic numbers, or a mix via [`ElementId`].
    /// * `coordinates` - Cartesian coordinates in angstroms, one triple per element.
    ///
    /// # Errors
    ///
    /// Returns `DispersionError::ShapeMismatch` if the two sequences differ in length,
    /// `DispersionError::EmptyInput` if they are empty, and otherwise propagates the first
    /// failure of element resolution, coordination numbers or interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{D3Calculator, get_default_reference_table};
    ///
    /// let table = get_default_reference_table().unwrap();
    /// let calculator = D3Calculator::new(table);
    ///
    /// let result = calculator
    ///     .run(&["H", "H"], &[[0.0, 0.0, 0.0], [0.0, 0.0, 0.74]])
    ///     .unwrap();
    ///
    /// assert_eq!(result.c6_coefficients.len(), 2);
    /// assert_eq!(result.c6_coefficients[0], result.c6_coefficients[1]);
    /// ```
    pub fn run<E>(
        &self,
        elements: &[E],
        coordinates: &[[f64; 3]],
    ) -> Result<DispersionCoefficients, DispersionError>
    where
        E: Clone + Into<ElementId>,
    {
        if elements.len() != coordinates.len() {
            return Err(DispersionError::ShapeMismatch {
                elements: elements.len(),
                coordinates: coordinates.len(),
            });
        }
        if elements.is_empty() {
            return Err(DispersionError::EmptyInput);
        }

        let mut atoms = self.build_atoms(elements, coordinates)?;

        let coordination_numbers = CoordinationNumberCalculator::new(self.options.coordination)
            .with_parallel(self.options.parallel)
            .compute(&mut atoms)?;
        let pairs: Vec<(&Atom, f64)> = atoms.iter().zip(coordination_numbers).collect();

        let interpolator =
            DispersionInterpolator::new(self.table).with_parameters(self.options.interpolation);

        let coefficients = map_ordered(
            &pairs,
            self.options.parallel,
            |_, &(atom, coordination_number)| {
                let c6 = interpolator.c6(atom.element, coordination_number)?;
                let c8 = interpolator.c8(atom.element, c6)?;
                debug!("{}: CN = {:.4}, C6 = {:.4}, C8 = {:.4}", atom, coordination_number, c6, c8);
                Ok((coordination_number, c6, c8))
            },
        )?;

        let mut result = DispersionCoefficients {
            c6_coefficients: Vec::with_capacity(atoms.len()),
            c8_coefficients: Vec::with_capacity(atoms.len()),
            coordination_numbers: Vec::with_capacity(atoms.len()),
        };
        for (coordination_number, c6, c8) in coefficients {
            result.coordination_numbers.push(coordination_number);
            result.c6_coefficients.push(c6);
            result.c8_coefficients.push(c8);
        }

        Ok(result)
    }

    /// Computes coefficients for caller-owned atoms implementing [`AtomView`].
    pub fn run_atoms<A: AtomView>(
        &self,
        atoms: &[A],
    ) -> Result<DispersionCoefficients, DispersionError> {
        let elements: Vec<u8> = atoms.iter().map(AtomView::atomic_number).collect();
        let coordinates: Vec<[f64; 3]> = atoms.iter().map(AtomView::position).collect();
        self.run(&elements, &coordinates)
    }

    /// Resolves elements and covalent radii into fresh atoms without coordination numbers.
    fn build_atoms<E>(
        &self,
        identifiers: &[E],
        coordinates: &[[f64; 3]],
    ) -> Result<Vec<Atom>, DispersionError>
    where
        E: Clone + Into<ElementId>,
    {
        identifiers
            .iter()
            .zip(coordinates)
            .enumerate()
            .map(|(i, (identifier, position))| {
                let element = elements::resolve(&identifier.clone().into())?;
                let radius = elements::covalent_radius(element, self.options.radius_scheme)?;
                Ok(Atom::new(element, *position, radius, i + 1))
            })
            .collect()
    }
}

impl fmt::Display for D3Calculator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D3Calculator({} reference elements)", self.table.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_default_reference_table;
    use approx::assert_relative_eq;

    fn calculator() -> D3Calculator<'static> {
        D3Calculator::new(get_default_reference_table().unwrap())
    }

    #[test]
    fn test_shape_mismatch() {
        let result = calculator().run(&["H", "H"], &[[0.0, 0.0, 0.0]]);
        assert!(matches!(
            result,
            Err(DispersionError::ShapeMismatch {
                elements: 2,
                coordinates: 1
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        let elements: [&str; 0] = [];
        assert!(matches!(
            calculator().run(&elements, &[]),
            Err(DispersionError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_atom() {
        let result = calculator().run(&["Ne"], &[[0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(result.coordination_numbers, vec![0.0]);
        assert_relative_eq!(result.c6_coefficients[0], 6.2413, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_identifier_forms() {
        let coordinates = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.128]];
        let by_symbol = calculator().run(&["C", "O"], &coordinates).unwrap();
        let mixed = calculator()
            .run(
                &[ElementId::from(6u8), ElementId::from("o")],
                &coordinates,
            )
            .unwrap();
        assert_eq!(by_symbol, mixed);
    }

    #[test]
    fn test_radius_scheme_changes_coordination() {
        let coordinates = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.2]];
        let pyykko = calculator().run(&["C", "C"], &coordinates).unwrap();
        let cordero = calculator()
            .with_options(CalculatorOptions {
                radius_scheme: elements::RadiusScheme::Cordero,
                ..Default::default()
            })
            .run(&["C", "C"], &coordinates)
            .unwrap();
        assert!(cordero.coordination_numbers[0] > pyykko.coordination_numbers[0]);
    }

    #[test]
    fn test_coordination_numbers_follow_input_order() {
        let elements = ["H", "O", "H", "Ne"];
        let coordinates = [
            [0.757, 0.586, 0.0],
            [0.0, 0.0, 0.0],
            [-0.757, 0.586, 0.0],
            [0.0, 6.0, 0.0],
        ];
        let result = calculator().run(&elements, &coordinates).unwrap();
        let oxygen = result.coordination_numbers[1];
        assert!(oxygen > result.coordination_numbers[0]);
        assert_eq!(result.coordination_numbers[0], result.coordination_numbers[2]);
        assert!(result.coordination_numbers[3] < 1e-3);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let elements = ["O", "H", "H", "C", "N"];
        let coordinates = [
            [0.0, 0.0, 0.0],
            [0.757, 0.586, 0.0],
            [-0.757, 0.586, 0.0],
            [3.0, 0.0, 0.0],
            [4.16, 0.0, 0.0],
        ];
        let parallel = calculator().run(&elements, &coordinates).unwrap();
        let serial = calculator()
            .with_options(CalculatorOptions {
                parallel: false,
                ..Default::default()
            })
            .run(&elements, &coordinates)
            .unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_display() {
        let table = get_default_reference_table().unwrap();
        assert_eq!(
            D3Calculator::new(table).to_string(),
            format!("D3Calculator({} reference elements)", table.len())
        );
    }
}
