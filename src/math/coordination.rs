use super::constants::{DEFAULT_K1, DEFAULT_K2};
use super::map_ordered;
use crate::error::DispersionError;
use crate::types::Atom;
use log::debug;

/// Constants of the sigmoid counting function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinationParameters {
    /// Steepness of the sigmoid.
    pub k1: f64,
    /// Scale factor applied to the covalent-radius sum.
    pub k2: f64,
}

impl Default for CoordinationParameters {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
        }
    }
}

/// Contribution of one neighbor to an atom's coordination number.
///
/// Evaluates `1 / (1 + exp(-k1 * (k2 * radius_sum / distance - 1)))`: close to 1 for pairs well
/// inside the scaled covalent-radius sum and close to 0 for pairs well outside it. `distance`
/// must be positive.
#[inline]
pub fn counting_function(distance: f64, radius_sum: f64, params: CoordinationParameters) -> f64 {
    1.0 / (1.0 + (-params.k1 * (params.k2 * radius_sum / distance - 1.0)).exp())
}

#[inline]
fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

/// Computes the coordination number of every atom from positions and covalent radii.
///
/// The sum runs directly over all pairs. A single atom has coordination number 0.
///
/// # Errors
///
/// Returns `DispersionError::DegenerateGeometry` with 1-based indices if two atoms share exactly
/// the same coordinates. The reported pair is the first one in input order.
pub fn coordination_numbers(
    positions: &[[f64; 3]],
    radii: &[f64],
    params: CoordinationParameters,
    parallel: bool,
) -> Result<Vec<f64>, DispersionError> {
    debug_assert_eq!(positions.len(), radii.len());

    map_ordered(positions, parallel, |i, pos_i| {
        let mut coordination_number = 0.0;
        for (j, pos_j) in positions.iter().enumerate() {
            if j == i {
                continue;
            }
            let d_ij = distance(pos_i, pos_j);
            if d_ij == 0.0 {
                return Err(DispersionError::DegenerateGeometry {
                    first: i.min(j) + 1,
                    second: i.max(j) + 1,
                });
            }
            coordination_number += counting_function(d_ij, radii[i] + radii[j], params);
        }
        Ok(coordination_number)
    })
}

/// Fills in the coordination numbers of a set of atoms.
#[derive(Debug, Clone, Copy)]
pub struct CoordinationNumberCalculator {
    params: CoordinationParameters,
    parallel: bool,
}

impl CoordinationNumberCalculator {
    /// Creates a calculator with the given counting-function constants.
    ///
    /// The per-atom sums run on the rayon pool unless disabled with
    /// [`CoordinationNumberCalculator::with_parallel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{CoordinationNumberCalculator, CoordinationParameters};
    ///
    /// let calculator = CoordinationNumberCalculator::new(CoordinationParameters {
    ///     k1: 10.0,
    ///     ..Default::default()
    /// })
    /// .with_parallel(false);
    /// ```
    pub fn new(params: CoordinationParameters) -> Self {
        Self {
            params,
            parallel: true,
        }
    }

    /// Switches between the rayon data-parallel map and a serial loop.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Computes the coordination number of every atom, stores it on the atom and returns the
    /// values in input order.
    ///
    /// Atoms are left untouched if the geometry is degenerate, so no atom ever carries a value
    /// computed from an incomplete pass.
    pub fn compute(&self, atoms: &mut [Atom]) -> Result<Vec<f64>, DispersionError> {
        let positions: Vec<[f64; 3]> = atoms.iter().map(|atom| atom.position).collect();
        let radii: Vec<f64> = atoms.iter().map(|atom| atom.covalent_radius).collect();

        let values = coordination_numbers(&positions, &radii, self.params, self.parallel)?;

        for (atom, &value) in atoms.iter_mut().zip(&values) {
            debug!("Coordination number of {}: {:.4}", atom, value);
            atom.set_coordination_number(value);
        }
        Ok(values)
    }
}

impl Default for CoordinationNumberCalculator {
    fn default() -> Self {
        Self::new(CoordinationParameters::default())
    }
}
