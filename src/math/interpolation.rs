use super::constants::DEFAULT_K3;
use crate::elements;
use crate::error::DispersionError;
use crate::reference::{ReferenceEntry, ReferenceTable};
use log::warn;

/// Constants of the Gaussian weighting over reference coordination numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationParameters {
    /// Sharpness of the Gaussian weights.
    pub k3: f64,
}

impl Default for InterpolationParameters {
    fn default() -> Self {
        Self { k3: DEFAULT_K3 }
    }
}

/// Weight of one reference entry at a query coordination number.
///
/// The weight is `exp(-k3 * ((cn - cn1)² + (cn - cn2)²))`, which is 1 when both reference
/// coordination numbers equal the query.
#[inline]
pub fn gaussian_weight(
    coordination_number: f64,
    entry: &ReferenceEntry,
    params: InterpolationParameters,
) -> f64 {
    let r = (coordination_number - entry.cn1).powi(2) + (coordination_number - entry.cn2).powi(2);
    (-params.k3 * r).exp()
}

/// Interpolates C6 and extrapolates C8 from a reference table.
///
/// The interpolator borrows the table; the table is never modified, so one interpolator can be
/// shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct DispersionInterpolator<'t> {
    table: &'t ReferenceTable,
    params: InterpolationParameters,
}

impl<'t> DispersionInterpolator<'t> {
    /// Creates an interpolator over `table` with the default `k3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{DispersionInterpolator, get_default_reference_table};
    ///
    /// let table = get_default_reference_table().unwrap();
    /// let interpolator = DispersionInterpolator::new(table);
    /// assert!(interpolator.c6(6, 3.0).unwrap() > 0.0);
    /// ```
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self {
            table,
            params: InterpolationParameters::default(),
        }
    }

    /// Replaces the Gaussian weighting constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{DispersionInterpolator, InterpolationParameters, get_default_reference_table};
    ///
    /// let table = get_default_reference_table().unwrap();
    /// let interpolator = DispersionInterpolator::new(table)
    ///     .with_parameters(InterpolationParameters { k3: 2.0 });
    /// ```
    pub fn with_parameters(mut self, params: InterpolationParameters) -> Self {
        self.params = params;
        self
    }

    /// Interpolates the homonuclear C6 coefficient of an element at a coordination number.
    ///
    /// The result is the weighted average `Σ c6_ref · L / Σ L` over all reference entries of
    /// the element, with `L` given by [`gaussian_weight`].
    ///
    /// # Errors
    ///
    /// Returns `DispersionError::MissingReferenceData` if the table has no entries for the
    /// element, or `DispersionError::InterpolationDegeneracy` if every weight underflows to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftd3c6::{DispersionInterpolator, ReferenceTable};
    ///
    /// let table = ReferenceTable::load_from_str(r#"
    /// version = 1
    /// [elements]
    /// "H" = [[3.0, 1.0, 1.0], [7.0, 0.0, 0.0]]
    /// "#).unwrap();
    ///
    /// let c6 = DispersionInterpolator::new(&table).c6(1, 0.5).unwrap();
    /// assert!((c6 - 5.0).abs() < 1e-12);
    /// ```
    pub fn c6(
        &self,
        atomic_number: u8,
        coordination_number: f64,
    ) -> Result<f64, DispersionError> {
        let entries = self.table.entries_for(atomic_number)?;

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for entry in entries {
            let weight = gaussian_weight(coordination_number, entry, self.params);
            weighted_sum += entry.c6 * weight;
            weight_sum += weight;
        }

        if weight_sum == 0.0 || !weight_sum.is_finite() {
            return Err(DispersionError::InterpolationDegeneracy {
                atomic_number,
                coordination_number,
            });
        }

        let max_reference_cn = entries
            .iter()
            .map(|entry| entry.cn1.max(entry.cn2))
            .fold(0.0, f64::max);
        if coordination_number > max_reference_cn + 1.0 {
            warn!(
                "Coordination number {:.3} of element {} lies beyond its largest reference value {:.3}",
                coordination_number,
                elements::symbol(atomic_number).unwrap_or("?"),
                max_reference_cn
            );
        }

        Ok(weighted_sum / weight_sum)
    }

    /// Extrapolates the homonuclear C8 coefficient from C6: `3 · c6 · r2r4²`.
    pub fn c8(&self, atomic_number: u8, c6: f64) -> Result<f64, DispersionError> {
        self.c8_pair(atomic_number, atomic_number, c6)
    }

    /// Extrapolates the C8 coefficient of an element pair: `3 · c6 · r2r4(a) · r2r4(b)`.
    ///
    /// # Errors
    ///
    /// Returns `DispersionError::UnknownElement` if either element has no r²r⁴ constant.
    pub fn c8_pair(&self, element_a: u8, element_b: u8, c6: f64) -> Result<f64, DispersionError> {
        let r2r4_a = elements::r2r4_constant(element_a)?;
        let r2r4_b = elements::r2r4_constant(element_b)?;
        Ok(3.0 * c6 * r2r4_a * r2r4_b)
    }

    /// The table this interpolator reads from.
    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }
}
