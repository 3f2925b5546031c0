//! This module provides the numerical kernels of the dispersion model.
//!
//! It contains the recipe constants, the coordination-number calculation over all atom pairs,
//! and the Gaussian-weighted interpolation of tabulated reference C6 values. The kernels are
//! independent per atom and can run as ordered data-parallel maps.

use crate::error::DispersionError;
use rayon::prelude::*;

/// Default constants of the coordination-number and interpolation recipes.
pub mod constants;

/// Smoothed pairwise neighbor counting.
///
/// This module turns interatomic distances and covalent radii into a continuous coordination
/// number per atom using a sigmoid counting function.
pub mod coordination;

/// Coordination-number dependent C6 interpolation and C8 extrapolation.
pub mod interpolation;

/// Applies `f` to every item and returns the results in input order.
///
/// Each item writes only its own output slot. When several items fail, the error of the first
/// failing item in input order is returned, whether or not the map ran in parallel.
pub(crate) fn map_ordered<T, R, F>(
    items: &[T],
    parallel: bool,
    f: F,
) -> Result<Vec<R>, DispersionError>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> Result<R, DispersionError> + Sync + Send,
{
    let results: Vec<Result<R, DispersionError>> = if parallel {
        items.par_iter().enumerate().map(|(i, item)| f(i, item)).collect()
    } else {
        items.iter().enumerate().map(|(i, item)| f(i, item)).collect()
    };

    results.into_iter().collect()
}
