//! This module defines the fixed constants of the D3 coordination-number and C6 interpolation
//! recipes (Grimme et al., J. Chem. Phys. 2010, 132, 154104).
//!
//! The constants are the defaults of `CoordinationParameters` and `InterpolationParameters`;
//! they are injected into the kernels rather than referenced directly, so each formula can be
//! exercised with other values in isolation.

/// Steepness of the sigmoid counting function.
///
/// Larger values turn the smooth neighbor count into a sharper step around the scaled
/// covalent-radius sum.
pub const DEFAULT_K1: f64 = 16.0;

/// Scaling applied to the covalent-radius sum of a pair before comparing it to the distance.
pub const DEFAULT_K2: f64 = 4.0 / 3.0;

/// Sharpness of the Gaussian weights over reference coordination numbers.
///
/// Larger values make the interpolated C6 follow the closest reference point more strictly.
pub const DEFAULT_K3: f64 = 4.0;
