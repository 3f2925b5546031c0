//! This module contains the calculator that turns a molecular geometry into per-atom C6 and C8
//! coefficients.
//!
//! It provides `D3Calculator`, which composes element resolution, the coordination-number
//! calculation and the reference interpolation over a whole system, and `CalculatorOptions`
//! for configuring it.

mod implementation;
mod options;

pub use implementation::D3Calculator;
pub use options::CalculatorOptions;
