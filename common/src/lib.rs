//! Common utilities for the modern-physics chapter evaluators
//!
//! This crate provides the physical constants, 1-D sampling grids, and the
//! plain-data chart model shared by every chapter. Nothing here knows how a
//! figure is drawn; a chart is just sampled arrays plus styling.

pub mod chart;
pub mod grid;

pub use grid::linspace;

/// Physical constants used across chapters
pub mod constants {
    /// Planck constant in eV·s
    pub const H_EV_S: f64 = 4.135667696e-15;

    /// Speed of light in m/s
    pub const C: f64 = 299_792_458.0;

    /// Bohr radius in angstroms
    pub const BOHR_RADIUS_ANGSTROM: f64 = 0.529;

    /// Hydrogen ground-state binding energy in eV
    pub const RYDBERG_EV: f64 = 13.6;

    /// h·c in eV·nm, for converting transition energies to photon wavelengths
    pub const HC_EV_NM: f64 = H_EV_S * C * 1e9;
}

#[cfg(test)]
mod tests {
    use super::constants::*;

    #[test]
    fn hc_product_matches_tabulated_value() {
        assert!((HC_EV_NM - 1239.84).abs() < 0.01);
    }
}
