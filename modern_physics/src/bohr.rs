//! Bohr model of hydrogen: quantized orbits and level transitions
//!
//! Chapter 4. Electrons occupy orbits of radius r_n = n²·a₀ with energy
//! E_n = −13.6/n² eV; a transition between two levels emits or absorbs a
//! photon carrying |ΔE|. The chapter figure is an energy-level diagram with
//! the selected levels highlighted.

use common::chart::{palette, Chart, LineStyle, Panel, Series, Rgba};
use common::constants::{BOHR_RADIUS_ANGSTROM, HC_EV_NM, RYDBERG_EV};

use crate::error::ModelError;

/// Levels drawn in the energy diagram
const DIAGRAM_LEVELS: u32 = 6;

/// Energy of level n in eV, E_n = −13.6/n²
pub fn energy_level(n: u32) -> f64 {
    -RYDBERG_EV / (n * n) as f64
}

/// Orbit radius r_n = n²·a₀ in angstroms
pub fn orbit_radius_angstrom(n: u32) -> f64 {
    (n * n) as f64 * BOHR_RADIUS_ANGSTROM
}

/// Validated level pair for a transition
#[derive(Debug, Clone, Copy)]
pub struct BohrInput {
    initial: u32,
    final_level: u32,
}

impl BohrInput {
    pub fn new(initial: u32, final_level: u32) -> Result<Self, ModelError> {
        for n in [initial, final_level] {
            if n == 0 {
                return Err(ModelError::InvalidQuantumNumber { n });
            }
        }
        Ok(Self {
            initial,
            final_level,
        })
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn final_level(&self) -> u32 {
        self.final_level
    }

    /// Radius of the initial orbit in angstroms
    pub fn initial_radius_angstrom(&self) -> f64 {
        orbit_radius_angstrom(self.initial)
    }

    /// ΔE = |E_{n₁} − E_{n₂}| in eV
    pub fn transition_energy_ev(&self) -> f64 {
        (energy_level(self.initial) - energy_level(self.final_level)).abs()
    }

    /// Wavelength of the emitted/absorbed photon, λ = hc/ΔE in nm.
    /// `None` when the two levels coincide (no transition).
    pub fn photon_wavelength_nm(&self) -> Option<f64> {
        let de = self.transition_energy_ev();
        (de > 0.0).then(|| HC_EV_NM / de)
    }

    fn level_color(&self, n: u32) -> Rgba {
        if n == self.initial {
            palette::GOLD
        } else if n == self.final_level {
            palette::LIGHT_BLUE
        } else {
            palette::GRAY
        }
    }

    /// Energy-level diagram: one horizontal segment per level, drawn with the
    /// ground state at the top (inverted y, as in the original figure).
    pub fn level_diagram(&self) -> Chart {
        let mut panel = Panel::new("", "E (eV)");
        panel.invert_y = true;
        for n in 1..=DIAGRAM_LEVELS {
            let e = energy_level(n);
            panel.series.push(Series::new(
                format!("n = {n}"),
                vec![0.0, 1.0],
                vec![e, e],
                LineStyle::with_width(self.level_color(n), 5.0),
            ));
        }
        Chart::single("Hydrogen energy levels", panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_values_for_balmer_alpha() {
        // n = 3 → 2: r₁ ≈ 4.761 Å, ΔE ≈ 1.889 eV
        let b = BohrInput::new(3, 2).unwrap();
        assert!((b.initial_radius_angstrom() - 4.761).abs() < 1e-3);
        assert!((b.transition_energy_ev() - 1.889).abs() < 1e-3);
        // the H-alpha line sits at 656 nm
        let lambda = b.photon_wavelength_nm().unwrap();
        assert!((lambda - 656.3).abs() < 1.0);
    }

    #[test]
    fn energies_rise_toward_zero_with_n() {
        for n in 1..6 {
            assert!(energy_level(n + 1) > energy_level(n));
            assert!(energy_level(n) < 0.0);
        }
        assert_eq!(energy_level(1), -13.6);
    }

    #[test]
    fn radii_grow_quadratically() {
        for n in 1..6 {
            assert!(orbit_radius_angstrom(n + 1) > orbit_radius_angstrom(n));
        }
        assert!((orbit_radius_angstrom(2) - 4.0 * BOHR_RADIUS_ANGSTROM).abs() < 1e-12);
    }

    #[test]
    fn transition_energy_is_symmetric() {
        let up = BohrInput::new(2, 5).unwrap();
        let down = BohrInput::new(5, 2).unwrap();
        assert!((up.transition_energy_ev() - down.transition_energy_ev()).abs() < 1e-12);
    }

    #[test]
    fn no_photon_for_a_degenerate_transition() {
        assert_eq!(BohrInput::new(3, 3).unwrap().photon_wavelength_nm(), None);
    }

    #[test]
    fn ground_state_is_not_level_zero() {
        assert!(matches!(
            BohrInput::new(0, 2),
            Err(ModelError::InvalidQuantumNumber { n: 0 })
        ));
    }

    #[test]
    fn diagram_highlights_the_selected_levels() {
        let chart = BohrInput::new(3, 2).unwrap().level_diagram();
        let panel = &chart.panels[0];
        assert!(panel.invert_y);
        assert_eq!(panel.series.len(), 6);
        assert_eq!(panel.series[2].style.color, palette::GOLD);
        assert_eq!(panel.series[1].style.color, palette::LIGHT_BLUE);
        assert_eq!(panel.series[0].style.color, palette::GRAY);
    }
}
