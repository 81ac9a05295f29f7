//! Photoelectric effect: photon energy and the emission threshold
//!
//! Chapter 2. A photon carries E = h·f; electrons leave the surface only when
//! E exceeds the work function φ, with K_max = E − φ clamped at zero below the
//! threshold frequency. Intensity changes the photocurrent, never K_max.

use common::chart::{palette, Chart, LineStyle, Marker, Panel, Series};
use common::constants::H_EV_S;
use common::linspace;
use glam::DVec2;

use crate::chapter::Locale;
use crate::error::ModelError;

/// Frequency axis of the response curve, in units of 10¹⁴ Hz
const F_MAX_E14: f64 = 100.0;
const F_SAMPLES: usize = 500;

/// Validated inputs for the photoelectric chapter
#[derive(Debug, Clone, Copy)]
pub struct PhotoelectricInput {
    frequency_e14: f64,
    work_function_ev: f64,
}

impl PhotoelectricInput {
    /// `frequency_e14` is the light frequency in units of 10¹⁴ Hz;
    /// `work_function_ev` is φ in eV.
    pub fn new(frequency_e14: f64, work_function_ev: f64) -> Result<Self, ModelError> {
        if frequency_e14 <= 0.0 {
            return Err(ModelError::NonPositiveParameter {
                name: "frequency",
                value: frequency_e14,
            });
        }
        if work_function_ev <= 0.0 {
            return Err(ModelError::NonPositiveParameter {
                name: "work function",
                value: work_function_ev,
            });
        }
        Ok(Self {
            frequency_e14,
            work_function_ev,
        })
    }

    pub fn frequency_e14(&self) -> f64 {
        self.frequency_e14
    }

    pub fn work_function_ev(&self) -> f64 {
        self.work_function_ev
    }

    /// Photon energy E = h·f in eV
    pub fn photon_energy_ev(&self) -> f64 {
        H_EV_S * self.frequency_e14 * 1e14
    }

    /// K_max = max(E − φ, 0); the clamp is the physical cutoff below threshold
    pub fn max_kinetic_energy_ev(&self) -> f64 {
        (self.photon_energy_ev() - self.work_function_ev).max(0.0)
    }

    /// Lowest frequency that ejects electrons, φ/h, in units of 10¹⁴ Hz
    pub fn threshold_frequency_e14(&self) -> f64 {
        self.work_function_ev / H_EV_S * 1e-14
    }

    pub fn emits(&self) -> bool {
        self.photon_energy_ev() > self.work_function_ev
    }

    pub fn status(&self, locale: Locale) -> &'static str {
        match (self.emits(), locale) {
            (true, Locale::English) => "Electrons emitted",
            (false, Locale::English) => "Below threshold",
            (true, Locale::Persian) => "الکترون‌ها خارج می‌شوند",
            (false, Locale::Persian) => "زیر آستانه",
        }
    }

    /// K_max as a function of frequency for the current work function
    pub fn response_curve(&self) -> Series {
        let f = linspace(0.0, F_MAX_E14, F_SAMPLES);
        let k = f
            .iter()
            .map(|&f| (H_EV_S * f * 1e14 - self.work_function_ev).max(0.0))
            .collect();
        Series::new("K_max (eV)", f, k, LineStyle::new(palette::BLUE))
    }

    /// Response curve with the current operating point marked.
    pub fn chart(&self) -> Chart {
        let mut panel = Panel::new("f (10¹⁴ Hz)", "K_max (eV)");
        panel.series.push(self.response_curve());
        panel.markers.push(Marker {
            position: DVec2::new(self.frequency_e14, self.max_kinetic_energy_ev()),
            size: 12.0,
            color: palette::RED,
        });
        Chart::single("Photoelectric response", panel)
    }
}
