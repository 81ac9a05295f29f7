//! Double-slit interference: the idealized two-source fringe pattern
//!
//! Chapter 3. Two coherent slits a distance d apart throw the normalized
//! intensity I(x) = cos²(π·d·x / (λ·L)) onto a screen at distance L. This is
//! the pure two-source pattern; no single-slit diffraction envelope is
//! applied. Bright fringes sit Δx = λL/d apart.

use common::chart::{palette, Chart, LineStyle, Panel, Series};
use common::linspace;
use std::f64::consts::PI;

use crate::error::ModelError;

/// Half-width of the screen window in meters
const X_HALF_WIDTH_M: f64 = 0.05;
const X_SAMPLES: usize = 1000;

/// Validated inputs for the interference chapter
#[derive(Debug, Clone, Copy)]
pub struct InterferenceInput {
    slit_separation_mm: f64,
    wavelength_nm: f64,
    screen_distance_m: f64,
}

impl InterferenceInput {
    pub fn new(
        slit_separation_mm: f64,
        wavelength_nm: f64,
        screen_distance_m: f64,
    ) -> Result<Self, ModelError> {
        for (name, value) in [
            ("slit separation", slit_separation_mm),
            ("wavelength", wavelength_nm),
            ("screen distance", screen_distance_m),
        ] {
            if value <= 0.0 {
                return Err(ModelError::NonPositiveParameter { name, value });
            }
        }
        Ok(Self {
            slit_separation_mm,
            wavelength_nm,
            screen_distance_m,
        })
    }

    fn slit_separation_m(&self) -> f64 {
        self.slit_separation_mm * 1e-3
    }

    fn wavelength_m(&self) -> f64 {
        self.wavelength_nm * 1e-9
    }

    /// Normalized intensity at screen position x (meters from center)
    pub fn intensity(&self, x: f64) -> f64 {
        let arg = PI * self.slit_separation_m() * x / (self.wavelength_m() * self.screen_distance_m);
        arg.cos().powi(2)
    }

    /// Bright-fringe spacing Δx = λL/d, in millimeters
    pub fn fringe_spacing_mm(&self) -> f64 {
        self.wavelength_m() * self.screen_distance_m / self.slit_separation_m() * 1e3
    }

    /// Intensity sampled across the screen window, x reported in mm
    pub fn pattern(&self) -> Series {
        let x = linspace(-X_HALF_WIDTH_M, X_HALF_WIDTH_M, X_SAMPLES);
        let intensity = x.iter().map(|&x| self.intensity(x)).collect();
        let x_mm = x.into_iter().map(|x| x * 1e3).collect();
        Series::new("I / I₀", x_mm, intensity, LineStyle::new(palette::LIGHT_BLUE))
    }

    pub fn chart(&self) -> Chart {
        let mut panel = Panel::new("x (mm)", "I / I₀");
        panel.series.push(self.pattern());
        Chart::single("Double-slit interference", panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_input() -> InterferenceInput {
        InterferenceInput::new(0.5, 550.0, 1.0).unwrap()
    }

    #[test]
    fn central_fringe_is_bright() {
        assert_eq!(default_input().intensity(0.0), 1.0);
    }

    #[test]
    fn fringe_spacing_matches_textbook_value() {
        // d = 0.5 mm, λ = 550 nm, L = 1 m → Δx ≈ 1.1 mm
        assert!((default_input().fringe_spacing_mm() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn pattern_is_periodic_with_the_fringe_spacing() {
        let input = default_input();
        let dx_m = input.fringe_spacing_mm() * 1e-3;
        for &x in &[0.0, 0.3e-3, 1.7e-3, -2.4e-3] {
            assert!((input.intensity(x + dx_m) - input.intensity(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn intensity_stays_normalized() {
        let series = default_input().pattern();
        assert_eq!(series.len(), 1000);
        assert!(series.y.iter().all(|&i| (0.0..=1.0).contains(&i)));
    }

    #[test]
    fn pattern_x_axis_spans_the_screen_in_mm() {
        let series = default_input().pattern();
        assert!((series.x[0] + 50.0).abs() < 1e-9);
        assert!((series.x[999] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn nonpositive_geometry_is_rejected() {
        assert!(InterferenceInput::new(0.0, 550.0, 1.0).is_err());
        assert!(InterferenceInput::new(0.5, -550.0, 1.0).is_err());
        assert!(InterferenceInput::new(0.5, 550.0, 0.0).is_err());
    }
}
