//! Special relativity: Lorentz factor and length contraction
//!
//! Chapter 1. For a speed fraction β = v/c the Lorentz factor is
//! γ = 1/√(1−β²), and a rod of proper length L₀ measures L = L₀/γ in the
//! frame it moves through. The chapter figure stacks the rest and contracted
//! rods above a spacetime diagram of the rod's endpoint worldlines.

use common::chart::{palette, Chart, LineStyle, Panel, RectShape, Series};
use common::linspace;
use glam::DVec2;

use crate::chapter::Locale;
use crate::error::ModelError;

/// Time span and sample count of the worldline panel
const T_MAX: f64 = 10.0;
const T_SAMPLES: usize = 200;

/// Offset of the contracted rod in the comparison panel
const MOVING_ROD_OFFSET: f64 = 5.0;

/// How strong the relativistic effects are at a given β
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// β < 0.3
    Negligible,
    /// 0.3 ≤ β < 0.7
    Significant,
    /// β ≥ 0.7
    Extreme,
}

impl Regime {
    /// Fixed textbook thresholds, not derived from anything.
    pub fn classify(beta: f64) -> Self {
        if beta < 0.3 {
            Regime::Negligible
        } else if beta < 0.7 {
            Regime::Significant
        } else {
            Regime::Extreme
        }
    }

    pub fn description(&self, locale: Locale) -> &'static str {
        use Locale::*;
        match (self, locale) {
            (Regime::Negligible, English) => "Negligible relativity",
            (Regime::Significant, English) => "Significant contraction",
            (Regime::Extreme, English) => "Near c! γ > 2",
            (Regime::Negligible, Persian) => "اثر نسبیتی ناچیز",
            (Regime::Significant, Persian) => "کوتاه‌شدگی قابل توجه",
            (Regime::Extreme, Persian) => "نزدیک سرعت نور! γ بزرگ‌تر از ۲",
        }
    }
}

/// Validated inputs for the relativity chapter
#[derive(Debug, Clone, Copy)]
pub struct RelativityInput {
    beta: f64,
    proper_length: f64,
}

impl RelativityInput {
    /// `beta` is v/c and must lie in [0, 1); `proper_length` is L₀ in meters.
    pub fn new(beta: f64, proper_length: f64) -> Result<Self, ModelError> {
        if !(0.0..1.0).contains(&beta) {
            return Err(ModelError::SuperluminalSpeed { beta });
        }
        if proper_length <= 0.0 {
            return Err(ModelError::NonPositiveParameter {
                name: "proper length",
                value: proper_length,
            });
        }
        Ok(Self {
            beta,
            proper_length,
        })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn proper_length(&self) -> f64 {
        self.proper_length
    }

    /// Lorentz factor γ = 1/√(1−β²)
    pub fn gamma(&self) -> f64 {
        1.0 / (1.0 - self.beta * self.beta).sqrt()
    }

    /// Contracted length L = L₀/γ
    pub fn contracted_length(&self) -> f64 {
        self.proper_length / self.gamma()
    }

    pub fn regime(&self) -> Regime {
        Regime::classify(self.beta)
    }

    /// Worldlines of the rod's endpoints: x = βt and x = L₀ + βt,
    /// t ∈ [0, 10] in scaled units.
    pub fn worldlines(&self) -> (Vec<DVec2>, Vec<DVec2>) {
        let t = linspace(0.0, T_MAX, T_SAMPLES);
        let leading = t.iter().map(|&t| DVec2::new(self.beta * t, t)).collect();
        let trailing = t
            .iter()
            .map(|&t| DVec2::new(self.proper_length + self.beta * t, t))
            .collect();
        (leading, trailing)
    }

    /// Two-panel figure: rod comparison on top, spacetime diagram below.
    pub fn chart(&self) -> Chart {
        let mut rods = Panel::new("x (m)", "");
        rods.rects.push(RectShape {
            x0: 0.0,
            x1: self.proper_length,
            y0: 0.0,
            y1: 1.0,
            fill: palette::SKY,
            opacity: 0.3,
        });
        rods.rects.push(RectShape {
            x0: MOVING_ROD_OFFSET,
            x1: MOVING_ROD_OFFSET + self.contracted_length(),
            y0: 0.0,
            y1: 1.0,
            fill: palette::RED,
            opacity: 0.3,
        });

        let (leading, trailing) = self.worldlines();
        let mut spacetime = Panel::new("x", "t");
        spacetime
            .series
            .push(Series::from_points("leading edge", &leading, LineStyle::new(palette::BLUE)));
        spacetime
            .series
            .push(Series::from_points("trailing edge", &trailing, LineStyle::new(palette::RED)));

        Chart {
            title: "Length contraction".into(),
            panels: vec![rods, spacetime],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(beta: f64, l0: f64) -> RelativityInput {
        RelativityInput::new(beta, l0).unwrap()
    }

    #[test]
    fn no_contraction_at_rest() {
        let r = input(0.0, 20.0);
        assert_eq!(r.gamma(), 1.0);
        assert_eq!(r.contracted_length(), 20.0);
    }

    #[test]
    fn gamma_is_monotonic_and_at_least_one() {
        let mut last = 0.0;
        for &beta in linspace(0.0, 0.99, 100).iter() {
            let g = input(beta, 1.0).gamma();
            assert!(g >= 1.0);
            assert!(g > last || beta == 0.0);
            last = g;
        }
    }

    #[test]
    fn contracted_length_never_exceeds_proper_length() {
        for &beta in linspace(0.0, 0.99, 50).iter() {
            let r = input(beta, 20.0);
            assert!(r.contracted_length() <= r.proper_length());
        }
    }

    #[test]
    fn textbook_values_at_seven_tenths_c() {
        let r = input(0.7, 20.0);
        assert!((r.gamma() - 1.4003).abs() < 1e-3);
        assert!((r.contracted_length() - 14.28).abs() < 5e-3);
    }

    #[test]
    fn light_speed_and_beyond_are_rejected() {
        assert!(matches!(
            RelativityInput::new(1.0, 20.0),
            Err(ModelError::SuperluminalSpeed { .. })
        ));
        assert!(RelativityInput::new(1.5, 20.0).is_err());
        assert!(RelativityInput::new(-0.1, 20.0).is_err());
    }

    #[test]
    fn zero_length_rod_is_rejected() {
        assert!(RelativityInput::new(0.5, 0.0).is_err());
    }

    #[test]
    fn regime_bands_use_fixed_thresholds() {
        assert_eq!(Regime::classify(0.1), Regime::Negligible);
        assert_eq!(Regime::classify(0.3), Regime::Significant);
        assert_eq!(Regime::classify(0.69), Regime::Significant);
        assert_eq!(Regime::classify(0.7), Regime::Extreme);
    }

    #[test]
    fn worldlines_start_at_the_rod_endpoints() {
        let r = input(0.6, 20.0);
        let (leading, trailing) = r.worldlines();
        assert_eq!(leading.len(), 200);
        assert_eq!(trailing.len(), 200);
        assert_eq!(leading[0], DVec2::new(0.0, 0.0));
        assert_eq!(trailing[0], DVec2::new(20.0, 0.0));
        // slope dx/dt is β on both lines
        let dt = leading[1].y - leading[0].y;
        assert!((leading[1].x - leading[0].x - 0.6 * dt).abs() < 1e-12);
    }

    #[test]
    fn chart_has_rod_and_spacetime_panels() {
        let chart = input(0.7, 20.0).chart();
        assert_eq!(chart.panels.len(), 2);
        assert_eq!(chart.panels[0].rects.len(), 2);
        assert_eq!(chart.panels[1].series.len(), 2);
    }
}
