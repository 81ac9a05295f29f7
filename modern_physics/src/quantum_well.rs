//! Particle in an infinite square well
//!
//! Chapter 5. Eigenstates ψ_n(x) = √(2/L)·sin(nπx/L) in a box of unit length.
//! A superposition of two states with different n has a probability density
//! that oscillates in time: each eigenstate picks up the phase e^(−i·n²·t)
//! (E_n ∝ n² in scaled units), so the density beats at a rate set by
//! |n₁² − n₂²|. Densities are normalized to peak at 1 for plotting.

use common::chart::{palette, Chart, LineStyle, Panel, Series};
use common::linspace;
use std::f64::consts::PI;

use crate::complex::Complex;
use crate::error::ModelError;

/// Box length in natural units
pub const BOX_LENGTH: f64 = 1.0;
/// Spatial samples across the box
const X_SAMPLES: usize = 500;
/// Frames of the animated density and the scaled-time span they cover
const FRAMES: usize = 100;
const T_MAX: f64 = 4.0;
/// Guard against dividing by a vanishing peak
const NORM_EPSILON: f64 = 1e-12;

/// ψ_n(x) = √(2/L)·sin(nπx/L)
pub fn eigenstate(n: u32, x: f64) -> f64 {
    (2.0 / BOX_LENGTH).sqrt() * (n as f64 * PI * x / BOX_LENGTH).sin()
}

/// Validated superposition parameters
#[derive(Debug, Clone, Copy)]
pub struct WellInput {
    n1: u32,
    n2: u32,
    amplitude: f64,
}

impl WellInput {
    /// `amplitude` scales ψ₂ relative to ψ₁ and must lie in [0, 1].
    pub fn new(n1: u32, n2: u32, amplitude: f64) -> Result<Self, ModelError> {
        for n in [n1, n2] {
            if n == 0 {
                return Err(ModelError::InvalidQuantumNumber { n });
            }
        }
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(ModelError::AmplitudeOutOfRange { value: amplitude });
        }
        Ok(Self { n1, n2, amplitude })
    }

    pub fn n1(&self) -> u32 {
        self.n1
    }

    pub fn n2(&self) -> u32 {
        self.n2
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sample positions across the box
    pub fn positions(&self) -> Vec<f64> {
        linspace(0.0, BOX_LENGTH, X_SAMPLES)
    }

    /// |ψ₁ + amp·ψ₂|² at t = 0, normalized so the tallest sample is 1
    pub fn stationary_density(&self) -> Vec<f64> {
        let mut density: Vec<f64> = self
            .positions()
            .iter()
            .map(|&x| {
                let psi = eigenstate(self.n1, x) + self.amplitude * eigenstate(self.n2, x);
                psi * psi
            })
            .collect();
        normalize_peak(&mut density);
        density
    }

    /// Density at scaled time t, each eigenstate carrying its e^(−i·n²·t) phase
    fn density_at(&self, t: f64) -> Vec<f64> {
        let phase1 = Complex::exp_i(-((self.n1 * self.n1) as f64) * t);
        let phase2 = Complex::exp_i(-((self.n2 * self.n2) as f64) * t);
        let mut density: Vec<f64> = self
            .positions()
            .iter()
            .map(|&x| {
                let psi1 = phase1 * eigenstate(self.n1, x);
                let psi2 = phase2 * (self.amplitude * eigenstate(self.n2, x));
                (psi1 + psi2).norm_sq()
            })
            .collect();
        normalize_peak(&mut density);
        density
    }

    /// Oscillation rate of the density, |n₁² − n₂²| in scaled units
    pub fn beat_number(&self) -> u32 {
        (self.n1 * self.n1).abs_diff(self.n2 * self.n2)
    }

    /// Frames of the time-evolving density. The consumer owns the cadence and
    /// can stop between any two frames; nothing here blocks or draws.
    pub fn time_evolution(&self) -> TimeEvolution {
        TimeEvolution::new(*self)
    }

    /// Static figure for the stationary superposition
    pub fn chart(&self) -> Chart {
        let mut panel = Panel::new("x / L", "|ψ|² (normalized)");
        panel.series.push(Series::new(
            "|ψ|²",
            self.positions(),
            self.stationary_density(),
            LineStyle::new(palette::GREEN),
        ));
        Chart::single("Particle in a box", panel)
    }
}

fn normalize_peak(density: &mut [f64]) {
    let peak = density.iter().cloned().fold(0.0, f64::max);
    for v in density.iter_mut() {
        *v /= peak + NORM_EPSILON;
    }
}

/// One frame of the animated probability density
#[derive(Debug, Clone)]
pub struct Frame {
    /// Scaled time
    pub time: f64,
    /// Peak-normalized |ψ(x, t)|² over the sample grid
    pub density: Vec<f64>,
}

/// Iterator over animation frames for t ∈ [0, 4] in 100 steps
pub struct TimeEvolution {
    input: WellInput,
    times: std::vec::IntoIter<f64>,
}

impl TimeEvolution {
    fn new(input: WellInput) -> Self {
        Self {
            input,
            times: linspace(0.0, T_MAX, FRAMES).into_iter(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.times.len()
    }
}

impl Iterator for TimeEvolution {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let t = self.times.next()?;
        Some(Frame {
            time: t,
            density: self.input.density_at(t),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.times.len(), Some(self.times.len()))
    }
}

impl ExactSizeIterator for TimeEvolution {}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> WellInput {
        WellInput::new(1, 2, 0.7).unwrap()
    }

    #[test]
    fn eigenstates_vanish_at_the_walls() {
        for n in 1..=5 {
            assert!(eigenstate(n, 0.0).abs() < 1e-12);
            assert!(eigenstate(n, BOX_LENGTH).abs() < 1e-9);
        }
    }

    #[test]
    fn stationary_density_peaks_at_one_and_is_nonnegative() {
        let density = input().stationary_density();
        assert_eq!(density.len(), 500);
        assert!(density.iter().all(|&p| p >= 0.0));
        let peak = density.iter().cloned().fold(0.0, f64::max);
        assert!((peak - 1.0).abs() < 1e-9);
    }

    #[test]
    fn first_frame_matches_the_stationary_superposition() {
        let well = input();
        let frame = well.time_evolution().next().unwrap();
        assert_eq!(frame.time, 0.0);
        for (a, b) in frame.density.iter().zip(well.stationary_density()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn evolution_spans_one_hundred_frames_over_four_time_units() {
        let frames: Vec<Frame> = input().time_evolution().collect();
        assert_eq!(frames.len(), 100);
        assert_eq!(frames[0].time, 0.0);
        assert!((frames[99].time - 4.0).abs() < 1e-12);
    }

    #[test]
    fn every_frame_is_independently_normalized() {
        for frame in input().time_evolution().take(10) {
            let peak = frame.density.iter().cloned().fold(0.0, f64::max);
            assert!((peak - 1.0).abs() < 1e-9);
            assert!(frame.density.iter().all(|&p| p >= 0.0));
        }
    }

    #[test]
    fn evolution_can_stop_mid_sequence() {
        let mut frames = input().time_evolution();
        assert_eq!(frames.remaining(), 100);
        frames.next();
        frames.next();
        assert_eq!(frames.remaining(), 98);
        // dropping the iterator here is the cancellation path
    }

    #[test]
    fn beat_number_tracks_the_level_gap() {
        assert_eq!(WellInput::new(1, 2, 0.7).unwrap().beat_number(), 3);
        assert_eq!(WellInput::new(2, 5, 0.5).unwrap().beat_number(), 21);
        assert_eq!(WellInput::new(3, 3, 1.0).unwrap().beat_number(), 0);
    }

    #[test]
    fn single_state_density_is_time_independent() {
        // amplitude 0 leaves a lone eigenstate; its density must not move
        let well = WellInput::new(1, 3, 0.0).unwrap();
        let reference = well.stationary_density();
        let late = well.time_evolution().last().unwrap();
        for (a, b) in late.density.iter().zip(&reference) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(WellInput::new(0, 2, 0.5).is_err());
        assert!(WellInput::new(1, 2, 1.5).is_err());
        assert!(WellInput::new(1, 2, -0.1).is_err());
    }
}
