//! Minimal complex arithmetic for time-evolved wavefunctions

/// Complex number in Cartesian form
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex exponential e^(i·x), the phase factor of a stationary state
    pub fn exp_i(x: f64) -> Self {
        Self {
            re: x.cos(),
            im: x.sin(),
        }
    }

    /// Magnitude squared |z|² = probability density
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl std::ops::Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Complex;
    use std::f64::consts::PI;

    #[test]
    fn zero_phase_is_unity() {
        assert_eq!(Complex::exp_i(0.0), Complex::ONE);
    }

    #[test]
    fn phase_factors_have_unit_magnitude() {
        for &t in &[0.1, 1.0, PI, 17.3] {
            assert!((Complex::exp_i(t).norm_sq() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn phases_multiply_by_adding_angles() {
        let lhs = Complex::exp_i(0.4) * Complex::exp_i(1.1);
        let rhs = Complex::exp_i(1.5);
        assert!((lhs.re - rhs.re).abs() < 1e-12);
        assert!((lhs.im - rhs.im).abs() < 1e-12);
    }
}
