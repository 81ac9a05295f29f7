//! Modern Physics Interactive Simulator
//!
//! Chapter evaluators for an introductory modern-physics course
//! (after Krane, *Modern Physics*, 2nd ed.):
//!
//! - **Special Relativity**: Lorentz factor, length contraction, worldlines
//! - **Photoelectric Effect**: photon energy and the emission threshold
//! - **Double-Slit Interference**: idealized two-source fringe pattern
//! - **Bohr Model**: quantized levels, radii, and transition energies
//! - **Particle in a Box**: stationary and time-evolving superpositions
//!
//! Every evaluator is a pure function of a validated parameter struct. Chart
//! output is plain data (`common::chart`); lesson text and equation tables are
//! looked up per chapter and locale.

pub mod bohr;
pub mod chapter;
pub mod complex;
pub mod equations;
pub mod error;
pub mod interference;
pub mod lesson;
pub mod photoelectric;
pub mod quantum_well;
pub mod relativity;

pub use chapter::{Chapter, Locale};
pub use error::ModelError;
