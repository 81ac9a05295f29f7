//! Equation tables for each chapter
//!
//! Plain data handed to a rich-text/math rendering surface; the tables mirror
//! the closed forms the evaluators compute.

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const RELATIVITY_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Lorentz Factor",
        formula: "γ = 1/√(1 − v²/c²)",
        description: "Diverges as v approaches c",
    },
    Equation {
        name: "Length Contraction",
        formula: "L = L₀/γ",
        description: "Moving rods measure shorter",
    },
    Equation {
        name: "Time Dilation",
        formula: "Δt = γ·Δτ",
        description: "Moving clocks run slow",
    },
];

pub const PHOTOELECTRIC_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Photon Energy",
        formula: "E = h·f",
        description: "Energy of a single quantum of light",
    },
    Equation {
        name: "Maximum Kinetic Energy",
        formula: "K_max = h·f − φ",
        description: "Zero below the threshold frequency",
    },
];

pub const DOUBLE_SLIT_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Path Difference",
        formula: "Δ = d·sinθ ≈ d·x/L",
        description: "Sets constructive vs. destructive interference",
    },
    Equation {
        name: "Fringe Spacing",
        formula: "Δx = λ·L/d",
        description: "Distance between bright fringes",
    },
];

pub const BOHR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Orbit Radius",
        formula: "r_n = n²·a₀",
        description: "a₀ = 0.529 Å",
    },
    Equation {
        name: "Energy Levels",
        formula: "E_n = −13.6/n² eV",
        description: "Bound states of hydrogen",
    },
];

pub const PARTICLE_IN_BOX_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Eigenstates",
        formula: "ψ_n(x) = √(2/L)·sin(nπx/L)",
        description: "Standing waves that fit the box",
    },
    Equation {
        name: "Energy Scaling",
        formula: "E_n ∝ n²",
        description: "Sets the superposition beat rate",
    },
];

/// The "Key Equations" summary chapter
pub const KEY_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Lorentz Factor",
        formula: "γ = 1/√(1 − v²/c²)",
        description: "Special relativity",
    },
    Equation {
        name: "Photoelectric Cutoff",
        formula: "K_max = h·f − φ",
        description: "Photoelectric effect",
    },
    Equation {
        name: "Fringe Spacing",
        formula: "Δx = λ·L/d",
        description: "Double-slit interference",
    },
    Equation {
        name: "Bohr Levels",
        formula: "E_n = −13.6/n² eV",
        description: "Hydrogen atom",
    },
    Equation {
        name: "Infinite-Well Eigenstates",
        formula: "ψ_n(x) = √(2/L)·sin(nπx/L)",
        description: "Particle in a box",
    },
];

/// Equation table for a given chapter (empty for the introduction)
pub fn for_chapter(chapter: crate::Chapter) -> &'static [Equation] {
    use crate::Chapter::*;
    match chapter {
        Introduction => &[],
        SpecialRelativity => RELATIVITY_EQUATIONS,
        Photoelectric => PHOTOELECTRIC_EQUATIONS,
        DoubleSlit => DOUBLE_SLIT_EQUATIONS,
        BohrModel => BOHR_EQUATIONS,
        ParticleInBox => PARTICLE_IN_BOX_EQUATIONS,
        KeyEquations => KEY_EQUATIONS,
    }
}
