//! Command-line front end for the chapter evaluators
//!
//! Prints the lesson, the computed readouts, and a summary of the chart data
//! for a chosen chapter. Flag defaults match the interactive controls' rest
//! positions; `--locale fa` switches the prose to Persian.

use clap::{Parser, Subcommand, ValueEnum};
use common::chart::Chart;

use modern_physics::bohr::BohrInput;
use modern_physics::equations;
use modern_physics::interference::InterferenceInput;
use modern_physics::lesson::lesson;
use modern_physics::photoelectric::PhotoelectricInput;
use modern_physics::quantum_well::WellInput;
use modern_physics::relativity::RelativityInput;
use modern_physics::{Chapter, Locale, ModelError};

#[derive(Parser)]
#[command(name = "modern_physics", about = "Modern-physics chapter evaluators", version)]
struct Cli {
    /// Display language for lesson text and status lines
    #[arg(long, value_enum, default_value = "en", global = true)]
    locale: LocaleArg,

    #[command(subcommand)]
    chapter: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Fa,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Fa => Locale::Persian,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Course introduction
    Intro,
    /// Lorentz factor and length contraction
    Relativity {
        /// Speed as a fraction of c, in [0, 1)
        #[arg(long, default_value_t = 0.7)]
        beta: f64,
        /// Proper length L₀ in meters
        #[arg(long, default_value_t = 20.0)]
        length: f64,
    },
    /// Photon energy and the emission threshold
    Photoelectric {
        /// Light frequency in units of 10¹⁴ Hz
        #[arg(long, default_value_t = 15.0)]
        frequency: f64,
        /// Work function φ in eV
        #[arg(long, default_value_t = 2.2)]
        work_function: f64,
    },
    /// Two-source interference fringes
    DoubleSlit {
        /// Slit separation d in mm
        #[arg(long, default_value_t = 0.5)]
        slit_separation: f64,
        /// Wavelength λ in nm
        #[arg(long, default_value_t = 550.0)]
        wavelength: f64,
        /// Screen distance L in m
        #[arg(long, default_value_t = 1.0)]
        distance: f64,
    },
    /// Hydrogen levels and transitions
    Bohr {
        /// Initial level n₁
        #[arg(long, default_value_t = 3)]
        initial: u32,
        /// Final level n₂
        #[arg(long = "final", default_value_t = 2)]
        final_level: u32,
    },
    /// Infinite-well superposition
    #[command(name = "box")]
    ParticleInBox {
        /// First state n₁
        #[arg(long, default_value_t = 1)]
        n1: u32,
        /// Second state n₂
        #[arg(long, default_value_t = 2)]
        n2: u32,
        /// Amplitude of ψ₂ relative to ψ₁, in [0, 1]
        #[arg(long, default_value_t = 0.7)]
        amplitude: f64,
        /// Play the time evolution instead of the stationary frame
        #[arg(long)]
        animate: bool,
    },
    /// Key equation summary
    Equations,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ModelError> {
    let locale = cli.locale.into();
    match cli.chapter {
        Command::Intro => print_lesson(Chapter::Introduction, locale),
        Command::Relativity { beta, length } => {
            let input = RelativityInput::new(beta, length)?;
            log::info!("relativity: beta = {beta}, L0 = {length} m");
            print_lesson(Chapter::SpecialRelativity, locale);
            println!("γ = {:.4}", input.gamma());
            println!("L = {:.2} m", input.contracted_length());
            println!("{}", input.regime().description(locale));
            summarize_chart(&input.chart());
        }
        Command::Photoelectric {
            frequency,
            work_function,
        } => {
            let input = PhotoelectricInput::new(frequency, work_function)?;
            log::info!("photoelectric: f = {frequency}e14 Hz, phi = {work_function} eV");
            print_lesson(Chapter::Photoelectric, locale);
            println!("E = {:.3} eV", input.photon_energy_ev());
            println!("K_max = {:.3} eV", input.max_kinetic_energy_ev());
            println!(
                "threshold = {:.2} ×10¹⁴ Hz",
                input.threshold_frequency_e14()
            );
            println!("{}", input.status(locale));
            summarize_chart(&input.chart());
        }
        Command::DoubleSlit {
            slit_separation,
            wavelength,
            distance,
        } => {
            let input = InterferenceInput::new(slit_separation, wavelength, distance)?;
            log::info!("double slit: d = {slit_separation} mm, lambda = {wavelength} nm");
            print_lesson(Chapter::DoubleSlit, locale);
            println!("Δx = {:.3} mm", input.fringe_spacing_mm());
            summarize_chart(&input.chart());
        }
        Command::Bohr {
            initial,
            final_level,
        } => {
            let input = BohrInput::new(initial, final_level)?;
            log::info!("bohr: n = {initial} -> {final_level}");
            print_lesson(Chapter::BohrModel, locale);
            println!("r₁ = {:.3} Å", input.initial_radius_angstrom());
            println!("ΔE = {:.3} eV", input.transition_energy_ev());
            if let Some(lambda) = input.photon_wavelength_nm() {
                println!("λ = {:.1} nm", lambda);
            }
            summarize_chart(&input.level_diagram());
        }
        Command::ParticleInBox {
            n1,
            n2,
            amplitude,
            animate,
        } => {
            let input = WellInput::new(n1, n2, amplitude)?;
            log::info!("particle in a box: n1 = {n1}, n2 = {n2}, amp = {amplitude}");
            print_lesson(Chapter::ParticleInBox, locale);
            println!("beat number |n₁² − n₂²| = {}", input.beat_number());
            if animate {
                for frame in input.time_evolution() {
                    println!(
                        "t = {:.3}  density peak at x/L = {:.3}",
                        frame.time,
                        peak_position(&frame.density)
                    );
                }
            } else {
                summarize_chart(&input.chart());
            }
        }
        Command::Equations => print_lesson(Chapter::KeyEquations, locale),
    }
    Ok(())
}

fn print_lesson(chapter: Chapter, locale: Locale) {
    let lesson = lesson(chapter, locale);
    println!("=== {} ===", lesson.heading);
    for paragraph in lesson.paragraphs {
        println!("{paragraph}");
    }
    let equations = equations::for_chapter(chapter);
    if !equations.is_empty() {
        println!();
        for eq in equations {
            println!("  {:<24} {}", eq.name, eq.formula);
        }
    }
    println!();
}

fn summarize_chart(chart: &Chart) {
    println!("[chart] {}", chart.title);
    for panel in &chart.panels {
        for series in &panel.series {
            println!("  series '{}': {} points", series.label, series.len());
        }
        if !panel.rects.is_empty() {
            println!("  {} shapes", panel.rects.len());
        }
    }
}

/// Fractional position of the tallest density sample
fn peak_position(density: &[f64]) -> f64 {
    let peak = density
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    peak as f64 / (density.len().saturating_sub(1)).max(1) as f64
}
