//! One-shot command-line calculator.
//!
//! Evaluates a single solve from flag-supplied quantities and prints
//! the same message the form calculator would show. An omitted flag is
//! an absent field; the coefficient flag is optional everywhere it
//! appears.
//!
//! ```bash
//! hydrocalc mass-loss --flow 0.5 --concentration 120
//! hydrocalc area --runoff 10 --intensity 0.01 --coefficient 0.8
//! ```

use clap::{Parser, Subcommand};
use hydrocalc_core::solver::{runoff, soil};
use hydrocalc_core::SolveResult;
use std::process::ExitCode;

/// Soil-loss and rainfall-runoff calculator
#[derive(Parser, Debug)]
#[command(name = "hydrocalc")]
#[command(about = "Solve soil mass-loss and rainfall-runoff relations", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mass loss (kg/hr) from flow and concentration
    MassLoss {
        /// Flow in m³/hr
        #[arg(long)]
        flow: Option<f64>,
        /// Concentration in kg/m³
        #[arg(long)]
        concentration: Option<f64>,
    },
    /// Concentration (kg/m³) from flow and mass loss
    Concentration {
        /// Flow in m³/hr
        #[arg(long)]
        flow: Option<f64>,
        /// Mass loss in kg/hr
        #[arg(long)]
        mass_loss: Option<f64>,
    },
    /// Flow (m³/hr) from concentration and mass loss
    Flow {
        /// Concentration in kg/m³
        #[arg(long)]
        concentration: Option<f64>,
        /// Mass loss in kg/hr
        #[arg(long)]
        mass_loss: Option<f64>,
    },
    /// Runoff volume (m³/hr) from area, intensity and optional coefficient
    Runoff {
        /// Catchment area in m²
        #[arg(long)]
        area: Option<f64>,
        /// Rainfall intensity in m/hr
        #[arg(long)]
        intensity: Option<f64>,
        /// Runoff coefficient (defaults to 1 when omitted)
        #[arg(long)]
        coefficient: Option<f64>,
    },
    /// Required area (m²) from runoff volume and intensity
    Area {
        /// Runoff volume in m³/hr
        #[arg(long)]
        runoff: Option<f64>,
        /// Rainfall intensity in m/hr
        #[arg(long)]
        intensity: Option<f64>,
        /// Runoff coefficient (defaults to 1 when omitted)
        #[arg(long)]
        coefficient: Option<f64>,
    },
    /// Rainfall intensity (m/hr) from runoff volume and area
    Intensity {
        /// Runoff volume in m³/hr
        #[arg(long)]
        runoff: Option<f64>,
        /// Catchment area in m²
        #[arg(long)]
        area: Option<f64>,
        /// Runoff coefficient (defaults to 1 when omitted)
        #[arg(long)]
        coefficient: Option<f64>,
    },
}

fn run(command: Command) -> SolveResult {
    match command {
        Command::MassLoss { flow, concentration } => soil::solve_mass_loss(flow, concentration),
        Command::Concentration { flow, mass_loss } => soil::solve_concentration(flow, mass_loss),
        Command::Flow {
            concentration,
            mass_loss,
        } => soil::solve_flow(concentration, mass_loss),
        Command::Runoff {
            area,
            intensity,
            coefficient,
        } => runoff::solve_runoff_volume(area, intensity, coefficient),
        Command::Area {
            runoff,
            intensity,
            coefficient,
        } => runoff::solve_required_area(runoff, intensity, coefficient),
        Command::Intensity {
            runoff,
            area,
            coefficient,
        } => runoff::solve_intensity(runoff, area, coefficient),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.command) {
        Ok(solution) => {
            println!("{}", solution.message.headline);
            if let Some(detail) = &solution.message.detail {
                println!("  {detail}");
            }
            println!("  stored as {} = {}", solution.output.name(), solution.stored);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
