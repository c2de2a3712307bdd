mod case;

use case::{Case, CaseError};
use clap::{Parser, Subcommand};
use ic_core::{Real, ScalarField, k, zeros};
use ic_models::{
    CompositionError, InterfaceCompositionModel, LinearizationCheck, SweepSpacing,
    TemperatureSweep, check_all_species, construct, evaluate_sweep, models, saturation_models,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "ic-cli")]
#[command(about = "Interface composition closure laws - evaluate and check cases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered closure laws and saturation models
    Models,
    /// Update the case's model at Tf and print every query
    Evaluate {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check yf_prime against a finite difference of yf
    Check {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Finite difference step in K
        #[arg(long, default_value_t = 1e-3)]
        step: Real,
        /// Relative tolerance
        #[arg(long, default_value_t = 1e-4)]
        rel_tol: Real,
    },
    /// Evaluate one species over a range of interface temperatures
    Sweep {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Species to evaluate
        #[arg(long)]
        species: String,
        /// First temperature in K
        #[arg(long)]
        start: Real,
        /// Last temperature in K
        #[arg(long)]
        end: Real,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Case(#[from] CaseError),

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

pub type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Evaluate { case_path, json } => cmd_evaluate(&case_path, json),
        Commands::Check {
            case_path,
            step,
            rel_tol,
        } => cmd_check(&case_path, step, rel_tol),
        Commands::Sweep {
            case_path,
            species,
            start,
            end,
            points,
            log,
            json,
        } => cmd_sweep(&case_path, &species, start, end, points, log, json),
    }
}

fn cmd_models() -> CliResult<()> {
    println!("Interface composition models:");
    for name in models()?.names() {
        println!("  {name}");
    }
    println!("Saturation pressure models:");
    for name in saturation_models()?.names() {
        println!("  {name}");
    }
    Ok(())
}

/// Cell-averaged query results for one species.
#[derive(Debug, Serialize)]
struct SpeciesReport {
    species: String,
    #[serde(rename = "Yf")]
    yf: Real,
    #[serde(rename = "YfPrime")]
    yf_prime: Real,
    #[serde(rename = "dY")]
    dy: Real,
    #[serde(rename = "D")]
    diffusivity: Real,
    #[serde(rename = "L")]
    latent_heat: Real,
}

#[derive(Debug, Serialize)]
struct Report {
    model: &'static str,
    pair: String,
    #[serde(rename = "Tf")]
    tf: Real,
    species: Vec<SpeciesReport>,
    #[serde(rename = "dmdtL", skip_serializing_if = "Option::is_none")]
    dmdt_l: Option<Real>,
    #[serde(rename = "dmdtLPrime", skip_serializing_if = "Option::is_none")]
    dmdt_l_prime: Option<Real>,
}

fn species_report(
    model: &dyn InterfaceCompositionModel,
    species: &str,
    tf: &ScalarField,
) -> CliResult<SpeciesReport> {
    Ok(SpeciesReport {
        species: species.to_string(),
        yf: model.yf(species, tf)?.mean(),
        yf_prime: model.yf_prime(species, tf)?.mean(),
        dy: model.dy(species, tf)?.mean(),
        diffusivity: model.diffusivity(species)?.mean(),
        latent_heat: model.latent_heat(species, tf)?.mean(),
    })
}

fn cmd_evaluate(case_path: &Path, json: bool) -> CliResult<()> {
    let case = Case::load(case_path)?;
    let pair = case.pair()?;
    let mut model = construct(&case.model_config()?, &pair)?;
    let tf = case.tf();
    model.update(&tf)?;

    let species = model
        .species()
        .iter()
        .map(|name| species_report(model.as_ref(), name, &tf))
        .collect::<CliResult<Vec<_>>>()?;

    let (dmdt_l, dmdt_l_prime) = match case.k() {
        Some(k) => {
            let mut dmdt_l = zeros(tf.len());
            let mut dmdt_l_prime = zeros(tf.len());
            model.add_dmdt_l(&k, &tf, &mut dmdt_l, &mut dmdt_l_prime)?;
            (Some(dmdt_l.mean()), Some(dmdt_l_prime.mean()))
        }
        None => (None, None),
    };

    let report = Report {
        model: model.type_name(),
        pair: pair.name(),
        tf: case.file.tf,
        species,
        dmdt_l,
        dmdt_l_prime,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Model: {} on {} at Tf = {} K", report.model, report.pair, report.tf);
    println!(
        "{:<10} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "species", "Yf", "YfPrime", "dY", "D", "L"
    );
    for s in &report.species {
        println!(
            "{:<10} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            s.species, s.yf, s.yf_prime, s.dy, s.diffusivity, s.latent_heat
        );
    }
    if let (Some(l), Some(l_prime)) = (report.dmdt_l, report.dmdt_l_prime) {
        println!("dmdtL = {l:.6e}, dmdtLPrime = {l_prime:.6e}");
    }
    Ok(())
}

fn cmd_check(case_path: &Path, step: Real, rel_tol: Real) -> CliResult<()> {
    let case = Case::load(case_path)?;
    let pair = case.pair()?;
    let mut model = construct(&case.model_config()?, &pair)?;
    let tf = case.tf();
    model.update(&tf)?;

    let check = LinearizationCheck {
        step,
        rel_tol,
        ..LinearizationCheck::default()
    };
    check_all_species(model.as_ref(), &tf, &check)?;
    println!(
        "✓ {} linearization consistent for {} at Tf = {} K",
        model.type_name(),
        model.species(),
        case.file.tf
    );
    Ok(())
}

fn cmd_sweep(
    case_path: &Path,
    species: &str,
    start: Real,
    end: Real,
    points: usize,
    log: bool,
    json: bool,
) -> CliResult<()> {
    let case = Case::load(case_path)?;
    let pair = case.pair()?;
    let mut model = construct(&case.model_config()?, &pair)?;
    model.update(&case.tf())?;

    let spacing = if log {
        SweepSpacing::Logarithmic
    } else {
        SweepSpacing::Linear
    };
    let sweep = TemperatureSweep::new(k(start), k(end), points, spacing)?;
    let results = evaluate_sweep(model.as_ref(), species, &sweep)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{sweep} for {species}");
    println!(
        "{:>10} {:>14} {:>14} {:>14} {:>14}",
        "Tf", "Yf", "YfPrime", "dY", "L"
    );
    for p in &results {
        println!(
            "{:>10.3} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            p.temperature, p.yf, p.yf_prime, p.dy, p.latent_heat
        );
    }
    Ok(())
}
