//! Headless front end: evaluate the absorption spectrum of every layer in a
//! TOML config and write them as one CSV table.
//!
//! ```bash
//! # defaults (one Miki and one JCA layer) to stdout
//! absorb-sim
//!
//! # custom layers, every layer forced onto the effective-medium model
//! absorb-sim --config foam.toml --model effective-medium -o foam.csv
//! ```

mod cli;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::AppConfig;

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut cfg = AppConfig::load_or_default(&args.config)?;
    if let Some(model) = args.model {
        cfg.override_model(model.into());
    }
    cfg.validate()?;

    let env = cfg
        .environment
        .build()
        .context("invalid [environment] section")?;
    info!(
        bins = env.grid().len(),
        layers = cfg.layers.len(),
        rho0 = env.reference_density(),
        c0 = env.reference_speed(),
        z0 = env.characteristic_impedance(),
        pore_fluid_z = env.fluid().characteristic_impedance(),
        "evaluating absorption spectra"
    );

    let mut spectra = Vec::with_capacity(cfg.layers.len());
    for layer in &cfg.layers {
        let spectrum = absorb_core::compute(layer, &env)?;
        if let Some((f, alpha)) = spectrum.peak() {
            info!(layer = %layer.name, peak_hz = f, peak_alpha = alpha, "spectrum ready");
        }
        spectra.push((layer.name.clone(), spectrum));
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            output::write_table(&spectra, BufWriter::new(file))?;
            info!(path = %path.display(), "wrote absorption table");
        }
        None => output::write_table(&spectra, io::stdout().lock())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
