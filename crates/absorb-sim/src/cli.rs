use absorb_core::ModelKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "absorb.toml")]
    pub config: PathBuf,

    /// Write the CSV table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Evaluate every layer with this model (overrides config)
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Command-line spelling of [`ModelKind`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelArg {
    Miki,
    DelanyBazley,
    EffectiveMedium,
}

impl From<ModelArg> for ModelKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Miki => ModelKind::Miki,
            ModelArg::DelanyBazley => ModelKind::DelanyBazley,
            ModelArg::EffectiveMedium => ModelKind::EffectiveMedium,
        }
    }
}
