// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// Memory-match minigame: click same-colored sphere pairs to score.
    Match,
    /// Camera and fog showcase with GUI-adjustable parameters.
    Fog,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sphere-match")]
#[command(about = "Interactive sphere demos on a compute raytracer", long_about = None)]
pub struct Cli {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = DemoKind::Match)]
    pub demo: DemoKind,

    /// Disable UI overlay elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Path to a JSON settings file (defaults are compiled in)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
