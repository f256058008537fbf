use std::path::PathBuf;

use clap::Parser;
use lunaria_config::LunariaConfig;

/// Lunaria: a row of phase-lit moons over a starfield, scrubbed by the pointer.
#[derive(Parser, Debug)]
#[command(name = "lunaria", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "debug" or "lunaria_renderer=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Classic scene: 17 untinted moons, no rim glow, no terminator mirroring.
    #[arg(long)]
    pub classic: bool,

    /// Number of moons in the row.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub moons: Option<u32>,

    /// Seed for the starfield and the surface texture.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the synthesized surface texture to this PNG and exit.
    #[arg(long, value_name = "PNG")]
    pub export_surface: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    ///
    /// `--classic` is applied first so an explicit `--moons` wins.
    pub fn apply_overrides(&self, config: &mut LunariaConfig) {
        if self.classic {
            config.apply_classic_preset();
        }
        if let Some(moons) = self.moons {
            config.scene.moon_count = moons;
        }
        if let Some(seed) = self.seed {
            config.stars.seed = Some(seed);
            config.surface.seed = Some(seed);
        }
    }
}
