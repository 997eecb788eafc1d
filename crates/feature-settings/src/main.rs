use std::{process::ExitCode, result::Result};

use aat_feature_settings::{
    Attributes, FeatureVariant, FontConstructionError, MemoryFont, ParseFeatureError,
    StrictFontSystem, derive_font, feature_settings,
};
use clap::Parser;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Parse(#[from] ParseFeatureError),
    #[error("{0}")]
    Construction(#[from] FontConstructionError),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "aat-feature-settings", version)]
#[command(about = "Resolve typographic feature choices to AAT feature-settings records")]
#[command(long_about = "Resolves human-readable typographic feature choices to the \
    (feature type, feature selector) records an AAT font host consumes, and can \
    derive an in-memory font carrying them.\n\n\
    Feature syntax: number-case=upper|lower, number-spacing=monospaced|proportional, \
    vertical-position=normal|superscript|subscript|ordinals|scientific-inferiors, \
    small-caps=disabled|from-uppercase|from-lowercase, altN=on|off (N in 1..20), \
    no-alternates.")]
#[command(after_help = "Examples:\n  \
    aat-feature-settings -f 'number-case=upper,number-spacing=monospaced'\n  \
    aat-feature-settings -f 'small-caps=from-lowercase,alt7=on' --size 12")]
struct Cli {
    /// Comma-separated feature specs, e.g. 'number-case=upper,alt7=on'
    #[arg(short, long)]
    features: String,
    /// Derive a font at this point size and report the result
    #[arg(long, value_name = "PT")]
    size: Option<f32>,
    /// Suppress the per-record output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn run(&self) -> ExitCode {
        self.execute().map_or_else(
            |e| {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
            |_| ExitCode::SUCCESS,
        )
    }

    fn execute(&self) -> CliResult<()> {
        let providers = self.parse_features()?;
        let settings = feature_settings(&providers);

        if !self.quiet {
            for setting in &settings {
                println!("{setting}");
            }
        }

        if let Some(size) = self.size {
            let font = MemoryFont::new(size, Attributes::new());
            let derived = derive_font(&StrictFontSystem, &font, &providers)?;
            if !self.quiet {
                println!(
                    "derived {size}pt font with {} feature settings",
                    derived.attributes().feature_settings().len()
                );
            }
        }

        Ok(())
    }

    fn parse_features(&self) -> CliResult<Vec<FeatureVariant>> {
        let parsed = self
            .features
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<FeatureVariant>, _>>()?;
        if parsed.is_empty() {
            return Err(CliError::Message(
                "--features must include at least one feature spec".into(),
            ));
        }
        Ok(parsed)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    Cli::parse().run()
}
