//! tablecard - reservation card generator
//!
//! Reads a reservation report export, parses it into per-table records,
//! and renders one multi-page card document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tablecard_core::TemplateFamily;
use tablecard_render::{DocumentComposer, Generation, PageBreakComposer};

/// Template family argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FamilyArg {
    /// Balcony cards
    Balcony,
    /// PHH cards
    Phh,
    /// Crush cards (water items suppressed)
    Crush,
}

impl From<FamilyArg> for TemplateFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Balcony => Self::Balcony,
            FamilyArg::Phh => Self::Phh,
            FamilyArg::Crush => Self::Crush,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tablecard",
    version,
    about = "Generate per-table reservation cards from a report export"
)]
struct Cli {
    /// Reservation report export (delimited text)
    report: PathBuf,

    /// Template family to render with
    #[arg(short, long, value_enum)]
    family: FamilyArg,

    /// Directory holding the master template files
    #[arg(long, default_value = "master_templates")]
    templates_dir: PathBuf,

    /// Explicit template file (defaults to the family's file in the
    /// templates directory)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output document path (defaults to a unique name beside the report)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop the merge capability: render only the first reservation
    #[arg(long)]
    no_merge: bool,
}

/// Default output name beside the report, unique per invocation.
fn default_output_path(report: &Path, family: TemplateFamily) -> PathBuf {
    let id = uuid::Uuid::new_v4().simple().to_string();
    report.with_file_name(format!(
        "{}_Cards_COMPLETE_{}.docx",
        family.as_str().to_uppercase(),
        &id[..8]
    ))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let family = TemplateFamily::from(cli.family);

    let report = std::fs::read(&cli.report)
        .with_context(|| format!("failed to read report {}", cli.report.display()))?;

    let template_path = cli
        .template
        .unwrap_or_else(|| cli.templates_dir.join(family.template_file_name()));
    let output_path = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.report, family));

    let composer: Option<Box<dyn DocumentComposer>> = if cli.no_merge {
        None
    } else {
        Some(Box::new(PageBreakComposer::new()))
    };

    let outcome = tablecard_cli::process_with_composer(
        &report,
        family,
        &template_path,
        &output_path,
        composer,
    )
    .with_context(|| format!("card generation failed for {}", cli.report.display()))?;

    match outcome {
        Generation::Complete { cards } => {
            println!(
                "{} {} card(s) -> {}",
                "Generated".green().bold(),
                cards,
                output_path.display()
            );
        }
        Generation::FirstCardOnly { omitted } => {
            println!(
                "{} merge unavailable: wrote first card only, {} reservation(s) omitted -> {}",
                "Warning:".yellow().bold(),
                omitted,
                output_path.display()
            );
        }
    }

    Ok(())
}
