//! DWDM grid command-line interface.
//!
//! ```sh
//! dwdm-app tables --spacing 100
//! dwdm-app itu-table
//! dwdm-app flex --width 50
//! dwdm-app --config dwdm-app/grid.yaml plot --output-dir charts
//! dwdm-app export --format json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use dwdm_core::grid::{GridOutput, OutputShape};
use dwdm_schemas::spacing::ChannelSpacing;
use std::path::PathBuf;

mod config;
mod plotting;
mod report;
mod workflow;

use config::GridSettings;
use workflow::ExportFormat;

#[derive(Parser)]
#[command(name = "dwdm-app")]
#[command(about = "ITU-T G.694.1 DWDM frequency grid tables and charts")]
#[command(version)]
struct Cli {
    /// Grid configuration file (YAML). Defaults to the ITU constants.
    #[arg(short, long, global = true, env = "DWDM_GRID_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one table per channel spacing.
    Tables {
        /// Only print this spacing (12.5, 25, 50 or 100).
        #[arg(short, long, value_parser = parse_spacing)]
        spacing: Option<ChannelSpacing>,
        /// Print JSON instead of text tables.
        #[arg(long)]
        json: bool,
    },
    /// Print the merged table with one column per spacing.
    ItuTable {
        #[arg(long)]
        json: bool,
    },
    /// Print the flexible-grid slots over the configured sub-band.
    Flex {
        /// Slot width in GHz; may be repeated. Defaults to the configured widths.
        #[arg(short, long)]
        width: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Channel counts and extents per spacing.
    Summary,
    /// Write a stem chart per spacing.
    Plot {
        /// Output directory (defaults to a timestamped run directory).
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Write the tables to files.
    Export {
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

fn parse_spacing(value: &str) -> Result<ChannelSpacing, String> {
    let trimmed = value.trim();
    let label = if trimmed.ends_with("GHz") {
        trimmed.to_string()
    } else {
        format!("{} GHz", trimmed)
    };
    ChannelSpacing::from_label(&label)
        .ok_or_else(|| format!("unknown spacing '{}', expected one of 12.5, 25, 50, 100", value))
}

fn print_grid(output: &GridOutput, only: Option<ChannelSpacing>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        print!("{}", report::grid_output(output, only));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = GridSettings::load(cli.config.as_deref())?;
    let generator = settings.generator()?;

    match cli.command {
        Commands::Tables { spacing, json } => {
            print_grid(&generator.generate(OutputShape::BySpacing)?, spacing, json)?;
        }
        Commands::ItuTable { json } => {
            print_grid(&generator.generate(OutputShape::ItuTable)?, None, json)?;
        }
        Commands::Flex { width, json } => {
            let widths = if width.is_empty() { settings.flexible_widths_ghz.clone() } else { width };
            for width_ghz in widths {
                let slots = generator.flexible_slots(width_ghz)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&slots)?);
                } else {
                    print!("{}", report::flexible_table(width_ghz, &slots));
                }
            }
        }
        Commands::Summary => {
            let tables = generator.spacing_tables()?;
            print!("{}", report::summary(&tables.summary()));
        }
        Commands::Plot { output_dir } => {
            let output_dir = workflow::resolve_output_dir(output_dir);
            workflow::run_plots(&generator, &output_dir, cli.config.as_deref())?;
            println!("\nCharts complete. Results are in '{}'", output_dir.display());
        }
        Commands::Export { output_dir, format } => {
            let output_dir = workflow::resolve_output_dir(output_dir);
            workflow::run_export(&generator, &settings, &output_dir, format, cli.config.as_deref())?;
            println!("\nExport complete. Results are in '{}'", output_dir.display());
        }
    }

    Ok(())
}
