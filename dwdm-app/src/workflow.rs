use crate::config::GridSettings;
use crate::plotting;
use anyhow::{Context, Result};
use clap::ValueEnum;
use dwdm_core::{export, grid::GridGenerator};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// `explicit` when given, otherwise a fresh timestamped directory under `./data/runs`.
pub fn resolve_output_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        PathBuf::from(format!(
            "./data/runs/grid_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))
    })
}

/// Copies the configuration file next to the outputs for traceability.
fn copy_config(config_path: Option<&Path>, output_dir: &Path) -> Result<()> {
    if let Some(path) = config_path {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
        fs::copy(path, output_dir.join("grid.yaml"))
            .with_context(|| format!("Failed to copy {} into the run directory", path.display()))?;
    }
    Ok(())
}

/// Generates the subgrid tables and writes one chart per spacing.
pub fn run_plots(generator: &GridGenerator, output_dir: &Path, config_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    println!("\n--- [Workflow] Charting DWDM Grid ---");
    let tables = generator.spacing_tables()?;
    copy_config(config_path, output_dir)?;
    plotting::generate_all_plots(output_dir, &tables)
}

/// Writes the subgrid tables, the merged table and every configured flexible partition.
pub fn run_export(
    generator: &GridGenerator,
    settings: &GridSettings,
    output_dir: &Path,
    format: ExportFormat,
    config_path: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    println!("\n--- [Workflow] Exporting DWDM Grid ({:?}) ---", format);
    let tables = generator.spacing_tables()?;
    let rows = generator.itu_table()?;
    let mut flexible = BTreeMap::new();
    for &width in &settings.flexible_widths_ghz {
        flexible.insert(width_key(width), generator.flexible_slots(width)?);
    }

    copy_config(config_path, output_dir)?;

    let mut written = Vec::new();
    match format {
        ExportFormat::Csv => {
            written.extend(export::write_all_spacing_csv(&tables, output_dir)?);

            let path = output_dir.join("itu_table.csv");
            export::write_itu_table_csv(&rows, &path)?;
            written.push(path);

            for (key, slots) in &flexible {
                let path = output_dir.join(format!("flex_{}.csv", key));
                export::write_flexible_csv(slots, &path)?;
                written.push(path);
            }
        }
        ExportFormat::Json => {
            let outputs = [
                ("grid.json", serde_json::to_value(&tables)?),
                ("itu_table.json", serde_json::to_value(&rows)?),
                ("flexible.json", serde_json::to_value(&flexible)?),
            ];
            for (name, value) in outputs {
                let path = output_dir.join(name);
                export::write_json(&value, &path)?;
                written.push(path);
            }
        }
    }

    println!("[Workflow] {} files written to '{}'.", written.len(), output_dir.display());
    Ok(written)
}

/// File-name friendly width label, e.g. `50GHz` or `37p5GHz`.
fn width_key(width_ghz: f64) -> String {
    format!("{}GHz", width_ghz.to_string().replace('.', "p"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> GridSettings {
        let mut settings = GridSettings::default();
        settings.grid.frequency_min = 193.0;
        settings.grid.frequency_max = 193.2;
        settings.flexible_widths_ghz = vec![50.0, 37.5];
        settings
    }

    #[test]
    fn csv_export_writes_every_table() {
        let dir = tempfile::tempdir().unwrap();
        let settings = small_settings();
        let generator = settings.generator().unwrap();

        let written = run_export(&generator, &settings, dir.path(), ExportFormat::Csv, None).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "125GHz.csv",
                "25GHz.csv",
                "50GHz.csv",
                "100GHz.csv",
                "itu_table.csv",
                "flex_37p5GHz.csv",
                "flex_50GHz.csv",
            ]
        );
        assert!(written.iter().all(|p| p.exists()));

        let base = fs::read_to_string(dir.path().join("125GHz.csv")).unwrap();
        assert_eq!(base.lines().next(), Some("index,frequency,wavelength"));
        assert_eq!(base.lines().count(), 1 + 17);
    }

    #[test]
    fn json_export_keys_tables_by_label() {
        let dir = tempfile::tempdir().unwrap();
        let settings = small_settings();
        let generator = settings.generator().unwrap();

        run_export(&generator, &settings, dir.path(), ExportFormat::Json, None).unwrap();

        let grid: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("grid.json")).unwrap()).unwrap();
        assert_eq!(grid["100 GHz"].as_array().unwrap().len(), 3);
        assert_eq!(grid["12.5 GHz"][0]["frequency"], 193.0);

        let flexible: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("flexible.json")).unwrap()).unwrap();
        assert_eq!(flexible["50GHz"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn config_file_is_copied_into_run_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.yaml");
        fs::write(&config_path, "schema_version: \"1.0\"\n").unwrap();
        let run_dir = dir.path().join("run");

        copy_config(Some(&config_path), &run_dir).unwrap();

        assert!(run_dir.join("grid.yaml").exists());
    }

    #[test]
    fn width_keys() {
        assert_eq!(width_key(50.0), "50GHz");
        assert_eq!(width_key(37.5), "37p5GHz");
    }
}
