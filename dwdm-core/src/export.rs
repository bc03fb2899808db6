use crate::{error::GridError, grid::SpacingTables};
use dwdm_schemas::{flexible::FlexibleSlot, spacing::ChannelSpacing, table::ItuTableRow};
use csv::WriterBuilder;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `path` through a sibling temporary file that is renamed into place on success.
///
/// The parent directory is created when missing. If `write` fails the temporary file is
/// removed, so `path` ends up either complete or untouched. The temporary keeps the
/// target extension for writers that pick a format from it.
pub fn write_atomically<E, F>(path: &Path, write: F) -> Result<(), E>
where
    F: FnOnce(&Path) -> Result<(), E>,
    E: From<GridError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GridError::FileIO(parent.display().to_string(), e))?;
    }
    let partial = partial_path(path);

    if let Err(e) = write(&partial) {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, path).map_err(|e| {
        let _ = fs::remove_file(&partial);
        GridError::FileIO(path.display().to_string(), e).into()
    })
}

fn partial_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!(".{}.partial.{}", stem, ext.to_string_lossy()),
        None => format!(".{}.partial", stem),
    };
    path.with_file_name(name)
}

const CHANNEL_HEADER: [&str; 3] = ["index", "frequency", "wavelength"];
const ITU_TABLE_HEADER: [&str; 6] = ["index", "f_12", "f_25", "f_100", "f_50", "wavelength"];
const FLEXIBLE_HEADER: [&str; 4] = ["index", "center", "start", "end"];

/// Writes `header` followed by one row per record. The header is written even when
/// there are no records.
fn write_records<T: Serialize>(
    path: &Path,
    header: &[&str],
    records: impl IntoIterator<Item = T>,
) -> Result<(), GridError> {
    write_atomically(path, |partial| {
        let csv_err = |e| GridError::CsvError(path.display().to_string(), e);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(partial)
            .map_err(csv_err)?;
        writer.write_record(header).map_err(csv_err)?;
        for record in records {
            writer.serialize(record).map_err(csv_err)?;
        }
        writer
            .flush()
            .map_err(|e| GridError::FileIO(path.display().to_string(), e))
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Writes one spacing's channels as `index,frequency,wavelength` rows.
pub fn write_spacing_csv(tables: &SpacingTables, spacing: ChannelSpacing, path: &Path) -> Result<(), GridError> {
    write_records(path, &CHANNEL_HEADER, tables.channels(spacing))
}

/// Writes every spacing to `<dir>/<stem>.csv` and returns the paths in spacing order.
pub fn write_all_spacing_csv(tables: &SpacingTables, dir: &Path) -> Result<Vec<PathBuf>, GridError> {
    ChannelSpacing::ALL
        .into_iter()
        .map(|spacing| {
            let path = dir.join(format!("{}.csv", spacing.file_stem()));
            write_spacing_csv(tables, spacing, &path).map(|_| path)
        })
        .collect()
}

/// Writes the merged table; absent columns are empty cells.
pub fn write_itu_table_csv(rows: &[ItuTableRow], path: &Path) -> Result<(), GridError> {
    write_records(path, &ITU_TABLE_HEADER, rows)
}

pub fn write_flexible_csv(slots: &[FlexibleSlot], path: &Path) -> Result<(), GridError> {
    write_records(path, &FLEXIBLE_HEADER, slots)
}

/// Writes any serializable grid output as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), GridError> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomically(path, |partial| {
        fs::write(partial, json).map_err(|e| GridError::FileIO(path.display().to_string(), e))
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
