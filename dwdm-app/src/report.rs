//! Plain-text rendering of the grid tables for the terminal.

use dwdm_core::grid::{GridOutput, SpacingSummary, SpacingTables};
use dwdm_schemas::{channel::Channel, flexible::FlexibleSlot, spacing::ChannelSpacing, table::ItuTableRow};

const RULE_WIDTH: usize = 65;
const ABSENT: &str = "-";

fn heading(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{}\n{}\n{}\n", rule, title, rule)
}

fn separator() -> String {
    format!("{}\n", "-".repeat(RULE_WIDTH))
}

/// One spacing's table: index, nominal frequency and approximate wavelength.
pub fn spacing_table<'a>(spacing: ChannelSpacing, channels: impl IntoIterator<Item = &'a Channel>) -> String {
    let mut table = heading(&format!("DWDM TABLE - SPACING {}", spacing));
    table.push_str(&format!(
        "{:>5} | {:>22} | {:>20}\n",
        "n", "Nominal frequency (THz)", "Approx. lambda (nm)"
    ));
    table.push_str(&separator());
    for channel in channels {
        table.push_str(&format!(
            "{:5} | {:22.4} | {:20.4}\n",
            channel.index, channel.frequency, channel.wavelength
        ));
    }
    table
}

/// Every spacing's table in canonical order, or only `only` when given.
pub fn spacing_tables(tables: &SpacingTables, only: Option<ChannelSpacing>) -> String {
    tables
        .labelled()
        .filter(|(spacing, _)| only.map_or(true, |s| s == *spacing))
        .map(|(spacing, channels)| spacing_table(spacing, channels))
        .collect()
}

/// Renders either output shape. `only` restricts the per-spacing shape to one spacing.
pub fn grid_output(output: &GridOutput, only: Option<ChannelSpacing>) -> String {
    match output {
        GridOutput::BySpacing(tables) => spacing_tables(tables, only),
        GridOutput::ItuTable(rows) => itu_table(rows),
    }
}

fn column(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |f| format!("{:.4}", f))
}

/// The merged table, one row per index, absent spacings shown as `-`.
pub fn itu_table(rows: &[ItuTableRow]) -> String {
    let mut table = heading("DWDM TABLE - ITU-T G.694.1 (THz)");
    table.push_str(&format!(
        "{:>5} | {:>9} | {:>9} | {:>9} | {:>9} | {:>10}\n",
        "n", "12.5 GHz", "25 GHz", "50 GHz", "100 GHz", "lambda (nm)"
    ));
    table.push_str(&separator());
    for row in rows {
        table.push_str(&format!(
            "{:5} | {:>9} | {:>9} | {:>9} | {:>9} | {:10.4}\n",
            row.index,
            column(row.f_12),
            column(row.f_25),
            column(row.f_50),
            column(row.f_100),
            row.wavelength
        ));
    }
    table
}

pub fn flexible_table(width_ghz: f64, slots: &[FlexibleSlot]) -> String {
    let mut table = heading(&format!("FLEXIBLE GRID - SLOT WIDTH {} GHz", width_ghz));
    table.push_str(&format!(
        "{:>5} | {:>15} | {:>15} | {:>15}\n",
        "n", "Center (THz)", "Start (THz)", "End (THz)"
    ));
    table.push_str(&separator());
    for slot in slots {
        table.push_str(&format!(
            "{:5} | {:15.5} | {:15.5} | {:15.5}\n",
            slot.index, slot.center, slot.start, slot.end
        ));
    }
    table
}

pub fn summary(summaries: &[SpacingSummary]) -> String {
    let mut report = heading("DWDM GRID SUMMARY");
    for s in summaries {
        let line = match (s.first, s.last) {
            (Some(first), Some(last)) => format!(
                "  - {:<9} {:>4} channels | {:.4} - {:.4} THz | {:.4} - {:.4} nm\n",
                s.spacing.label(),
                s.count,
                first.frequency,
                last.frequency,
                first.wavelength,
                last.wavelength
            ),
            _ => format!("  - {:<9} no channels in range\n", s.spacing.label()),
        };
        report.push_str(&line);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwdm_core::grid::{GridBuilder, OutputShape};

    #[test]
    fn spacing_table_layout() {
        let tables = GridBuilder::new().with_band(193.1, 193.1).build().unwrap().spacing_tables().unwrap();
        let text = spacing_table(ChannelSpacing::Ghz100, tables.channels(ChannelSpacing::Ghz100));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "DWDM TABLE - SPACING 100 GHz");
        assert_eq!(lines[1].len(), 65);
        assert_eq!(lines.last().unwrap(), &format!("{:5} | {:>22} | {:>20}", 0, "193.1000", "1552.5244"));
    }

    #[test]
    fn itu_table_marks_absent_columns() {
        let rows = GridBuilder::new().with_band(193.1, 193.1125).build().unwrap().itu_table().unwrap();
        let text = itu_table(&rows);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("    1 |  193.1125 |         - |"));
        assert_eq!(last.matches(" - ").count(), 3);
    }

    #[test]
    fn grid_output_renders_both_shapes() {
        let generator = GridBuilder::new().with_band(193.1, 193.2).build().unwrap();

        let by_spacing = generator.generate(OutputShape::BySpacing).unwrap();
        let all = grid_output(&by_spacing, None);
        assert_eq!(all.matches("DWDM TABLE - SPACING").count(), 4);
        let only = grid_output(&by_spacing, Some(ChannelSpacing::Ghz50));
        assert_eq!(only.matches("DWDM TABLE - SPACING").count(), 1);
        assert!(only.contains("DWDM TABLE - SPACING 50 GHz"));
        assert_eq!(only.lines().count(), 6 + 3);

        let merged = generator.generate(OutputShape::ItuTable).unwrap();
        let text = grid_output(&merged, Some(ChannelSpacing::Ghz50));
        assert!(text.contains("DWDM TABLE - ITU-T G.694.1 (THz)"));
        assert_eq!(text.lines().count(), 6 + 9);
    }

    #[test]
    fn summary_reports_empty_spacings() {
        let tables = GridBuilder::new().with_band(193.1125, 193.1125).build().unwrap().spacing_tables().unwrap();
        let text = summary(&tables.summary());
        assert!(text.contains("12.5 GHz     1 channels"));
        assert!(text.contains("100 GHz   no channels in range"));
    }
}
