//! Stem plots of frequency against channel index, one image per spacing.

use anyhow::Result;
use dwdm_core::{export::write_atomically, grid::SpacingTables};
use dwdm_schemas::{channel::Channel, spacing::ChannelSpacing};
use log::warn;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// `grafico_<label without spaces and periods>.png`, e.g. `grafico_125GHz.png`.
pub fn chart_file_name(spacing: ChannelSpacing) -> String {
    format!("grafico_{}.png", spacing.file_stem())
}

/// Axis ranges padded so a single channel still gets a non-empty plot area.
fn axis_ranges(channels: &[&Channel]) -> Option<(Range<i64>, Range<f64>)> {
    let first = channels.first()?;
    let last = channels.last()?;
    let (f_min, f_max) = channels.iter().fold((f64::MAX, f64::MIN), |(lo, hi), c| {
        (lo.min(c.frequency), hi.max(c.frequency))
    });
    let padding = ((f_max - f_min) * 0.05).max(0.05);
    Some((
        first.index - 1..last.index + 2,
        f_min - padding..f_max + padding,
    ))
}

/// Writes one chart per non-empty spacing into `output_dir` and returns the written paths.
pub fn generate_all_plots(output_dir: &Path, tables: &SpacingTables) -> Result<Vec<PathBuf>> {
    println!("[Plotting] Generating grid charts...");
    let mut written = Vec::new();

    for (spacing, channels) in tables.labelled() {
        let Some((x_range, y_range)) = axis_ranges(&channels) else {
            warn!("No channels to plot for {}", spacing);
            println!("[Plotting] Warning: No data to plot for {}.", spacing);
            continue;
        };
        let path = output_dir.join(chart_file_name(spacing));
        write_atomically(&path, |partial| {
            plot_stems(partial, spacing, &channels, x_range, y_range)
        })?;
        written.push(path);
    }

    println!("[Plotting] {} charts have been saved to '{}'.", written.len(), output_dir.display());
    Ok(written)
}

fn plot_stems(
    path: &Path,
    spacing: ChannelSpacing,
    channels: &[&Channel],
    x_range: Range<i64>,
    y_range: Range<f64>,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let baseline = y_range.start;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("ITU-T G.694.1 DWDM grid - {} spacing", spacing),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Channel index n")
        .y_desc("Nominal frequency (THz)")
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart.draw_series(channels.iter().map(|c| {
        PathElement::new(vec![(c.index, baseline), (c.index, c.frequency)], BLUE.stroke_width(1))
    }))?;

    chart
        .draw_series(channels.iter().map(|c| Circle::new((c.index, c.frequency), 3, BLUE.filled())))?
        .label(format!("{} channels", channels.len()))
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
