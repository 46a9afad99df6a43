use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use plotters::prelude::*;
use tracing::info;

use crate::core::sampler::TrajectorySample;
use crate::core::window::AxisBounds;

pub const EXPORT_SIZE_PX: (u32, u32) = (1280, 720);

const CURVE_COLOR: RGBColor = RGBColor(79, 70, 229);
const FILL_COLOR: RGBAColor = RGBAColor(79, 70, 229, 0.1);
const MARKER_COLOR: RGBColor = RGBColor(200, 30, 30);

pub fn default_export_path<Tz: TimeZone>(dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!("trajectory_{}.png", now.format("%Y%m%d_%H%M%S")))
}

/// Writes the trajectory chart as a PNG: the full curve with the area under it shaded and,
/// when given, the projectile marker.
pub fn export_chart(
    path: &Path,
    samples: &[TrajectorySample],
    bounds: AxisBounds,
    marker: Option<TrajectorySample>,
) -> Result<(), String> {
    let root = BitMapBackend::new(path, EXPORT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Could not prepare chart canvas: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..bounds.max_distance_m, 0.0..bounds.max_height_m)
        .map_err(|e| format!("Could not build chart axes: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Could not draw chart grid: {e}"))?;

    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.distance_m, s.height_m))
        .collect();

    chart
        .draw_series(AreaSeries::new(points.iter().copied(), 0.0, FILL_COLOR))
        .map_err(|e| format!("Could not draw trajectory area: {e}"))?;
    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            CURVE_COLOR.stroke_width(3),
        ))
        .map_err(|e| format!("Could not draw trajectory: {e}"))?;

    if let Some(marker) = marker {
        chart
            .draw_series(std::iter::once(Circle::new(
                (marker.distance_m, marker.height_m),
                6,
                MARKER_COLOR.filled(),
            )))
            .map_err(|e| format!("Could not draw projectile marker: {e}"))?;
    }

    root.present()
        .map_err(|e| format!("Could not write '{}': {e}", path.display()))?;
    info!(path = %path.display(), points = samples.len(), "chart exported");
    Ok(())
}
