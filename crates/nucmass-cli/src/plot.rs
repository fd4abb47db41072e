use crate::error::{CliError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const MARKER_SIZE: i32 = 5;
const LINE_WIDTH: u32 = 2;
const AXIS_PADDING_FRACTION: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Triangle,
}

/// Presentation of one scatter plot: labels plus the series color and marker shape.
#[derive(Debug, Clone, Copy)]
pub struct ScatterPlot {
    pub file_name: &'static str,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub series_label: &'static str,
    pub color: RGBColor,
    pub marker: Marker,
}

pub const RADIUS_PLOT: ScatterPlot = ScatterPlot {
    file_name: "nuclear_radius.svg",
    title: "Nuclear Radius vs. Atomic Number",
    x_desc: "Atomic Number (Z)",
    y_desc: "Nuclear Radius (fm)",
    series_label: "R = r0 A^(1/3)",
    color: RGBColor(31, 119, 180),
    marker: Marker::Circle,
};

pub const BINDING_ENERGY_PLOT: ScatterPlot = ScatterPlot {
    file_name: "binding_energy.svg",
    title: "Binding Energy per Nucleon vs. Atomic Number",
    x_desc: "Atomic Number (Z)",
    y_desc: "Binding Energy per Nucleon (MeV)",
    series_label: "B/A (semi-empirical)",
    color: RGBColor(214, 39, 40),
    marker: Marker::Triangle,
};

/// Axis range covering every value with a margin on both sides.
///
/// Degenerate inputs (a single value, or none) still yield a non-empty range.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * AXIS_PADDING_FRACTION
    } else {
        (min.abs() * AXIS_PADDING_FRACTION).max(1.0)
    };
    (min - pad)..(max + pad)
}

pub fn draw_scatter_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &ScatterPlot,
    points: &[(f64, f64)],
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.len() < points.len() {
        debug!(
            skipped = points.len() - finite.len(),
            "Skipping non-finite points in '{}'.", plot.title
        );
    }
    finite.sort_by(|a, b| a.0.total_cmp(&b.0));

    let x_range = padded_range(finite.iter().map(|p| p.0));
    let y_range = padded_range(finite.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(root)
        .caption(plot.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_desc)
        .y_desc(plot.y_desc)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    let color = plot.color;
    chart.draw_series(LineSeries::new(
        finite.iter().copied(),
        color.stroke_width(LINE_WIDTH),
    ))?;

    match plot.marker {
        Marker::Circle => {
            chart
                .draw_series(
                    finite
                        .iter()
                        .map(|&p| Circle::new(p, MARKER_SIZE, color.filled())),
                )?
                .label(plot.series_label)
                .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE, color.filled()));
        }
        Marker::Triangle => {
            chart
                .draw_series(
                    finite
                        .iter()
                        .map(|&p| TriangleMarker::new(p, MARKER_SIZE + 1, color.filled())),
                )?
                .label(plot.series_label)
                .legend(move |(x, y)| {
                    TriangleMarker::new((x + 10, y), MARKER_SIZE + 1, color.filled())
                });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Renders `points` into an SVG file of the given size.
pub fn render_svg(
    path: &Path,
    size: (u32, u32),
    plot: &ScatterPlot,
    points: &[(f64, f64)],
) -> Result<()> {
    let render = || -> std::result::Result<(), Box<dyn Error>> {
        let root = SVGBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;
        draw_scatter_chart(&root, plot, points)?;
        root.present()?;
        Ok(())
    };
    render().map_err(|e| CliError::Plot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!("Wrote plot to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const POINTS: [(f64, f64); 3] = [(92.0, 7.44), (28.0, 4.70), (7.0, 2.89)];

    #[test]
    fn padded_range_adds_margin_on_both_sides() {
        let range = padded_range([2.0, 12.0].into_iter());
        assert!((range.start - 1.2).abs() < 1e-12);
        assert!((range.end - 12.8).abs() < 1e-12);
    }

    #[test]
    fn padded_range_handles_single_value_and_empty_input() {
        let range = padded_range(std::iter::once(7.44));
        assert!(range.start < 7.44 && range.end > 7.44);

        assert_eq!(padded_range(std::iter::empty::<f64>()), 0.0..1.0);
    }

    #[test]
    fn render_svg_writes_circle_markers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RADIUS_PLOT.file_name);

        render_svg(&path, (640, 480), &RADIUS_PLOT, &POINTS).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn render_svg_writes_triangle_markers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(BINDING_ENERGY_PLOT.file_name);

        render_svg(&path, (640, 480), &BINDING_ENERGY_PLOT, &POINTS).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn render_svg_tolerates_non_finite_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.svg");
        let points = [(92.0, 7.56), (0.0, f64::NAN), (f64::INFINITY, 1.0)];

        render_svg(&path, (640, 480), &BINDING_ENERGY_PLOT, &points).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("</svg>"));
    }

    #[test]
    fn render_svg_into_missing_directory_is_a_plot_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("plot.svg");

        let result = render_svg(&path, (640, 480), &RADIUS_PLOT, &POINTS);
        assert!(matches!(result, Err(CliError::Plot { .. })));
    }
}
