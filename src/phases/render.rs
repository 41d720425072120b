use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontStyle;

use crate::charts::ChartData;
use crate::error::RenderError;
use crate::settings::{ImageFormat, ImageSettings};

const FONT_FAMILY: &str = "sans-serif";
const SYSTEM_FONTS: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
const TITLE_FONT_SIZE: u32 = 20;
const AXIS_LABEL_FONT_SIZE: u32 = 15;
const MARGIN: u32 = 15;
const X_LABEL_AREA_SIZE: u32 = 45;
const Y_LABEL_AREA_SIZE: u32 = 70;
const Y_LABELS: usize = 8;
const BAR_HALF_WIDTH: f64 = 0.25;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_ALPHA: f64 = 0.6;
const GRID_DASH: u32 = 6;
const GRID_GAP: u32 = 4;

/// Registers the TrueType font chart text is laid out with; must precede the first render.
/// Without an explicit `font`, the first of a few common system fonts found is used.
pub fn register_chart_font(font: Option<&Path>) -> Result<PathBuf, RenderError> {
    let path = match font {
        Some(path) => path.to_path_buf(),
        None => SYSTEM_FONTS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .ok_or(RenderError::FontUnavailable)?,
    };

    // plotters keeps registered font data for the life of the process
    let bytes: &'static [u8] = Box::leak(std::fs::read(&path)?.into_boxed_slice());
    plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| RenderError::Font { path: path.clone() })?;

    tracing::debug!(font=?path, "registered chart font.");
    Ok(path)
}

/// Draws an aggregated chart and persists it at a path.
pub trait ChartRenderer: Send + Sync {
    /// File extension of the images this renderer writes.
    fn extension(&self) -> &'static str;

    fn render(&self, chart: &ChartData, path: &Path) -> Result<(), RenderError>;
}

/// Vertical bar chart drawn with plotters, one bar per group.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartRenderer {
    format: ImageFormat,
    size: (u32, u32),
}

impl BarChartRenderer {
    pub fn new(format: ImageFormat, width: u32, height: u32) -> Self {
        Self { format, size: (width, height) }
    }
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::from(&ImageSettings::default())
    }
}

impl From<&ImageSettings> for BarChartRenderer {
    fn from(settings: &ImageSettings) -> Self {
        Self::new(settings.format, settings.width, settings.height)
    }
}

impl ChartRenderer for BarChartRenderer {
    fn extension(&self) -> &'static str {
        self.format.extension()
    }

    #[tracing::instrument(level = "debug", skip(self, chart), fields(chart = %chart.spec.name))]
    fn render(&self, chart: &ChartData, path: &Path) -> Result<(), RenderError> {
        match self.format {
            ImageFormat::Png => draw_bar_chart(BitMapBackend::new(path, self.size).into_drawing_area(), chart),
            ImageFormat::Svg => draw_bar_chart(SVGBackend::new(path, self.size).into_drawing_area(), chart),
        }?;

        tracing::info!(?path, nr_bars = chart.bars.len(), "saved chart.");
        Ok(())
    }
}

/// Draws onto `root` and presents it. The drawing area is consumed, so the backend is released
/// when this returns.
fn draw_bar_chart<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, chart: &ChartData) -> Result<(), RenderError> {
    let spec = &chart.spec;
    let on_err = || RenderError::drawing(spec.name);

    root.fill(&WHITE).map_err(on_err())?;

    let labels = chart.labels();
    let nr_bars = labels.len();
    let x_range = -0.5..(nr_bars.max(1) as f64 - 0.5);
    let y_range = value_range(&chart.values());

    let mut cc = ChartBuilder::on(&root)
        .caption(spec.title, (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(on_err())?;

    // half-unit steps keep every bar center on a tick
    cc.configure_mesh()
        .disable_mesh()
        .x_labels(2 * nr_bars + 1)
        .x_label_formatter(&|x| bar_label(&labels, *x))
        .y_labels(Y_LABELS)
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_desc_style((FONT_FAMILY, AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(on_err())?;

    cc.draw_series(
        chart
            .bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.value.is_finite())
            .map(|(i, bar)| {
                let x = i as f64;
                Rectangle::new([(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, bar.value)], BAR_COLOR.filled())
            }),
    )
    .map_err(on_err())?;

    let y_axis: RangedCoordf64 = y_range.into();
    for y in y_axis.key_points(Y_LABELS) {
        cc.draw_series(DashedLineSeries::new(
            vec![(x_range.start, y), (x_range.end, y)],
            GRID_DASH,
            GRID_GAP,
            BLACK.mix(GRID_ALPHA).stroke_width(1),
        ))
        .map_err(on_err())?;
    }

    root.present().map_err(on_err())?;
    Ok(())
}

fn bar_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > f64::EPSILON {
        return String::new();
    }

    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Vertical extent covering zero and every finite value, with headroom above the tallest bar.
fn value_range(values: &[f64]) -> std::ops::Range<f64> {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if lo == hi {
        0.0..1.0
    } else {
        let pad = (hi - lo) * 0.05;
        (if lo < 0.0 { lo - pad } else { lo })..(if hi > 0.0 { hi + pad } else { hi })
    }
}
