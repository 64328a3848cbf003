//! Bar chart geometry for the adoption charts.
//!
//! Pure layout: maps a dataset onto SVG coordinates inside a fixed viewbox
//! with a 0-100 % value axis. Rendering lives in
//! `components::regional_stats`.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

/// One category and its adoption rate in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdoptionDatum {
    pub name: &'static str,
    pub adoption: u8,
}

pub const VIEW_WIDTH: f64 = 440.0;
pub const VIEW_HEIGHT: f64 = 250.0;

const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_LEFT: f64 = 40.0;

/// Share of each category band occupied by its bar.
const BAR_FILL: f64 = 0.6;
/// Gap between the plot floor and the category label baseline.
const LABEL_OFFSET: f64 = 18.0;

pub const TICK_VALUES: [u8; 5] = [0, 25, 50, 75, 100];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Y coordinate of `percent` on the value axis; clamps to 0-100.
    #[must_use]
    pub fn y_for(&self, percent: f64) -> f64 {
        self.bottom - self.height() * percent.clamp(0.0, 100.0) / 100.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub name: &'static str,
    pub adoption: u8,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Center of the category band, for the x-axis label.
    pub label_x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub bars: Vec<BarRect>,
    pub ticks: Vec<AxisTick>,
    pub label_y: f64,
}

/// Lay out `data` as evenly spaced vertical bars.
#[must_use]
pub fn layout(data: &[AdoptionDatum]) -> ChartLayout {
    let plot = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        right: VIEW_WIDTH - MARGIN_RIGHT,
        bottom: VIEW_HEIGHT - MARGIN_BOTTOM,
    };

    #[allow(clippy::cast_precision_loss)]
    let band = if data.is_empty() { 0.0 } else { plot.width() / data.len() as f64 };
    let bar_width = band * BAR_FILL;

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, datum)| {
            #[allow(clippy::cast_precision_loss)]
            let band_left = plot.left + band * i as f64;
            let y = plot.y_for(f64::from(datum.adoption));
            BarRect {
                name: datum.name,
                adoption: datum.adoption,
                x: band_left + (band - bar_width) / 2.0,
                y,
                width: bar_width,
                height: plot.bottom - y,
                label_x: band_left + band / 2.0,
            }
        })
        .collect();

    let ticks = TICK_VALUES
        .iter()
        .map(|&v| AxisTick { y: plot.y_for(f64::from(v)), label: format!("{v}%") })
        .collect();

    ChartLayout { plot, bars, ticks, label_y: plot.bottom + LABEL_OFFSET }
}
