//! SVG geometry for the dashboard demo charts.
//!
//! DESIGN
//! ======
//! Charts are plain inline SVG. This module turns a value series into
//! viewBox coordinates (band centres, scaled heights, `points` strings) so the
//! Leptos components only emit elements. Bands are evenly spaced along x with
//! each value drawn at its band centre.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Default viewBox used by every dashboard card.
pub const VIEW_WIDTH: f64 = 320.0;
pub const VIEW_HEIGHT: f64 = 200.0;

/// A 0-based value axis with evenly spaced ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Explicit domain split into `tick_count` evenly spaced ticks.
    #[must_use]
    pub fn fixed(min: f64, max: f64, tick_count: usize) -> Self {
        let segments = tick_count.max(2) - 1;
        #[allow(clippy::cast_precision_loss)]
        let step = (max - min) / segments as f64;
        #[allow(clippy::cast_precision_loss)]
        let ticks = (0..=segments).map(|i| min + step * i as f64).collect();
        Self { min, max, ticks }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(f64::EPSILON)
    }
}

/// Build a 0-based axis whose top is `max` rounded up to a readable step.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten. Non-positive or non-finite
/// maxima yield a unit axis.
#[must_use]
pub fn nice_axis(max: f64, tick_count: usize) -> Axis {
    let segments = tick_count.max(2) - 1;
    if !max.is_finite() || max <= 0.0 {
        return Axis::fixed(0.0, 1.0, segments + 1);
    }
    #[allow(clippy::cast_precision_loss)]
    let raw_step = max / segments as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= raw_step - f64::EPSILON * magnitude)
        .unwrap_or(10.0 * magnitude);
    #[allow(clippy::cast_precision_loss)]
    let top = step * segments as f64;
    Axis::fixed(0.0, top, segments + 1)
}

/// Plot area inside a viewBox, leaving margins for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
            pad_left: 36.0,
            pad_right: 8.0,
            pad_top: 10.0,
            pad_bottom: 24.0,
        }
    }
}

/// One bar in viewBox coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(1.0)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(1.0)
    }

    /// y coordinate of the axis minimum.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.pad_left + self.plot_width()
    }

    #[must_use]
    pub fn band_width(&self, count: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = count.max(1) as f64;
        self.plot_width() / n
    }

    /// x coordinate of the centre of band `index` out of `count`.
    #[must_use]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        self.pad_left + self.band_width(count) * (i + 0.5)
    }

    /// y coordinate of `value`, clamped to the plot area.
    #[must_use]
    pub fn y_at(&self, value: f64, axis: &Axis) -> f64 {
        let ratio = ((value - axis.min) / axis.span()).clamp(0.0, 1.0);
        self.baseline() - ratio * self.plot_height()
    }

    /// Vertices of a polyline through every value.
    #[must_use]
    pub fn vertices(&self, values: &[f64], axis: &Axis) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (self.x_at(i, values.len()), self.y_at(*v, axis)))
            .collect()
    }

    /// SVG `points` attribute for a line through `values`.
    #[must_use]
    pub fn line_points(&self, values: &[f64], axis: &Axis) -> String {
        format_points(&self.vertices(values, axis))
    }

    /// SVG `points` attribute for a polygon filling down to the baseline.
    #[must_use]
    pub fn area_points(&self, values: &[f64], axis: &Axis) -> String {
        let mut vertices = self.vertices(values, axis);
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last().copied()) {
            vertices.push((last.0, self.baseline()));
            vertices.push((first.0, self.baseline()));
        }
        format_points(&vertices)
    }

    /// Bars centred in their bands, `fill` of the band width wide.
    #[must_use]
    pub fn bars(&self, values: &[f64], axis: &Axis, fill: f64) -> Vec<BarRect> {
        let band = self.band_width(values.len());
        let width = band * fill.clamp(0.05, 1.0);
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let top = self.y_at(*v, axis);
                BarRect {
                    x: self.x_at(i, values.len()) - width / 2.0,
                    y: top,
                    width,
                    height: self.baseline() - top,
                }
            })
            .collect()
    }
}

fn format_points(vertices: &[(f64, f64)]) -> String {
    vertices
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Axis tick label without trailing zeros (`35`, `0.2`, `2.5`).
#[must_use]
pub fn tick_label(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}
