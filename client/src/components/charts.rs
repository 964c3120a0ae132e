//! Dashboard demo cards with inline SVG charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Geometry comes from `content::chart`; these components only emit SVG
//! elements. Hovering a point or bar shows its value through an SVG `<title>`.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use content::chart::{Axis, ChartFrame, nice_axis, tick_label};
use content::{ANOMALY, DEMAND_SUPPLY, Icon, KPIS};

use crate::components::common::{Pill, SectionTitle};

const TICK_COUNT: usize = 5;

/// One named line on a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub class: &'static str,
    pub values: Vec<f64>,
}

pub fn demand_series() -> Series {
    Series {
        name: "demand",
        class: "chart__series--a",
        values: DEMAND_SUPPLY.iter().map(|p| p.demand).collect(),
    }
}

pub fn supply_series() -> Series {
    Series {
        name: "supply",
        class: "chart__series--b",
        values: DEMAND_SUPPLY.iter().map(|p| p.supply).collect(),
    }
}

pub fn month_labels() -> Vec<&'static str> {
    DEMAND_SUPPLY.iter().map(|p| p.month).collect()
}

/// Largest value across every series, 0 for empty input.
pub fn series_max(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
}

fn coord(v: f64) -> String {
    format!("{v:.1}")
}

/// Dashed horizontal grid with y tick labels.
fn grid(frame: ChartFrame, axis: &Axis) -> impl IntoView + use<> {
    axis.ticks
        .iter()
        .map(|tick| {
            let y = coord(frame.y_at(*tick, axis));
            view! {
                <g class="chart__grid">
                    <line
                        x1=coord(frame.pad_left)
                        x2=coord(frame.right())
                        y1=y.clone()
                        y2=y.clone()
                        stroke-dasharray="3 3"
                    />
                    <text x=coord(frame.pad_left - 4.0) y=y text-anchor="end" dominant-baseline="middle">
                        {tick_label(*tick)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>()
}

fn x_labels(frame: ChartFrame, labels: &[&'static str]) -> impl IntoView + use<> {
    let count = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    class="chart__x-label"
                    x=coord(frame.x_at(i, count))
                    y=coord(frame.baseline() + 14.0)
                    text-anchor="middle"
                >
                    {*label}
                </text>
            }
        })
        .collect::<Vec<_>>()
}

/// Line chart with one polyline per series and an optional legend.
#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    series: Vec<Series>,
    #[prop(optional)] legend: bool,
) -> impl IntoView {
    let frame = ChartFrame::default();
    let axis = nice_axis(series_max(&series), TICK_COUNT);

    let lines = series
        .iter()
        .map(|s| {
            let points = frame.line_points(&s.values, &axis);
            let dots = frame
                .vertices(&s.values, &axis)
                .into_iter()
                .zip(labels.iter().zip(s.values.iter()))
                .map(|((x, y), (label, value))| {
                    let tip = format!("{label} · {}: {}", s.name, tick_label(*value));
                    view! {
                        <circle class=format!("chart__dot {}", s.class) cx=coord(x) cy=coord(y) r="2.5">
                            <title>{tip}</title>
                        </circle>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g>
                    <polyline class=format!("chart__line {}", s.class) points=points fill="none" stroke-width="2"/>
                    {dots}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let legend_items = legend.then(|| {
        series
            .iter()
            .map(|s| {
                view! {
                    <span class="chart-legend__item">
                        <span class=format!("chart-legend__swatch {}", s.class)></span>
                        {s.name}
                    </span>
                }
            })
            .collect::<Vec<_>>()
    });

    view! {
        <svg class="chart" viewBox=frame.view_box() role="img" aria-label="line chart">
            {grid(frame, &axis)}
            {x_labels(frame, &labels)}
            {lines}
        </svg>
        {legend_items.map(|items| view! { <div class="chart-legend">{items}</div> })}
    }
}

/// Bar chart on an explicit axis; x labels are left to the caller.
#[component]
pub fn BarChart(labels: Vec<&'static str>, values: Vec<f64>, axis: Axis) -> impl IntoView {
    let frame = ChartFrame::default();
    let bars = frame
        .bars(&values, &axis, 0.6)
        .into_iter()
        .zip(labels.iter().zip(values.iter()))
        .map(|(bar, (label, value))| {
            let tip = format!("{label}: {}", tick_label(*value));
            view! {
                <rect
                    class="chart__bar"
                    x=coord(bar.x)
                    y=coord(bar.y)
                    width=coord(bar.width)
                    height=coord(bar.height)
                    rx="3"
                >
                    <title>{tip}</title>
                </rect>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart" viewBox=frame.view_box() role="img" aria-label="bar chart">
            {grid(frame, &axis)}
            {bars}
        </svg>
    }
}

/// Filled area chart for a single series.
#[component]
pub fn AreaChart(labels: Vec<&'static str>, series: Series) -> impl IntoView {
    let frame = ChartFrame::default();
    let axis = nice_axis(series_max(std::slice::from_ref(&series)), TICK_COUNT);
    let area = frame.area_points(&series.values, &axis);
    let line = frame.line_points(&series.values, &axis);
    let dots = frame
        .vertices(&series.values, &axis)
        .into_iter()
        .zip(labels.iter().zip(series.values.iter()))
        .map(|((x, y), (label, value))| {
            let tip = format!("{label} · {}: {}", series.name, tick_label(*value));
            view! {
                <circle class="chart__dot" cx=coord(x) cy=coord(y) r="2.5">
                    <title>{tip}</title>
                </circle>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart" viewBox=frame.view_box() role="img" aria-label="area chart">
            {grid(frame, &axis)}
            {x_labels(frame, &labels)}
            <polygon class="chart__area" points=area/>
            <polyline class="chart__line" points=line fill="none" stroke-width="2"/>
            {dots}
        </svg>
    }
}

/// Card frame around a demo chart, always badged "Demo".
#[component]
pub fn DashboardCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card dashboard-card">
            <div class="dashboard-card__header">
                <div>
                    <div class="dashboard-card__title">{title}</div>
                    <div class="dashboard-card__subtitle">{subtitle}</div>
                </div>
                <Pill>"Demo"</Pill>
            </div>
            <div class="dashboard-card__body">{children()}</div>
        </div>
    }
}

/// BI-style dashboards section: demand/supply, KPIs, anomaly signal.
#[component]
pub fn DashboardsSection() -> impl IntoView {
    let kpi_labels: Vec<&'static str> = KPIS.iter().map(|k| k.name).collect();
    let kpi_values: Vec<f64> = KPIS.iter().map(|k| f64::from(k.value)).collect();
    let anomaly_labels: Vec<&'static str> = ANOMALY.iter().map(|a| a.day).collect();
    let anomaly = Series {
        name: "score",
        class: "chart__series--a",
        values: ANOMALY.iter().map(|a| a.score).collect(),
    };

    view! {
        <section class="section">
            <SectionTitle
                icon=Icon::Dashboard
                title="BI-style dashboards"
                subtitle="Interactive charts (demo). Replace with Tableau screenshots if desired."
            />
            <div class="grid grid--3">
                <DashboardCard title="Demand vs Supply" subtitle="Seasonal pattern + gap monitoring">
                    <LineChart labels=month_labels() series=vec![demand_series(), supply_series()] legend=true/>
                </DashboardCard>

                <DashboardCard title="Operational KPIs" subtitle="Quality, uptime, adoption, speed">
                    <BarChart labels=kpi_labels values=kpi_values axis=Axis::fixed(0.0, 100.0, TICK_COUNT)/>
                    <div class="kpi-grid">
                        {KPIS
                            .iter()
                            .map(|k| {
                                view! {
                                    <div class="kpi-grid__tile">
                                        <div class="kpi-grid__name">{k.name}</div>
                                        <div class="kpi-grid__value">{k.percent_label()}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </DashboardCard>

                <DashboardCard title="Anomaly signal" subtitle="Example scoring output">
                    <AreaChart labels=anomaly_labels series=anomaly/>
                    <div class="dashboard-card__note">
                        "Demonstrates how I’d communicate monitoring signals alongside thresholds and action notes."
                    </div>
                </DashboardCard>
            </div>
        </section>
    }
}
