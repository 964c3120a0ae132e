use super::*;
use crate::series::{ANOMALY, DEMAND_SUPPLY, KPIS};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Axis
// =============================================================

#[test]
fn fixed_axis_spreads_ticks_evenly() {
    let axis = Axis::fixed(0.0, 100.0, 5);
    assert_eq!(axis.ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn nice_axis_rounds_demand_up() {
    let max = DEMAND_SUPPLY.iter().map(|p| p.demand.max(p.supply)).fold(0.0, f64::max);
    let axis = nice_axis(max, 5);
    assert!(approx(axis.max, 200.0));
    assert_eq!(axis.ticks.len(), 5);
    assert!(axis.max >= max);
}

#[test]
fn nice_axis_handles_fractional_scores() {
    let max = ANOMALY.iter().map(|p| p.score).fold(0.0, f64::max);
    let axis = nice_axis(max, 5);
    assert!(approx(axis.max, 0.8));
    assert!(axis.max >= max);
}

#[test]
fn nice_axis_keeps_exact_steps() {
    let axis = nice_axis(100.0, 5);
    assert!(approx(axis.max, 100.0));
}

#[test]
fn nice_axis_degenerate_max_is_unit() {
    assert!(approx(nice_axis(0.0, 5).max, 1.0));
    assert!(approx(nice_axis(f64::NAN, 5).max, 1.0));
    assert!(approx(nice_axis(-3.0, 5).max, 1.0));
}

// =============================================================
// ChartFrame
// =============================================================

#[test]
fn band_centres_are_inside_plot() {
    let frame = ChartFrame::default();
    for i in 0..12 {
        let x = frame.x_at(i, 12);
        assert!(x > frame.pad_left && x < frame.right());
    }
}

#[test]
fn y_at_maps_domain_to_plot_edges() {
    let frame = ChartFrame::default();
    let axis = Axis::fixed(0.0, 100.0, 5);
    assert!(approx(frame.y_at(0.0, &axis), frame.baseline()));
    assert!(approx(frame.y_at(100.0, &axis), frame.pad_top));
}

#[test]
fn y_at_clamps_out_of_range_values() {
    let frame = ChartFrame::default();
    let axis = Axis::fixed(0.0, 100.0, 5);
    assert!(approx(frame.y_at(250.0, &axis), frame.pad_top));
    assert!(approx(frame.y_at(-5.0, &axis), frame.baseline()));
}

#[test]
fn line_points_has_one_pair_per_value() {
    let frame = ChartFrame::default();
    let values: Vec<f64> = DEMAND_SUPPLY.iter().map(|p| p.demand).collect();
    let points = frame.line_points(&values, &nice_axis(140.0, 5));
    assert_eq!(points.split(' ').count(), 12);
    assert!(points.split(' ').all(|pair| pair.split(',').count() == 2));
}

#[test]
fn area_points_close_to_baseline() {
    let frame = ChartFrame::default();
    let values: Vec<f64> = ANOMALY.iter().map(|p| p.score).collect();
    let points = frame.area_points(&values, &nice_axis(0.65, 5));
    let pairs: Vec<_> = points.split(' ').collect();
    assert_eq!(pairs.len(), ANOMALY.len() + 2);
    let baseline = format!("{:.1}", frame.baseline());
    assert!(pairs[pairs.len() - 1].ends_with(&baseline));
    assert!(pairs[pairs.len() - 2].ends_with(&baseline));
}

#[test]
fn area_points_empty_series_is_empty() {
    let frame = ChartFrame::default();
    assert_eq!(frame.area_points(&[], &Axis::fixed(0.0, 1.0, 2)), "");
}

#[test]
fn kpi_bar_heights_are_proportional() {
    let frame = ChartFrame::default();
    let axis = Axis::fixed(0.0, 100.0, 5);
    let values: Vec<f64> = KPIS.iter().map(|k| f64::from(k.value)).collect();
    let bars = frame.bars(&values, &axis, 0.6);
    assert_eq!(bars.len(), 4);
    for (bar, kpi) in bars.iter().zip(KPIS.iter()) {
        let expected = frame.plot_height() * f64::from(kpi.value) / 100.0;
        assert!(approx(bar.height, expected));
        assert!(approx(bar.y + bar.height, frame.baseline()));
    }
}

#[test]
fn bars_do_not_overlap() {
    let frame = ChartFrame::default();
    let bars = frame.bars(&[1.0, 2.0, 3.0], &Axis::fixed(0.0, 3.0, 4), 0.8);
    for pair in bars.windows(2) {
        assert!(pair[0].x + pair[0].width < pair[1].x);
    }
}

#[test]
fn view_box_uses_frame_size() {
    assert_eq!(ChartFrame::default().view_box(), "0 0 320 200");
}

// =============================================================
// tick_label
// =============================================================

#[test]
fn tick_label_trims_trailing_zeros() {
    assert_eq!(tick_label(50.0), "50");
    assert_eq!(tick_label(0.2), "0.2");
    assert_eq!(tick_label(2.5), "2.5");
    assert_eq!(tick_label(0.0), "0");
}
