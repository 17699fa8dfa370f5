use twinscope::render::mapper::{sample_pos, sample_x, sample_y, PlotArea};

#[test]
fn zero_volts_maps_to_vertical_center() {
    for scale in [0.1, 0.5, 1.0, 2.0, 10.0] {
        assert_eq!(sample_y(0.0, scale, 200.0, 8), 100.0, "scale {}", scale);
        assert_eq!(sample_y(0.0, scale, 240.0, 10), 120.0, "scale {}", scale);
    }
}

#[test]
fn vertical_scenario_one_volt_at_unit_scale() {
    // height 200, 8 divisions, 1 V/div: 1 V is one division (25 px) above center.
    assert_eq!(sample_y(1.0, 1.0, 200.0, 8), 75.0);
}

#[test]
fn y_decreases_as_voltage_increases() {
    let mut prev = sample_y(-3.0, 1.0, 200.0, 8);
    for step in 1..=12 {
        let v = -3.0 + step as f64 * 0.5;
        let y = sample_y(v, 1.0, 200.0, 8);
        assert!(y < prev, "y({}) = {} not below {}", v, y, prev);
        prev = y;
    }
}

#[test]
fn x_spacing_uses_capacity_not_current_length() {
    // A sample's X position depends only on its index and the configured
    // capacity, so a partially filled buffer renders left-aligned.
    let width = 320.0;
    let capacity = 300;
    assert_eq!(sample_x(0, capacity, width), 0.0);
    let step = width / capacity as f32;
    for i in [1, 2, 150, 299] {
        assert_eq!(sample_x(i, capacity, width), i as f32 * step);
    }
    // The last slot lands at the right edge minus one step.
    assert!(sample_x(299, capacity, width) < width);
}

#[test]
fn mapping_is_deterministic() {
    let area = PlotArea::new(320.0, 200.0);
    let a = sample_pos(42, 1.7, 300, &area, 2.0, 8);
    let b = sample_pos(42, 1.7, 300, &area, 2.0, 8);
    assert_eq!(a, b);
}

#[test]
fn off_canvas_values_are_not_clamped() {
    // 10 V at 1 V/div on a 200 px / 8 div area is far above the top edge.
    let y = sample_y(10.0, 1.0, 200.0, 8);
    assert!(y < 0.0);
    let y = sample_y(-10.0, 1.0, 200.0, 8);
    assert!(y > 200.0);
}

#[test]
fn rescale_round_trip_restores_positions() {
    let area = PlotArea::new(320.0, 200.0);
    let original = sample_pos(10, 0.8, 300, &area, 1.0, 8);
    // Changing the scale and changing it back must reproduce the exact
    // position: the transform reads stored volts, not pre-scaled pixels.
    let _zoomed = sample_pos(10, 0.8, 300, &area, 5.0, 8);
    let restored = sample_pos(10, 0.8, 300, &area, 1.0, 8);
    assert_eq!(original, restored);
}

#[test]
fn plot_area_centers() {
    let area = PlotArea::new(320.0, 200.0);
    assert_eq!(area.center_x(), 160.0);
    assert_eq!(area.center_y(), 100.0);
}
