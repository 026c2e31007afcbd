use super::*;

#[test]
fn max_offset_is_radius_minus_half_size() {
    let circle = CircleSpec { radius: 100.0 };
    let square = SquareSpec {
        size: 50.0,
        ..Default::default()
    };
    assert_eq!(max_offset(circle, square), 75.0);
}

#[test]
fn clamp_keeps_in_range_values() {
    assert_eq!(clamp_offset(0.0, 75.0), 0.0);
    assert_eq!(clamp_offset(75.0, 75.0), 75.0);
    assert_eq!(clamp_offset(-75.0, 75.0), -75.0);
}

#[test]
fn clamp_replaces_out_of_range_with_nearest_boundary() {
    assert_eq!(clamp_offset(200.0, 75.0), 75.0);
    assert_eq!(clamp_offset(-200.0, 75.0), -75.0);
}

#[test]
fn clamp_result_always_within_bounds() {
    let max_off = 75.0;
    for v in [-1e9, -76.0, -0.5, 0.0, 33.3, 74.999, 76.0, 1e9] {
        let c = clamp_offset(v, max_off);
        assert!((-max_off..=max_off).contains(&c), "{v} clamped to {c}");
    }
}

#[test]
fn degenerate_range_resolves_to_max_without_panic() {
    // Square wider than the disc: radius 10, size 50 -> max_off = -15.
    let m = max_offset(
        CircleSpec { radius: 10.0 },
        SquareSpec {
            size: 50.0,
            ..Default::default()
        },
    );
    assert_eq!(m, -15.0);
    assert_eq!(clamp_offset(0.0, m), -15.0);
    assert_eq!(clamp_offset(100.0, m), -15.0);
}

#[test]
fn reach_includes_center_and_boundary() {
    assert!(within_reach(0.0, 0.0, 75.0));
    assert!(within_reach(75.0, 0.0, 75.0));
    assert!(within_reach(45.0, 60.0, 75.0)); // 3-4-5 triangle, distance 75
    assert!(!within_reach(75.1, 0.0, 75.0));
    assert!(!within_reach(60.0, 60.0, 75.0));
}

#[test]
fn mount_defaults() {
    assert_eq!(CircleSpec::default().radius, 100.0);
    let sq = SquareSpec::default();
    assert_eq!(sq.size, 50.0);
    assert_eq!(sq.offset_x, 25.0);
    assert_eq!(sq.offset_y, 25.0);
}
