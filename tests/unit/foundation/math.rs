use super::*;

#[test]
fn interpolate_maps_linearly() {
    assert_eq!(
        interpolate(5.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp),
        50.0
    );
    assert_eq!(
        interpolate(0.0, [0.0, 10.0], [20.0, 40.0], Extrapolation::Extend),
        20.0
    );
}

#[test]
fn interpolate_clamps_or_extends() {
    assert_eq!(
        interpolate(20.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp),
        100.0
    );
    assert_eq!(
        interpolate(-5.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp),
        0.0
    );
    assert_eq!(
        interpolate(20.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Extend),
        200.0
    );
}

#[test]
fn degenerate_input_range_maps_to_first_output() {
    assert_eq!(
        interpolate(3.0, [1.0, 1.0], [7.0, 9.0], Extrapolation::Extend),
        7.0
    );
}
