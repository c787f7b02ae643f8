use super::*;
use crate::animation::decay::Decay;

fn slow_decay(velocity: f64) -> Decay {
    Decay::new(velocity)
        .unwrap()
        .with_velocity_epsilon(1e-6)
        .unwrap()
}

#[test]
fn reflection_halves_and_flips_velocity() {
    let bounds = Bounds::new(0.0, 100.0).unwrap();
    let mut plain = slow_decay(-10.0);
    let mut plain_state = AnimationState::default();
    plain.start(&mut plain_state, 5.0, 0.0, None);
    plain.step(&mut plain_state, 16.0);
    assert!(plain_state.current < 0.0);

    let mut b = Bounce::new(slow_decay(-10.0).into(), bounds).unwrap();
    let mut state = AnimationState::default();
    b.start(&mut state, 5.0, 0.0, None);
    let finished = b.step(&mut state, 16.0);

    assert!(!finished);
    assert_eq!(b.child().state().velocity, -0.5 * plain_state.velocity);
    assert_eq!(b.child().state().current, 0.0);
    assert_eq!(state.current, 0.0);
    assert!(bounds.contains(state.current));
}

#[test]
fn upper_bound_reflects_downward() {
    let bounds = Bounds::new(-20.0, 20.0).unwrap();
    let mut b = Bounce::new(slow_decay(3.0).into(), bounds).unwrap();
    let mut state = AnimationState::default();
    b.start(&mut state, 0.0, 0.0, None);
    b.step(&mut state, 50.0);
    assert_eq!(state.current, 20.0);
    assert!(b.child().state().velocity < 0.0);
}

#[test]
fn inside_bounds_is_untouched() {
    let bounds = Bounds::new(-1000.0, 1000.0).unwrap();
    let mut plain = slow_decay(2.0);
    let mut plain_state = AnimationState::default();
    plain.start(&mut plain_state, 0.0, 0.0, None);

    let mut b = Bounce::new(slow_decay(2.0).into(), bounds).unwrap();
    let mut state = AnimationState::default();
    b.start(&mut state, 0.0, 0.0, None);

    for now in [16.0, 32.0, 48.0] {
        plain.step(&mut plain_state, now);
        b.step(&mut state, now);
        assert_eq!(state.current, plain_state.current);
        assert_eq!(b.child().state().velocity, plain_state.velocity);
    }
}

#[test]
fn finished_flag_comes_from_child() {
    let bounds = Bounds::new(0.0, 10.0).unwrap();
    // Starts below epsilon, so the very first step reports finished.
    let child = Decay::new(-1.0).unwrap();
    let mut b = Bounce::new(child.into(), bounds).unwrap();
    let mut state = AnimationState::default();
    b.start(&mut state, 0.0, 0.0, None);
    assert!(b.step(&mut state, 16.0));
    assert!(bounds.contains(state.current));
}

#[test]
fn degenerate_bounds_are_rejected() {
    let child: Combinator = slow_decay(1.0).into();
    let err = Bounce::new(
        child,
        Bounds {
            lower: 0.0,
            upper: 0.0,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}
