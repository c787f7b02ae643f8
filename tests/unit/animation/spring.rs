use super::*;
use crate::animation::{combinator::Combinator, pause::Pause, state::PauseFlag};

fn run(spring: &mut Spring, from: f64, tick: f64) -> (u32, Vec<f64>) {
    let mut state = AnimationState::default();
    spring.start(&mut state, from, 0.0, None);
    let mut trace = Vec::new();
    for i in 1..=10_000u32 {
        let finished = spring.step(&mut state, f64::from(i) * tick);
        trace.push(state.current);
        if finished {
            assert_eq!(state.velocity, 0.0);
            return (i, trace);
        }
    }
    panic!("spring never came to rest");
}

#[test]
fn settles_exactly_on_target() {
    let mut s = Spring::new(100.0).unwrap();
    let (_, trace) = run(&mut s, 0.0, 16.0);
    assert_eq!(*trace.last().unwrap(), 100.0);
    // Default constants are underdamped.
    assert!(s.damping_ratio() < 1.0);
    assert!(trace.iter().any(|&x| x > 100.0));
}

#[test]
fn every_damping_regime_settles() {
    for (stiffness, damping) in [(100.0, 10.0), (100.0, 20.0), (100.0, 40.0)] {
        let mut s = Spring::new(-50.0)
            .unwrap()
            .with_constants(stiffness, damping, 1.0)
            .unwrap();
        let (_, trace) = run(&mut s, 25.0, 16.0);
        assert_eq!(*trace.last().unwrap(), -50.0);
    }
}

#[test]
fn trajectory_is_tick_independent() {
    for (stiffness, damping) in [(100.0, 10.0), (100.0, 20.0), (100.0, 40.0)] {
        let mut fine = Spring::new(100.0)
            .unwrap()
            .with_constants(stiffness, damping, 1.0)
            .unwrap();
        let mut coarse = fine;
        let mut a = AnimationState::default();
        let mut b = AnimationState::default();
        fine.start(&mut a, 0.0, 0.0, None);
        coarse.start(&mut b, 0.0, 0.0, None);

        for i in 1..=30 {
            assert!(!fine.step(&mut a, f64::from(i) * 8.0));
        }
        assert!(!coarse.step(&mut b, 240.0));
        assert!((a.current - b.current).abs() < 1e-8, "zeta {}", fine.damping_ratio());
        assert!((a.velocity - b.velocity).abs() < 1e-10);
    }
}

#[test]
fn looser_rest_thresholds_finish_sooner() {
    let mut tight = Spring::new(100.0).unwrap();
    let mut loose = Spring::new(100.0)
        .unwrap()
        .with_rest_thresholds(0.1, 100.0)
        .unwrap();
    let (tight_ticks, tight_trace) = run(&mut tight, 0.0, 16.0);
    let (loose_ticks, loose_trace) = run(&mut loose, 0.0, 16.0);
    assert!(loose_ticks < tight_ticks);
    assert_eq!(*loose_trace.last().unwrap(), 100.0);
    assert_eq!(*tight_trace.last().unwrap(), 100.0);
}

#[test]
fn initial_velocity_moves_a_spring_already_on_target() {
    let mut s = Spring::new(0.0).unwrap().with_velocity(1.0).unwrap();
    let mut state = AnimationState::default();
    s.start(&mut state, 0.0, 0.0, None);
    assert_eq!(state.velocity, 1.0);
    assert!(!s.step(&mut state, 16.0));
    assert!(state.current > 0.0);
}

#[test]
fn overshoot_clamping_stops_at_target() {
    let mut clamped = Spring::new(100.0).unwrap().with_overshoot_clamping(true);
    let mut free = Spring::new(100.0).unwrap();
    let (clamped_ticks, trace) = run(&mut clamped, 0.0, 16.0);
    let (free_ticks, _) = run(&mut free, 0.0, 16.0);
    assert!(trace.iter().all(|&x| x <= 100.0));
    assert_eq!(*trace.last().unwrap(), 100.0);
    assert!(clamped_ticks < free_ticks);
}

#[test]
fn pausing_shifts_but_does_not_change_the_trajectory() {
    let mut plain = Spring::new(100.0).unwrap();
    let (plain_ticks, plain_trace) = run(&mut plain, 0.0, 16.0);

    let flag = PauseFlag::new(false);
    let mut paused = Pause::new(Combinator::from(Spring::new(100.0).unwrap()), flag.clone());
    let mut state = AnimationState::default();
    paused.start(&mut state, 0.0, 0.0, None);

    let mut running = Vec::new();
    for i in 1..=10_000u32 {
        flag.set((3..=7).contains(&i));
        let held = state.current;
        let finished = paused.step(&mut state, f64::from(i) * 16.0);
        if flag.is_paused() {
            assert_eq!(state.current, held);
        } else {
            running.push(state.current);
        }
        if finished {
            break;
        }
    }
    assert_eq!(running.len(), plain_ticks as usize);
    assert_eq!(running, plain_trace);
}

#[test]
fn invalid_parameters_are_configuration_errors() {
    assert!(matches!(
        Spring::new(f64::NAN),
        Err(GlideError::Configuration(_))
    ));
    let s = Spring::new(1.0).unwrap();
    assert!(s.with_velocity(f64::INFINITY).is_err());
    assert!(s.with_constants(0.0, 10.0, 1.0).is_err());
    assert!(s.with_constants(100.0, 0.0, 1.0).is_err());
    assert!(s.with_constants(100.0, 10.0, -1.0).is_err());
    assert!(s.with_rest_thresholds(0.0, 0.01).is_err());
}
