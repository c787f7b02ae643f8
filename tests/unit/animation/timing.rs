use super::*;
use crate::animation::decay::Decay;

fn run_until_finished(c: &mut impl Animator, state: &mut AnimationState, tick: f64) -> f64 {
    let mut now = state.last_timestamp;
    loop {
        now += tick;
        if c.step(state, now) {
            return now;
        }
        assert!(now < 1e7, "never finished");
    }
}

#[test]
fn timing_reaches_target_at_duration() {
    let mut t = Timing::new(10.0, 100.0, Ease::Linear).unwrap();
    let mut s = AnimationState::default();
    t.start(&mut s, 0.0, 0.0, None);
    assert!(!t.step(&mut s, 50.0));
    assert_eq!(s.current, 5.0);
    assert_eq!(s.velocity, 0.1);
    assert!(t.step(&mut s, 100.0));
    assert_eq!(s.current, 10.0);
    assert!(t.step(&mut s, 150.0));
    assert_eq!(s.current, 10.0);
}

#[test]
fn timing_rejects_bad_duration() {
    assert!(Timing::new(1.0, 0.0, Ease::Linear).is_err());
    assert!(Timing::new(1.0, f64::NAN, Ease::Linear).is_err());
    assert!(Timing::new(f64::INFINITY, 10.0, Ease::Linear).is_err());
}

#[test]
fn repeat_counts_runs() {
    let child = Timing::new(1.0, 32.0, Ease::Linear).unwrap();
    let mut r = Repeat::new(child.into(), Some(3), false).unwrap();
    let mut s = AnimationState::default();
    r.start(&mut s, 0.0, 0.0, None);
    let done_at = run_until_finished(&mut r, &mut s, 16.0);
    assert_eq!(done_at, 96.0);
    assert_eq!(r.completed(), 3);
    assert_eq!(s.current, 1.0);
}

#[test]
fn repeat_reverse_ping_pongs() {
    let child = Timing::new(10.0, 20.0, Ease::Linear).unwrap();
    let mut r = Repeat::new(child.into(), Some(2), true).unwrap();
    let mut s = AnimationState::default();
    r.start(&mut s, 0.0, 0.0, None);

    assert!(!r.step(&mut s, 20.0));
    assert_eq!(s.current, 10.0);
    assert!(!r.step(&mut s, 30.0));
    assert_eq!(s.current, 5.0);
    assert!(r.step(&mut s, 40.0));
    assert_eq!(s.current, 0.0);
}

#[test]
fn repeat_forever_never_finishes() {
    let child = Timing::new(1.0, 10.0, Ease::InOutCubic).unwrap();
    let mut r = Repeat::new(child.into(), None, true).unwrap();
    let mut s = AnimationState::default();
    r.start(&mut s, 0.0, 0.0, None);
    for i in 1..=100 {
        assert!(!r.step(&mut s, f64::from(i) * 16.0));
        assert!((0.0..=1.0).contains(&s.current));
    }
    assert_eq!(r.completed(), 100);
}

#[test]
fn repeat_configuration_errors() {
    let t: Combinator = Timing::new(1.0, 10.0, Ease::Linear).unwrap().into();
    assert!(Repeat::new(t, Some(0), false).is_err());
    let d: Combinator = Decay::new(1.0).unwrap().into();
    let err = Repeat::new(d, None, true).unwrap_err();
    assert!(err.to_string().contains("timing child"));
}
