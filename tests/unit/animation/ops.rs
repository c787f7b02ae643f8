use super::*;
use crate::animation::{combinator::Animator, state::AnimationState};

#[test]
fn builders_compose_a_tree() {
    let flag = PauseFlag::new(false);
    let bounds = Bounds::new(0.0, 300.0).unwrap();
    let tree = pause(bounce(decay(2.0).unwrap(), bounds).unwrap(), &flag);
    assert_eq!(tree.kind(), "pause");
    assert_eq!(tree.depth(), 3);
    match &tree {
        Combinator::Pause(p) => {
            assert!(p.flag().shares_with(&flag));
            assert_eq!(p.child().combinator().kind(), "bounce");
        }
        other => panic!("unexpected root: {}", other.kind()),
    }
}

#[test]
fn paused_bounced_decay_drives_to_rest_inside_bounds() {
    let flag = PauseFlag::new(false);
    let bounds = Bounds::new(0.0, 100.0).unwrap();
    let mut tree = pause(bounce(decay(-30.0).unwrap(), bounds).unwrap(), &flag);
    let mut state = AnimationState::default();
    tree.start(&mut state, 50.0, 0.0, None);

    let mut now = 0.0;
    let mut ticks = 0;
    loop {
        now += 16.0;
        ticks += 1;
        flag.set(ticks % 5 == 0);
        if tree.step(&mut state, now) {
            break;
        }
        assert!(ticks < 10_000);
        assert!(bounds.contains(state.current));
    }
    assert!(bounds.contains(state.current));
}

#[test]
fn builder_errors_surface_before_stepping() {
    assert!(decay(f64::INFINITY).is_err());
    assert!(timing(1.0, -5.0, Ease::Linear).is_err());
    let child = decay(1.0).unwrap();
    assert!(repeat(child, Some(0), false).is_err());
    assert!(spring(f64::NAN).is_err());
}

#[test]
fn repeated_spring_is_a_leaf_under_repeat() {
    let tree = repeat(spring(10.0).unwrap(), Some(2), false).unwrap();
    assert_eq!(tree.kind(), "repeat");
    assert_eq!(tree.depth(), 2);
}

#[test]
fn combinator_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Combinator>();
}
