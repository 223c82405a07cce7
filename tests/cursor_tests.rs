// Host-side tests for the cursor follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod portal {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use glam::Vec2;
use portal::cursor::CursorFollower;

#[test]
fn both_followers_converge_on_a_still_pointer() {
    let mut follower = CursorFollower::new();
    let target = Vec2::new(640.0, 360.0);
    for _ in 0..400 {
        follower.update(target);
    }
    assert!((follower.dot - target).length() < 0.1);
    assert!((follower.ring - target).length() < 0.1);
}

#[test]
fn ring_lags_behind_the_dot() {
    let mut follower = CursorFollower::new();
    let target = Vec2::new(200.0, 100.0);
    for _ in 0..10 {
        follower.update(target);
    }
    let dot_gap = (follower.dot - target).length();
    let ring_gap = (follower.ring - target).length();
    assert!(
        ring_gap > dot_gap,
        "ring should trail the dot: ring gap {ring_gap}, dot gap {dot_gap}"
    );
}

#[test]
fn each_step_closes_part_of_the_gap() {
    let mut follower = CursorFollower::new();
    let target = Vec2::new(100.0, 0.0);
    let mut prev = (follower.dot - target).length();
    for _ in 0..50 {
        follower.update(target);
        let gap = (follower.dot - target).length();
        assert!(gap < prev);
        prev = gap;
    }
}
