//! Seeking the dial to numbers.

use padlock_core::{MAX_SEEK_STEPS, Padlock, Rotation, SeekError};

use crate::common::{ScriptedSource, lock_at};

#[test]
fn turn_left_to_every_reachable_number() {
    for number in 0..360 {
        let mut padlock = Padlock::new(0, 0, 0);
        padlock.randomize_positions(&mut ScriptedSource::new([123, 45, 300]));

        let steps = padlock.turn_left_to(number).unwrap();
        assert_eq!(padlock.disc_position(3), number);
        assert!((1..=MAX_SEEK_STEPS).contains(&steps));
    }
}

#[test]
fn turn_right_to_every_reachable_number() {
    for number in 0..360 {
        let mut padlock = lock_at([0, 0, 0], [200, 100, 17]);

        padlock.turn_right_to(number).unwrap();
        assert_eq!(padlock.disc_position(3), number);
    }
}

#[test]
fn seek_step_counts_follow_the_dial() {
    let mut padlock = lock_at([0, 0, 0], [0, 0, 100]);

    assert_eq!(padlock.turn_left_to(110), Ok(10));
    assert_eq!(padlock.turn_right_to(100), Ok(10));
    assert_eq!(padlock.turn_right_to(350), Ok(110));
    assert_eq!(padlock.turn_left_to(10), Ok(20));
}

#[test]
fn dialing_sequence_keeps_discs_in_range_after_clockwise_finish() {
    let mut padlock = Padlock::new(15, 25, 35);

    padlock.turn_right_to(15).unwrap();
    padlock.turn_left_to(25).unwrap();
    padlock.turn_right_to(35).unwrap();

    let positions = padlock.positions();
    assert_eq!(positions.front, 35);
    assert!((0..360).contains(&positions.middle));
    assert!((0..360).contains(&positions.rear));
}

#[test]
fn unreachable_targets_report_direction() {
    let mut padlock = Padlock::new(0, 0, 0);

    assert_eq!(
        padlock.turn_right_to(720),
        Err(SeekError::Unreachable {
            target: 720,
            rotation: Rotation::Clockwise,
            steps: MAX_SEEK_STEPS,
        })
    );
    // A full revolution brings the front disc back where it started.
    assert_eq!(padlock.disc_position(3), 0);
}
