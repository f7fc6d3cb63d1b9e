//! Building locks from configuration files.

use std::fs;

use padlock_core::{Combination, ConfigError, DiscPositions, Padlock, PadlockConfig, StartPose};
use tempfile::tempdir;

use crate::common::ScriptedSource;

#[test]
fn rest_pose_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[lock]\ncombination = [12, 24, 36]\n").unwrap();

    let config = PadlockConfig::load_from(&path).unwrap();
    assert_eq!(config.dial.start, StartPose::Rest);

    let mut source = ScriptedSource::new([]);
    let padlock = Padlock::from_config_with(&config, &mut source);
    assert_eq!(padlock.positions(), DiscPositions::REST);
    assert_eq!(padlock.combination(), Combination::new(12, 24, 36));
    assert!(padlock.is_open());
}

#[test]
fn random_pose_from_file_draws_three_positions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[lock]\ncombination = [12, 24, 36]\n\n[dial]\nstart = \"random\"\n",
    )
    .unwrap();

    let config = PadlockConfig::load_from(&path).unwrap();
    let mut source = ScriptedSource::new([8, 386, -324]);
    let mut padlock = Padlock::from_config_with(&config, &mut source);

    assert_eq!(source.remaining(), 0);
    assert_eq!(padlock.positions().as_array(), [8, 26, 36]);
    assert!(padlock.is_aligned());

    padlock.close();
    padlock.open();
    assert!(padlock.is_open());
}

#[test]
fn unreadable_config_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    match PadlockConfig::load_from(&path) {
        Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}
