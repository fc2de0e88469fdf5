//! Config file loading and resolution into a match setup.

use std::fs;
use std::time::Duration;

use kinball_config::{ConfigError, KinballConfig, SetupAnswers};
use kinball_core::ScoreEngine;
use kinball_types::Team;

#[test]
fn config_file_drives_match_setup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[match]
goal_score = 3
final_score = 5

[teams]
a = "Pink"
b = "Grey"

[app]
prompt = false
flash_interval_ms = 100
"#,
    )
    .unwrap();

    let config = KinballConfig::load_from(&path).unwrap();
    assert!(!config.prompt_enabled());

    let setup = SetupAnswers::from_config(&config).resolve(config.flash_interval());
    assert_eq!(setup.flash_interval(), Duration::from_millis(100));

    let mut engine = ScoreEngine::new(setup);
    assert_eq!(engine.names().get(Team::A), "Pink");
    assert_eq!(engine.names().get(Team::C), "Team C");

    for _ in 0..3 {
        engine.apply_penalty(Team::C);
    }
    assert_eq!(engine.locked(), Some(Team::C));
    for _ in 0..2 {
        engine.apply_penalty(Team::B);
    }
    assert_eq!(engine.winner(), Some(Team::A));

    engine.tick(Duration::from_millis(100));
    assert_eq!(engine.flash_signal(), Some(Team::A));
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[teams\na = ").unwrap();

    let err = KinballConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn invalid_thresholds_fall_back_to_defaults() {
    let config: KinballConfig =
        toml::from_str("[match]\ngoal_score = 0\nfinal_score = -1\n").unwrap();
    let setup = SetupAnswers::from_config(&config).resolve(config.flash_interval());
    assert_eq!(setup.config().goal_score(), 10);
    assert_eq!(setup.config().final_score(), 15);
}

#[test]
fn zero_flash_interval_still_flashes_the_winner() {
    let config: KinballConfig = toml::from_str("[app]\nflash_interval_ms = 0\n").unwrap();
    let setup = SetupAnswers::from_config(&config).resolve(config.flash_interval());
    let mut engine = ScoreEngine::new(setup);
    for _ in 0..10 {
        engine.apply_penalty(Team::B);
    }
    for _ in 0..5 {
        engine.apply_penalty(Team::C);
    }
    assert_eq!(engine.winner(), Some(Team::A));

    let mut lit_frames = 0;
    for _ in 0..20 {
        engine.tick(Duration::from_millis(16));
        if engine.flash_signal() == Some(Team::A) {
            lit_frames += 1;
        }
    }
    assert!(lit_frames > 0);
}
