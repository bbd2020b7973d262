//! Configuration loading from files and the environment

use std::env;
use std::fs;

use gemswap::auto::{load_engine_config, AutoConfig};
use gemswap::core::{EngineConfig, MatchEngine};

// Environment variables are process-global, so everything that touches them
// lives in this one test.
#[test]
fn test_from_env_overrides_and_fallbacks() {
    env::set_var("GEMSWAP_ROWS", "6");
    env::set_var("GEMSWAP_COLS", " 9 ");
    env::set_var("GEMSWAP_SYMBOLS", "five");
    env::remove_var("GEMSWAP_POINTS_PER_CELL");

    let config = EngineConfig::from_env();
    assert_eq!(config, EngineConfig::new(6, 9, 7, 10));

    env::set_var("GEMSWAP_SYMBOLS", "2");
    let config = EngineConfig::from_env();
    assert_eq!(config.symbol_count, 2);
    assert!(config.validate().is_err());

    // With no path, the headless runner reads the same variables.
    let err = load_engine_config(&AutoConfig::default()).unwrap_err();
    assert!(err.to_string().contains("symbolCount"));

    for key in ["GEMSWAP_ROWS", "GEMSWAP_COLS", "GEMSWAP_SYMBOLS"] {
        env::remove_var(key);
    }
    assert_eq!(EngineConfig::from_env(), EngineConfig::default());
}

#[test]
fn test_load_from_file() {
    let path = env::temp_dir().join(format!("gemswap-config-{}.json", std::process::id()));
    fs::write(&path, r#"{"rows": 5, "cols": 7, "pointsPerCell": 15}"#).unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config, EngineConfig::new(5, 7, 7, 15));

    let auto = AutoConfig {
        config_path: Some(path.clone()),
        ..AutoConfig::default()
    };
    assert_eq!(load_engine_config(&auto).unwrap(), config);

    let engine = MatchEngine::with_seed(config, 4).unwrap();
    assert_eq!(engine.grid().rows(), 5);
    assert_eq!(engine.grid().cols(), 7);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_invalid_config_fails_at_construction() {
    let err = MatchEngine::with_seed(EngineConfig::new(8, 8, 9, 10), 1).unwrap_err();
    assert_eq!(err.code(), "invalid_configuration");
    let err = MatchEngine::with_seed(EngineConfig::new(1, 8, 7, 10), 1).unwrap_err();
    assert_eq!(err.code(), "invalid_configuration");
}
