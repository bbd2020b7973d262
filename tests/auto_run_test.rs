//! Headless runner: one JSON outcome per line

use gemswap::auto::{run_auto, AutoConfig};
use gemswap::core::{EngineConfig, MatchEngine, Outcome};

#[test]
fn test_auto_run_writes_json_lines() {
    let cfg = AutoConfig {
        seed: 77,
        moves: 10,
        config_path: None,
    };
    let mut out = Vec::new();
    let summary = run_auto(EngineConfig::default(), &cfg, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len() as u32, summary.moves_played);
    assert!(summary.moves_played == 10 || summary.stuck);

    let mut last_score = 0;
    for line in &lines {
        let outcome: Outcome = serde_json::from_str(line).unwrap();
        assert!(outcome.is_accepted());
        assert!(outcome.score >= last_score);
        last_score = outcome.score;
    }
    assert_eq!(last_score, summary.score);
}

#[test]
fn test_auto_run_matches_manual_play() {
    let cfg = AutoConfig {
        seed: 5,
        moves: 4,
        config_path: None,
    };
    let mut out = Vec::new();
    run_auto(EngineConfig::default(), &cfg, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut engine = MatchEngine::with_seed(EngineConfig::default(), 5).unwrap();
    for line in text.lines() {
        let logged: Outcome = serde_json::from_str(line).unwrap();
        let (a, b) = engine.find_legal_swap().unwrap();
        assert_eq!(logged.swap, [a, b]);
        assert_eq!(engine.try_swap(a, b).unwrap(), logged);
    }
}
