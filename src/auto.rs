//! Headless play: `gemswap auto [--seed N] [--moves N] [--config PATH]`.
//!
//! Plays the first legal swap each turn and writes every [`Outcome`] as one
//! JSON line. Stops early when the board has no legal swap left.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::core::{EngineConfig, MatchEngine, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoConfig {
    pub seed: u32,
    pub moves: u32,
    pub config_path: Option<PathBuf>,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            moves: 50,
            config_path: None,
        }
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSummary {
    pub moves_played: u32,
    pub score: u64,
    pub stuck: bool,
}

/// Returns `Ok(None)` when `args` do not start with `auto`.
pub fn parse_auto_args(args: &[String]) -> Result<Option<AutoConfig>> {
    if args.first().map(String::as_str) != Some("auto") {
        return Ok(None);
    }

    let mut cfg = AutoConfig::default();
    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let mut value = || {
            rest.next()
                .ok_or_else(|| anyhow!("auto: missing value for {}", flag))
        };
        match flag.as_str() {
            "--seed" => {
                let v = value()?;
                cfg.seed = v
                    .parse()
                    .map_err(|_| anyhow!("auto: invalid --seed value: {}", v))?;
            }
            "--moves" => {
                let v = value()?;
                cfg.moves = v
                    .parse()
                    .map_err(|_| anyhow!("auto: invalid --moves value: {}", v))?;
            }
            "--config" => {
                cfg.config_path = Some(PathBuf::from(value()?));
            }
            other => return Err(anyhow!("auto: unknown argument: {}", other)),
        }
    }

    Ok(Some(cfg))
}

/// File config when a path is given, environment otherwise.
pub fn load_engine_config(cfg: &AutoConfig) -> Result<EngineConfig> {
    let config = match &cfg.config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env(),
    };
    config.validate()?;
    Ok(config)
}

pub fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> Result<()> {
    serde_json::to_writer(&mut *out, outcome)?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn run_auto(engine_config: EngineConfig, cfg: &AutoConfig, out: &mut impl Write) -> Result<AutoSummary> {
    let mut engine = MatchEngine::with_seed(engine_config, cfg.seed)?;
    let mut moves_played = 0;
    let mut stuck = false;

    while moves_played < cfg.moves {
        let Some((a, b)) = engine.find_legal_swap() else {
            warn!(moves_played, "no legal swap left");
            stuck = true;
            break;
        };
        let outcome = engine.try_swap(a, b)?;
        write_outcome(out, &outcome)?;
        moves_played += 1;
    }
    out.flush()?;

    let stats = engine.stats();
    info!(
        moves_played,
        score = engine.score(),
        cascade_steps = stats.cascade_steps,
        longest_cascade = stats.longest_cascade,
        "auto run finished"
    );
    Ok(AutoSummary {
        moves_played,
        score: engine.score(),
        stuck,
    })
}
