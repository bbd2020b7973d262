//! gemswap runner (default binary).
//!
//! With no arguments this is the interactive terminal game: crossterm input,
//! the framebuffer renderer, and a step player that animates each cascade.
//! `gemswap auto ...` plays headlessly and prints outcomes as JSON lines.

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use gemswap::auto::{load_engine_config, parse_auto_args, run_auto};
use gemswap::core::{EngineConfig, GridSnapshot, MatchEngine};
use gemswap::input::{should_quit, ActionQueue, Cursor, Selection, SelectionEvent};
use gemswap::term::{BoardScene, BoardView, PanelInfo, StepPlayer, TerminalRenderer, Viewport};
use gemswap::types::{BoardAction, Position, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(cfg) = parse_auto_args(&args)? {
        init_tracing();
        let engine_config = load_engine_config(&cfg)?;
        let stdout = io::stdout();
        let summary = run_auto(engine_config, &cfg, &mut stdout.lock())?;
        if summary.stuck {
            tracing::info!(score = summary.score, "board ran out of moves");
        }
        return Ok(());
    }
    if let Some(other) = args.first() {
        return Err(anyhow!("unknown command: {} (expected `auto` or no arguments)", other));
    }

    let config = EngineConfig::from_env();
    config.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to stderr so stdout stays pure JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GEMSWAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

struct Session {
    engine: MatchEngine,
    player: StepPlayer,
    cursor: Cursor,
    selection: Selection,
    hint: Option<(Position, Position)>,
    panel: PanelInfo,
}

impl Session {
    fn start(config: EngineConfig) -> Result<Self> {
        let engine = MatchEngine::with_seed(config, clock_seed())?;
        let player = StepPlayer::new(engine.grid().clone());
        let mut session = Self {
            cursor: Cursor::new(config.rows, config.cols),
            engine,
            player,
            selection: Selection::new(),
            hint: None,
            panel: PanelInfo::default(),
        };
        session.refresh_status();
        Ok(session)
    }

    fn refresh_status(&mut self) {
        self.panel.stats = self.engine.stats();
        self.panel.status = if self.engine.has_legal_move() {
            None
        } else {
            Some("NO MOVES - press r")
        };
    }

    fn apply(&mut self, action: BoardAction) -> Result<()> {
        match action {
            BoardAction::CursorUp
            | BoardAction::CursorDown
            | BoardAction::CursorLeft
            | BoardAction::CursorRight => {
                self.cursor.apply(action);
            }
            BoardAction::Select => {
                if let SelectionEvent::SwapRequested(a, b) = self.selection.click(self.cursor.pos()) {
                    self.swap(a, b)?;
                }
            }
            BoardAction::Cancel => {
                self.selection.cancel();
                self.hint = None;
            }
            BoardAction::Hint => {
                self.hint = self.engine.find_legal_swap();
                if let Some((a, _)) = self.hint {
                    self.cursor.move_to(a);
                }
            }
            BoardAction::Restart => {
                *self = Self::start(*self.engine.config())?;
            }
        }
        Ok(())
    }

    fn swap(&mut self, a: Position, b: Position) -> Result<()> {
        let outcome = match self.engine.try_swap(a, b) {
            Ok(outcome) => outcome,
            Err(e) if e.is_user_input() => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        self.player.play(&outcome)?;
        self.hint = None;
        self.cursor.move_to(b);
        if outcome.is_accepted() {
            self.panel.last_delta = outcome.total_score_delta;
            self.panel.last_cascade = outcome.cascade_len();
        }
        self.refresh_status();
        Ok(())
    }

    fn scene<'a>(&'a self, snapshot: &'a GridSnapshot) -> BoardScene<'a> {
        let highlight = self
            .player
            .current_phase()
            .map(|p| &p.highlight)
            .filter(|m| !m.is_empty());
        BoardScene {
            snapshot,
            cursor: Some(self.cursor.pos()),
            selected: self.selection.selected(),
            highlight,
            hint: self.hint,
            panel: self.panel,
        }
    }
}

fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let mut session = Session::start(config)?;
    let view = BoardView::default();
    let mut queue = ActionQueue::new();
    let mut snapshot = GridSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        snapshot.capture(session.player.current_grid(), session.player.current_score());
        let fb = view.render(&session.scene(&snapshot), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    queue.push_key(key);
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.player.tick(TICK_MS);

            for action in queue.drain(session.player.busy()) {
                session.apply(action)?;
            }
        }
    }
}
