//! BoardView: draws a grid snapshot and a status panel into a framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{EngineStats, GridSnapshot, MatchSet};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Numbers shown beside the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelInfo {
    pub last_delta: u64,
    pub last_cascade: usize,
    pub stats: EngineStats,
    pub status: Option<&'static str>,
}

/// Everything one frame needs.
#[derive(Debug, Clone, Copy)]
pub struct BoardScene<'a> {
    pub snapshot: &'a GridSnapshot,
    pub cursor: Option<Position>,
    pub selected: Option<Position>,
    pub highlight: Option<&'a MatchSet>,
    pub hint: Option<(Position, Position)>,
    pub panel: PanelInfo,
}

impl<'a> BoardScene<'a> {
    pub fn new(snapshot: &'a GridSnapshot) -> Self {
        Self {
            snapshot,
            cursor: None,
            selected: None,
            highlight: None,
            hint: None,
            panel: PanelInfo::default(),
        }
    }
}

const BOARD_BG: Rgb = Rgb::new(25, 25, 35);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const SELECTED_BG: Rgb = Rgb::new(120, 100, 30);
const FLASH_BG: Rgb = Rgb::new(230, 230, 230);
const HINT_BG: Rgb = Rgb::new(40, 80, 60);

pub struct BoardView {
    /// Terminal columns per grid cell; 2 roughly squares the glyph aspect.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, scene: &BoardScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let snap = scene.snapshot;
        let board_w = (snap.cols as u16).saturating_mul(self.cell_w);
        let board_h = snap.rows as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let x0 = viewport.width.saturating_sub(frame_w + 24) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, x0, y0, frame_w, frame_h, CellStyle::default());
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                self.draw_cell(fb, scene, x0, y0, Position::new(row, col));
            }
        }

        self.draw_panel(fb, scene, x0.saturating_add(frame_w).saturating_add(2), y0);
    }

    pub fn render(&self, scene: &BoardScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, scene: &BoardScene<'_>, x0: u16, y0: u16, pos: Position) {
        let bg = if scene.highlight.is_some_and(|m| m.contains(pos)) {
            FLASH_BG
        } else if scene.selected == Some(pos) {
            SELECTED_BG
        } else if scene.cursor == Some(pos) {
            CURSOR_BG
        } else if scene.hint.is_some_and(|(a, b)| a == pos || b == pos) {
            HINT_BG
        } else {
            BOARD_BG
        };

        let (ch, style) = match scene.snapshot.gem_at(pos) {
            Some(gem) => (gem.as_char(), CellStyle::fg(Rgb::for_gem(gem)).with_bg(bg).bold()),
            None => ('·', CellStyle::fg(Rgb::new(90, 90, 100)).with_bg(bg).dim()),
        };

        let x = x0 + 1 + pos.col as u16 * self.cell_w;
        let y = y0 + 1 + pos.row as u16;
        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
        fb.put_char(x, y, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, scene: &BoardScene<'_>, x: u16, y0: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let panel = &scene.panel;

        let rows: [(&str, String); 5] = [
            ("SCORE", scene.snapshot.score.to_string()),
            ("LAST", format!("+{}", panel.last_delta)),
            ("CASCADE", panel.last_cascade.to_string()),
            ("SWAPS", format!("{} ok / {} no", panel.stats.accepted_swaps, panel.stats.rejected_swaps)),
            ("BEST", format!("{} steps", panel.stats.longest_cascade)),
        ];

        let mut y = y0;
        for (name, text) in rows.iter() {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }

        if let Some(status) = panel.status {
            fb.put_str(x, y, status, CellStyle::fg(Rgb::new(240, 215, 50)).bold());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
}
