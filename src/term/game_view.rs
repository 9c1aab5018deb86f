//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The non-running states (start menu, won, game over) draw a full-panel
//! screen instead of the board, the way the original game does; the board
//! itself is only visible while a game is in progress.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, GRID_SIDE};

/// Classic 2048 palette.
const COLOR_PAPER: Rgb = Rgb::from_hex(0xFAF8EF);
const COLOR_GRID: Rgb = Rgb::from_hex(0xBBADA0);
const COLOR_EMPTY: Rgb = Rgb::from_hex(0xCDC1B4);
const COLOR_MENU: Rgb = Rgb::from_hex(0xFFEBCD);
const COLOR_TEXT_DARK: Rgb = Rgb::from_hex(0x701710);
const COLOR_TEXT_LIGHT: Rgb = Rgb::from_hex(0xFFE4C3);

/// Tile background by value, darkening as values grow.
fn tile_bg(value: u32) -> Rgb {
    match value {
        2 => Rgb::from_hex(0xFFF4D3),
        4 => Rgb::from_hex(0xFFDAC3),
        8 => Rgb::from_hex(0xE7B08E),
        16 => Rgb::from_hex(0xE7BF8E),
        32 => Rgb::from_hex(0xFFC4C3),
        64 => Rgb::from_hex(0xE7948E),
        128 => Rgb::from_hex(0xBE7E56),
        256 => Rgb::from_hex(0xBE5E56),
        512 => Rgb::from_hex(0x9C3931),
        _ => Rgb::from_hex(0x701710),
    }
}

/// Tile text color: dark on the light low tiles, light on the dark ones.
fn tile_fg(value: u32) -> Rgb {
    if value < 128 {
        COLOR_TEXT_DARK
    } else {
        COLOR_TEXT_LIGHT
    }
}

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for a centered 4-digit label and compensates for
        // the terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(COLOR_TEXT_DARK, COLOR_PAPER).into_cell(' '));

        if state.status() == GameStatus::Running {
            self.render_board(&mut fb, state, viewport);
        } else {
            self.render_menu(&mut fb, state, viewport);
        }

        fb
    }

    fn frame_size(&self) -> (u16, u16) {
        let board_w = GRID_SIDE as u16 * self.cell_w;
        let board_h = GRID_SIDE as u16 * self.cell_h;
        (board_w + 2, board_h + 2)
    }

    fn render_board(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let grid_style = CellStyle::new(COLOR_EMPTY, COLOR_GRID);
        let border_style = CellStyle::new(COLOR_GRID, COLOR_PAPER);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            grid_style,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border_style);

        let spawned = state.last_event().and_then(|e| e.spawned);
        let values = state.board().values();
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                let x = start_x + 1 + col as u16 * self.cell_w;
                let y = start_y + 1 + row as u16 * self.cell_h;
                if value == 0 {
                    self.draw_empty_cell(fb, x, y);
                } else {
                    let fresh = spawned == Some((row, col));
                    self.draw_tile(fb, x, y, value, fresh);
                }
            }
        }

        // Score readout under the board.
        let score_line = format!(
            "score {}   highest {}",
            state.score(),
            state.highest()
        );
        let text_style = CellStyle::new(COLOR_TEXT_DARK, COLOR_PAPER);
        self.put_centered(fb, viewport, start_y + frame_h, &score_line, text_style);
        self.put_centered(
            fb,
            viewport,
            start_y + frame_h + 1,
            "arrows move - q quits",
            CellStyle::new(COLOR_GRID, COLOR_PAPER),
        );
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::new(COLOR_GRID, COLOR_EMPTY);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        // A faint dot marks the cell center.
        fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, '.', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32, fresh: bool) {
        let mut style = CellStyle::new(tile_fg(value), tile_bg(value));
        if fresh {
            style = style.bold();
        }
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let label = value_label(value);
        let label_x = x + self.cell_w.saturating_sub(label.len() as u16) / 2;
        fb.put_str(label_x, y + self.cell_h / 2, label, style);
    }

    fn render_menu(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let panel_style = CellStyle::new(COLOR_TEXT_DARK, COLOR_MENU);
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', panel_style);
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(COLOR_GRID, COLOR_MENU),
        );

        let title_style = panel_style.bold();
        self.put_centered(fb, viewport, start_y + 2, "2 0 4 8", title_style);

        match state.status() {
            GameStatus::Won => {
                self.put_centered(fb, viewport, start_y + 4, "you made it!", title_style);
            }
            GameStatus::Over => {
                self.put_centered(fb, viewport, start_y + 4, "game over :(", title_style);
            }
            GameStatus::Start | GameStatus::Running => {}
        }

        if state.status() != GameStatus::Start {
            let summary = format!("score {} - highest {}", state.score(), state.highest());
            self.put_centered(fb, viewport, start_y + 5, &summary, panel_style);
        }

        self.put_centered(
            fb,
            viewport,
            start_y + frame_h.saturating_sub(4),
            "press n to start",
            panel_style,
        );
        self.put_centered(
            fb,
            viewport,
            start_y + frame_h.saturating_sub(3),
            "(use the arrow keys to move)",
            panel_style,
        );
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let x = viewport.width.saturating_sub(text.chars().count() as u16) / 2;
        fb.put_str(x, y, text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

/// Static label for a tile value; covers every value a 4x4 game can hold.
fn value_label(value: u32) -> &'static str {
    match value {
        2 => "2",
        4 => "4",
        8 => "8",
        16 => "16",
        32 => "32",
        64 => "64",
        128 => "128",
        256 => "256",
        512 => "512",
        1024 => "1024",
        2048 => "2048",
        4096 => "4096",
        8192 => "8192",
        16384 => "16384",
        32768 => "32768",
        65536 => "65536",
        131072 => "131072",
        _ => "?",
    }
}
