//! Peg Snap entry point
//!
//! Wires the session loop to a minimal ASCII terminal presenter and a
//! line-buffered stdin input feed. Both are pure consumers of the core:
//! the presenter draws whatever `compose_frame` emits, and the input thread
//! translates keys into discrete press events.

use std::io::{BufRead, Write};
use std::sync::Arc;

use peg_snap::consts::{LEVEL_FILE, SCREEN_H, SCREEN_W};
use peg_snap::haptics::LogHaptics;
use peg_snap::render::{DrawOp, Presenter};
use peg_snap::sim::{LevelResolver, PegGrid, Rect};
use peg_snap::{PlayerInput, Session, Tuning};

/// Terminal cell size in screen pixels
const CELL: i32 = 2;
const COLS: usize = (SCREEN_W / CELL) as usize;
const ROWS: usize = (SCREEN_H / CELL) as usize;

/// Renders draw primitives into a character raster on stdout
struct AsciiPresenter {
    raster: [[char; COLS]; ROWS],
}

impl AsciiPresenter {
    fn new() -> Self {
        Self {
            raster: [[' '; COLS]; ROWS],
        }
    }

    fn plot(&mut self, x: i32, y: i32, ch: char) {
        let (cx, cy) = ((x / CELL) as usize, (y / CELL) as usize);
        if cy < ROWS && cx < COLS {
            self.raster[cy][cx] = ch;
        }
    }

    fn line(&mut self, from: glam::IVec2, to: glam::IVec2, ch: char) {
        let delta = (to - from).as_vec2();
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as i32;
        for i in 0..=steps.max(1) {
            let t = i as f32 / steps.max(1) as f32;
            let p = from.as_vec2() + delta * t;
            self.plot(p.x.round() as i32, p.y.round() as i32, ch);
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.plot(x, y, '#');
            }
        }
    }

    fn text(&mut self, row: usize, text: &str) {
        let start = COLS.saturating_sub(text.len()) / 2;
        for (i, ch) in text.chars().enumerate() {
            if start + i < COLS {
                self.raster[row][start + i] = ch;
            }
        }
    }
}

impl Presenter for AsciiPresenter {
    fn present(&mut self, frame: &[DrawOp]) {
        self.raster = [[' '; COLS]; ROWS];
        for op in frame {
            match op {
                DrawOp::Dot { pos } => self.plot(pos.x, pos.y, '.'),
                DrawOp::Circle { center, .. } => self.plot(center.x, center.y, 'O'),
                DrawOp::Disc { center, .. } => self.plot(center.x, center.y, '@'),
                DrawOp::Line { from, to, weight } => {
                    self.line(*from, *to, if *weight > 1 { '=' } else { '-' });
                }
                DrawOp::FillRect { rect } => self.fill_rect(*rect),
                DrawOp::GoalMarker { center } => self.plot(center.x, center.y, 'X'),
                DrawOp::Banner { title, subtitle } => {
                    self.text(ROWS / 2 - 1, title);
                    if let Some(sub) = subtitle {
                        self.text(ROWS / 2 + 1, sub);
                    }
                }
            }
        }

        let mut out = String::with_capacity((COLS + 1) * (ROWS + 2) + 16);
        out.push_str("\x1b[H\x1b[2J");
        out.push('+');
        out.push_str(&"-".repeat(COLS));
        out.push_str("+\n");
        for row in &self.raster {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(COLS));
        out.push_str("+\n");
        out.push_str("[a/d]+Enter spin  [s]+Enter snap  [q]+Enter quit\n");
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
    }
}

/// Translate stdin lines into press events until quit or EOF
fn input_loop(session: Arc<Session>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        for ch in line.chars() {
            let input = match ch.to_ascii_lowercase() {
                'a' => PlayerInput::SpinLeft,
                'd' => PlayerInput::SpinRight,
                's' => PlayerInput::Snap,
                'q' => PlayerInput::Quit,
                _ => continue,
            };
            session.handle_input(input);
            if input == PlayerInput::Quit {
                return;
            }
        }
        // An empty line counts as a confirm press for quick snapping
        if line.is_empty() {
            session.handle_input(PlayerInput::Snap);
        }
    }
}

fn main() {
    env_logger::init();

    let level_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| LEVEL_FILE.to_string());
    let tuning = Tuning::load("tuning.json");

    let session = Arc::new(Session::new(
        PegGrid::standard(),
        LevelResolver::new(level_path),
        tuning,
        Arc::new(LogHaptics),
    ));

    log::info!("peg-snap starting ({} pegs)", session.grid().len());

    let input_session = session.clone();
    std::thread::spawn(move || input_loop(input_session));

    let mut presenter = AsciiPresenter::new();
    session.run(&mut presenter);

    // The input thread may still be blocked on stdin; the session is over.
    std::process::exit(0);
}
