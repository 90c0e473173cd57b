//! Terminal frontend: line commands in, text frames out.
//!
//! Each input line becomes zero or more [`InputEvent`]s:
//!
//! | Line                        | Events                               |
//! |-----------------------------|--------------------------------------|
//! | `q`, `quit`, `exit`         | quit                                 |
//! | `s`, `save`                 | key `S` (export)                     |
//! | `e`, `t`, `toggle`          | press and release on the button      |
//! | `key <c>`                   | key press                            |
//! | `move\|down\|up [main\|side] <x> <y>` | pointer event (default window `side`) |
//!
//! End of input is reported as quit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use graylens_core::{
    ButtonState, Display, EventSource, Frame, InputEvent, Key, Layout, LumaBuffer, WindowId,
};
use tracing::warn;

/// Characters from dark to light used for the image preview.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Reads line commands from any buffered reader.
pub struct TerminalEvents<R> {
    reader: R,
    layout: Layout,
    line: String,
}

impl<R: BufRead> TerminalEvents<R> {
    /// Creates an event source; `layout` locates the toggle button.
    pub const fn new(reader: R, layout: Layout) -> Self {
        Self {
            reader,
            layout,
            line: String::new(),
        }
    }
}

impl<R: BufRead> EventSource for TerminalEvents<R> {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .context("Failed to read command")?;
        if read == 0 {
            return Ok(vec![InputEvent::Quit]);
        }

        match parse_command(&self.line, &self.layout) {
            Ok(events) => Ok(events),
            Err(reason) => {
                warn!("Ignoring command {:?}: {reason}", self.line.trim());
                Ok(Vec::new())
            }
        }
    }
}

/// Parses one command line into input events.
///
/// # Errors
///
/// Returns a message for unknown commands or malformed coordinates.
pub fn parse_command(line: &str, layout: &Layout) -> Result<Vec<InputEvent>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Vec::new());
    };
    let rest: Vec<&str> = words.collect();

    match command.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(vec![InputEvent::Quit]),
        "s" | "save" => Ok(vec![InputEvent::KeyDown(Key::S)]),
        "e" | "t" | "toggle" => {
            let button = layout.button;
            let (x, y) = (button.x + button.w / 2.0, button.y + button.h / 2.0);
            let window = WindowId::Sidebar;
            Ok(vec![
                InputEvent::PointerDown { window, x, y },
                InputEvent::PointerUp { window, x, y },
            ])
        }
        "key" => {
            let mut chars = rest.first().map(|w| w.chars()).ok_or("missing key")?;
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(vec![InputEvent::KeyDown(Key::from_char(c))]),
                _ => Err("key expects a single character".into()),
            }
        }
        kind @ ("move" | "down" | "up") => {
            let (window, coords) = match rest.as_slice() {
                [w, x, y] => (parse_window(w)?, (*x, *y)),
                [x, y] => (WindowId::Sidebar, (*x, *y)),
                _ => return Err(format!("{kind} expects [main|side] <x> <y>")),
            };
            let x = parse_coord(coords.0)?;
            let y = parse_coord(coords.1)?;
            let event = match kind {
                "move" => InputEvent::PointerMove { window, x, y },
                "down" => InputEvent::PointerDown { window, x, y },
                _ => InputEvent::PointerUp { window, x, y },
            };
            Ok(vec![event])
        }
        other => Err(format!("unknown command '{other}'")),
    }
}

fn parse_window(s: &str) -> Result<WindowId, String> {
    match s.to_lowercase().as_str() {
        "main" | "image" => Ok(WindowId::Main),
        "side" | "sidebar" => Ok(WindowId::Sidebar),
        other => Err(format!("unknown window '{other}'")),
    }
}

fn parse_coord(s: &str) -> Result<f32, String> {
    s.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{s}' is not a valid coordinate"))
}

/// Renders frames as text: image preview, histogram, annotations, button.
pub struct TerminalDisplay<W> {
    out: W,
    preview_columns: u32,
    histogram_rows: usize,
    histogram_columns: usize,
    clear: bool,
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display with a 64-column preview and a 12-row histogram.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            preview_columns: 64,
            histogram_rows: 12,
            histogram_columns: 64,
            clear: false,
        }
    }

    /// Sets the preview width in characters.
    #[must_use]
    pub fn with_preview_columns(mut self, columns: u32) -> Self {
        self.preview_columns = columns.max(1);
        self
    }

    /// Sets the histogram height in rows.
    #[must_use]
    pub fn with_histogram_rows(mut self, rows: usize) -> Self {
        self.histogram_rows = rows.max(1);
        self
    }

    /// Clears the screen before each frame.
    #[must_use]
    pub const fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_preview(&mut self, image: &LumaBuffer) -> std::io::Result<()> {
        for row in preview_rows(image, self.preview_columns) {
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }

    fn write_histogram(&mut self, frame: &Frame<'_>) -> std::io::Result<()> {
        let graph = frame.graph_area();
        let bars = frame.bars();
        let group = bars.len().div_ceil(self.histogram_columns);

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let heights: Vec<usize> = bars
            .chunks(group)
            .map(|chunk| {
                let tallest = chunk.iter().map(|b| b.h).fold(0.0f32, f32::max);
                if graph.h <= 0.0 || tallest <= 0.0 {
                    0
                } else {
                    // Any non-empty column shows at least one cell
                    ((tallest / graph.h) * self.histogram_rows as f32)
                        .ceil()
                        .clamp(1.0, self.histogram_rows as f32) as usize
                }
            })
            .collect();

        for level in (1..=self.histogram_rows).rev() {
            let line: String = heights
                .iter()
                .map(|&h| if h >= level { '#' } else { ' ' })
                .collect();
            writeln!(self.out, "|{line}|")?;
        }
        writeln!(self.out, "+{}+", "-".repeat(heights.len()))?;
        Ok(())
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }

        let image = frame.image;
        writeln!(
            self.out,
            "{} x {} ({:?})",
            image.width(),
            image.height(),
            frame.mode
        )?;
        self.write_preview(image)?;
        writeln!(self.out)?;
        self.write_histogram(frame)?;

        if frame.annotations {
            writeln!(self.out, "{}", frame.mean_line())?;
            writeln!(self.out, "{}", frame.stddev_line())?;
        }

        let marker = match frame.button_state {
            ButtonState::Neutral => "",
            ButtonState::Hover => " <",
            ButtonState::Active => " <<",
        };
        writeln!(self.out, "[ {} ]{marker}", frame.button_label())?;

        if let Some(status) = frame.status {
            writeln!(self.out, "{status}")?;
        }
        self.out.flush().context("Failed to flush display")?;
        Ok(())
    }
}

/// Downsamples `image` to `columns` characters wide by block averaging.
///
/// Rows cover twice as many pixels as columns to offset tall character cells.
#[allow(clippy::cast_possible_truncation)]
fn preview_rows(image: &LumaBuffer, columns: u32) -> Vec<String> {
    let cell_w = image.width().div_ceil(columns.clamp(1, image.width()));
    let columns = image.width().div_ceil(cell_w);
    let cell_h = (cell_w * 2).max(1);
    let rows = image.height().div_ceil(cell_h);

    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let mut sum = 0u64;
                    let mut n = 0u64;
                    for y in row * cell_h..((row + 1) * cell_h).min(image.height()) {
                        for x in col * cell_w..((col + 1) * cell_w).min(image.width()) {
                            if let Some(v) = image.get(x, y) {
                                sum += u64::from(v);
                                n += 1;
                            }
                        }
                    }
                    let avg = if n == 0 { 0 } else { sum / n };
                    // Safe: avg <= 255, so the index is within RAMP
                    let index = (avg as usize * (RAMP.len() - 1)) / 255;
                    char::from(RAMP[index])
                })
                .collect()
        })
        .collect()
}
