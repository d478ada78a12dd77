/*
 *  sink.rs
 *
 *  chronoled - time you can squint at
 *  (c) 2020-26 Stuart Hunter
 *
 *  TODO:
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */
//! Where finished frames go. The physical LED driver lives behind the
//! same trait in its own crate; what ships here is a terminal preview
//! using half-block cells and a discarding sink for headless runs.

use std::io::{self, Write};

use crate::grid::Grid;

/// Consumes one finished frame per call, fire-and-forget.
pub trait FrameSink {
    fn push(&mut self, frame: &Grid) -> io::Result<()>;
}

/// Renders the frame into the terminal with 24-bit color, two pixel rows
/// per character cell.
pub struct AnsiSink<W: Write> {
    out: W,
    first_frame: bool,
}

impl AnsiSink<io::Stdout> {
    pub fn stdout() -> Self {
        AnsiSink { out: io::stdout(), first_frame: true }
    }
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        AnsiSink { out, first_frame: true }
    }
}

impl<W: Write> FrameSink for AnsiSink<W> {
    fn push(&mut self, frame: &Grid) -> io::Result<()> {
        if self.first_frame {
            // clear once, then just re-home so the frame repaints in place
            write!(self.out, "\x1b[2J\x1b[?25l")?;
            self.first_frame = false;
        }
        write!(self.out, "\x1b[H")?;
        let rows: Vec<_> = frame.rows().collect();
        for pair in rows.chunks(2) {
            let top = pair[0];
            for (x, px) in top.iter().enumerate() {
                let below = pair.get(1).map(|r| r[x]).unwrap_or_default();
                write!(
                    self.out,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    px.r, px.g, px.b, below.r, below.g, below.b
                )?;
            }
            writeln!(self.out, "\x1b[0m")?;
        }
        self.out.flush()
    }
}

/// Swallows frames; useful for benchmarks and tests.
#[derive(Debug, Default)]
pub struct NullSink {
    pub frames: u64,
}

impl FrameSink for NullSink {
    fn push(&mut self, _frame: &Grid) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn ansi_sink_emits_one_cell_row_per_two_pixel_rows() {
        let mut frame = Grid::new(4, 4);
        frame.set(0, 0, Rgb::new(255, 0, 0));
        let mut buf = Vec::new();
        AnsiSink::new(&mut buf).push(&frame).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('\u{2580}').count(), 8);
        assert!(text.contains("38;2;255;0;0"));
    }

    #[test]
    fn null_sink_counts_frames() {
        let mut sink = NullSink::default();
        sink.push(&Grid::new(2, 2)).unwrap();
        sink.push(&Grid::new(2, 2)).unwrap();
        assert_eq!(sink.frames, 2);
    }
}
