//! Terminal cell canvas.
//!
//! Rasterises canvas operations onto a grid where one pixel is one terminal
//! cell, then renders the grid with Lip Gloss colours. This is what
//! `Model::view` draws into, so the same geometry code drives both pixel
//! hosts and the terminal.

use crate::canvas::{
    Canvas, LinePaint, TextAlign, TextBounds, TextMeasurer, TextStyle, TransformStack,
};
use crate::color::Color;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Glyph used for stroked lines.
pub const LINE_GLYPH: char = '━';
/// Glyph used for filled circles.
pub const DOT_GLYPH: char = '●';
/// Glyph used for filled polygons (the bubble pointer).
pub const POINTER_GLYPH: char = '▼';

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Glyph(char, Color),
    // Right half of a double-width glyph.
    Continuation,
}

/// A fixed-size grid of terminal cells.
///
/// # Examples
///
/// ```rust
/// use bubble_progress::canvas::{Canvas, CapStyle, LinePaint};
/// use bubble_progress::cells::CellCanvas;
/// use bubble_progress::Color;
///
/// let mut canvas = CellCanvas::new(4, 1);
/// let paint = LinePaint { color: Color::TEAL, width: 1.0, cap: CapStyle::Square };
/// canvas.draw_line(0.0, 0.5, 4.0, 0.5, &paint);
/// assert_eq!(canvas.plain(), "━━━━");
/// ```
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    transform: TransformStack,
}

impl CellCanvas {
    /// A blank grid of `width` × `height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            transform: TransformStack::default(),
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    fn cell_index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char, color: Color) {
        if let Some(idx) = self.cell_index(col, row) {
            self.cells[idx] = Cell::Glyph(glyph, color);
        }
    }

    /// Renders the grid with colours, one line per row.
    pub fn render(&self) -> String {
        self.render_with(|glyph, color| {
            Style::new()
                .foreground(lipgloss::Color::from(color.to_hex().as_str()))
                .render(&glyph.to_string())
        })
    }

    /// Renders the grid without any styling.
    pub fn plain(&self) -> String {
        self.render_with(|glyph, _| glyph.to_string())
    }

    fn render_with(&self, paint: impl Fn(char, Color) -> String) -> String {
        let mut rows = Vec::with_capacity(self.height);
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Cell::Empty => line.push(' '),
                    Cell::Glyph(glyph, color) => line.push_str(&paint(*glyph, *color)),
                    Cell::Continuation => {}
                }
            }
            rows.push(line);
        }
        rows.join("\n")
    }
}

impl TextMeasurer for CellCanvas {
    /// Display width in cells; one row tall. The style's size is ignored
    /// since a terminal has a single glyph size.
    fn text_bounds(&self, text: &str, _style: &TextStyle) -> TextBounds {
        let width = UnicodeWidthStr::width(text) as f32;
        TextBounds {
            width,
            height: if text.is_empty() { 0.0 } else { 1.0 },
        }
    }
}

impl Canvas for CellCanvas {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &LinePaint) {
        let (x0, y0) = self.transform.map(x0, y0);
        let (x1, y1) = self.transform.map(x1, y1);

        // A line covers the cells whose centre lies within its span along
        // the major axis.
        let (dx, dy) = (x1 - x0, y1 - y0);
        if dx.abs() >= dy.abs() {
            if dx == 0.0 {
                return;
            }
            let first = (x0.min(x1) - 0.5).ceil() as i64;
            let last = (x0.max(x1) - 0.5).floor() as i64;
            for col in first..=last {
                let x = col as f32 + 0.5;
                let y = y0 + (x - x0) / dx * dy;
                self.plot(col, y.floor() as i64, LINE_GLYPH, paint.color);
            }
        } else {
            let first = (y0.min(y1) - 0.5).ceil() as i64;
            let last = (y0.max(y1) - 0.5).floor() as i64;
            for row in first..=last {
                let y = row as f32 + 0.5;
                let x = x0 + (y - y0) / dy * dx;
                self.plot(x.floor() as i64, row, LINE_GLYPH, paint.color);
            }
        }
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, _radius: f32, color: Color) {
        let (cx, cy) = self.transform.map(cx, cy);
        self.plot(cx.floor() as i64, cy.floor() as i64, DOT_GLYPH, color);
    }

    fn draw_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.is_empty() {
            return;
        }
        let mapped: Vec<(f32, f32)> = points
            .iter()
            .map(|&(x, y)| self.transform.map(x, y))
            .collect();
        let cx = mapped.iter().map(|p| p.0).sum::<f32>() / mapped.len() as f32;
        let bottom = mapped.iter().map(|p| p.1).fold(f32::MIN, f32::max);
        self.plot(
            cx.floor() as i64,
            (bottom - 0.5).floor() as i64,
            POINTER_GLYPH,
            color,
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let (x, y) = self.transform.map(x, y);
        let width = UnicodeWidthStr::width(text) as f32;
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        // Glyphs sit on the row just above the baseline.
        let row = y.ceil() as i64 - 1;
        let mut col = left.round() as i64;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i64;
            if w == 0 {
                continue;
            }
            self.plot(col, row, ch, style.color);
            if w == 2 {
                if let Some(idx) = self.cell_index(col + 1, row) {
                    self.cells[idx] = Cell::Continuation;
                }
            }
            col += w;
        }
    }

    fn save(&mut self) -> usize {
        self.transform.save()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn restore_to_count(&mut self, count: usize) {
        self.transform.restore_to_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CapStyle;

    fn paint() -> LinePaint {
        LinePaint {
            color: Color::TEAL,
            width: 1.0,
            cap: CapStyle::Round,
        }
    }

    #[test]
    fn test_horizontal_line_covers_span() {
        let mut canvas = CellCanvas::new(6, 1);
        canvas.draw_line(1.0, 0.5, 4.0, 0.5, &paint());
        assert_eq!(canvas.plain(), " ━━━  ");
    }

    #[test]
    fn test_zero_length_line_draws_nothing() {
        let mut canvas = CellCanvas::new(3, 1);
        canvas.draw_line(1.0, 0.5, 1.0, 0.5, &paint());
        assert_eq!(canvas.plain(), "   ");
    }

    #[test]
    fn test_adjacent_segments_do_not_overlap() {
        let mut canvas = CellCanvas::new(6, 1);
        let second = LinePaint {
            color: Color::WHITE,
            ..paint()
        };
        canvas.draw_line(3.0, 0.5, 6.0, 0.5, &second);
        canvas.draw_line(0.0, 0.5, 3.0, 0.5, &paint());
        let teal = canvas
            .cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Glyph(_, color) if *color == Color::TEAL))
            .count();
        assert_eq!(teal, 3);
    }

    #[test]
    fn test_vertical_line() {
        let mut canvas = CellCanvas::new(1, 3);
        canvas.draw_line(0.5, 0.0, 0.5, 3.0, &paint());
        assert_eq!(canvas.plain(), "━\n━\n━");
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = CellCanvas::new(2, 1);
        canvas.draw_line(-3.0, 0.5, 10.0, 0.5, &paint());
        canvas.draw_circle(0.0, 7.0, 1.0, Color::WHITE);
        assert_eq!(canvas.plain(), "━━");
    }

    #[test]
    fn test_centered_text_under_translation() {
        let mut canvas = CellCanvas::new(8, 2);
        let style = TextStyle::default();
        let saved = canvas.save();
        canvas.translate(2.0, 0.0);
        canvas.draw_text("50%", 2.0, 2.0, &style);
        canvas.restore_to_count(saved);
        assert_eq!(canvas.plain(), "        \n   50%  ");
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        let mut canvas = CellCanvas::new(5, 1);
        let style = TextStyle {
            align: TextAlign::Left,
            ..TextStyle::default()
        };
        canvas.draw_text("進捗", 0.0, 1.0, &style);
        assert_eq!(canvas.plain(), "進捗 ");
        assert_eq!(canvas.text_bounds("進捗", &style).width, 4.0);
    }

    #[test]
    fn test_render_styles_each_glyph() {
        let mut canvas = CellCanvas::new(2, 1);
        canvas.draw_circle(0.5, 0.5, 0.5, Color::TEAL);
        let rendered = canvas.render();
        let stripped = strip_ansi_escapes::strip_str(&rendered);
        assert_eq!(stripped, "● ");
    }
}
