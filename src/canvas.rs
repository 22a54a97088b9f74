//! Drawing surface abstraction.
//!
//! The widget never talks to a graphics backend directly. A host hands it a
//! [`Canvas`] and the widget issues a handful of primitive operations: lines,
//! circles, a polygon for the optional pointer, and text. [`RecordingCanvas`]
//! captures those operations so they can be inspected or replayed.

use crate::color::Color;

/// How the ends of a stroked line are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    /// Semicircular ends extending half the stroke width past the endpoints.
    #[default]
    Round,
    /// Flat ends extending half the stroke width past the endpoints.
    Square,
}

/// Stroke settings for a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePaint {
    /// Stroke colour.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// End cap.
    pub cap: CapStyle,
}

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `x` is the left edge.
    Left,
    /// `x` is the horizontal centre.
    #[default]
    Center,
    /// `x` is the right edge.
    Right,
}

/// Label text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text colour.
    pub color: Color,
    /// Text size in pixels.
    pub size: f32,
    /// Anchoring around the draw position.
    pub align: TextAlign,
    /// Typeface family name, resolved by the host.
    pub typeface: String,
}

/// Default label size in scaled text units.
pub const DEFAULT_TEXT_SIZE: f32 = 18.0;

/// Default label typeface.
pub const DEFAULT_TYPEFACE: &str = "sans-serif-condensed-light";

impl TextStyle {
    /// The default label style with its size scaled by `text_density`.
    pub fn scaled(text_density: f32) -> Self {
        Self {
            color: Color::WHITE,
            size: DEFAULT_TEXT_SIZE * text_density,
            align: TextAlign::Center,
            typeface: DEFAULT_TYPEFACE.to_string(),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

/// Bounding box of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Measures text the way the host will render it.
pub trait TextMeasurer {
    /// Bounding box of `text` drawn with `style`.
    fn text_bounds(&self, text: &str, style: &TextStyle) -> TextBounds;
}

/// A drawing surface with a translate-only transform stack.
pub trait Canvas: TextMeasurer {
    /// Strokes a line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &LinePaint);

    /// Fills a circle.
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    /// Fills a closed polygon.
    fn draw_polygon(&mut self, points: &[(f32, f32)], color: Color);

    /// Draws `text` with its baseline at `y`, anchored at `x` per `style.align`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Pushes the current transform and returns the depth before the push.
    fn save(&mut self) -> usize;

    /// Offsets subsequent drawing.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Pops transforms until the stack depth equals `count`.
    fn restore_to_count(&mut self, count: usize);
}

/// Translate-only transform stack shared by the bundled canvases.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransformStack {
    origin: (f32, f32),
    saved: Vec<(f32, f32)>,
}

impl TransformStack {
    pub(crate) fn save(&mut self) -> usize {
        let depth = self.saved.len();
        self.saved.push(self.origin);
        depth
    }

    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    pub(crate) fn restore_to_count(&mut self, count: usize) {
        while self.saved.len() > count {
            if let Some(origin) = self.saved.pop() {
                self.origin = origin;
            }
        }
    }

    pub(crate) fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.origin.0, y + self.origin.1)
    }
}

/// A recorded drawing operation, in absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A stroked line.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Stroke used.
        paint: LinePaint,
    },
    /// A filled circle.
    Circle {
        /// Centre point.
        center: (f32, f32),
        /// Radius in pixels.
        radius: f32,
        /// Fill colour.
        color: Color,
    },
    /// A filled polygon.
    Polygon {
        /// Vertices.
        points: Vec<(f32, f32)>,
        /// Fill colour.
        color: Color,
    },
    /// A run of text.
    Text {
        /// The string drawn.
        text: String,
        /// Anchor x.
        x: f32,
        /// Baseline y.
        y: f32,
        /// Style used.
        style: TextStyle,
    },
}

/// A canvas that records operations instead of rasterising them.
///
/// Text is measured with a fixed advance per character and a fixed line
/// height, which makes layout deterministic.
///
/// # Examples
///
/// ```rust
/// use bubble_progress::canvas::{Canvas, DrawOp, RecordingCanvas};
/// use bubble_progress::Color;
///
/// let mut canvas = RecordingCanvas::new();
/// let saved = canvas.save();
/// canvas.translate(10.0, 0.0);
/// canvas.draw_circle(0.0, 5.0, 2.0, Color::TEAL);
/// canvas.restore_to_count(saved);
///
/// assert_eq!(
///     canvas.ops(),
///     &[DrawOp::Circle { center: (10.0, 5.0), radius: 2.0, color: Color::TEAL }]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    transform: TransformStack,
    /// Advance per character, as a fraction of the text size.
    pub advance: f32,
    /// Line height, as a fraction of the text size.
    pub line_height: f32,
}

impl RecordingCanvas {
    /// An empty recorder with advance `0.5` and line height `0.75` of the text size.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            transform: TransformStack::default(),
            advance: 0.5,
            line_height: 0.75,
        }
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Takes the recorded operations, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for RecordingCanvas {
    fn text_bounds(&self, text: &str, style: &TextStyle) -> TextBounds {
        TextBounds {
            width: text.chars().count() as f32 * self.advance * style.size,
            height: if text.is_empty() {
                0.0
            } else {
                self.line_height * style.size
            },
        }
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &LinePaint) {
        self.ops.push(DrawOp::Line {
            from: self.transform.map(x0, y0),
            to: self.transform.map(x1, y1),
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center: self.transform.map(cx, cy),
            radius,
            color,
        });
    }

    fn draw_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points
                .iter()
                .map(|&(x, y)| self.transform.map(x, y))
                .collect(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let (x, y) = self.transform.map(x, y);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
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

    #[test]
    fn test_nested_translate_restores() {
        let mut canvas = RecordingCanvas::new();
        let outer = canvas.save();
        canvas.translate(5.0, 1.0);
        let inner = canvas.save();
        canvas.translate(5.0, 1.0);
        canvas.draw_circle(0.0, 0.0, 1.0, Color::WHITE);
        canvas.restore_to_count(inner);
        canvas.draw_circle(0.0, 0.0, 1.0, Color::WHITE);
        canvas.restore_to_count(outer);
        canvas.draw_circle(0.0, 0.0, 1.0, Color::WHITE);

        let centers: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(centers, vec![(10.0, 2.0), (5.0, 1.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_measurement_scales_with_size() {
        let canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 20.0,
            ..TextStyle::default()
        };
        let bounds = canvas.text_bounds("50%", &style);
        assert_eq!(bounds.width, 30.0);
        assert_eq!(bounds.height, 15.0);
        assert_eq!(canvas.text_bounds("", &style), TextBounds::default());
    }

    #[test]
    fn test_default_text_style() {
        let style = TextStyle::scaled(2.0);
        assert_eq!(style.size, 36.0);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.align, TextAlign::Center);
        assert_eq!(style.typeface, DEFAULT_TYPEFACE);
    }
}
