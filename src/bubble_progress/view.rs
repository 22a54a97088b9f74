//! Measurement and drawing for the bubble progress component.

use super::model::Model;
use crate::canvas::{Canvas, CapStyle, LinePaint, TextBounds, TextMeasurer};
use crate::cells::CellCanvas;
use crate::layout::{default_size, resolve_size, MeasureSpec, Size};
use crate::Widget;
use tracing::debug;

// Density-unit constants for the bubble box.
const BUBBLE_PADDING: f32 = 16.0;
const BUBBLE_MARGIN: f32 = 4.0;
const BASELINE_INSET: f32 = 8.0;

/// Resolved positions for one frame, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleGeometry {
    /// Half the stroke width.
    pub radius: f32,
    /// Y of the track centre line.
    pub track_top: f32,
    /// X where the track starts.
    pub track_left: f32,
    /// X where the track ends.
    pub track_right: f32,
    /// X where the filled segment ends.
    pub progress_end: f32,
    /// Label drawn in the bubble.
    pub label: String,
    /// Left edge of the bubble.
    pub bubble_left: f32,
    /// Bubble width.
    pub bubble_width: f32,
    /// Bubble height.
    pub bubble_height: f32,
}

/// Left edge of a bubble centred on `progress_end`, kept on the canvas.
///
/// If the bubble is wider than the canvas it is pinned to the left edge.
///
/// ```rust
/// use bubble_progress::bubble_progress::bubble_left;
///
/// assert_eq!(bubble_left(100.0, 40.0, 300.0), 80.0);
/// assert_eq!(bubble_left(5.0, 40.0, 300.0), 0.0);
/// assert_eq!(bubble_left(295.0, 40.0, 300.0), 260.0);
/// ```
pub fn bubble_left(progress_end: f32, bubble_width: f32, canvas_width: f32) -> f32 {
    clamp(progress_end - bubble_width / 2.0, 0.0, canvas_width - bubble_width)
}

// Lower bound wins when the range is empty, unlike `f32::clamp`.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

fn lerp(v0: f32, v1: f32, t: f32) -> f32 {
    if t == 1.0 {
        v1
    } else {
        v0 + t * (v1 - v0)
    }
}

impl Model {
    /// Width of the bubble around a label of the given bounds.
    pub fn bubble_width(&self, bounds: TextBounds) -> f32 {
        bounds.width + self.dips(BUBBLE_PADDING)
    }

    /// Height of the bubble around a label of the given bounds.
    pub fn bubble_height(&self, bounds: TextBounds) -> f32 {
        bounds.height + self.dips(BUBBLE_PADDING)
    }

    /// Gap between the bubble and the track.
    pub fn bubble_margin(&self) -> f32 {
        self.dips(BUBBLE_MARGIN)
    }

    fn pointer_height(&self) -> f32 {
        if self.pointer_enabled {
            self.dips(self.pointer.height)
        } else {
            0.0
        }
    }

    /// Space above the track taken by the bubble, its margin and the pointer.
    pub fn vertical_displacement(&self, bounds: TextBounds) -> f32 {
        self.bubble_margin() + self.bubble_height(bounds) + self.pointer_height()
    }

    /// Measures the label and reports the size the widget wants.
    ///
    /// The label bounds are cached for the next `draw`. Width has no
    /// intrinsic requirement: it is the minimum width when unconstrained and
    /// otherwise whatever the host offers.
    pub fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
        measurer: &dyn TextMeasurer,
    ) -> Size {
        let label = self.bubble_text();
        self.text_bounds = measurer.text_bounds(&label, &self.text_style);
        self.desired_size(width, height, self.text_bounds)
    }

    fn desired_size(&self, width: MeasureSpec, height: MeasureSpec, bounds: TextBounds) -> Size {
        let bubble = self.vertical_displacement(bounds).ceil();
        let track = (self.padding.top + self.padding.bottom + self.stroke_width).ceil();
        Size::new(
            default_size(self.min_width, width),
            resolve_size(track + bubble, height),
        )
    }

    /// Positions of every element for a canvas of `size`.
    ///
    /// `layout_bounds` are the label bounds the height was measured with;
    /// they place the track. `label_bounds` are the bounds of the label
    /// being drawn now; they size the bubble.
    pub fn geometry(
        &self,
        size: Size,
        layout_bounds: TextBounds,
        label_bounds: TextBounds,
    ) -> BubbleGeometry {
        let radius = self.stroke_width / 2.0;
        let track_top = self.padding.top + radius + self.vertical_displacement(layout_bounds);
        let track_left = self.padding.left + radius;
        let track_right = size.width - self.padding.right - radius;

        let fraction = if self.max == 0 {
            0.0
        } else {
            self.progress as f32 / self.max as f32
        };
        let progress_end = clamp(
            lerp(track_left, track_right, fraction),
            track_left,
            track_right,
        );

        let bubble_width = self.bubble_width(label_bounds);
        let bubble_height = self.bubble_height(label_bounds);

        BubbleGeometry {
            radius,
            track_top,
            track_left,
            track_right,
            progress_end,
            label: self.bubble_text(),
            bubble_left: bubble_left(progress_end, bubble_width, size.width),
            bubble_width,
            bubble_height,
        }
    }

    /// Draws the track and the bubble onto `canvas`.
    ///
    /// Drawing reads state only; the same state always yields the same
    /// operations.
    pub fn draw(&self, canvas: &mut dyn Canvas, size: Size) {
        self.draw_with_layout(canvas, size, self.text_bounds);
    }

    fn draw_with_layout(&self, canvas: &mut dyn Canvas, size: Size, layout_bounds: TextBounds) {
        let label = self.bubble_text();
        let label_bounds = canvas.text_bounds(&label, &self.text_style);
        let g = self.geometry(size, layout_bounds, label_bounds);
        let top = g.track_top;

        let mut paint = LinePaint {
            color: self.secondary_color,
            width: self.stroke_width,
            cap: self.cap,
        };
        canvas.draw_line(g.progress_end, top, g.track_right, top, &paint);

        paint.color = self.primary_color;
        if g.progress_end == g.track_left && self.cap == CapStyle::Round {
            // A zero-length round stroke may not render at all.
            canvas.draw_circle(g.track_left, top, g.radius, self.primary_color);
        } else {
            canvas.draw_line(g.track_left, top, g.progress_end, top, &paint);
        }

        let saved = canvas.save();
        canvas.translate(g.bubble_left, 0.0);

        let pointer_height = self.pointer_height();
        if pointer_height > 0.0 {
            let pointer_width = self.dips(self.pointer.width);
            let pointer_left = clamp(
                g.progress_end - pointer_width / 2.0,
                0.0,
                size.width - pointer_width,
            ) - g.bubble_left;
            let pointer_top = g.bubble_height;
            canvas.draw_polygon(
                &[
                    (pointer_left, pointer_top),
                    (pointer_left + pointer_width, pointer_top),
                    (pointer_left + pointer_width / 2.0, pointer_top + pointer_height),
                ],
                self.primary_color,
            );
        }

        let text_x = g.bubble_width / 2.0;
        let text_y = g.bubble_height - self.dips(BASELINE_INSET);
        canvas.draw_text(&g.label, text_x, text_y, &self.text_style);

        canvas.restore_to_count(saved);
    }

    /// Renders the bar into `width` terminal cells.
    ///
    /// Uses the same geometry as `draw`, with one pixel per cell. Pair it
    /// with [`TERMINAL_DENSITY`](super::TERMINAL_DENSITY) for a compact bar.
    pub fn view(&self) -> String {
        let probe = CellCanvas::new(0, 0);
        let label_bounds = probe.text_bounds(&self.bubble_text(), &self.text_style);
        let width = self.width.max(0) as f32;
        let size = self.desired_size(
            MeasureSpec::Exactly(width),
            MeasureSpec::Unspecified,
            label_bounds,
        );

        let mut canvas = CellCanvas::new(size.width as usize, size.height as usize);
        self.draw_with_layout(&mut canvas, size, label_bounds);
        canvas.render()
    }
}

impl Widget for Model {
    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
        measurer: &dyn TextMeasurer,
    ) -> Size {
        Model::measure(self, width, height, measurer)
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size) {
        Model::draw(self, canvas, size);
    }

    fn on_attach(&mut self) {
        self.attached = true;
    }

    fn on_detach(&mut self) {
        if self.is_animating() {
            debug!(id = self.id, "detached while animating");
        }
        self.attached = false;
        self.stop_animation();
    }
}
