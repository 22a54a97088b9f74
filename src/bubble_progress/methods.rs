//! State mutators and accessors for the bubble progress component.

use super::model::{Invalidation, Model, Pointer, ProgressFormatter};
use crate::animation::FrameMsg;
use crate::canvas::{CapStyle, TextBounds, TextStyle};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::layout::Insets;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Parses the text of an input field into a progress value.
///
/// Surrounding whitespace is ignored. The result is not clamped; pass it to
/// `set_progress` or `animate_progress`, which clamp.
///
/// ```rust
/// use bubble_progress::parse_progress_input;
///
/// assert_eq!(parse_progress_input(" 75 ").unwrap(), 75);
/// assert!(parse_progress_input("seventy").is_err());
/// ```
pub fn parse_progress_input(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|source| Error::InvalidProgress {
            input: input.to_string(),
            source,
        })
}

impl Model {
    /// Current progress.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Sets progress, clamped to `0..=max`.
    ///
    /// Requests a redraw when the value changes. Progress never changes the
    /// measured size, so no layout is requested.
    pub fn set_progress(&mut self, progress: i32) {
        let progress = progress.clamp(0, self.max);
        if progress == self.progress {
            return;
        }
        self.progress = progress;
        self.invalidation.redraw = true;
    }

    /// Upper bound of the range.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Sets the upper bound, clamped to `>= 0`. Progress above the new max is
    /// pulled down to it.
    pub fn set_max(&mut self, max: i32) {
        let max = max.max(0);
        if max == self.max {
            return;
        }
        self.max = max;
        if self.progress > max {
            self.progress = max;
        }
        self.invalidation.redraw = true;
    }

    /// Filled track colour.
    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    /// Replaces the filled track colour.
    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
        self.invalidation.redraw = true;
    }

    /// Unfilled track colour.
    pub fn secondary_color(&self) -> Color {
        self.secondary_color
    }

    /// Replaces the unfilled track colour.
    pub fn set_secondary_color(&mut self, color: Color) {
        self.secondary_color = color;
        self.invalidation.redraw = true;
    }

    /// Track thickness in pixels.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Sets the track thickness in pixels. Negative widths become zero.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width.max(0.0);
        self.request_layout();
    }

    /// Track end caps.
    pub fn cap_style(&self) -> CapStyle {
        self.cap
    }

    /// Sets the track end caps.
    pub fn set_cap_style(&mut self, cap: CapStyle) {
        self.cap = cap;
        self.invalidation.redraw = true;
    }

    /// Pointer size in density units.
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Whether the pointer is drawn and counted in the layout.
    pub fn pointer_enabled(&self) -> bool {
        self.pointer_enabled
    }

    /// Sets the pointer size in density units.
    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
        self.request_layout();
    }

    /// Enables or disables the pointer.
    pub fn set_pointer_enabled(&mut self, enabled: bool) {
        self.pointer_enabled = enabled;
        self.request_layout();
    }

    /// A copy of the label style. Change it with [`Model::set_text_style`].
    pub fn text_style(&self) -> TextStyle {
        self.text_style.clone()
    }

    /// Replaces the label style.
    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
        self.request_layout();
    }

    /// Replaces only the label typeface.
    pub fn set_typeface(&mut self, typeface: impl Into<String>) {
        self.text_style.typeface = typeface.into();
        self.request_layout();
    }

    /// Installs or removes a custom label formatter.
    pub fn set_progress_formatter(&mut self, formatter: Option<ProgressFormatter>) {
        self.formatter = formatter;
        self.request_layout();
    }

    /// Padding insets in pixels.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Sets the padding insets in pixels.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        self.request_layout();
    }

    /// Width reported when the host leaves the width unconstrained.
    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    /// Sets the width reported when the host leaves the width unconstrained.
    pub fn set_min_width(&mut self, width: f32) {
        self.min_width = width.max(0.0);
        self.request_layout();
    }

    /// Density unit scale factor.
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Text unit scale factor.
    pub fn text_density(&self) -> f32 {
        self.text_density
    }

    /// Whether the host has attached the widget.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Label bounds recorded by the last `measure`.
    pub fn text_bounds(&self) -> TextBounds {
        self.text_bounds
    }

    /// Returns and clears the pending invalidation.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    /// The label for the current state.
    pub fn bubble_text(&self) -> String {
        match &self.formatter {
            Some(formatter) => formatter(self.progress, self.max),
            None => format!("{}%", percent(self.progress, self.max)),
        }
    }

    /// Update handles animation frames and slider keys.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            return self.handle_frame(frame);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key);
        }

        None
    }

    fn handle_key(&mut self, key: &KeyMsg) {
        if self.key_map.increase.matches(key) {
            self.set_progress(self.progress.saturating_add(self.step));
        } else if self.key_map.decrease.matches(key) {
            self.set_progress(self.progress.saturating_sub(self.step));
        } else if self.key_map.to_start.matches(key) {
            self.set_progress(0);
        } else if self.key_map.to_end.matches(key) {
            self.set_progress(self.max);
        }
    }

    fn request_layout(&mut self) {
        self.invalidation.layout = true;
        self.invalidation.redraw = true;
    }
}

/// Whole percent of `progress` over `max`, rounded down; zero when `max` is zero.
pub(super) fn percent(progress: i32, max: i32) -> i64 {
    if max <= 0 {
        return 0;
    }
    100 * i64::from(progress) / i64::from(max)
}
