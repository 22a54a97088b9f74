#![warn(missing_docs)]

//! # bubble-progress
//!
//! A progress line with a floating label bubble that tracks the fill
//! position, plus eased animation between progress values.
//!
//! The component does not own a window or a graphics backend. Hosts drive it
//! through the [`Widget`] capability trait: they ask it for a size, hand it a
//! [`canvas::Canvas`] to paint on, and forward messages so animation frames
//! reach it. Inside a bubbletea-rs program it is also a regular `Model` that
//! renders itself into terminal cells.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubble_progress::prelude::*;
//!
//! let mut bar = bubble_progress::bubble_progress::new(&[with_max(100), with_progress(25)]);
//! assert_eq!(bar.bubble_text(), "25%");
//!
//! // Jump straight to a value...
//! bar.set_progress(60);
//!
//! // ...or animate there; forward the command to the runtime and every
//! // resulting message back to `update`.
//! let _cmd = bar.animate_progress(90);
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`bubble_progress`] | The progress component |
//! | [`canvas`] | Drawing surface trait and a recording canvas |
//! | [`cells`] | Terminal cell canvas used by `view()` |
//! | [`layout`] | Host size constraints |
//! | [`animation`] | Duration policy and interpolation |
//! | [`attrs`] | Construction-time attributes |

pub mod animation;
pub mod attrs;
pub mod bubble_progress;
pub mod canvas;
pub mod cells;
pub mod color;
pub mod error;
pub mod key;
pub mod layout;

use canvas::{Canvas, TextMeasurer};
use layout::{MeasureSpec, Size};

/// What a rendering host needs from a drawable widget.
///
/// Hosts call `measure` whenever they lay out, `draw` whenever they repaint,
/// and the attach hooks when the widget enters or leaves their tree.
///
/// ```rust
/// use bubble_progress::prelude::*;
/// use bubble_progress::canvas::RecordingCanvas;
///
/// fn paint<W: Widget>(widget: &mut W, width: f32) -> RecordingCanvas {
///     let mut canvas = RecordingCanvas::new();
///     let size = widget.measure(MeasureSpec::Exactly(width), MeasureSpec::Unspecified, &canvas);
///     widget.draw(&mut canvas, size);
///     canvas
/// }
///
/// let mut bar = bubble_progress::bubble_progress::new(&[with_max(4), with_progress(1)]);
/// assert!(!paint(&mut bar, 200.0).ops().is_empty());
/// ```
pub trait Widget {
    /// Reports the size the widget wants under the host's constraints.
    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
        measurer: &dyn TextMeasurer,
    ) -> Size;

    /// Paints the widget onto a canvas of `size`.
    fn draw(&self, canvas: &mut dyn Canvas, size: Size);

    /// Called when the host starts showing the widget.
    fn on_attach(&mut self) {}

    /// Called when the host stops showing the widget.
    fn on_detach(&mut self) {}
}

pub use attrs::{Attributes, ThemeColors};
pub use bubble_progress::methods::parse_progress_input;
pub use bubble_progress::Model as BubbleProgress;
pub use color::Color;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubble_progress::prelude::*;
///
/// let bar = BubbleProgress::default();
/// assert_eq!(bar.max(), 0);
/// ```
pub mod prelude {
    pub use crate::animation::{animation_duration, Interpolator};
    pub use crate::attrs::{Attributes, ThemeColors};
    pub use crate::bubble_progress::{
        with_density, with_formatter, with_max, with_pointer, with_primary_color, with_profile,
        with_progress, with_secondary_color, with_stroke_width, with_text_style, with_width,
        Invalidation, Model as BubbleProgress, Profile, ProgressFormatter, TERMINAL_DENSITY,
    };
    pub use crate::canvas::{Canvas, CapStyle, TextAlign, TextStyle};
    pub use crate::color::Color;
    pub use crate::layout::{Insets, MeasureSpec, Size};
    pub use crate::parse_progress_input;
    pub use crate::Widget;
}
