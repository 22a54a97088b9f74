//! Bubble progress component.
//!
//! A horizontal progress line with a floating label bubble that follows the
//! fill position. Progress can be set directly or animated with an ease-in
//! curve whose duration scales with the distance travelled.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubble_progress::bubble_progress::{new, with_max};
//!
//! let mut bar = new(&[with_max(100)]);
//! bar.set_progress(42);
//! assert_eq!(bar.bubble_text(), "42%");
//!
//! // Out-of-range values are clamped.
//! bar.set_progress(500);
//! assert_eq!(bar.progress(), 100);
//! ```
//!
//! # Drawing on a custom canvas
//!
//! ```rust
//! use bubble_progress::bubble_progress::{new, with_max, with_progress};
//! use bubble_progress::canvas::{DrawOp, RecordingCanvas};
//! use bubble_progress::layout::{MeasureSpec, Size};
//!
//! let mut bar = new(&[with_max(10), with_progress(5)]);
//! let mut canvas = RecordingCanvas::new();
//! let size = bar.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Unspecified, &canvas);
//! bar.draw(&mut canvas, size);
//! assert!(canvas.ops().iter().any(|op| matches!(op, DrawOp::Text { text, .. } if text == "50%")));
//! ```
//!
//! # Animation
//!
//! `animate_progress` returns a command that schedules frame ticks. Forward
//! every message to `update` and the widget steps itself until it reaches
//! the target. Starting a new animation supersedes the running one.

pub mod animate;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{
    new, with_density, with_formatter, with_max, with_pointer, with_primary_color,
    with_profile, with_progress, with_secondary_color, with_stroke_width, with_text_style,
    with_width, Invalidation, Model, Pointer, Profile, ProgressFormatter, ProgressOption,
    TERMINAL_DENSITY,
};
pub use view::{bubble_left, BubbleGeometry};
