//! Core model and construction options for the bubble progress component.

use super::keymap::{default_key_map, KeyMap};
use crate::animation::{Interpolator, ProgressAnimation};
use crate::attrs::{Attributes, ThemeColors};
use crate::canvas::{CapStyle, TextBounds, TextStyle};
use crate::color::Color;
use crate::layout::Insets;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

// Internal ID management for progress instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const DEFAULT_WIDTH: i32 = 40;

/// Density that makes one density unit an eighth of a terminal cell.
///
/// With it the default stroke is one cell thick and the bubble padding is
/// two cells, which suits [`Model::view`].
pub const TERMINAL_DENSITY: f32 = 0.125;

/// Custom label text, given `(progress, max)`.
pub type ProgressFormatter = Arc<dyn Fn(i32, i32) -> String + Send + Sync>;

/// Visual profile of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Round caps, a dot at zero progress, pointer enabled.
    Rounded,
    /// Square caps, a plain line at zero progress, no pointer.
    Flat,
}

/// Size of the triangle below the bubble, in density units.
///
/// The height is zero by default, which keeps the pointer out of the layout
/// even when it is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Base width of the triangle.
    pub width: f32,
    /// Height of the triangle.
    pub height: f32,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 0.0,
        }
    }
}

/// Pending work the host should schedule after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invalidation {
    /// The measured size may have changed.
    pub layout: bool,
    /// The drawing is stale.
    pub redraw: bool,
}

/// Construction options, applied in order by [`new`].
pub enum ProgressOption {
    /// Upper bound of the range.
    WithMax(i32),
    /// Initial progress, clamped against the final max.
    WithProgress(i32),
    /// Filled track colour.
    WithPrimaryColor(Color),
    /// Unfilled track colour.
    WithSecondaryColor(Color),
    /// Track thickness in density units.
    WithStrokeWidth(f32),
    /// Density and text density scale factors.
    WithDensity(f32, f32),
    /// Cap style and pointer preset.
    WithProfile(Profile),
    /// Enables the pointer with the given width and height in density units.
    WithPointer(f32, f32),
    /// Custom label formatter.
    WithFormatter(ProgressFormatter),
    /// Label text style.
    WithTextStyle(TextStyle),
    /// Width of the terminal view in cells.
    WithWidth(i32),
}

impl ProgressOption {
    fn configure(&self, attrs: &mut Attributes) {
        match self {
            ProgressOption::WithMax(max) => attrs.max = *max,
            ProgressOption::WithProgress(progress) => attrs.progress = *progress,
            ProgressOption::WithPrimaryColor(color) => attrs.primary_color = Some(*color),
            ProgressOption::WithSecondaryColor(color) => attrs.secondary_color = Some(*color),
            ProgressOption::WithStrokeWidth(width) => attrs.stroke_width = *width,
            ProgressOption::WithDensity(density, text_density) => {
                attrs.density = *density;
                attrs.text_density = *text_density;
            }
            ProgressOption::WithProfile(profile) => {
                let (cap, pointer) = match profile {
                    Profile::Rounded => (CapStyle::Round, true),
                    Profile::Flat => (CapStyle::Square, false),
                };
                attrs.cap = cap;
                attrs.pointer = pointer;
            }
            ProgressOption::WithPointer(..) => attrs.pointer = true,
            _ => {}
        }
    }

    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithPointer(width, height) => {
                m.pointer = Pointer {
                    width: *width,
                    height: *height,
                };
            }
            ProgressOption::WithFormatter(formatter) => m.formatter = Some(formatter.clone()),
            ProgressOption::WithTextStyle(style) => m.text_style = style.clone(),
            ProgressOption::WithWidth(width) => m.width = *width,
            _ => {}
        }
    }
}

/// Sets the upper bound of the range.
pub fn with_max(max: i32) -> ProgressOption {
    ProgressOption::WithMax(max)
}

/// Sets the initial progress.
pub fn with_progress(progress: i32) -> ProgressOption {
    ProgressOption::WithProgress(progress)
}

/// Sets the filled track colour.
pub fn with_primary_color(color: Color) -> ProgressOption {
    ProgressOption::WithPrimaryColor(color)
}

/// Sets the unfilled track colour.
pub fn with_secondary_color(color: Color) -> ProgressOption {
    ProgressOption::WithSecondaryColor(color)
}

/// Sets the track thickness in density units.
pub fn with_stroke_width(width: f32) -> ProgressOption {
    ProgressOption::WithStrokeWidth(width)
}

/// Sets the density unit and text unit scale factors.
///
/// ```rust
/// use bubble_progress::bubble_progress::{new, with_density};
///
/// let bar = new(&[with_density(2.0, 3.0)]);
/// assert_eq!(bar.stroke_width(), 16.0);
/// assert_eq!(bar.text_style().size, 54.0);
/// ```
pub fn with_density(density: f32, text_density: f32) -> ProgressOption {
    ProgressOption::WithDensity(density, text_density)
}

/// Selects the rounded or flat look.
pub fn with_profile(profile: Profile) -> ProgressOption {
    ProgressOption::WithProfile(profile)
}

/// Enables the bubble pointer with the given size in density units.
pub fn with_pointer(width: f32, height: f32) -> ProgressOption {
    ProgressOption::WithPointer(width, height)
}

/// Replaces the default `"<percent>%"` label.
///
/// ```rust
/// use bubble_progress::bubble_progress::{new, with_formatter, with_max, with_progress};
/// use std::sync::Arc;
///
/// let bar = new(&[
///     with_max(8),
///     with_progress(3),
///     with_formatter(Arc::new(|p, m| format!("{p}/{m}"))),
/// ]);
/// assert_eq!(bar.bubble_text(), "3/8");
/// ```
pub fn with_formatter(formatter: ProgressFormatter) -> ProgressOption {
    ProgressOption::WithFormatter(formatter)
}

/// Sets the label text style. The size is in pixels.
pub fn with_text_style(style: TextStyle) -> ProgressOption {
    ProgressOption::WithTextStyle(style)
}

/// Sets the width of the terminal view in cells.
pub fn with_width(width: i32) -> ProgressOption {
    ProgressOption::WithWidth(width)
}

/// The bubble progress model.
///
/// Owns all visual state. Mutators clamp their input, record what the host
/// needs to redo in an [`Invalidation`], and never fail.
#[derive(Clone)]
pub struct Model {
    /// An identifier to keep us from receiving messages intended for other
    /// progress bars.
    pub(super) id: i64,

    /// Animation generation; frames carrying an older tag are ignored.
    pub(super) tag: i64,

    /// Width of the terminal view in cells.
    pub width: i32,

    /// Amount added or removed by the slider keys.
    pub step: i32,

    /// Slider key bindings.
    pub key_map: KeyMap,

    pub(super) progress: i32,
    pub(super) max: i32,
    pub(super) primary_color: Color,
    pub(super) secondary_color: Color,
    pub(super) stroke_width: f32, // pixels
    pub(super) cap: CapStyle,
    pub(super) pointer: Pointer,
    pub(super) pointer_enabled: bool,
    pub(super) text_style: TextStyle,
    pub(super) density: f32,
    pub(super) text_density: f32,
    pub(super) padding: Insets,
    pub(super) min_width: f32,
    pub(super) formatter: Option<ProgressFormatter>,
    pub(super) text_bounds: TextBounds, // label bounds from the last measure
    pub(super) invalidation: Invalidation,
    pub(super) interpolator: Interpolator,
    pub(super) animation: Option<ProgressAnimation>,
    pub(super) attached: bool,
}

/// Creates a bubble progress bar from options.
///
/// ```rust
/// use bubble_progress::bubble_progress::{new, with_max, with_progress, with_profile, Profile};
/// use bubble_progress::canvas::CapStyle;
///
/// let bar = new(&[with_max(100), with_progress(30), with_profile(Profile::Flat)]);
/// assert_eq!(bar.progress(), 30);
/// assert_eq!(bar.cap_style(), CapStyle::Square);
/// ```
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut attrs = Attributes::default();
    for opt in opts {
        opt.configure(&mut attrs);
    }

    let mut m = Model::from_attributes(&attrs, None);
    for opt in opts {
        opt.apply(&mut m);
    }
    m.invalidation = Invalidation::default();
    m
}

impl Model {
    /// Builds a model from styled attributes and an optional theme.
    ///
    /// Max is applied before progress, so a progress above max is clamped.
    pub fn from_attributes(attrs: &Attributes, theme: Option<&ThemeColors>) -> Self {
        let mut m = Model {
            id: next_id(),
            tag: 0,
            width: DEFAULT_WIDTH,
            step: 1,
            key_map: default_key_map(),
            progress: 0,
            max: 0,
            primary_color: attrs.resolved_primary(theme),
            secondary_color: attrs.resolved_secondary(theme),
            stroke_width: attrs.stroke_width * attrs.density,
            cap: attrs.cap,
            pointer: Pointer::default(),
            pointer_enabled: attrs.pointer,
            text_style: TextStyle::scaled(attrs.text_density),
            density: attrs.density,
            text_density: attrs.text_density,
            padding: Insets::default(),
            min_width: 0.0,
            formatter: None,
            text_bounds: TextBounds::default(),
            invalidation: Invalidation::default(),
            interpolator: Interpolator::default(),
            animation: None,
            attached: false,
        };

        m.set_max(attrs.max);
        m.set_progress(attrs.progress);
        m.invalidation = Invalidation::default();
        m
    }

    /// Converts density units to pixels.
    pub(super) fn dips(&self, value: f32) -> f32 {
        value * self.density
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("progress", &self.progress)
            .field("max", &self.max)
            .field("primary_color", &self.primary_color)
            .field("secondary_color", &self.secondary_color)
            .field("stroke_width", &self.stroke_width)
            .field("cap", &self.cap)
            .field("pointer", &self.pointer)
            .field("pointer_enabled", &self.pointer_enabled)
            .field("text_style", &self.text_style)
            .field("density", &self.density)
            .field("text_density", &self.text_density)
            .field("padding", &self.padding)
            .field("formatter", &self.formatter.is_some())
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = new(&[with_max(100), with_density(TERMINAL_DENSITY, TERMINAL_DENSITY)]);
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
