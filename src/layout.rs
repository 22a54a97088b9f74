//! Host layout constraints.
//!
//! A host asks the widget for a size by passing one [`MeasureSpec`] per axis.
//! The widget answers with the size it wants, resolved against those specs.

/// A size constraint handed down by the host for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host imposes no constraint.
    Unspecified,
    /// The widget may be as large as it wants up to the given size.
    AtMost(f32),
    /// The widget must be exactly the given size.
    Exactly(f32),
}

/// Picks `min` when unconstrained, otherwise whatever the host offers.
///
/// Used for the width, where the widget has no intrinsic requirement.
pub fn default_size(min: f32, spec: MeasureSpec) -> f32 {
    match spec {
        MeasureSpec::Unspecified => min,
        MeasureSpec::AtMost(size) | MeasureSpec::Exactly(size) => size,
    }
}

/// Reconciles a desired size with the host's constraint.
pub fn resolve_size(desired: f32, spec: MeasureSpec) -> f32 {
    match spec {
        MeasureSpec::Unspecified => desired,
        MeasureSpec::AtMost(size) => desired.min(size),
        MeasureSpec::Exactly(size) => size,
    }
}

/// Padding insets in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl Insets {
    /// The same inset on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(default_size(10.0, MeasureSpec::Unspecified), 10.0);
        assert_eq!(default_size(10.0, MeasureSpec::AtMost(300.0)), 300.0);
        assert_eq!(default_size(10.0, MeasureSpec::Exactly(5.0)), 5.0);
    }

    #[test]
    fn test_resolve_size() {
        assert_eq!(resolve_size(42.0, MeasureSpec::Unspecified), 42.0);
        assert_eq!(resolve_size(42.0, MeasureSpec::AtMost(30.0)), 30.0);
        assert_eq!(resolve_size(42.0, MeasureSpec::AtMost(100.0)), 42.0);
        assert_eq!(resolve_size(42.0, MeasureSpec::Exactly(100.0)), 100.0);
    }
}
